use std::path::{Path, PathBuf};

use flowcanvas::{Document, GRID_SIZE, MIN_SPACING, auto_arrange, nodes_overlap};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn arrange_fixture(name: &str) -> Document {
    let document = Document::load(&fixture_path(name)).expect("fixture load failed");
    let nodes = auto_arrange(&document.nodes, &document.edges);
    Document {
        nodes,
        edges: document.edges,
    }
}

fn assert_grid_aligned(document: &Document, fixture: &str) {
    for node in &document.nodes {
        assert!(
            node.position.x % GRID_SIZE == 0.0 && node.position.y % GRID_SIZE == 0.0,
            "{fixture}: {} off-grid at ({}, {})",
            node.id,
            node.position.x,
            node.position.y
        );
    }
}

fn assert_no_overlaps(document: &Document, fixture: &str) {
    let nodes = &document.nodes;
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            assert!(
                !nodes_overlap(a.position, b.position, MIN_SPACING),
                "{fixture}: {} and {} overlap",
                a.id,
                b.id
            );
        }
    }
}

fn y_of(document: &Document, id: &str) -> f32 {
    document
        .nodes
        .iter()
        .find(|node| node.id == id)
        .unwrap_or_else(|| panic!("node {id} missing"))
        .position
        .y
}

#[test]
fn every_fixture_arranges_onto_the_grid() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = [
        "chain.json",
        "fanout.json",
        "cycle.json",
        "diamond.json",
        "disconnected.json",
        "dangling.json",
        "empty.json",
    ];

    for fixture in fixtures {
        assert!(fixture_path(fixture).exists(), "fixture missing: {fixture}");
        let arranged = arrange_fixture(fixture);
        assert_grid_aligned(&arranged, fixture);
        assert_no_overlaps(&arranged, fixture);
    }
}

#[test]
fn chain_rows_follow_edge_direction() {
    let arranged = arrange_fixture("chain.json");
    assert!(y_of(&arranged, "submit") < y_of(&arranged, "review"));
    assert!(y_of(&arranged, "review") < y_of(&arranged, "archive"));
}

#[test]
fn fanout_children_share_a_row() {
    let arranged = arrange_fixture("fanout.json");
    assert_eq!(y_of(&arranged, "finance"), y_of(&arranged, "legal"));
    assert!(y_of(&arranged, "root") < y_of(&arranged, "finance"));
}

#[test]
fn diamond_merge_lands_below_both_branches() {
    let arranged = arrange_fixture("diamond.json");
    assert_eq!(y_of(&arranged, "left"), y_of(&arranged, "right"));
    assert!(y_of(&arranged, "merge") > y_of(&arranged, "left"));
}

#[test]
fn cycle_and_disconnected_fixtures_form_columns() {
    for fixture in ["cycle.json", "disconnected.json"] {
        let arranged = arrange_fixture(fixture);
        let xs: Vec<f32> = arranged.nodes.iter().map(|node| node.position.x).collect();
        assert!(
            xs.windows(2).all(|pair| pair[0] == pair[1]),
            "{fixture}: expected a single column, got {xs:?}"
        );
        let ys: Vec<f32> = arranged.nodes.iter().map(|node| node.position.y).collect();
        assert!(
            ys.windows(2).all(|pair| pair[0] < pair[1]),
            "{fixture}: expected descending rows, got {ys:?}"
        );
    }
}

#[test]
fn dangling_edges_are_reported_but_still_arrange() {
    let document = Document::load(&fixture_path("dangling.json")).expect("fixture load failed");
    assert_eq!(document.dangling_edges().len(), 2);

    let arranged = arrange_fixture("dangling.json");
    assert_eq!(arranged.nodes.len(), 2);
}

#[test]
fn empty_fixture_stays_empty() {
    let arranged = arrange_fixture("empty.json");
    assert!(arranged.nodes.is_empty());
}
