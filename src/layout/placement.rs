use super::{MIN_SPACING, NODE_HEIGHT, NODE_WIDTH, nodes_overlap, snap_to_grid};
use crate::document::{Node, Point};

/// Direction of the candidate sequence scanned for a free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    Right,
    Bottom,
    #[default]
    Diagonal,
}

const SEARCH_STEPS: usize = 10;

/// Clearance used when testing the stacked default position; tighter than
/// the search padding so a column of nodes packs without drifting.
const STACK_PADDING: f32 = 20.0;

/// First grid-snapped candidate near `target` that clears every node in
/// `nodes` by [`MIN_SPACING`]. The sequence is bounded; when every candidate
/// is occupied the position falls back to a fixed offset well to the right,
/// so a (possibly crowded) position always comes back.
pub fn find_non_overlapping_position(
    target: Point,
    nodes: &[Node],
    direction: SearchDirection,
) -> Point {
    let step_x = NODE_WIDTH + MIN_SPACING;
    let step_y = NODE_HEIGHT + MIN_SPACING;

    let mut candidates = Vec::new();
    match direction {
        SearchDirection::Right => {
            for k in 1..=SEARCH_STEPS {
                candidates.push(Point::new(target.x + k as f32 * step_x, target.y));
            }
        }
        SearchDirection::Bottom => {
            for k in 1..=SEARCH_STEPS {
                candidates.push(Point::new(target.x, target.y + k as f32 * step_y));
            }
        }
        SearchDirection::Diagonal => {
            // Half-step diagonal first at each multiple, then the pure
            // horizontal and vertical offsets.
            for k in 1..=SEARCH_STEPS {
                let k = k as f32;
                candidates.push(Point::new(
                    target.x + k * step_x * 0.5,
                    target.y + k * step_y * 0.5,
                ));
                candidates.push(Point::new(target.x + k * step_x, target.y));
                candidates.push(Point::new(target.x, target.y + k * step_y));
            }
        }
    }

    for candidate in candidates {
        let snapped = snap_to_grid(candidate);
        if is_free(snapped, nodes, MIN_SPACING) {
            return snapped;
        }
    }

    snap_to_grid(Point::new(target.x + 5.0 * step_x, target.y))
}

fn is_free(position: Point, nodes: &[Node], padding: f32) -> bool {
    nodes
        .iter()
        .all(|node| !nodes_overlap(position, node.position, padding))
}

/// Position for a node about to be inserted: under the last node in the
/// list, or at the (snapped) viewport center when the canvas is empty.
pub fn default_node_position(nodes: &[Node], viewport_center: Option<Point>) -> Point {
    let Some(last) = nodes.last() else {
        return match viewport_center {
            Some(center) => snap_to_grid(center),
            None => Point::default(),
        };
    };

    let below = snap_to_grid(Point::new(
        last.position.x,
        last.position.y + NODE_HEIGHT + 2.0 * MIN_SPACING,
    ));
    if is_free(below, nodes, STACK_PADDING) {
        below
    } else {
        find_non_overlapping_position(below, nodes, SearchDirection::Bottom)
    }
}
