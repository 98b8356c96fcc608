use std::collections::{BTreeMap, HashMap, HashSet};

use super::{MIN_SPACING, NODE_HEIGHT, NODE_WIDTH, snap_to_grid};
use crate::document::{Edge, Node, Point};

/// Shared column for single-member levels and the disconnected fallback.
const CENTER_X: f32 = 250.0;

/// Repositions every node into a layered top-down layout and returns the
/// updated list; the inputs are left untouched.
///
/// Nodes without an incoming edge are the roots. Each node's depth below its
/// nearest root picks its row; nodes sharing a row spread out symmetrically
/// around the center column. Graphs with no hierarchy to recover (no edges,
/// or every node on a cycle) stack into a single column in input order.
/// Every returned position is grid-snapped.
pub fn auto_arrange(nodes: &[Node], edges: &[Edge]) -> Vec<Node> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut arranged = nodes.to_vec();

    let targets: HashSet<&str> = edges.iter().map(|edge| edge.target.as_str()).collect();
    let roots: Vec<&str> = nodes
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| !targets.contains(id))
        .collect();

    if edges.is_empty() || roots.is_empty() {
        for (index, node) in arranged.iter_mut().enumerate() {
            node.position = snap_to_grid(Point::new(
                CENTER_X,
                index as f32 * (NODE_HEIGHT + 3.0 * MIN_SPACING),
            ));
        }
        return arranged;
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let levels = assign_levels(&roots, &adjacency);

    // Bucket nodes by level, keeping input order within each bucket. Nodes
    // the traversal never reached sit at level 0.
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (index, node) in nodes.iter().enumerate() {
        let level = levels.get(node.id.as_str()).copied().unwrap_or(0);
        buckets.entry(level).or_default().push(index);
    }

    let sibling_pitch = NODE_WIDTH + 3.0 * MIN_SPACING;
    let level_pitch = NODE_HEIGHT + 4.0 * MIN_SPACING;
    for (level, members) in &buckets {
        let y = *level as f32 * level_pitch;
        let count = members.len() as f32;
        for (slot, &index) in members.iter().enumerate() {
            let x = if members.len() == 1 {
                CENTER_X
            } else {
                CENTER_X + (slot as f32 - (count - 1.0) / 2.0) * sibling_pitch
            };
            arranged[index].position = snap_to_grid(Point::new(x, y));
        }
    }

    arranged
}

/// Depth-first level assignment from each root. A node keeps the level of
/// the first path that reaches it; the visited check doubles as the cycle
/// guard. Runs on an explicit stack so deep chains cannot overflow.
fn assign_levels<'a>(
    roots: &[&'a str],
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
) -> HashMap<&'a str, usize> {
    let mut levels: HashMap<&'a str, usize> = HashMap::new();
    let mut stack: Vec<(&'a str, usize)> = Vec::new();

    for &root in roots {
        stack.push((root, 0));
        while let Some((id, level)) = stack.pop() {
            if levels.contains_key(id) {
                continue;
            }
            levels.insert(id, level);
            if let Some(children) = adjacency.get(id) {
                // Reversed push keeps the visit order of the recursive form.
                for &child in children.iter().rev() {
                    if !levels.contains_key(child) {
                        stack.push((child, level + 1));
                    }
                }
            }
        }
    }

    levels
}
