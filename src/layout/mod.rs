//! Node placement on an infinite 2-D canvas.
//!
//! Everything here is a pure function over positioned nodes: no state is held
//! between calls, so concurrent layout computations never interfere.

mod arrange;
mod placement;

pub use arrange::auto_arrange;
pub use placement::{SearchDirection, default_node_position, find_non_overlapping_position};

use crate::document::{Node, Point};

/// Footprint width shared by every node on the canvas.
pub const NODE_WIDTH: f32 = 240.0;
/// Footprint height shared by every node.
pub const NODE_HEIGHT: f32 = 150.0;
/// Computed positions land on multiples of this grid unit.
pub const GRID_SIZE: f32 = 20.0;
/// Minimum gap between two footprints before they count as overlapping.
pub const MIN_SPACING: f32 = 50.0;

/// Snaps both coordinates to the nearest grid line. Exact halves round up,
/// so `10` snaps to `20`. Idempotent on already-snapped positions.
pub fn snap_to_grid(position: Point) -> Point {
    Point {
        x: snap(position.x),
        y: snap(position.y),
    }
}

fn snap(value: f32) -> f32 {
    (value / GRID_SIZE + 0.5).floor() * GRID_SIZE
}

/// Whether two footprints rooted at `a` and `b` sit closer than `padding` on
/// both axes. Clearance on either axis alone is enough to not overlap.
pub fn nodes_overlap(a: Point, b: Point, padding: f32) -> bool {
    (a.x - b.x).abs() < NODE_WIDTH + padding && (a.y - b.y).abs() < NODE_HEIGHT + padding
}

/// Smallest box enclosing a set of node footprints, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// `None` when there is nothing to bound.
pub fn node_bounds(nodes: &[Node]) -> Option<Bounds> {
    let first = nodes.first()?;
    let mut bounds = Bounds {
        min_x: first.position.x,
        max_x: first.position.x + NODE_WIDTH,
        min_y: first.position.y,
        max_y: first.position.y + NODE_HEIGHT,
    };
    for node in &nodes[1..] {
        bounds.min_x = bounds.min_x.min(node.position.x);
        bounds.max_x = bounds.max_x.max(node.position.x + NODE_WIDTH);
        bounds.min_y = bounds.min_y.min(node.position.y);
        bounds.max_y = bounds.max_y.max(node.position.y + NODE_HEIGHT);
    }
    Some(bounds)
}
