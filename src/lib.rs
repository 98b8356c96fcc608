#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod document;
pub mod history;
pub mod layout;

#[cfg(feature = "cli")]
pub use cli::run;
pub use document::{Document, DocumentError, Edge, Node, Point};
pub use history::History;
pub use layout::{
    Bounds, GRID_SIZE, MIN_SPACING, NODE_HEIGHT, NODE_WIDTH, SearchDirection, auto_arrange,
    default_node_position, find_non_overlapping_position, node_bounds, nodes_overlap,
    snap_to_grid,
};
