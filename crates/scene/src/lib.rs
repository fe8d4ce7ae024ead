#![warn(missing_docs)]
//! Scene layout: pure mapping from the todo list to 3D card placements.
//!
//! Every function here is stateless and deterministic: the same list always
//! produces the same placements, and an empty list produces no placements.

pub mod layout;

pub use layout::{
    add_entry_placement, arc_layout, ring_layout, sectioned_grid_layout, ArcConfig,
    CardPlacement, GridConfig, LayoutMode, RingConfig,
};
