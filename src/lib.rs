//! vrtodo - core of a VR todo-list visualizer.
//!
//! Wires the todo store, layout engine, animation driver, and add form
//! behind a single presentation boundary ([`session::Session`]).

pub mod config;
pub mod headless;
pub mod session;
