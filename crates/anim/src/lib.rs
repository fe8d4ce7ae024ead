#![warn(missing_docs)]
//! Per-frame animation: elapsed time plus transient UI flags in, visual
//! state out.
//!
//! The driver never touches the todo store. Its only outputs are visual
//! (scale, emissive intensity, float offset, tilt), and its only inputs are
//! the current placements, the clock, and ephemeral per-card flags that live
//! here rather than on the `Todo` entity.

pub mod curve;
pub mod driver;

pub use curve::{damp, float_offset, tilt, BounceOscillator, HOVER_LERP_FACTOR};
pub use driver::{AddButtonVisual, AnimationDriver, CardVisual, RenderState};
