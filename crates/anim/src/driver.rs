//! The render-on-demand animation driver.

use crate::curve::{self, damp, BounceOscillator, HOVER_LERP_FACTOR};
use glam::Vec3;
use std::collections::HashMap;
use tracing::trace;
use vrtodo_core::TodoId;
use vrtodo_scene::{add_entry_placement, CardPlacement};

/// Steady-state card scale.
pub const BASE_SCALE: f32 = 1.0;

/// Card scale eased toward while hovered.
pub const HOVER_SCALE: f32 = 1.1;

/// Steady-state emissive intensity of a card.
pub const BASE_EMISSIVE: f32 = 0.2;

/// Emissive intensity of a hovered card.
pub const HOVER_EMISSIVE: f32 = 0.5;

/// How long a freshly created card stays highlighted, seconds.
pub const HIGHLIGHT_WINDOW_SECS: f32 = 2.0;

/// Peak extra emissive while the highlight window is open.
pub const HIGHLIGHT_AMPLITUDE: f32 = 0.3;

/// Frequency of the highlight pulse, radians per second.
pub const HIGHLIGHT_FREQUENCY: f32 = 4.0;

/// Bounds and step of the idle add-affordance pulse.
const ADD_PULSE_MIN: f32 = 0.3;
const ADD_PULSE_MAX: f32 = 0.6;
const ADD_PULSE_STEP: f32 = 0.01;

/// Scale error below which hover easing counts as settled.
const SCALE_SETTLE_EPSILON: f32 = 1e-3;

/// Ephemeral visual flags for one card. Never stored on the `Todo` entity.
#[derive(Debug, Clone, Copy)]
struct CardFx {
    hovered: bool,
    scale: f32,
    /// Creation was flagged but no frame has stamped the window yet.
    just_added: bool,
    /// Clock value of the frame that opened the highlight window.
    added_at: Option<f32>,
}

impl Default for CardFx {
    fn default() -> Self {
        Self {
            hovered: false,
            scale: BASE_SCALE,
            just_added: false,
            added_at: None,
        }
    }
}

/// Visual output for one card on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Todo this visual belongs to.
    pub id: TodoId,
    /// Placement position plus the float offset.
    pub position: Vec3,
    /// Yaw from the placement, radians.
    pub yaw: f32,
    /// Z-axis wobble, radians.
    pub tilt: f32,
    /// Uniform scale after hover easing.
    pub scale: f32,
    /// Material emissive intensity.
    pub emissive: f32,
}

/// Visual output for the add affordance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddButtonVisual {
    /// Fixed anchor in front of the viewer.
    pub position: Vec3,
    /// Pulsing emissive intensity.
    pub emissive: f32,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// One visual per placed card, in placement order.
    pub cards: Vec<CardVisual>,
    /// The add affordance.
    pub add_button: AddButtonVisual,
}

/// Cooperative per-frame driver.
///
/// The host calls [`AnimationDriver::advance`] once per frame it chooses to
/// render; frames are only needed while [`AnimationDriver::needs_frame`]
/// reports live motion or a flag change marked the scene dirty. `advance`
/// reads the todo list only through the placements handed to it and never
/// mutates domain state.
#[derive(Debug)]
pub struct AnimationDriver {
    fx: HashMap<TodoId, CardFx>,
    add_pulse: BounceOscillator,
    dirty: bool,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    /// Create a driver with no transient state.
    pub fn new() -> Self {
        Self {
            fx: HashMap::new(),
            add_pulse: BounceOscillator::new(ADD_PULSE_MIN, ADD_PULSE_MAX, ADD_PULSE_STEP),
            dirty: true,
        }
    }

    /// Record a hover change for `id`.
    pub fn set_hovered(&mut self, id: TodoId, hovered: bool) {
        let fx = self.fx.entry(id).or_default();
        if fx.hovered != hovered {
            fx.hovered = hovered;
            self.dirty = true;
        }
    }

    /// Open the just-added highlight window for `id`.
    ///
    /// The window is stamped from the clock of the next rendered frame, so a
    /// create arriving after a quiet stretch still gets its full
    /// [`HIGHLIGHT_WINDOW_SECS`]. It clears itself that long after the
    /// stamping frame.
    pub fn mark_added(&mut self, id: TodoId) {
        let fx = self.fx.entry(id).or_default();
        fx.just_added = true;
        self.dirty = true;
    }

    /// Mark the scene dirty (placements or list content changed).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether another frame should be produced.
    ///
    /// True while the scene is dirty or any transient animation is live:
    /// hover easing not yet settled, or an open highlight window.
    pub fn needs_frame(&self) -> bool {
        self.dirty
            || self.fx.values().any(|fx| {
                fx.just_added
                    || fx.added_at.is_some()
                    || fx.hovered
                    || (fx.scale - BASE_SCALE).abs() > SCALE_SETTLE_EPSILON
            })
    }

    /// Produce the visual state for one frame.
    ///
    /// `elapsed` is seconds since scene start; `_delta` is the time since the
    /// previous frame (reserved; every curve here is keyed off `elapsed` or
    /// a fixed per-tick step). Idempotent for a fixed `elapsed` up to the
    /// per-tick oscillator steps; side effects are limited to the driver's
    /// own transient state.
    pub fn advance(&mut self, elapsed: f32, _delta: f32, placements: &[CardPlacement]) -> RenderState {
        // Drop flags for cards that no longer exist.
        self.fx.retain(|id, _| placements.iter().any(|p| p.id == *id));

        let mut cards = Vec::with_capacity(placements.len());
        for (index, placement) in placements.iter().enumerate() {
            let fx = self.fx.entry(placement.id).or_default();

            let target = if fx.hovered { HOVER_SCALE } else { BASE_SCALE };
            fx.scale = damp(fx.scale, target, HOVER_LERP_FACTOR);

            let mut emissive = if fx.hovered { HOVER_EMISSIVE } else { BASE_EMISSIVE };
            if fx.just_added {
                fx.just_added = false;
                fx.added_at = Some(elapsed);
            }
            if let Some(added_at) = fx.added_at {
                let age = elapsed - added_at;
                if age < HIGHLIGHT_WINDOW_SECS {
                    emissive += HIGHLIGHT_AMPLITUDE
                        * (HIGHLIGHT_FREQUENCY * elapsed + index as f32).sin().abs();
                } else {
                    trace!(id = placement.id.0, "highlight window closed");
                    fx.added_at = None;
                }
            }

            let position =
                placement.position + Vec3::new(0.0, curve::float_offset(elapsed, index), 0.0);

            cards.push(CardVisual {
                id: placement.id,
                position,
                yaw: placement.yaw,
                tilt: curve::tilt(elapsed, index),
                scale: fx.scale,
                emissive,
            });
        }

        let add_button = AddButtonVisual {
            position: add_entry_placement(),
            emissive: self.add_pulse.tick(),
        };

        self.dirty = false;

        RenderState { cards, add_button }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrtodo_core::Todo;
    use vrtodo_scene::{ring_layout, RingConfig};

    fn placements(count: usize) -> Vec<CardPlacement> {
        let todos: Vec<Todo> = (0..count)
            .map(|i| Todo::new(TodoId(i as i64 + 1), format!("todo {}", i + 1)))
            .collect();
        ring_layout(&todos, &RingConfig::default())
    }

    #[test]
    fn hover_eases_scale_toward_target() {
        let mut driver = AnimationDriver::new();
        let cards = placements(1);
        driver.set_hovered(TodoId(1), true);

        let first = driver.advance(0.0, 0.016, &cards).cards[0].scale;
        assert!((first - 1.01).abs() < 1e-5);

        let mut last = first;
        for i in 1..200 {
            last = driver.advance(i as f32 * 0.016, 0.016, &cards).cards[0].scale;
        }
        assert!((last - HOVER_SCALE).abs() < 1e-3);

        driver.set_hovered(TodoId(1), false);
        for i in 200..400 {
            last = driver.advance(i as f32 * 0.016, 0.016, &cards).cards[0].scale;
        }
        assert!((last - BASE_SCALE).abs() < 1e-3);
    }

    #[test]
    fn hover_raises_emissive() {
        let mut driver = AnimationDriver::new();
        let cards = placements(2);
        driver.set_hovered(TodoId(2), true);

        let state = driver.advance(0.0, 0.016, &cards);
        assert_eq!(state.cards[0].emissive, BASE_EMISSIVE);
        assert_eq!(state.cards[1].emissive, HOVER_EMISSIVE);
    }

    #[test]
    fn highlight_boosts_then_expires_after_the_window() {
        let mut driver = AnimationDriver::new();
        let cards = placements(1);
        driver.mark_added(TodoId(1));

        // Inside the window the boost can momentarily pass through zero at a
        // sine node, so check it stays on across a few frames instead.
        let boosted = (0..5).any(|i| {
            let state = driver.advance(1.1 + i as f32 * 0.016, 0.016, &cards);
            state.cards[0].emissive > BASE_EMISSIVE + 1e-3
        });
        assert!(boosted);
        assert!(driver.needs_frame());

        // Past the 2 s window the flag clears and emissive returns to base.
        let state = driver.advance(3.2, 0.016, &cards);
        assert_eq!(state.cards[0].emissive, BASE_EMISSIVE);
        let state = driver.advance(3.3, 0.016, &cards);
        assert_eq!(state.cards[0].emissive, BASE_EMISSIVE);
    }

    #[test]
    fn highlight_window_opens_at_the_next_rendered_frame() {
        let mut driver = AnimationDriver::new();
        let cards = placements(1);

        // Run the clock well past the window length, then go idle.
        for i in 0..200 {
            driver.advance(i as f32 * 0.05, 0.05, &cards);
        }

        // A create long after scene start still gets the full window even
        // though its frames only arrive later.
        driver.mark_added(TodoId(1));
        assert!(driver.needs_frame());
        let boosted = (0..5).any(|i| {
            let state = driver.advance(15.0 + i as f32 * 0.016, 0.016, &cards);
            state.cards[0].emissive > BASE_EMISSIVE + 1e-3
        });
        assert!(boosted);

        // Still open just shy of 2 s after the stamping frame.
        driver.advance(16.9, 0.016, &cards);
        assert!(driver.needs_frame());

        // Closed past it.
        let state = driver.advance(17.1, 0.016, &cards);
        assert_eq!(state.cards[0].emissive, BASE_EMISSIVE);
    }

    #[test]
    fn advance_never_mutates_placements_or_flags_content() {
        let mut driver = AnimationDriver::new();
        let cards = placements(3);
        let before = cards.clone();
        driver.advance(0.5, 0.016, &cards);
        assert_eq!(cards, before);
    }

    #[test]
    fn float_offset_moves_only_the_vertical_axis() {
        let mut driver = AnimationDriver::new();
        let cards = placements(3);
        let state = driver.advance(0.8, 0.016, &cards);

        for (visual, placement) in state.cards.iter().zip(&cards) {
            assert_eq!(visual.position.x, placement.position.x);
            assert_eq!(visual.position.z, placement.position.z);
            assert!((visual.position.y - placement.position.y).abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn add_button_pulses_between_bounds() {
        let mut driver = AnimationDriver::new();
        let cards = placements(0);

        let mut seen_min = f32::MAX;
        let mut seen_max = f32::MIN;
        for i in 0..120 {
            let state = driver.advance(i as f32 * 0.016, 0.016, &cards);
            seen_min = seen_min.min(state.add_button.emissive);
            seen_max = seen_max.max(state.add_button.emissive);
            assert!((0.3..=0.6).contains(&state.add_button.emissive));
        }
        assert!(seen_max > seen_min);
    }

    #[test]
    fn fx_for_deleted_cards_is_dropped() {
        let mut driver = AnimationDriver::new();
        driver.set_hovered(TodoId(99), true);
        assert!(driver.needs_frame());

        // TodoId(99) is not among the placements, so its flags are pruned.
        driver.advance(0.0, 0.016, &placements(1));
        driver.advance(0.1, 0.016, &placements(1));
        assert!(!driver.needs_frame());
    }

    #[test]
    fn driver_goes_quiet_once_transients_settle() {
        let mut driver = AnimationDriver::new();
        let cards = placements(1);

        driver.set_hovered(TodoId(1), true);
        driver.set_hovered(TodoId(1), false);
        for i in 0..200 {
            driver.advance(i as f32 * 0.016, 0.016, &cards);
        }
        assert!(!driver.needs_frame());

        driver.mark_dirty();
        assert!(driver.needs_frame());
    }
}
