//! Damping and oscillator primitives used by the driver.

/// Per-tick interpolation factor for hover easing.
pub const HOVER_LERP_FACTOR: f32 = 0.1;

/// Amplitude of the per-card floating motion.
pub const FLOAT_AMPLITUDE: f32 = 0.1;

/// Frequency of the per-card floating motion, radians per second.
pub const FLOAT_FREQUENCY: f32 = 0.5;

/// Amplitude of the per-card z-tilt wobble, radians.
pub const TILT_AMPLITUDE: f32 = 0.05;

/// Frequency of the per-card z-tilt wobble, radians per second.
pub const TILT_FREQUENCY: f32 = 0.3;

/// Exponential step toward `target`: each tick closes a fixed fraction of
/// the remaining distance.
pub fn damp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Vertical float offset for the card at `index`.
///
/// The phase offset is derived from the index so neighboring cards
/// desynchronize instead of bobbing in lockstep.
pub fn float_offset(elapsed: f32, index: usize) -> f32 {
    FLOAT_AMPLITUDE * (FLOAT_FREQUENCY * elapsed + 0.5 * index as f32).sin()
}

/// Z-axis tilt for the card at `index`, same desynchronization idea.
pub fn tilt(elapsed: f32, index: usize) -> f32 {
    TILT_AMPLITUDE * (TILT_FREQUENCY * elapsed + index as f32).sin()
}

/// Slack for the bound checks in [`BounceOscillator::tick`]; accumulated
/// f32 steps can land a hair past the exact bound.
const BOUNCE_BOUND_EPSILON: f32 = 1e-5;

/// One-dimensional bounce: a value stepped by a fixed amount each tick,
/// reversing direction at the bounds.
#[derive(Debug, Clone, Copy)]
pub struct BounceOscillator {
    value: f32,
    step: f32,
    min: f32,
    max: f32,
    rising: bool,
}

impl BounceOscillator {
    /// Create an oscillator starting at `min`, rising first.
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        Self {
            value: min,
            step,
            min,
            max,
            rising: true,
        }
    }

    /// Current value without advancing.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance one tick and return the new value.
    ///
    /// Values within [`BOUNCE_BOUND_EPSILON`] of a bound snap onto it and
    /// reverse, so rounding residue from repeated f32 steps still counts as
    /// hitting the bound.
    pub fn tick(&mut self) -> f32 {
        if self.rising {
            self.value += self.step;
            if self.value >= self.max - BOUNCE_BOUND_EPSILON {
                self.value = self.max;
                self.rising = false;
            }
        } else {
            self.value -= self.step;
            if self.value <= self.min + BOUNCE_BOUND_EPSILON {
                self.value = self.min;
                self.rising = true;
            }
        }
        self.value
    }
}
