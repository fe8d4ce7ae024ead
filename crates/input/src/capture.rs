//! Scoped keyboard capture.
//!
//! Opening the add form grabs the device keyboard through a host-level
//! resource (originally a hidden offscreen text input). The resource must be
//! released on every exit path (submit, cancel, escape, blur), so it is
//! modeled as an RAII guard: dropping the guard is the release.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Tracks how many keyboard captures are currently held.
///
/// The registry is cheap to clone; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct CaptureRegistry {
    active: Arc<AtomicUsize>,
}

impl CaptureRegistry {
    /// Create a registry with no active captures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the keyboard. Released when the returned guard drops.
    pub fn acquire(&self) -> CaptureGuard {
        self.active.fetch_add(1, Ordering::Relaxed);
        debug!("keyboard capture acquired");
        CaptureGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of captures currently held.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}

/// Live keyboard capture. Dropping it releases the keyboard.
#[derive(Debug)]
pub struct CaptureGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
        debug!("keyboard capture released");
    }
}
