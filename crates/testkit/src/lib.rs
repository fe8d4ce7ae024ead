#![warn(missing_docs)]
//! Test doubles for driving the todo core deterministically.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use vrtodo_core::{FetchError, Todo, TodoId, TodoSource};

/// Build `count` uncompleted todos with sequential ids and titles.
pub fn numbered_todos(count: usize) -> Vec<Todo> {
    (0..count)
        .map(|i| Todo::new(TodoId(i as i64 + 1), format!("todo {}", i + 1)))
        .collect()
}

/// Scripted [`TodoSource`]: hands out queued outcomes in order and counts
/// calls. Once the queue is empty it keeps repeating the configured fallback
/// batch.
#[derive(Debug, Default)]
pub struct FakeSource {
    queued: RefCell<VecDeque<Result<Vec<Todo>, FetchError>>>,
    fallback: Vec<Todo>,
    calls: Cell<usize>,
}

impl FakeSource {
    /// Source that always succeeds with `batch`.
    pub fn with_batch(batch: Vec<Todo>) -> Self {
        Self {
            queued: RefCell::new(VecDeque::new()),
            fallback: batch,
            calls: Cell::new(0),
        }
    }

    /// Source whose next fetch fails with a transport error.
    pub fn failing() -> Self {
        let source = Self::default();
        source.push_failure();
        source
    }

    /// Queue a successful batch for the next unqueued fetch.
    pub fn push_batch(&self, batch: Vec<Todo>) {
        self.queued.borrow_mut().push_back(Ok(batch));
    }

    /// Queue a transport failure for the next unqueued fetch.
    pub fn push_failure(&self) {
        self.queued
            .borrow_mut()
            .push_back(Err(FetchError::Transport("simulated network error".into())));
    }

    /// How many times `fetch_batch` was called.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TodoSource for FakeSource {
    fn fetch_batch(&self) -> Result<Vec<Todo>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.queued.borrow_mut().pop_front() {
            Some(outcome) => outcome,
            None => Ok(self.fallback.clone()),
        }
    }
}

/// Fixed-step frame clock producing `(elapsed, delta)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    elapsed: f32,
    step: f32,
}

impl FrameClock {
    /// Clock starting at zero, advancing `step` seconds per tick.
    pub fn new(step: f32) -> Self {
        Self { elapsed: 0.0, step }
    }

    /// Advance one frame; returns the new `(elapsed, delta)`.
    pub fn tick(&mut self) -> (f32, f32) {
        self.elapsed += self.step;
        (self.elapsed, self.step)
    }

    /// Seconds elapsed so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
