#![warn(missing_docs)]
//! Add-todo form state machine and the scoped keyboard-capture resource.

pub mod capture;
pub mod form;

pub use capture::{CaptureGuard, CaptureRegistry};
pub use form::{AddTodoForm, FormEvent};
