//! The add-todo form state machine.

use crate::capture::{CaptureGuard, CaptureRegistry};
use tracing::debug;

/// Keyboard-level events routed to an open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A printable character was typed.
    Char(char),
    /// The last character is removed.
    Backspace,
    /// Enter: submit the buffer and close.
    Submit,
    /// The cancel affordance was selected: discard and close.
    Cancel,
    /// Escape key: discard and close.
    Escape,
    /// The capture lost focus: submit a non-empty buffer, then close.
    Blur,
}

/// Form internals while open. Holding the guard inside the state means every
/// path out of `Open` releases the keyboard, including drops.
#[derive(Debug)]
struct OpenForm {
    buffer: String,
    _capture: CaptureGuard,
}

/// Two-state add-todo form: closed, or open with a text buffer and a live
/// keyboard capture.
#[derive(Debug)]
pub struct AddTodoForm {
    registry: CaptureRegistry,
    open: Option<OpenForm>,
}

impl AddTodoForm {
    /// Create a closed form that acquires captures from `registry`.
    pub fn new(registry: CaptureRegistry) -> Self {
        Self {
            registry,
            open: None,
        }
    }

    /// Whether the form is currently open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Current buffer contents, if open.
    pub fn buffer(&self) -> Option<&str> {
        self.open.as_ref().map(|f| f.buffer.as_str())
    }

    /// Open the form and grab the keyboard. No-op if already open.
    pub fn open(&mut self) {
        if self.open.is_none() {
            debug!("add form opened");
            self.open = Some(OpenForm {
                buffer: String::new(),
                _capture: self.registry.acquire(),
            });
        }
    }

    /// Route an event to the form.
    ///
    /// Returns the trimmed title when an exit path carries a submission:
    /// `Submit` or `Blur` with a non-whitespace buffer. Everything else
    /// returns `None`. Events on a closed form are ignored.
    pub fn handle(&mut self, event: FormEvent) -> Option<String> {
        if self.open.is_none() {
            return None;
        }

        match event {
            FormEvent::Char(c) => {
                if let Some(form) = self.open.as_mut() {
                    form.buffer.push(c);
                }
                None
            }
            FormEvent::Backspace => {
                if let Some(form) = self.open.as_mut() {
                    form.buffer.pop();
                }
                None
            }
            FormEvent::Submit | FormEvent::Blur => {
                // Closing drops the OpenForm and with it the capture guard.
                let form = self.open.take()?;
                let title = form.buffer.trim();
                if title.is_empty() {
                    debug!("add form closed without a title");
                    None
                } else {
                    debug!(title, "add form submitted");
                    Some(title.to_string())
                }
            }
            FormEvent::Cancel | FormEvent::Escape => {
                debug!("add form cancelled");
                self.open = None;
                None
            }
        }
    }
}
