//! The presentation boundary: UI events in, render state out.
//!
//! A `Session` owns the store, the add form, and the animation driver, and
//! recomputes the (pure) layout from the current list on every rendered
//! frame. The rendering layer talks to it exclusively through [`UiEvent`]
//! values and [`Session::tick`].

use tracing::debug;
use vrtodo_anim::{AnimationDriver, RenderState};
use vrtodo_core::{TodoId, TodoSource, TodoStore};
use vrtodo_input::{AddTodoForm, CaptureRegistry, FormEvent};
use vrtodo_scene::{
    arc_layout, ring_layout, sectioned_grid_layout, ArcConfig, CardPlacement, GridConfig,
    LayoutMode, RingConfig,
};

/// User-initiated events crossing the presentation boundary.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Create a todo from raw input text (the store trims and validates).
    Create(String),
    /// Flip completion on a card.
    Toggle(TodoId),
    /// Remove a card.
    Delete(TodoId),
    /// Pointer entered or left a card.
    Hover {
        /// Card under the pointer.
        id: TodoId,
        /// Whether the pointer is now over it.
        hovered: bool,
    },
    /// Open the add-todo form (grabs the keyboard).
    OpenForm,
    /// Keyboard event routed to the open form.
    Form(FormEvent),
}

/// Owns the core state and mediates between UI events and frames.
pub struct Session {
    store: TodoStore,
    driver: AnimationDriver,
    form: AddTodoForm,
    captures: CaptureRegistry,
    layout: LayoutMode,
    ring: RingConfig,
    arc: ArcConfig,
    grid: GridConfig,
}

impl Session {
    /// Create a session with an empty store and the given layout strategy.
    pub fn new(layout: LayoutMode) -> Self {
        let captures = CaptureRegistry::new();
        Self {
            store: TodoStore::new(),
            driver: AnimationDriver::new(),
            form: AddTodoForm::new(captures.clone()),
            captures,
            layout,
            ring: RingConfig::default(),
            arc: ArcConfig::default(),
            grid: GridConfig::default(),
        }
    }

    /// Populate the store from `source` (single attempt, failure becomes the
    /// store's `error` flag).
    pub fn fetch_initial(&mut self, source: &dyn TodoSource) {
        self.store.fetch_initial(source);
        self.driver.mark_dirty();
    }

    /// The store, for reading the list and the loading/error flags.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// The add form, for reading open/buffer state.
    pub fn form(&self) -> &AddTodoForm {
        &self.form
    }

    /// The keyboard-capture registry shared with the form.
    pub fn captures(&self) -> &CaptureRegistry {
        &self.captures
    }

    /// Whether the driver wants another frame.
    pub fn needs_frame(&self) -> bool {
        self.driver.needs_frame()
    }

    /// Route one UI event.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Create(title) => {
                if let Some(id) = self.store.add_todo(&title) {
                    self.driver.mark_added(id);
                }
            }
            UiEvent::Toggle(id) => {
                if self.store.toggle_todo(id) {
                    self.driver.mark_dirty();
                }
            }
            UiEvent::Delete(id) => {
                if self.store.delete_todo(id) {
                    self.driver.mark_dirty();
                }
            }
            UiEvent::Hover { id, hovered } => {
                self.driver.set_hovered(id, hovered);
            }
            UiEvent::OpenForm => {
                self.form.open();
                self.driver.mark_dirty();
            }
            UiEvent::Form(form_event) => {
                self.driver.mark_dirty();
                if let Some(title) = self.form.handle(form_event) {
                    debug!(title = %title, "form submission becomes a create");
                    self.handle(UiEvent::Create(title));
                }
            }
        }
    }

    /// Current card placements for the active layout strategy.
    pub fn placements(&self) -> Vec<CardPlacement> {
        match self.layout {
            LayoutMode::Ring => ring_layout(self.store.todos(), &self.ring),
            LayoutMode::Arc => arc_layout(self.store.todos(), &self.arc),
            LayoutMode::SectionedGrid => sectioned_grid_layout(self.store.todos(), &self.grid),
        }
    }

    /// Produce the visual state for one frame.
    pub fn tick(&mut self, elapsed: f32, delta: f32) -> RenderState {
        let placements = self.placements();
        self.driver.advance(elapsed, delta, &placements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_lifecycle_feeds_the_store() {
        let mut session = Session::new(LayoutMode::Ring);

        session.handle(UiEvent::OpenForm);
        assert!(session.form().is_open());
        assert_eq!(session.captures().active(), 1);

        for c in "Buy milk".chars() {
            session.handle(UiEvent::Form(FormEvent::Char(c)));
        }
        session.handle(UiEvent::Form(FormEvent::Submit));

        assert!(!session.form().is_open());
        assert_eq!(session.captures().active(), 0);
        assert_eq!(session.store().todos()[0].title, "Buy milk");
    }

    #[test]
    fn escape_leaves_the_store_untouched() {
        let mut session = Session::new(LayoutMode::Ring);

        session.handle(UiEvent::OpenForm);
        session.handle(UiEvent::Form(FormEvent::Char('x')));
        session.handle(UiEvent::Form(FormEvent::Escape));

        assert!(session.store().todos().is_empty());
        assert_eq!(session.captures().active(), 0);
    }

    #[test]
    fn tick_renders_one_visual_per_placed_card() {
        let mut session = Session::new(LayoutMode::Ring);
        session.handle(UiEvent::Create("alpha".into()));
        session.handle(UiEvent::Create("beta".into()));

        let state = session.tick(0.1, 0.016);
        assert_eq!(state.cards.len(), 2);
    }

    #[test]
    fn toggle_and_delete_mark_the_scene_dirty() {
        let mut session = Session::new(LayoutMode::Ring);
        session.handle(UiEvent::Create("alpha".into()));
        // Drain transients: the just-added highlight runs for 2 s.
        let mut t = 0.0;
        while session.needs_frame() && t < 10.0 {
            t += 0.016;
            session.tick(t, 0.016);
        }
        assert!(!session.needs_frame());

        let id = session.store().todos()[0].id;
        session.handle(UiEvent::Toggle(id));
        assert!(session.needs_frame());
        session.tick(t + 0.016, 0.016);

        session.handle(UiEvent::Delete(id));
        assert!(session.needs_frame());
    }

    #[test]
    fn misses_do_not_wake_the_renderer() {
        let mut session = Session::new(LayoutMode::Ring);
        let mut t = 0.0;
        while session.needs_frame() && t < 10.0 {
            t += 0.016;
            session.tick(t, 0.016);
        }

        session.handle(UiEvent::Toggle(TodoId(404)));
        session.handle(UiEvent::Delete(TodoId(404)));
        session.handle(UiEvent::Create("   ".into()));
        assert!(!session.needs_frame());
    }
}
