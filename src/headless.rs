//! Display-free demo run: fetch, a scripted burst of interaction, then a
//! fixed-step frame loop that shows render-on-demand going quiet.

use crate::config::AppConfig;
use crate::session::{Session, UiEvent};
use anyhow::Result;
use tracing::info;
use vrtodo_input::FormEvent;
use vrtodo_remote::HttpTodoSource;

/// Run the demo to completion and log a summary.
pub fn run(config: &AppConfig) -> Result<()> {
    let source = HttpTodoSource::new(&config.endpoint);
    let mut session = Session::new(config.layout);

    session.fetch_initial(&source);
    match session.store().error() {
        Some(error) => info!(error, "fetch failed, continuing with an empty list"),
        None => info!(count = session.store().todos().len(), "initial batch loaded"),
    }

    // Scripted interaction: create a todo through the form, then poke the
    // first card the way a pointer would.
    session.handle(UiEvent::OpenForm);
    for c in "Ship the demo".chars() {
        session.handle(UiEvent::Form(FormEvent::Char(c)));
    }
    session.handle(UiEvent::Form(FormEvent::Submit));

    if let Some(first) = session.store().todos().first().map(|t| t.id) {
        session.handle(UiEvent::Hover {
            id: first,
            hovered: true,
        });
        session.handle(UiEvent::Toggle(first));
        session.handle(UiEvent::Hover {
            id: first,
            hovered: false,
        });
    }
    if let Some(last) = session.store().todos().last().map(|t| t.id) {
        session.handle(UiEvent::Delete(last));
    }

    let mut elapsed = 0.0_f32;
    let mut frames_rendered = 0u32;
    for _ in 0..config.demo_frames {
        elapsed += config.demo_frame_seconds;
        if session.needs_frame() {
            let state = session.tick(elapsed, config.demo_frame_seconds);
            frames_rendered += 1;
            if frames_rendered == 1 {
                info!(cards = state.cards.len(), "first frame rendered");
            }
        }
    }

    info!(
        frames_rendered,
        simulated = config.demo_frames,
        todos = session.store().todos().len(),
        "demo finished"
    );
    Ok(())
}
