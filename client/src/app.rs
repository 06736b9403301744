//! Root application component.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};

use puzzle::config::BoardConfig;
use puzzle::engine::EngineCore;

use crate::components::puzzle_board::PuzzleBoard;

/// Root application component.
///
/// Loads the built-in board, provides the engine as context, and renders the
/// page header with the board beneath it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match BoardConfig::builtin() {
        Ok(config) => config,
        Err(err) => {
            log::error!("board config failed to load: {err}");
            return view! {
                <p class="board-error">{format!("Could not load the board: {err}")}</p>
            }
            .into_any();
        }
    };

    let title = config.title.clone();
    let engine = RwSignal::new(EngineCore::new(config));
    provide_context(engine);

    view! {
        <Title text=title.clone()/>
        <div class="App">
            <header class="App-header">
                <h1 class="gothic-header">{title}</h1>
                <PuzzleBoard/>
            </header>
        </div>
    }
    .into_any()
}
