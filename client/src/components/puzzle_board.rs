//! The board: background image plus one rotatable `<img>` per piece.
//!
//! ARCHITECTURE
//! ============
//! `EngineCore` lives in an `RwSignal` provided by `App`. Each piece's inline
//! style is a derived view of that signal, so a rotation written by the
//! engine reaches the DOM through normal reactivity. This component turns
//! mouse events into engine calls and reacts to the engine's `Action`s:
//! `DragStarted` installs the document-level listeners, `DragEnded` releases
//! them. Teardown mid-drag releases them too.

#[cfg(feature = "csr")]
use std::collections::HashMap;

use leptos::prelude::*;

use puzzle::engine::EngineCore;
#[cfg(feature = "csr")]
use puzzle::engine::Action;
use puzzle::piece::Piece;
#[cfg(feature = "csr")]
use puzzle::piece::PieceId;
use puzzle::style::{BACKGROUND_STYLE, PieceStyle, STAGE_STYLE, piece_layer_style};

#[cfg(feature = "csr")]
use crate::util::dom_bounds::DomBounds;
#[cfg(feature = "csr")]
use crate::util::global_listeners::GlobalPointerListeners;
#[cfg(feature = "csr")]
use crate::util::pointer::mouse_point;

/// Handles shared by the board's event handlers.
#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
struct DragWiring {
    engine: RwSignal<EngineCore>,
    bounds: StoredValue<DomBounds>,
    listeners: StoredValue<Option<GlobalPointerListeners>, LocalStorage>,
}

#[cfg(feature = "csr")]
impl DragWiring {
    fn pointer_down(self, id: &PieceId, ev: &web_sys::MouseEvent) {
        // Keep the browser from starting a native image drag.
        ev.prevent_default();
        let point = mouse_point(ev);
        let actions = self
            .engine
            .try_update(|core| core.on_pointer_down(id, point))
            .unwrap_or_default();
        self.apply(actions);
    }

    fn pointer_move(self, ev: &web_sys::MouseEvent) {
        let point = mouse_point(ev);
        let actions = self
            .engine
            .try_update(|core| self.bounds.with_value(|bounds| core.on_pointer_move(point, bounds)))
            .unwrap_or_default();
        self.apply(actions);
    }

    fn pointer_up(self) {
        let actions = self
            .engine
            .try_update(EngineCore::on_pointer_up)
            .unwrap_or_default();
        self.apply(actions);
    }

    fn apply(self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::DragStarted { .. } => self.activate(),
                Action::DragEnded { .. } => self.deactivate(),
                Action::RotationChanged { .. } => {}
            }
        }
    }

    /// Start following the mouse across the whole document.
    fn activate(self) {
        if self.listeners.with_value(Option::is_some) {
            return;
        }
        match GlobalPointerListeners::attach(
            move |ev: web_sys::MouseEvent| self.pointer_move(&ev),
            move |_ev: web_sys::MouseEvent| self.pointer_up(),
        ) {
            Ok(guard) => self.listeners.set_value(Some(guard)),
            Err(err) => {
                // Without a mouseup listener nothing would end the session.
                log::error!("drag listeners not attached: {err:?}");
                self.pointer_up();
            }
        }
    }

    /// Stop following the mouse. Runs from inside the `mouseup` listener, so
    /// the closures are freed on the next tick.
    fn deactivate(self) {
        let guard = self.listeners.try_update_value(Option::take).flatten();
        if let Some(guard) = guard {
            guard.release();
        }
    }
}

/// The board stage: background image with the piece layer on top.
#[component]
pub fn PuzzleBoard() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let (pieces, background) = engine.with_untracked(|core| {
        (
            core.pieces().iter().cloned().collect::<Vec<Piece>>(),
            core.background().clone(),
        )
    });

    let refs: Vec<(Piece, NodeRef<leptos::html::Img>)> =
        pieces.into_iter().map(|piece| (piece, NodeRef::new())).collect();

    #[cfg(feature = "csr")]
    let wiring = {
        let ref_map: HashMap<PieceId, NodeRef<leptos::html::Img>> =
            refs.iter().map(|(piece, node_ref)| (piece.id.clone(), *node_ref)).collect();
        let wiring = DragWiring {
            engine,
            bounds: StoredValue::new(DomBounds::new(ref_map)),
            listeners: StoredValue::new_local(None),
        };
        // Unmounting mid-drag must not leave document listeners behind.
        on_cleanup(move || wiring.deactivate());
        wiring
    };

    let piece_views = refs
        .into_iter()
        .map(|(piece, node_ref)| {
            let style_id = piece.id.clone();
            let style = move || {
                engine.with(|core| {
                    core.piece_style(&style_id)
                        .as_ref()
                        .map(PieceStyle::to_css)
                        .unwrap_or_default()
                })
            };

            #[cfg(feature = "csr")]
            let on_down = {
                let id = piece.id.clone();
                move |ev: leptos::ev::MouseEvent| wiring.pointer_down(&id, &ev)
            };
            #[cfg(not(feature = "csr"))]
            let on_down = |_: leptos::ev::MouseEvent| {};

            view! {
                <img
                    node_ref=node_ref
                    class="puzzle-piece"
                    src=piece.src
                    alt=piece.alt
                    draggable="false"
                    style=style
                    on:mousedown=on_down
                />
            }
        })
        .collect_view();

    view! {
        <div class="puzzle-stage" style=STAGE_STYLE>
            <div class="puzzle-pieces" style=piece_layer_style()>
                {piece_views}
            </div>
            <img class="puzzle-background" src=background.src alt=background.alt style=BACKGROUND_STYLE/>
        </div>
    }
}
