//! Document-level mouse listeners scoped to a drag session.
//!
//! A piece is picked up by a `mousedown` on its own element, but the drag has
//! to keep following the mouse after it leaves that element. While a session
//! is active the board installs `mousemove` / `mouseup` listeners on the
//! document; [`GlobalPointerListeners`] owns them and removes both when it is
//! released or dropped, so the listeners cannot outlive the session or the
//! component.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, MouseEvent};

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// Installed `mousemove` + `mouseup` listeners on the document.
pub struct GlobalPointerListeners {
    target: EventTarget,
    on_move: MouseClosure,
    on_up: MouseClosure,
    attached: bool,
}

impl GlobalPointerListeners {
    /// Install both listeners on the document.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no document or the browser rejects either
    /// registration. Nothing stays registered on failure.
    pub fn attach<M, U>(on_move: M, on_up: U) -> Result<Self, JsValue>
    where
        M: FnMut(MouseEvent) + 'static,
        U: FnMut(MouseEvent) + 'static,
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let target: EventTarget = document.into();

        let on_move = MouseClosure::new(on_move);
        let on_up = MouseClosure::new(on_up);

        target.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        if let Err(err) = target.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref()) {
            if let Err(undo) = target.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref()) {
                log::warn!("mousemove listener not removed after failed attach: {undo:?}");
            }
            return Err(err);
        }

        log::debug!("global pointer listeners attached");
        Ok(Self { target, on_move, on_up, attached: true })
    }

    /// Remove both listeners now. Safe to call more than once.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        for (name, closure) in [("mousemove", &self.on_move), ("mouseup", &self.on_up)] {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("{name} listener not removed: {err:?}");
            }
        }
        log::debug!("global pointer listeners detached");
    }

    /// Detach now and free the closures on the next tick.
    ///
    /// Use this from inside one of the listeners: the closure that is
    /// currently running must not be freed until it returns.
    pub fn release(mut self) {
        self.detach();
        Timeout::new(0, move || drop(self)).forget();
    }
}

impl Drop for GlobalPointerListeners {
    fn drop(&mut self) {
        self.detach();
    }
}
