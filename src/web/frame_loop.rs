//! Self-rescheduling `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::CursorFxResult;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs `tick` once per animation frame until cancelled.
///
/// The callback re-posts itself after each tick; the id of the pending
/// frame is kept so `cancel` can stop the next one.
pub(crate) struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(window: &Window, mut tick: F) -> CursorFxResult<Self>
    where
        F: FnMut() + 'static,
    {
        // The closure needs a handle to itself to request the next frame,
        // so it is stored in an Option filled after creation.
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        {
            let callback_ref = Rc::clone(&callback);
            let pending = Rc::clone(&pending);
            let window = window.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                pending.set(None);
                tick();

                if let Some(next) = callback_ref.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => log::warn!("[CursorFx] requestAnimationFrame failed: {:?}", e),
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        let first = match callback.borrow().as_ref() {
            Some(cb) => Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?),
            None => None,
        };
        pending.set(first);

        Ok(Self {
            window: window.clone(),
            pending,
            callback,
        })
    }

    /// Cancel the pending frame and release the callback.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("[CursorFx] cancelAnimationFrame failed: {:?}", e);
            }
        }
        // Breaks the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
