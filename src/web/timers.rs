//! Single `setTimeout` slot used to poll the controller's restore timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// At most one pending timeout; scheduling again cancels and restarts it.
pub(crate) struct DeadlineTimer {
    window: Window,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl DeadlineTimer {
    pub fn new<F>(window: Window, mut on_fire: F) -> Rc<Self>
    where
        F: FnMut(&DeadlineTimer) + 'static,
    {
        let timer = Rc::new(Self {
            window,
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&timer);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(timer) = weak.upgrade() {
                timer.handle.set(None);
                on_fire(&timer);
            }
        }) as Box<dyn FnMut()>);
        *timer.callback.borrow_mut() = Some(closure);

        timer
    }

    /// Fire after `delay_ms`, replacing any pending timeout.
    pub fn schedule(&self, delay_ms: f64) {
        self.cancel();

        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms.ceil() as i32,
            ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => log::warn!("[CursorFx] setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
