//! Self-scheduling `requestAnimationFrame` loop.
//!
//! The loop keeps re-requesting frames while the callback returns `true`.
//! Dropping the `FrameLoop` cancels the pending frame and frees the closure,
//! so no callback outlives its owner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

fn request(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {e:?}");
            None
        }
    }
}

impl FrameLoop {
    /// Start calling `on_frame` once per display frame. Returns `None` when
    /// no frame could be scheduled (no window).
    pub fn start(mut on_frame: impl FnMut() -> bool + 'static) -> Option<Self> {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // Weak so the closure does not keep itself alive.
        let callback_for_frame = Rc::downgrade(&callback);
        let pending_for_frame = Rc::clone(&pending);
        let closure = Closure::wrap(Box::new(move |_ts: f64| {
            pending_for_frame.set(None);
            if !on_frame() {
                return;
            }
            if let Some(callback) = callback_for_frame.upgrade() {
                if let Some(cb) = callback.borrow().as_ref() {
                    pending_for_frame.set(request(cb));
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let handle = request(&closure)?;
        pending.set(Some(handle));
        *callback.borrow_mut() = Some(closure);
        Some(Self { pending, callback })
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(handle) {
                    log::warn!("cancelAnimationFrame failed: {e:?}");
                }
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
