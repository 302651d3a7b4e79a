//! Browser scheduling primitives: perpetual frame loops, one-shot frame
//! callbacks and timeouts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

/// A `requestAnimationFrame` loop that reschedules itself until cancelled.
#[derive(Clone)]
pub struct FrameLoop {
    name: &'static str,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start calling `tick` once per animation frame with the frame timestamp.
    pub fn start(name: &'static str, mut tick: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let cancelled = Rc::new(Cell::new(false));

        // `f` holds the animation-frame closure so that we can keep calling
        // `request_animation_frame` recursively. Storing it inside an `Option`
        // allows us to create the `Closure` first and then obtain a reference to
        // it from within itself.
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let stop = cancelled.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            if stop.get() {
                return;
            }
            tick(ts);

            // schedule next
            let next = f.borrow();
            if let (Some(w), Some(cb)) = (window(), next.as_ref()) {
                if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::warn!("{}: could not schedule next frame: {:?}", name, e);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = g.borrow();
        let cb = first.as_ref().ok_or("frame closure missing")?;
        window()
            .ok_or("no window")?
            .request_animation_frame(cb.as_ref().unchecked_ref())?;
        log::debug!("{}: frame loop started", name);

        Ok(Self { name, cancelled })
    }

    /// Stop rescheduling. The callback for an already requested frame
    /// returns without ticking.
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            log::debug!("{}: frame loop cancelled", self.name);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let cb = Closure::once_into_js(f);
    window()
        .ok_or("no window")?
        .request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let cb = Closure::once_into_js(f);
    window()
        .ok_or("no window")?
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms as i32)?;
    Ok(())
}
