//! Browser glue: locates the page hooks and drives the [`Stage`] from
//! animation frames, scroll, intersection and click events.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Date, Math};
use wasm_bindgen::prelude::*;
use web_sys::{PageTransitionEvent, Window};

use crate::config::Config;
use crate::stage::Stage;

pub mod dom;
pub mod observer;
pub mod page;
pub mod render;
pub mod schedule;

pub use dom::{Chapter, Hooks};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Read once at boot; later changes to the preference are not picked up.
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Entry point, called by the page once the module has loaded.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = Config::default();
    let selectors = config.selectors.clone();
    let timings = config.reveal.clone();
    let hooks = Rc::new(Hooks::locate(&document, &selectors)?);

    let reduced_motion = prefers_reduced_motion(&window);
    let seed = (Math::random() * (1u64 << 53) as f64) as u64;
    let stage = Rc::new(RefCell::new(Stage::new(
        config,
        seed,
        Date::now(),
        reduced_motion,
        hooks.section_shapes(),
    )));

    let render = render::start(hooks.canvas.clone(), stage.clone())?;
    let timer = page::start_timer(hooks.time_value.clone(), stage.clone())?;
    page::watch_scroll(&window, hooks.clone(), stage.clone())?;
    let observer = Rc::new(observer::RevealObserver::start(
        hooks.clone(),
        stage.clone(),
        &timings,
        &selectors,
    )?);
    page::watch_replay(hooks.clone(), stage.clone(), observer, selectors)?;

    // Frame loops stop when the page is torn down; a page kept in the
    // back/forward cache keeps them.
    let on_pagehide = Closure::wrap(Box::new(move |event: PageTransitionEvent| {
        if !event.persisted() {
            render.cancel();
            timer.cancel();
        }
    }) as Box<dyn FnMut(PageTransitionEvent)>);
    window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())?;
    on_pagehide.forget();

    log::info!(
        "kinetic type: {} letters, {} chapters, {} title lines, reduced motion {}",
        stage.borrow().field().len(),
        hooks.chapters.len(),
        hooks.display_lines.len(),
        reduced_motion
    );
    Ok(())
}
