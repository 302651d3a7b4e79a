//! Timer readout, scroll-driven progress bar and parallax, replay control.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom::{collect, Hooks};
use super::observer::RevealObserver;
use super::render::viewport;
use super::schedule::{after, next_frame, FrameLoop};
use crate::config::Selectors;
use crate::parallax::translate_y;
use crate::progress::{bar_width, progress_percent};
use crate::stage::Stage;

/// Rewrite the `MM:SS` readout every frame it changes.
pub fn start_timer(time_value: Element, stage: Rc<RefCell<Stage>>) -> Result<FrameLoop, JsValue> {
    let mut shown = String::new();
    FrameLoop::start("timer", move |_ts| {
        let text = stage.borrow().timer_text(Date::now());
        if text != shown {
            time_value.set_text_content(Some(&text));
            shown = text;
        }
    })
}

pub fn update_progress(win: &Window, document: &Document, bar: &HtmlElement) -> Result<(), JsValue> {
    let scroll_y = win.scroll_y()?;
    let document_height = document
        .document_element()
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, viewport_height) = viewport(win);
    let pct = progress_percent(scroll_y, document_height, viewport_height);
    bar.style().set_property("width", &bar_width(pct))
}

pub fn apply_parallax(lines: &[HtmlElement], offsets: &[f64]) -> Result<(), JsValue> {
    for (line, offset) in lines.iter().zip(offsets) {
        line.style().set_property("transform", &translate_y(*offset))?;
    }
    Ok(())
}

/// Progress bar and parallax both follow the scroll position.
pub fn watch_scroll(win: &Window, hooks: Rc<Hooks>, stage: Rc<RefCell<Stage>>) -> Result<(), JsValue> {
    let document = win.document().ok_or("no document")?;
    update_progress(win, &document, &hooks.progress_bar)?;

    let on_scroll = Closure::wrap(Box::new(move || {
        let Some(w) = window() else { return };
        if let Err(e) = update_progress(&w, &document, &hooks.progress_bar) {
            log::warn!("progress update failed: {:?}", e);
        }

        if !stage.borrow_mut().request_parallax() {
            return;
        }
        let hooks = hooks.clone();
        let stage = stage.clone();
        let scheduled = next_frame(move || {
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let offsets = stage
                .borrow_mut()
                .parallax_offsets(scroll_y, hooks.display_lines.len());
            if let Err(e) = apply_parallax(&hooks.display_lines, &offsets) {
                log::warn!("parallax update failed: {:?}", e);
            }
        });
        if let Err(e) = scheduled {
            log::warn!("could not schedule parallax: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Drop the visible class from every revealable element on the page.
pub fn clear_revealed(document: &Document, selectors: &Selectors) -> Result<(), JsValue> {
    for el in collect(document.query_selector_all(&selectors.revealable())?) {
        el.class_list().remove_1(selectors.visible_class)?;
    }
    Ok(())
}

/// Scroll back to the top, restart the timer and, once the scroll has
/// settled, clear every reveal so the page plays again.
pub fn watch_replay(
    hooks: Rc<Hooks>,
    stage: Rc<RefCell<Stage>>,
    observer: Rc<RevealObserver>,
    selectors: Selectors,
) -> Result<(), JsValue> {
    let selectors = Rc::new(selectors);
    let on_click = Closure::wrap(Box::new(move || {
        let Some(w) = window() else { return };
        let plan = stage.borrow_mut().replay(Date::now());

        let opts = ScrollToOptions::new();
        opts.set_top(plan.scroll_to);
        opts.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);

        let stage = stage.clone();
        let observer = observer.clone();
        let selectors = selectors.clone();
        let settled = after(plan.settle_after_ms, move || {
            stage.borrow_mut().settle_replay();
            let Some(document) = window().and_then(|w| w.document()) else { return };
            if let Err(e) = clear_revealed(&document, &selectors) {
                log::warn!("clearing reveals failed: {:?}", e);
            }
            observer.rearm();
        });
        if let Err(e) = settled {
            log::warn!("could not schedule replay reset: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    hooks
        .replay_button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
