use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::Hooks;
use super::schedule::after;
use crate::config::{RevealTimings, Selectors};
use crate::reveal::RevealStep;
use crate::stage::Stage;

/// Watches chapter sections and plays their staged reveal on first entry.
pub struct RevealObserver {
    observer: IntersectionObserver,
    hooks: Rc<Hooks>,
    // Keeps the JS callback alive as long as the observer.
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn start(
        hooks: Rc<Hooks>,
        stage: Rc<RefCell<Stage>>,
        timings: &RevealTimings,
        selectors: &Selectors,
    ) -> Result<Self, JsValue> {
        let visible_class = selectors.visible_class;
        let callback = {
            let hooks = hooks.clone();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(section) = hooks.chapter_index(&entry.target()) else {
                        continue;
                    };
                    let steps = stage.borrow_mut().observe_section(
                        section,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    for step in steps {
                        schedule(step, hooks.clone(), stage.clone(), visible_class);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(timings.threshold));
        init.set_root_margin(timings.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let this = Self {
            observer,
            hooks,
            _callback: callback,
        };
        this.observe_all();
        Ok(this)
    }

    fn observe_all(&self) {
        for chapter in &self.hooks.chapters {
            self.observer.observe(&chapter.root);
        }
    }

    /// Re-register every section so ones already in view report again.
    pub fn rearm(&self) {
        self.observer.disconnect();
        self.observe_all();
    }
}

fn schedule(step: RevealStep, hooks: Rc<Hooks>, stage: Rc<RefCell<Stage>>, visible_class: &'static str) {
    let reveal = move || {
        if !stage.borrow_mut().apply_reveal(&step) {
            return;
        }
        let element = hooks
            .chapters
            .get(step.section)
            .and_then(|c| c.element(step.target));
        if let Some(el) = element {
            if let Err(e) = el.class_list().add_1(visible_class) {
                log::warn!("could not reveal {:?}: {:?}", step.target, e);
            }
        }
    };

    if step.delay_ms == 0 {
        reveal();
    } else if let Err(e) = after(step.delay_ms, reveal) {
        log::warn!("could not schedule reveal: {:?}", e);
    }
}
