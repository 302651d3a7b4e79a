#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Date, Promise};
use kinetic_type::config::Selectors;
use kinetic_type::reveal::{RevealTarget, SectionShape};
use kinetic_type::wasm::observer::RevealObserver;
use kinetic_type::wasm::page::{apply_parallax, clear_revealed, start_timer, update_progress};
use kinetic_type::wasm::schedule::FrameLoop;
use kinetic_type::wasm::Hooks;
use kinetic_type::{Config, Stage};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
    <canvas id="typeCanvas"></canvas>
    <div class="progress"><div class="progress-bar"></div></div>
    <span class="time-value">00:00</span>
    <h1><span class="display-line">Type</span><span class="display-line">in</span><span class="display-line">motion</span></h1>
    <section class="chapter">
        <p class="statement">one</p><p class="statement">two</p>
        <div class="trait-group">a</div>
        <div class="signature-section">sig</div>
    </section>
    <section class="chapter"><p class="statement">three</p></section>
    <button class="replay-button">Replay</button>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Render `html` into a dedicated container so the runner's own output
/// stays untouched.
fn mount(html: &str) -> Document {
    let document = document();
    let host = match document.get_element_by_id("fixture") {
        Some(el) => el,
        None => {
            let el = document.create_element("div").unwrap();
            el.set_id("fixture");
            document.body().unwrap().prepend_with_node_1(&el).unwrap();
            el
        }
    };
    host.set_inner_html(html);
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    document
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn stage_for(hooks: &Hooks, now_ms: f64) -> Rc<RefCell<Stage>> {
    Rc::new(RefCell::new(Stage::new(
        Config::default(),
        9,
        now_ms,
        false,
        hooks.section_shapes(),
    )))
}

#[wasm_bindgen_test]
fn locates_every_hook() {
    let document = mount(FIXTURE);
    let hooks = Hooks::locate(&document, &Selectors::default()).expect("hooks");

    assert_eq!(hooks.display_lines.len(), 3);
    assert_eq!(
        hooks.section_shapes(),
        vec![
            SectionShape {
                statements: 2,
                trait_groups: 1,
                has_signature: true,
            },
            SectionShape {
                statements: 1,
                trait_groups: 0,
                has_signature: false,
            },
        ]
    );
    let second = hooks.chapters[1].root.clone();
    assert_eq!(hooks.chapter_index(&second), Some(1));
    assert!(hooks.chapters[1].element(RevealTarget::Signature).is_none());
}

#[wasm_bindgen_test]
fn missing_hook_names_its_selector() {
    let document = mount(r#"<canvas id="typeCanvas"></canvas>"#);
    let err = Hooks::locate(&document, &Selectors::default()).unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("hook not found: .time-value"));
}

#[wasm_bindgen_test]
fn parallax_sets_transforms() {
    let document = mount(FIXTURE);
    let hooks = Hooks::locate(&document, &Selectors::default()).unwrap();
    apply_parallax(&hooks.display_lines, &[30.0, 25.5, 21.0]).unwrap();

    let transforms: Vec<String> = hooks
        .display_lines
        .iter()
        .map(|l| l.style().get_property_value("transform").unwrap())
        .collect();
    assert_eq!(
        transforms,
        vec!["translateY(30px)", "translateY(25.5px)", "translateY(21px)"]
    );
}

#[wasm_bindgen_test]
fn replay_clears_visible_class() {
    let document = mount(FIXTURE);
    let selectors = Selectors::default();
    let hooks = Hooks::locate(&document, &selectors).unwrap();
    for chapter in &hooks.chapters {
        chapter.root.class_list().add_1("visible").unwrap();
        for s in &chapter.statements {
            s.class_list().add_1("visible").unwrap();
        }
    }

    clear_revealed(&document, &selectors).unwrap();
    let still_visible = document.query_selector_all(".visible").unwrap();
    assert_eq!(still_visible.length(), 0);
    assert_eq!(document.query_selector_all(".chapter").unwrap().length(), 2);
}

#[wasm_bindgen_test]
async fn cancelled_frame_loop_stops_ticking() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let frames = FrameLoop::start("test", move |_ts| counter.set(counter.get() + 1)).unwrap();

    sleep(200).await;
    assert!(ticks.get() > 0, "loop never ticked");
    assert!(!frames.is_cancelled());

    frames.cancel();
    assert!(frames.is_cancelled());
    let at_cancel = ticks.get();
    sleep(200).await;
    assert_eq!(ticks.get(), at_cancel);
}

#[wasm_bindgen_test]
async fn timer_writes_only_when_text_changes() {
    let document = mount(FIXTURE);
    let hooks = Hooks::locate(&document, &Selectors::default()).unwrap();
    let stage = stage_for(&hooks, Date::now());
    let frames = start_timer(hooks.time_value.clone(), stage.clone()).unwrap();

    sleep(100).await;
    assert_eq!(hooks.time_value.text_content().as_deref(), Some("00:00"));

    // Same second: the readout is left alone.
    hooks.time_value.set_text_content(Some("untouched"));
    sleep(100).await;
    assert_eq!(hooks.time_value.text_content().as_deref(), Some("untouched"));

    // Move the origin back two minutes; the next frame rewrites the text.
    stage.borrow_mut().replay(Date::now() - 125_000.0);
    assert!(stage.borrow().timer().origin() < Date::now());
    sleep(100).await;
    assert_eq!(hooks.time_value.text_content().as_deref(), Some("02:05"));

    frames.cancel();
}

#[wasm_bindgen_test]
fn progress_bar_width_tracks_document_scroll() {
    let document = mount(&format!(r#"{}<div style="height: 5000px"></div>"#, FIXTURE));
    let window = web_sys::window().unwrap();
    let hooks = Hooks::locate(&document, &Selectors::default()).unwrap();

    update_progress(&window, &document, &hooks.progress_bar).unwrap();
    assert_eq!(hooks.progress_bar.style().get_property_value("width").unwrap(), "0%");

    // Scrolled to the bottom; scrollbar rounding can leave it a hair short.
    window.scroll_to_with_x_and_y(0.0, 1.0e7);
    update_progress(&window, &document, &hooks.progress_bar).unwrap();
    let width = hooks.progress_bar.style().get_property_value("width").unwrap();
    let pct: f64 = width.trim_end_matches('%').parse().unwrap();
    assert!(width.ends_with('%') && pct > 99.0 && pct <= 100.0, "width = {}", width);

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn rearm_reveals_sections_already_in_view() {
    let document = mount(FIXTURE);
    let config = Config::default();
    let hooks = Rc::new(Hooks::locate(&document, &config.selectors).unwrap());
    let stage = stage_for(&hooks, Date::now());
    let observer =
        RevealObserver::start(hooks.clone(), stage.clone(), &config.reveal, &config.selectors).unwrap();

    let first = hooks.chapters[0].root.clone();
    let first_statement = hooks.chapters[0].statements[0].clone();
    sleep(300).await;
    assert!(first.class_list().contains("visible"));
    assert!(first_statement.class_list().contains("visible"));

    // What replay does once the scroll has settled.
    stage.borrow_mut().settle_replay();
    clear_revealed(&document, &config.selectors).unwrap();
    assert!(!first.class_list().contains("visible"));
    assert!(!stage.borrow().reveal().any_visible());

    observer.rearm();
    sleep(300).await;
    assert!(first.class_list().contains("visible"));
    assert!(first_statement.class_list().contains("visible"));
    assert!(stage.borrow().reveal().is_visible(0, RevealTarget::Section));
}
