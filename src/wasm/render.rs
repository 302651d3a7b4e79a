use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::schedule::FrameLoop;
use crate::letter::Letter;
use crate::stage::Stage;

/// Current viewport size in CSS pixels.
pub fn viewport(window: &Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Size the canvas to the viewport and start the letter render loop.
pub fn start(canvas: HtmlCanvasElement, stage: Rc<RefCell<Stage>>) -> Result<FrameLoop, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;

    // Resize canvas to fit window; the field only populates while empty.
    let resize = {
        let canvas = canvas.clone();
        let stage = stage.clone();
        move || {
            let Some(w) = window() else { return };
            let (width, height) = viewport(&w);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            stage.borrow_mut().resize(width, height);
        }
    };
    resize();
    let resize_closure = Closure::wrap(Box::new(resize) as Box<dyn FnMut()>);
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    FrameLoop::start("render", move |_ts| {
        let mut stage = stage.borrow_mut();
        let (width, height) = stage.field().viewport();
        ctx.clear_rect(0.0, 0.0, width, height);
        for letter in stage.frame() {
            if let Err(e) = draw(&ctx, letter) {
                log::warn!("draw failed: {:?}", e);
                break;
            }
        }
    })
}

fn draw(ctx: &CanvasRenderingContext2d, letter: &Letter) -> Result<(), JsValue> {
    ctx.save();
    let painted = (|| -> Result<(), JsValue> {
        ctx.translate(letter.x, letter.y)?;
        ctx.rotate(letter.rotation)?;
        ctx.set_font(letter.font());
        ctx.set_fill_style_str(letter.fill_style());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let mut buf = [0u8; 4];
        ctx.fill_text(letter.glyph().encode_utf8(&mut buf), 0.0, 0.0)
    })();
    ctx.restore();
    painted
}
