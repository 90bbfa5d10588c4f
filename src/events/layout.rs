use crate::frame::FrameContext;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize and scroll move the pin and badge without touching the simulation;
/// repaint immediately so the cords stay attached between frames.
pub fn wire_layout_handlers(ctx: &FrameContext) {
    let Some(window) = web::window() else {
        return;
    };

    let c = ctx.clone();
    let resize = Closure::wrap(Box::new(move || c.relayout()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
    resize.forget();

    let c = ctx.clone();
    let scroll = Closure::wrap(Box::new(move || c.relayout()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        scroll.as_ref().unchecked_ref(),
        &opts,
    );
    scroll.forget();
}
