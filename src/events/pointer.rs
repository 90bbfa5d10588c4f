use crate::core::{PointerSample, Transition};
use crate::frame::{self, FrameContext};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(ctx: &FrameContext) {
    wire_pointerdown(ctx);
    wire_pointermove(ctx);
    for kind in ["pointerup", "pointercancel"] {
        wire_pointerup(ctx, kind);
    }
    wire_blur(ctx);
}

#[inline]
fn sample(ev: &web::PointerEvent) -> PointerSample {
    let ts = ev.time_stamp();
    let time_ms = if ts > 0.0 { ts } else { instant::now() };
    PointerSample::new(ev.pointer_id(), ev.client_x() as f64, ev.client_y() as f64, time_ms)
}

fn wire_pointerdown(ctx: &FrameContext) {
    let c = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let transition = {
            let mut sim = c.sim.borrow_mut();
            sim.pin_center = c.els.pin_center();
            sim.pointer_down(sample(&ev), Some(ev.button()))
        };
        if let Transition::Started { pointer_id } = transition {
            _ = c.els.badge.set_pointer_capture(pointer_id);
            _ = c.els.stage.class_list().add_1("dragging");
            ev.prevent_default();
            log::debug!("[drag] start pointer={}", pointer_id);
            frame::ensure_loop(&c);
        }
    }) as Box<dyn FnMut(_)>);
    _ = ctx
        .els
        .badge
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(ctx: &FrameContext) {
    let c = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        _ = c.sim.borrow_mut().pointer_move(sample(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn on_released(ctx: &FrameContext, transition: Transition) {
    if let Transition::Released { pointer_id, kicked } = transition {
        _ = ctx.els.stage.class_list().remove_1("dragging");
        _ = ctx.els.badge.release_pointer_capture(pointer_id);
        log::debug!("[drag] release pointer={} kicked={}", pointer_id, kicked);
    }
}

fn wire_pointerup(ctx: &FrameContext, kind: &str) {
    let c = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let transition = c.sim.borrow_mut().pointer_release(Some(ev.pointer_id()));
        on_released(&c, transition);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Losing focus mid-drag must not leave the badge stuck to a pointer that will
// never send `pointerup`.
fn wire_blur(ctx: &FrameContext) {
    let c = ctx.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let transition = c.sim.borrow_mut().pointer_release(None);
        on_released(&c, transition);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
