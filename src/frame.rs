use crate::core::{BadgeSim, StepOutcome};
use crate::dom::BadgeElements;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles for the frame callback and the event listeners.
#[derive(Clone)]
pub struct FrameContext {
    pub sim: Rc<RefCell<BadgeSim>>,
    pub els: Rc<BadgeElements>,
}

impl FrameContext {
    pub fn frame(&self, ts_ms: f64) {
        let mut sim = self.sim.borrow_mut();
        if sim.tick(ts_ms) == StepOutcome::Settled {
            log::trace!("[frame] at rest");
        }
        render::paint(&self.els, &mut sim);
    }

    /// Scroll or resize moved the layout; repaint now rather than waiting for
    /// the next frame.
    pub fn relayout(&self) {
        let mut sim = self.sim.borrow_mut();
        render::paint(&self.els, &mut sim);
    }
}

/// Start the rAF loop unless it is already running.
pub fn ensure_loop(ctx: &FrameContext) {
    let schedule = ctx.sim.borrow_mut().ensure_running();
    if schedule {
        log::debug!("[frame] starting animation loop");
        start_loop(ctx.clone());
    }
}

fn start_loop(ctx: FrameContext) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        ctx.frame(ts);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
