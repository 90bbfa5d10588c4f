//! Hanging ID badge: a draggable pendant on two cords, swinging back to rest
//! under a spring-damper.
//!
//! [`core`] is platform-independent and holds all of the simulation. The
//! remaining modules bind it to the browser and only exist on `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::BadgeSim;
    use crate::dom::{self, BadgeElements};
    use crate::{events, frame, render};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let Some(document) = dom::window_document() else {
            return Ok(());
        };
        if document.ready_state() == "loading" {
            let on_ready = Closure::once(run);
            _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
            );
            on_ready.forget();
        } else {
            run();
        }
        Ok(())
    }

    // Any failure leaves the page exactly as the stylesheet drew it.
    fn run() {
        if let Err(e) = init() {
            log::debug!("[badge] inactive: {:#}", e);
        }
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let els = BadgeElements::locate(&document)?;

        let config = dom::read_config(&window, &document);
        config.validate()?;

        let reduced_motion = dom::prefers_reduced_motion(&window);
        let pin_center = els.pin_center();
        let anchor = dom::rect_of(&els.anchor);
        let (mut sim, entrance) = BadgeSim::with_entrance(config, reduced_motion, &anchor, pin_center);
        log::info!(
            "[badge] init rest_length={} cord_split={} entrance={:?}",
            config.rest_length,
            config.cord_split,
            entrance
        );

        // Paint once before the first frame so the initial layout never flashes.
        render::paint(&els, &mut sim);

        let ctx = frame::FrameContext {
            sim: Rc::new(RefCell::new(sim)),
            els: Rc::new(els),
        };
        events::wire_pointer_handlers(&ctx);
        events::wire_layout_handlers(&ctx);
        frame::ensure_loop(&ctx);
        Ok(())
    }
}
