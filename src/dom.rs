use crate::core::{AnchorGeometry, BadgeConfig, Rect};
use glam::DVec2;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, Error)]
#[error("missing element `{0}`")]
pub struct MissingElement(pub &'static str);

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Every element the badge touches. Located once at start-up; if any is
/// absent the feature stays off.
pub struct BadgeElements {
    pub stage: web::Element,
    pub anchor: web::Element,
    pub hanger: web::HtmlElement,
    pub pin: web::Element,
    pub badge: web::Element,
    pub attach_left: web::Element,
    pub attach_right: web::Element,
    pub cord_left: web::HtmlElement,
    pub cord_right: web::HtmlElement,
}

fn query(root: &web::Document, selector: &'static str) -> Result<web::Element, MissingElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .ok_or(MissingElement(selector))
}

fn query_in(root: &web::Element, selector: &'static str) -> Result<web::Element, MissingElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .ok_or(MissingElement(selector))
}

fn html(el: web::Element, selector: &'static str) -> Result<web::HtmlElement, MissingElement> {
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| MissingElement(selector))
}

impl BadgeElements {
    pub fn locate(document: &web::Document) -> Result<Self, MissingElement> {
        let badge = query(document, "#id-badge")?;
        Ok(Self {
            stage: query(document, ".stage")?,
            anchor: query(document, "#anchor")?,
            hanger: html(query(document, "#hanger")?, "#hanger")?,
            pin: query(document, "#pin")?,
            attach_left: query_in(&badge, ".attach-left")?,
            attach_right: query_in(&badge, ".attach-right")?,
            cord_left: html(query(document, "#cord-left")?, "#cord-left")?,
            cord_right: html(query(document, "#cord-right")?, "#cord-right")?,
            badge,
        })
    }

    pub fn pin_center(&self) -> DVec2 {
        rect_of(&self.pin).center()
    }

    /// Fresh layout read; called every frame.
    pub fn geometry(&self) -> AnchorGeometry {
        AnchorGeometry {
            pin_center: self.pin_center(),
            anchor: rect_of(&self.anchor),
            attach_left: rect_of(&self.attach_left),
            attach_right: rect_of(&self.attach_right),
        }
    }
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Raw computed value of a custom property, `None` if unset.
pub fn read_css_var(window: &web::Window, el: &web::Element, name: &str) -> Option<String> {
    let style = window.get_computed_style(el).ok().flatten()?;
    let raw = style.get_property_value(name).ok()?;
    (!raw.trim().is_empty()).then_some(raw)
}

pub fn read_config(window: &web::Window, document: &web::Document) -> BadgeConfig {
    match document.document_element() {
        Some(root) => BadgeConfig::from_lookup(|name| read_css_var(window, &root, name)),
        None => BadgeConfig::default(),
    }
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
