use crate::constants::{
    CONTROLS_ID, DEFAULT_SELECTOR, DROP_ZONE_ID, FPS_ID, LOADING_SELECTOR, PARENT_SELECTOR,
};
use crate::core::{DropZoneState, Indicator};
use crate::dom;
use web_sys as web;

pub fn set_drop_zone(document: &web::Document, state: DropZoneState) {
    if let Some(el) = dom::html_by_id(document, DROP_ZONE_ID) {
        _ = el
            .style()
            .set_property("background-color", state.background());
    }
}

pub fn apply_indicator(document: &web::Document, indicator: Indicator) {
    let Some(el) = dom::html_by_selector(document, LOADING_SELECTOR) else {
        return;
    };
    match indicator {
        Indicator::Text(text) => {
            el.set_inner_text(text);
            dom::set_display(&el, true);
        }
        Indicator::Hidden => dom::set_display(&el, false),
        Indicator::Unchanged => {}
    }
}

/// The click-to-play affordance disappears once any source is chosen.
pub fn hide_default_prompt(document: &web::Document) {
    if let Some(el) = dom::html_by_selector(document, DEFAULT_SELECTOR) {
        dom::set_display(&el, false);
    }
}

/// Hide the whole start card (used by the bundled-track path).
pub fn hide_start_card(document: &web::Document) {
    if let Some(el) = dom::html_by_selector(document, PARENT_SELECTOR) {
        dom::set_display(&el, false);
    }
}

#[inline]
pub fn set_fps_visible(document: &web::Document, visible: bool) {
    if let Some(el) = dom::html_by_id(document, FPS_ID) {
        dom::set_display(&el, visible);
    }
}

#[inline]
pub fn set_fps_text(document: &web::Document, text: &str) {
    if let Some(el) = dom::html_by_id(document, FPS_ID) {
        el.set_inner_text(text);
    }
}

pub fn toggle_controls(document: &web::Document) {
    if let Some(el) = dom::html_by_id(document, CONTROLS_ID) {
        let hidden = el
            .style()
            .get_property_value("display")
            .map(|d| d == "none")
            .unwrap_or(false);
        dom::set_display(&el, hidden);
    }
}
