use crate::constants::{DEFAULT_SELECTOR, DROP_ZONE_ID};
use crate::core::DropZoneState;
use crate::{dom, overlay};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-and-drop on `#dropZone`. Only the first dropped file is used.
pub fn wire_drop_zone(document: &web::Document, on_file: impl Fn(web::File) + 'static) {
    let Some(zone) = dom::html_by_id(document, DROP_ZONE_ID) else {
        log::warn!("[drop] missing #{}", DROP_ZONE_ID);
        return;
    };

    let doc = document.clone();
    let dragover = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DragEvent| {
        ev.prevent_default();
        overlay::set_drop_zone(&doc, DropZoneState::DragOver);
    }) as Box<dyn FnMut(_)>);
    _ = zone.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref());
    dragover.forget();

    let doc = document.clone();
    let dragleave = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::DragEvent| {
        overlay::set_drop_zone(&doc, DropZoneState::Idle);
    }) as Box<dyn FnMut(_)>);
    _ = zone.add_event_listener_with_callback("dragleave", dragleave.as_ref().unchecked_ref());
    dragleave.forget();

    let doc = document.clone();
    let on_drop = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        overlay::set_drop_zone(&doc, DropZoneState::Loaded);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => {
                overlay::hide_default_prompt(&doc);
                on_file(file);
            }
            None => log::warn!("[drop] drop without a file"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = zone.add_event_listener_with_callback("drop", on_drop.as_ref().unchecked_ref());
    on_drop.forget();
}

/// Clicking `.default` plays the bundled track.
pub fn wire_default_track(document: &web::Document, on_click: impl Fn() + 'static) {
    let Some(button) = dom::html_by_selector(document, DEFAULT_SELECTOR) else {
        log::warn!("[drop] missing {}", DEFAULT_SELECTOR);
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(&button, move || {
        overlay::hide_start_card(&doc);
        on_click();
    });
}
