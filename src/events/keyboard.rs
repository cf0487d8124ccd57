use crate::core::{KeyAction, Settings};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    settings: &Rc<RefCell<Settings>>,
    canvas: &web::HtmlCanvasElement,
) {
    // Ignore auto-repeat and browser shortcuts
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = KeyAction::for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::Toggle(toggle) => {
            let value = settings.borrow_mut().press(toggle);
            log::info!("[keys] {}={}", toggle.label(), value);
            if ev.key().starts_with("Arrow") {
                ev.prevent_default();
            }
        }
        KeyAction::TogglePanel => {
            if let Some(doc) = crate::dom::window_document() {
                overlay::toggle_controls(&doc);
            }
            ev.prevent_default();
        }
        KeyAction::Fullscreen => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(settings: Rc<RefCell<Settings>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &settings, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
