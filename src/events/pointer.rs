use crate::input::OrbitInput;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-to-orbit and wheel-to-zoom on the canvas. Deltas are accumulated
/// here and consumed by the frame loop.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, input: Rc<RefCell<OrbitInput>>) {
    wire_pointerdown(canvas, input.clone());
    wire_pointermove(input.clone());
    wire_pointerup(input.clone());
    wire_wheel(canvas, input);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, input: Rc<RefCell<OrbitInput>>) {
    let canvas_for_capture = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        input
            .borrow_mut()
            .press(ev.client_x() as f32, ev.client_y() as f32);
        _ = canvas_for_capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(input: Rc<RefCell<OrbitInput>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        input
            .borrow_mut()
            .moved(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(input: Rc<RefCell<OrbitInput>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        input.borrow_mut().release();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, input: Rc<RefCell<OrbitInput>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        input.borrow_mut().scroll(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
