use crate::constants::CONTROLS_ID;
use crate::core::{Settings, Toggle};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Checkbox panel inside `#controls`, one row per toggle.
pub struct ControlPanel {
    boxes: Vec<(Toggle, web::HtmlInputElement)>,
}

impl ControlPanel {
    /// Build the checkboxes and wire them to `settings`. A page without
    /// `#controls` gets an empty panel.
    pub fn mount(document: &web::Document, settings: &Rc<RefCell<Settings>>) -> Self {
        let Some(root) = dom::html_by_id(document, CONTROLS_ID) else {
            log::warn!("[panel] missing #{}", CONTROLS_ID);
            return Self { boxes: Vec::new() };
        };
        let mut boxes = Vec::with_capacity(Toggle::ALL.len());
        for toggle in Toggle::ALL {
            match build_row(document, &root, toggle, settings) {
                Ok(input) => boxes.push((toggle, input)),
                Err(e) => log::error!("[panel] {}: {:?}", toggle.label(), e),
            }
        }
        let panel = Self { boxes };
        panel.sync(&settings.borrow());
        panel
    }

    /// Mirror settings into the checkboxes (the frame loop clears `centre`).
    pub fn sync(&self, settings: &Settings) {
        for (toggle, input) in &self.boxes {
            let want = settings.get(*toggle);
            if input.checked() != want {
                input.set_checked(want);
            }
        }
    }
}

fn build_row(
    document: &web::Document,
    root: &web::HtmlElement,
    toggle: Toggle,
    settings: &Rc<RefCell<Settings>>,
) -> anyhow::Result<web::HtmlInputElement> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let label = document.create_element("label").map_err(js)?;
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    input.set_type("checkbox");
    input.set_id(toggle.label());
    label.append_child(&input).map_err(js)?;
    label
        .append_child(&document.create_text_node(toggle.label()))
        .map_err(js)?;
    root.append_child(&label).map_err(js)?;

    let settings = settings.clone();
    let input_for_change = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let checked = input_for_change.checked();
        settings.borrow_mut().set(toggle, checked);
        log::info!("[panel] {}={}", toggle.label(), checked);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(input)
}
