#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, DEFAULT_TRACK_URL, PRESET_QUERY_KEY};
use crate::core::{DropZoneState, Preset, Settings};
use crate::session::{App, SourceRequest};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod panel;
mod render;
mod session;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn preset_from_url() -> Preset {
    match dom::query_param(PRESET_QUERY_KEY) {
        Some(name) => Preset::from_name(&name).unwrap_or_else(|| {
            log::warn!("[app] unknown preset '{}', using default", name);
            Preset::default()
        }),
        None => Preset::default(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ring-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let preset = preset_from_url();
    log::info!("[app] preset={}", preset.name());

    let settings = Rc::new(RefCell::new(Settings::default()));
    let orbit_input = Rc::new(RefCell::new(input::OrbitInput::default()));
    let panel = Rc::new(panel::ControlPanel::mount(&document, &settings));
    let gpu: frame::SharedGpu = Rc::new(RefCell::new(None));

    let app = Rc::new(App::new(
        document.clone(),
        canvas.clone(),
        gpu.clone(),
        settings.clone(),
        orbit_input.clone(),
        panel,
        preset,
    ));

    overlay::set_drop_zone(&document, DropZoneState::Idle);
    events::wire_global_keydown(settings, canvas.clone());
    events::wire_orbit_input(&canvas, orbit_input);

    let app_drop = app.clone();
    events::wire_drop_zone(&document, move |file| {
        app_drop.load(SourceRequest::File(file));
    });
    events::wire_default_track(&document, move || {
        app.load(SourceRequest::Bundled(DEFAULT_TRACK_URL.to_string()));
    });

    // Sessions started before the adapter resolves simply draw nothing yet
    *gpu.borrow_mut() = frame::init_gpu(&canvas).await;
    Ok(())
}
