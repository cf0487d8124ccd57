use crate::audio::Sampler;
use crate::core::{format_fps, ring_tint, CameraRig, FpsMeter, PassChain, RingField, Settings};
use crate::input::OrbitInput;
use crate::overlay;
use crate::panel::ControlPanel;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedGpu = Rc<RefCell<Option<render::GpuState<'static>>>>;

/// Everything one animation frame touches. Owned by the loop closure.
pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: SharedGpu,
    pub settings: Rc<RefCell<Settings>>,
    pub input: Rc<RefCell<OrbitInput>>,
    pub panel: Rc<ControlPanel>,
    pub sampler: Sampler,
    pub field: RingField,
    pub rig: CameraRig,
    pub fps: FpsMeter,
    pub fps_visible: bool,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let levels = self.sampler.sample();
        let w = self.canvas.width();
        let h = self.canvas.height();

        let (chain, tint, display_fps) = {
            let mut settings = self.settings.borrow_mut();
            let report = self.field.step(levels, &settings);
            if report.reborn > 0 || report.spikes > 0 {
                log::debug!(
                    "[field] frame={} reborn={} spikes={}",
                    self.field.frame(),
                    report.reborn,
                    report.spikes
                );
            }

            let delta = self.input.borrow_mut().take_delta();
            if !delta.is_zero() {
                self.rig.controls.rotate(delta.dx, delta.dy, h.max(1) as f32);
                self.rig.controls.zoom(delta.wheel);
            }
            self.rig.aspect = w.max(1) as f32 / h.max(1) as f32;
            if self.rig.update(&mut settings) {
                log::debug!("[camera] recentered");
            }

            self.panel.sync(&settings);
            (
                PassChain::from_settings(&settings),
                ring_tint(&levels, &settings),
                settings.display_fps,
            )
        };

        self.update_fps(display_fps);

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(self.field.rings(), tint, self.rig.view_proj(), &chain) {
                log::warn!("[render] frame skipped: {:?}", e);
            }
        }
    }

    fn update_fps(&mut self, display: bool) {
        if display != self.fps_visible {
            self.fps_visible = display;
            overlay::set_fps_visible(&self.document, display);
            self.fps.reset();
        }
        if !display {
            return;
        }
        let now = self.started.elapsed().as_secs_f64();
        if let Some(fps) = self.fps.tick(now) {
            overlay::set_fps_text(&self.document, &format_fps(fps));
        }
    }
}

/// Cancels a running frame loop. Dropping the handle leaves the loop running.
pub struct LoopHandle {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Must not be called from inside the frame callback itself.
    pub fn cancel(self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle so the context is freed
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    LoopHandle { tick, raf_id }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
