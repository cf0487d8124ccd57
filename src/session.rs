use crate::audio::{self, AudioGraph, Sampler};
use crate::constants::FPS_WINDOW_SEC;
use crate::core::{
    AudioError, CameraRig, FpsMeter, LoadEvent, Preset, RingField, Settings, SourceKind,
};
use crate::frame::{self, FrameContext, LoopHandle, SharedGpu};
use crate::input::OrbitInput;
use crate::overlay;
use crate::panel::ControlPanel;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A source the user asked to play.
pub enum SourceRequest {
    File(web::File),
    Bundled(String),
}

impl SourceRequest {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceRequest::File(f) => SourceKind::DroppedFile { name: f.name() },
            SourceRequest::Bundled(url) => SourceKind::Bundled { url: url.clone() },
        }
    }
}

/// One playing track: its audio graph, looping source and frame loop.
struct Session {
    kind: SourceKind,
    graph: AudioGraph,
    source: web::AudioBufferSourceNode,
    frame_loop: LoopHandle,
}

impl Session {
    fn teardown(self) {
        log::info!("[session] stopping {}", self.kind.describe());
        self.frame_loop.cancel();
        audio::shutdown(&self.graph, Some(&self.source));
    }
}

/// Page-lifetime state shared by every session.
pub struct App {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: SharedGpu,
    pub settings: Rc<RefCell<Settings>>,
    pub input: Rc<RefCell<OrbitInput>>,
    pub panel: Rc<ControlPanel>,
    pub preset: Preset,
    current: RefCell<Option<Session>>,
    // Bumped on every load; async work from an older load checks it and bails
    generation: Cell<u64>,
}

impl App {
    pub fn new(
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        gpu: SharedGpu,
        settings: Rc<RefCell<Settings>>,
        input: Rc<RefCell<OrbitInput>>,
        panel: Rc<ControlPanel>,
        preset: Preset,
    ) -> Self {
        Self {
            document,
            canvas,
            gpu,
            settings,
            input,
            panel,
            preset,
            current: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    /// Tear down whatever is playing and start loading `request`.
    pub fn load(self: &Rc<Self>, request: SourceRequest) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        if let Some(old) = self.current.borrow_mut().take() {
            old.teardown();
        }

        let app = self.clone();
        spawn_local(async move {
            let kind = request.kind();
            if let Err(e) = app.clone().start(request, generation).await {
                log::error!("[session] {} failed: {}", kind.describe(), e);
                if app.is_current(generation) {
                    app.report(&LoadEvent::Failed(e));
                }
            }
        });
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn report(&self, event: &LoadEvent) {
        log::info!("[session] {:?}", event);
        overlay::apply_indicator(&self.document, event.indicator());
    }

    async fn start(
        self: Rc<Self>,
        request: SourceRequest,
        generation: u64,
    ) -> Result<(), AudioError> {
        let kind = request.kind();
        log::info!("[session] loading {}", kind.describe());
        let graph = audio::create_graph()?;
        match self.play(&graph, request, generation).await {
            Ok(Some(source)) => {
                let ctx = self.frame_context(&graph);
                let frame_loop = frame::start_loop(Rc::new(RefCell::new(ctx)));
                *self.current.borrow_mut() = Some(Session {
                    kind,
                    graph,
                    source,
                    frame_loop,
                });
                Ok(())
            }
            Ok(None) => {
                log::info!("[session] superseded {}", kind.describe());
                audio::shutdown(&graph, None);
                Ok(())
            }
            Err(e) => {
                audio::shutdown(&graph, None);
                Err(e)
            }
        }
    }

    /// Read, decode and start looping playback. `None` when a newer load
    /// took over while this one was waiting.
    async fn play(
        &self,
        graph: &AudioGraph,
        request: SourceRequest,
        generation: u64,
    ) -> Result<Option<web::AudioBufferSourceNode>, AudioError> {
        let bytes = match &request {
            SourceRequest::File(file) => audio::read_file(file).await?,
            SourceRequest::Bundled(url) => audio::fetch_track(url).await?,
        };
        if !self.is_current(generation) {
            return Ok(None);
        }
        self.report(&LoadEvent::Decoding);
        let buffer = audio::decode(&graph.ctx, &bytes).await?;
        if !self.is_current(generation) {
            return Ok(None);
        }
        let ready = LoadEvent::Ready {
            duration_sec: buffer.duration(),
        };
        let source = audio::play_looping(graph, &buffer)?;
        self.report(&ready);
        Ok(Some(source))
    }

    fn frame_context(&self, graph: &AudioGraph) -> FrameContext {
        let config = self.preset.config();
        let aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        let display_fps = self.settings.borrow().display_fps;
        FrameContext {
            document: self.document.clone(),
            canvas: self.canvas.clone(),
            gpu: self.gpu.clone(),
            settings: self.settings.clone(),
            input: self.input.clone(),
            panel: self.panel.clone(),
            sampler: Sampler::new(graph.analyser.clone(), graph.ctx.sample_rate()),
            rig: CameraRig::new(aspect, config.auto_recenter_frames),
            field: RingField::new(config),
            fps: FpsMeter::new(FPS_WINDOW_SEC),
            // Opposite of the setting so the first frame syncs #fps
            fps_visible: !display_fps,
            started: Instant::now(),
        }
    }
}
