use crate::constants::{ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING};
use crate::core::{AudioError, BandLevels, Bands};
use js_sys::ArrayBuffer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Audio context plus the analyser every source is routed through.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
}

pub fn create_graph() -> Result<AudioGraph, AudioError> {
    let ctx = web::AudioContext::new().map_err(|e| AudioError::Context(format!("{:?}", e)))?;
    let analyser =
        web::AnalyserNode::new(&ctx).map_err(|e| AudioError::Context(format!("{:?}", e)))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| AudioError::Context(format!("{:?}", e)))?;
    Ok(AudioGraph { ctx, analyser })
}

async fn await_array_buffer(promise: js_sys::Promise) -> Result<ArrayBuffer, String> {
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("{:?}", e))?;
    value
        .dyn_into::<ArrayBuffer>()
        .map_err(|e| format!("not an ArrayBuffer: {:?}", e))
}

/// Read a dropped file fully into memory.
pub async fn read_file(file: &web::File) -> Result<ArrayBuffer, AudioError> {
    await_array_buffer(file.array_buffer())
        .await
        .map_err(AudioError::FileRead)
}

pub async fn fetch_track(url: &str) -> Result<ArrayBuffer, AudioError> {
    let fetch_err = |reason: String| AudioError::Fetch {
        url: url.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    await_array_buffer(promise).await.map_err(fetch_err)
}

pub async fn decode(
    ctx: &web::AudioContext,
    bytes: &ArrayBuffer,
) -> Result<web::AudioBuffer, AudioError> {
    let promise = ctx
        .decode_audio_data(bytes)
        .map_err(|e| AudioError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| AudioError::Decode(format!("{:?}", e)))?;
    value
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| AudioError::Decode(format!("{:?}", e)))
}

/// Start a looping buffer source routed through the analyser.
pub fn play_looping(
    graph: &AudioGraph,
    buffer: &web::AudioBuffer,
) -> Result<web::AudioBufferSourceNode, AudioError> {
    let playback_err = |e: wasm_bindgen::JsValue| AudioError::Playback(format!("{:?}", e));
    let src = graph.ctx.create_buffer_source().map_err(playback_err)?;
    src.set_buffer(Some(buffer));
    src.set_loop(true);
    src.connect_with_audio_node(&graph.analyser)
        .map_err(playback_err)?;
    _ = graph.ctx.resume();
    src.start().map_err(playback_err)?;
    Ok(src)
}

/// Stop playback and release the audio context.
pub fn shutdown(graph: &AudioGraph, source: Option<&web::AudioBufferSourceNode>) {
    if let Some(src) = source {
        _ = src.stop();
        _ = src.disconnect();
    }
    _ = graph.analyser.disconnect();
    if let Err(e) = graph.ctx.close() {
        log::warn!("[audio] close failed: {:?}", e);
    }
}

/// Pulls byte spectra from the analyser each frame and reduces them to band
/// levels.
pub struct Sampler {
    analyser: web::AnalyserNode,
    bands: Bands,
    freqs: Vec<u8>,
    waveform: Vec<u8>,
}

impl Sampler {
    pub fn new(analyser: web::AnalyserNode, sample_rate: f32) -> Self {
        let bins = analyser.frequency_bin_count() as usize;
        let fft = analyser.fft_size() as usize;
        let bands = Bands::for_analyser(sample_rate, bins);
        log::info!(
            "[audio] analyser bins={} sub={:?} low={:?} mid={:?} high={:?}",
            bins,
            bands.sub,
            bands.low,
            bands.mid,
            bands.high
        );
        Self {
            analyser,
            bands,
            freqs: vec![0; bins],
            waveform: vec![0; fft],
        }
    }

    pub fn sample(&mut self) -> BandLevels {
        let bins = self.analyser.frequency_bin_count() as usize;
        if self.freqs.len() != bins {
            self.freqs.resize(bins, 0);
        }
        let fft = self.analyser.fft_size() as usize;
        if self.waveform.len() != fft {
            self.waveform.resize(fft, 0);
        }
        self.analyser.get_byte_frequency_data(&mut self.freqs);
        self.analyser.get_byte_time_domain_data(&mut self.waveform);
        BandLevels::measure(&self.freqs, &self.waveform, &self.bands)
    }
}
