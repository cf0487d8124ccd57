// Host-side tests for toggles, key bindings, the post-processing chain, the
// FPS meter and load-state presentation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod settings {
    include!("../src/core/settings.rs");
}
mod pipeline {
    include!("../src/core/pipeline.rs");
}
mod fps {
    include!("../src/core/fps.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod source {
    include!("../src/core/source.rs");
}

use error::*;
use fps::*;
use pipeline::*;
use settings::*;
use source::*;

#[test]
fn toggle_labels_are_unique_and_round_trip() {
    for t in Toggle::ALL {
        assert_eq!(Toggle::from_label(t.label()), Some(t));
    }
    let mut labels: Vec<&str> = Toggle::ALL.iter().map(|t| t.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), Toggle::ALL.len());
    assert_eq!(Toggle::DisplayFps.label(), "displayFPS");
    assert_eq!(Toggle::from_label("nope"), None);
}

#[test]
fn settings_default_off_and_set_get_flip() {
    let mut s = Settings::default();
    for t in Toggle::ALL {
        assert!(!s.get(t));
    }
    for t in Toggle::ALL {
        s.set(t, true);
        assert!(s.get(t));
        assert!(!s.flip(t));
        assert!(!s.get(t));
    }
}

#[test]
fn take_centre_fires_once() {
    let mut s = Settings {
        centre: true,
        ..Settings::default()
    };
    assert!(s.take_centre());
    assert!(!s.centre);
    assert!(!s.take_centre());
}

#[test]
fn key_bindings() {
    let cases = [
        ("x", Toggle::FreqRotateX),
        ("Y", Toggle::FreqRotateY),
        ("v", Toggle::FreqVertices),
        ("o", Toggle::CreateCone),
        ("b", Toggle::BlurEffect),
        ("K", Toggle::Kaleidoscope),
        ("q", Toggle::ColourFrequencies),
        ("c", Toggle::Centre),
        ("f", Toggle::DisplayFps),
        ("ArrowLeft", Toggle::RotateAntiX),
        ("ArrowRight", Toggle::RotateX),
        ("ArrowUp", Toggle::RotateY),
        ("ArrowDown", Toggle::RotateAntiY),
    ];
    for (key, toggle) in cases {
        assert_eq!(Toggle::for_key(key), Some(toggle), "key {}", key);
        assert_eq!(KeyAction::for_key(key), Some(KeyAction::Toggle(toggle)));
    }
    assert_eq!(KeyAction::for_key("h"), Some(KeyAction::TogglePanel));
    assert_eq!(KeyAction::for_key("H"), Some(KeyAction::TogglePanel));
    assert_eq!(KeyAction::for_key("Enter"), Some(KeyAction::Fullscreen));
    assert_eq!(KeyAction::for_key("z"), None);
    assert_eq!(KeyAction::for_key(" "), None);
}

#[test]
fn press_flips_toggles_but_only_arms_centre() {
    let mut s = Settings::default();
    assert!(s.press(Toggle::Kaleidoscope));
    assert!(!s.press(Toggle::Kaleidoscope));
    assert!(s.press(Toggle::Centre));
    assert!(s.press(Toggle::Centre));
    assert!(s.centre);
}

#[test]
fn no_effects_draws_direct() {
    let chain = PassChain::from_settings(&Settings::default());
    assert!(chain.passes().is_empty());
    assert_eq!(chain.mode(), PresentMode::Direct);
    assert!(chain.plan().is_empty());
}

#[test]
fn blur_then_kaleidoscope_order() {
    let s = Settings {
        blur_effect: true,
        kaleidoscope: true,
        ..Settings::default()
    };
    let chain = PassChain::from_settings(&s);
    assert_eq!(
        chain.passes(),
        &[
            PostPass::Bloom,
            PostPass::Fxaa,
            PostPass::BoxBlur,
            PostPass::Kaleidoscope
        ]
    );
    assert_eq!(chain.mode(), PresentMode::Composited);

    let plan = chain.plan();
    let reads: Vec<Offscreen> = plan.iter().map(|s| s.read).collect();
    assert_eq!(
        reads,
        [Offscreen::A, Offscreen::B, Offscreen::A, Offscreen::B]
    );
    assert_eq!(plan[0].write, PassTarget::Offscreen(Offscreen::B));
    assert_eq!(plan[2].write, PassTarget::Offscreen(Offscreen::B));
    assert_eq!(plan[3].write, PassTarget::Screen);
}

#[test]
fn kaleidoscope_alone_reads_scene_and_writes_screen() {
    let s = Settings {
        kaleidoscope: true,
        ..Settings::default()
    };
    let plan = PassChain::from_settings(&s).plan();
    assert_eq!(plan.len(), 1);
    assert_eq!(
        plan[0],
        PassStep {
            pass: PostPass::Kaleidoscope,
            read: Offscreen::A,
            write: PassTarget::Screen,
        }
    );
}

#[test]
fn pass_entries_are_distinct() {
    let mut entries: Vec<&str> = PostPass::ALL.iter().map(|p| p.fragment_entry()).collect();
    entries.dedup();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| e.starts_with("fs_")));
}

#[test]
fn fps_meter_reports_once_per_window() {
    let mut m = FpsMeter::new(1.0);
    assert_eq!(m.fps(), None);
    let mut readings = Vec::new();
    for i in 0..=120 {
        if let Some(fps) = m.tick(i as f64 / 60.0) {
            readings.push(fps);
        }
    }
    assert_eq!(readings.len(), 2);
    assert!((readings[0] - 61.0).abs() < 0.5);
    assert!((readings[1] - 60.0).abs() < 0.5);
    assert_eq!(m.fps(), readings.last().copied());

    m.reset();
    assert_eq!(m.tick(100.0), None);
    assert_eq!(format_fps(59.6), "60 FPS");
    assert_eq!(format_fps(-1.0), "0 FPS");
}

#[test]
fn drop_zone_colours() {
    assert_eq!(DropZoneState::default(), DropZoneState::Idle);
    assert_eq!(DropZoneState::Idle.background(), "white");
    assert_eq!(DropZoneState::DragOver.background(), "purple");
    assert_eq!(DropZoneState::Loaded.background(), "violet");
}

#[test]
fn load_events_drive_the_indicator() {
    assert_eq!(LoadEvent::Decoding.indicator(), Indicator::Text("Decoding..."));
    assert_eq!(
        LoadEvent::Ready { duration_sec: 3.0 }.indicator(),
        Indicator::Hidden
    );
    let decode = LoadEvent::Failed(AudioError::Decode("bad header".into()));
    assert_eq!(decode.indicator(), Indicator::Text("Error loading audio."));
    let fetch = LoadEvent::Failed(AudioError::Fetch {
        url: "a.mp3".into(),
        reason: "HTTP 404".into(),
    });
    assert_eq!(fetch.indicator(), Indicator::Text("Error loading audio."));
    // A failed file read is only logged
    let read = LoadEvent::Failed(AudioError::FileRead("aborted".into()));
    assert_eq!(read.indicator(), Indicator::Unchanged);
}

#[test]
fn errors_and_sources_describe_themselves() {
    let e = AudioError::Fetch {
        url: "assets/t.mp3".into(),
        reason: "HTTP 404".into(),
    };
    assert_eq!(e.to_string(), "error fetching assets/t.mp3: HTTP 404");
    assert_eq!(
        SourceKind::DroppedFile {
            name: "song.ogg".into()
        }
        .describe(),
        "file 'song.ogg'"
    );
    assert_eq!(
        SourceKind::Bundled {
            url: "assets/t.mp3".into()
        }
        .describe(),
        "bundled track 'assets/t.mp3'"
    );
}
