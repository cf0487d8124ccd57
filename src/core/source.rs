use super::error::AudioError;

/// Where the audio for a session comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    DroppedFile { name: String },
    Bundled { url: String },
}

impl SourceKind {
    pub fn describe(&self) -> String {
        match self {
            SourceKind::DroppedFile { name } => format!("file '{}'", name),
            SourceKind::Bundled { url } => format!("bundled track '{}'", url),
        }
    }
}

/// Visual state of the drop zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropZoneState {
    #[default]
    Idle,
    DragOver,
    Loaded,
}

impl DropZoneState {
    pub fn background(self) -> &'static str {
        match self {
            DropZoneState::Idle => "white",
            DropZoneState::DragOver => "purple",
            DropZoneState::Loaded => "violet",
        }
    }
}

/// Progress notifications from loading and decoding.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadEvent {
    Decoding,
    Ready { duration_sec: f64 },
    Failed(AudioError),
}

/// What the loading indicator should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indicator {
    Text(&'static str),
    Hidden,
    Unchanged,
}

impl LoadEvent {
    pub fn indicator(&self) -> Indicator {
        match self {
            LoadEvent::Decoding => Indicator::Text("Decoding..."),
            LoadEvent::Ready { .. } => Indicator::Hidden,
            LoadEvent::Failed(err) => match err.indicator_text() {
                Some(text) => Indicator::Text(text),
                None => Indicator::Unchanged,
            },
        }
    }
}
