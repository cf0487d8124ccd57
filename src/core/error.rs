use thiserror::Error;

/// Failures on the way from an audio source to a playing, analysed track.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio context unavailable: {0}")]
    Context(String),
    #[error("error reading file: {0}")]
    FileRead(String),
    #[error("error fetching {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("error decoding audio: {0}")]
    Decode(String),
    #[error("error starting playback: {0}")]
    Playback(String),
}

impl AudioError {
    /// Text for the loading indicator. File-read failures are only logged.
    pub fn indicator_text(&self) -> Option<&'static str> {
        match self {
            AudioError::FileRead(_) => None,
            _ => Some("Error loading audio."),
        }
    }
}
