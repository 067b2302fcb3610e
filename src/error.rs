// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Audio Error: {0}")]
    Audio(#[from] AudioError),
    #[error("Effect Error: {0}")]
    Effect(#[from] EffectError),
}

/// Failures reported by the audio engine.
///
/// None of these are fatal: the playback card turns inert and the rest of
/// the session keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The host exposes no default output device.
    #[error("No audio output device found")]
    NoOutputDevice,

    /// The device only offers a sample format we cannot synthesize into.
    #[error("Unsupported audio sample format")]
    UnsupportedSampleFormat,

    /// The default output configuration could not be queried.
    #[error("Failed to get audio config: {0}")]
    StreamConfig(String),

    /// Building the output stream failed.
    #[error("Failed to build audio stream: {0}")]
    StreamBuild(String),

    /// The stream exists but refused to start or pause.
    #[error("Failed to drive audio stream: {0}")]
    StreamStart(String),

    /// The engine declined the request (e.g. playback not yet allowed).
    #[error("Audio request rejected: {0}")]
    Rejected(String),
}

impl AudioError {
    /// Short headline shown in the warning toast.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            AudioError::NoOutputDevice => "No speakers found",
            AudioError::UnsupportedSampleFormat => "Speakers not supported",
            AudioError::StreamConfig(_)
            | AudioError::StreamBuild(_)
            | AudioError::StreamStart(_) => "Audio playback failed",
            AudioError::Rejected(_) => "Audio not allowed yet",
        }
    }
}

/// Failures reported by presentation collaborators (burst, pulse, toast).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// The renderer for this effect is not mounted.
    #[error("{0} renderer unavailable")]
    Unavailable(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_wraps_into_crate_error() {
        let err: Error = AudioError::NoOutputDevice.into();
        assert!(matches!(err, Error::Audio(AudioError::NoOutputDevice)));
        assert_eq!(
            format!("{}", err),
            "Audio Error: No audio output device found"
        );
    }

    #[test]
    fn audio_error_headlines() {
        assert_eq!(AudioError::NoOutputDevice.headline(), "No speakers found");
        assert_eq!(
            AudioError::StreamBuild("x".into()).headline(),
            AudioError::StreamStart("y".into()).headline()
        );
        assert_eq!(
            AudioError::Rejected("no gesture".into()).headline(),
            "Audio not allowed yet"
        );
    }

    #[test]
    fn effect_error_names_the_renderer() {
        let err = EffectError::Unavailable("burst");
        assert_eq!(format!("{}", err), "burst renderer unavailable");
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let parse: std::result::Result<toml::Value, toml::de::Error> = toml::from_str("= nope");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
