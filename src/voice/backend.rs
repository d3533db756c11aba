//! Platform speech capabilities
//!
//! The adapter talks to recognition and synthesis only through these two
//! traits. Implementations must never block the UI thread for longer than it
//! takes to spawn a process.

use super::types::{CaptureId, RecognitionConfig, RecognitionEvent, Utterance, VoiceInfo};
use crate::{AgriError, Result};
use crossbeam_channel::Sender;

/// Speech-to-text capability
pub trait RecognitionBackend: Send {
    /// Whether recognition can work on this machine; called once
    fn probe(&mut self) -> bool;

    /// Apply locale and capture mode for subsequent captures
    fn configure(&mut self, config: &RecognitionConfig);

    /// Begin a capture, reporting its events on `events` stamped with `capture_id`
    fn start(&mut self, capture_id: CaptureId, events: Sender<RecognitionEvent>) -> Result<()>;

    /// Finish the active capture early; the backend still reports `Ended`
    fn stop(&mut self);
}

/// Text-to-speech capability
pub trait SynthesisBackend: Send {
    fn is_available(&self) -> bool;

    /// Installed voices
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Silence the current utterance, if any
    fn cancel(&mut self);

    /// Start speaking; returns once playback is underway
    fn speak(&mut self, utterance: Utterance) -> Result<()>;
}

/// Recognition on a machine without the capability
#[derive(Debug, Default)]
pub struct NullRecognizer;

impl RecognitionBackend for NullRecognizer {
    fn probe(&mut self) -> bool {
        false
    }

    fn configure(&mut self, _config: &RecognitionConfig) {}

    fn start(&mut self, _capture_id: CaptureId, _events: Sender<RecognitionEvent>) -> Result<()> {
        Err(AgriError::RecognitionError(
            "speech recognition is not available".to_string(),
        ))
    }

    fn stop(&mut self) {}
}

/// Synthesis on a machine without the capability
#[derive(Debug, Default)]
pub struct NullSynthesizer;

impl SynthesisBackend for NullSynthesizer {
    fn is_available(&self) -> bool {
        false
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn cancel(&mut self) {}

    fn speak(&mut self, _utterance: Utterance) -> Result<()> {
        Err(AgriError::SynthesisError(
            "speech synthesis is not available".to_string(),
        ))
    }
}

/// Check whether an executable is on PATH
pub fn command_exists(name: &str) -> bool {
    std::process::Command::new("which")
        .arg(name)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_backends_unavailable() {
        let mut rec = NullRecognizer;
        assert!(!rec.probe());
        let (tx, _rx) = crossbeam_channel::unbounded();
        assert!(rec.start(1, tx).is_err());

        let mut synth = NullSynthesizer;
        assert!(!synth.is_available());
        assert!(synth.voices().is_empty());
        assert!(synth.speak(Utterance::new("x", "en-US", None)).is_err());
    }

    #[test]
    fn test_command_exists_rejects_nonsense() {
        assert!(!command_exists("definitely-not-a-real-binary-7f3a"));
    }
}
