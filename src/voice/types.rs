//! Voice input/output types

use crate::i18n::Language;
use std::fmt;

/// Identifies one recognition capture; events from older captures are stale
pub type CaptureId = u64;

/// Speech rate used for every utterance
pub const SPEECH_RATE: f32 = 0.9;
/// Speech pitch used for every utterance
pub const SPEECH_PITCH: f32 = 1.0;
/// Speech volume used for every utterance
pub const SPEECH_VOLUME: f32 = 1.0;

/// Recognition capture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Not capturing
    #[default]
    Idle,
    /// Microphone open, results may arrive
    Capturing,
    /// Last capture failed
    Error,
}

impl CaptureState {
    /// Returns true while the microphone is open
    pub fn is_capturing(&self) -> bool {
        matches!(self, CaptureState::Capturing)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CaptureState::Error)
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Capturing => write!(f, "Capturing"),
            CaptureState::Error => write!(f, "Error"),
        }
    }
}

/// Event emitted by a recognition backend
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionEvent {
    pub capture_id: CaptureId,
    pub kind: RecognitionEventKind,
}

impl RecognitionEvent {
    pub fn new(capture_id: CaptureId, kind: RecognitionEventKind) -> Self {
        Self { capture_id, kind }
    }
}

/// What happened during a capture
///
/// Per capture the order is `Started`, any number of `Result`, then
/// `Ended` or `Error` (an `Error` may still be followed by `Ended`).
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEventKind {
    Started,
    Result {
        result_index: usize,
        /// Alternatives ordered by confidence; the first one is used
        alternatives: Vec<String>,
        is_final: bool,
    },
    Ended,
    Error(String),
}

/// Recognition settings pushed to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub locale: String,
    /// Keep capturing after the first utterance
    pub continuous: bool,
    /// Deliver non-final results while the user is speaking
    pub interim_results: bool,
}

impl RecognitionConfig {
    /// Single-utterance capture with interim results
    pub fn for_language(language: Language) -> Self {
        Self {
            locale: language.locale().to_string(),
            continuous: false,
            interim_results: true,
        }
    }

    /// Base language of the locale ("te" for "te-IN")
    pub fn base_language(&self) -> &str {
        base_language(&self.locale)
    }
}

/// A synthesis voice offered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    /// BCP-47 style tag, e.g. "en-US" or "hi"
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One request to the synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    /// None means the platform default voice for the locale
    pub voice: Option<VoiceInfo>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, locale: impl Into<String>, voice: Option<VoiceInfo>) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
            voice,
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        }
    }
}

/// Language part of a locale tag
pub fn base_language(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
}

/// Pick a voice for `locale`: exact tag match, then same base language
pub fn select_voice<'a>(voices: &'a [VoiceInfo], locale: &str) -> Option<&'a VoiceInfo> {
    let wanted = normalize_tag(locale);
    if let Some(exact) = voices.iter().find(|v| normalize_tag(&v.lang) == wanted) {
        return Some(exact);
    }
    let base = base_language(&wanted).to_string();
    voices
        .iter()
        .find(|v| base_language(&normalize_tag(&v.lang)) == base)
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_state_helpers() {
        assert!(CaptureState::Capturing.is_capturing());
        assert!(!CaptureState::Error.is_capturing());
        assert!(CaptureState::Error.is_error());
        assert_eq!(CaptureState::default(), CaptureState::Idle);
        assert_eq!(CaptureState::Capturing.to_string(), "Capturing");
    }

    #[test]
    fn test_recognition_config_for_language() {
        let config = RecognitionConfig::for_language(Language::Te);
        assert_eq!(config.locale, "te-IN");
        assert!(!config.continuous);
        assert!(config.interim_results);
        assert_eq!(config.base_language(), "te");
    }

    #[test]
    fn test_select_voice_exact_then_prefix() {
        let voices = vec![
            VoiceInfo::new("english", "en-GB"),
            VoiceInfo::new("english-us", "en_US"),
            VoiceInfo::new("hindi", "hi"),
        ];
        assert_eq!(select_voice(&voices, "en-US").unwrap().name, "english-us");
        assert_eq!(select_voice(&voices, "hi-IN").unwrap().name, "hindi");
        assert!(select_voice(&voices, "te-IN").is_none());
    }

    #[test]
    fn test_utterance_fixed_prosody() {
        let u = Utterance::new("hello", "en-US", None);
        assert_eq!(u.rate, 0.9);
        assert_eq!(u.pitch, 1.0);
        assert_eq!(u.volume, 1.0);
    }
}
