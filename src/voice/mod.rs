//! Voice input and output
//!
//! Recognition and synthesis are platform capabilities behind
//! [`RecognitionBackend`] and [`SynthesisBackend`]. On desktop they are
//! provided by external tools; [`build_adapter`] picks whatever is usable.

pub mod adapter;
pub mod backend;
pub mod espeak;
pub mod testing;
pub mod types;
pub mod whisper;

pub use adapter::VoiceAdapter;
pub use backend::{NullRecognizer, NullSynthesizer, RecognitionBackend, SynthesisBackend};
pub use espeak::EspeakSynthesizer;
pub use types::{
    CaptureId, CaptureState, RecognitionConfig, RecognitionEvent, RecognitionEventKind,
    Utterance, VoiceInfo,
};
pub use whisper::WhisperRecognizer;

use crate::config::AppConfig;
use crate::i18n::Language;

/// Build the adapter from configuration
pub fn build_adapter(config: &AppConfig, language: Language) -> VoiceAdapter {
    let recognizer: Box<dyn RecognitionBackend> = if config.voice.enable_input {
        Box::new(WhisperRecognizer::new(
            &config.voice,
            config.whisper_model_path(),
        ))
    } else {
        Box::new(NullRecognizer)
    };

    let synthesizer: Box<dyn SynthesisBackend> = if config.voice.enable_output {
        Box::new(EspeakSynthesizer::new(config.voice.synthesizer.clone()))
    } else {
        Box::new(NullSynthesizer)
    };

    VoiceAdapter::new(recognizer, synthesizer, language)
}
