//! Stable voice interface used by every page
//!
//! Wraps one [`RecognitionBackend`] and one [`SynthesisBackend`]. Backend
//! events arrive on a channel and are applied in [`VoiceAdapter::poll`],
//! which the app calls once per frame.

use super::backend::{RecognitionBackend, SynthesisBackend};
use super::types::{
    select_voice, CaptureId, CaptureState, RecognitionConfig, RecognitionEvent,
    RecognitionEventKind, Utterance,
};
use crate::i18n::Language;
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info, warn};

/// Voice input and output for the active language
pub struct VoiceAdapter {
    recognizer: Box<dyn RecognitionBackend>,
    synthesizer: Box<dyn SynthesisBackend>,
    supported: bool,
    language: Language,

    state: CaptureState,
    awaiting_start: bool,
    current_capture: Option<CaptureId>,
    next_capture: CaptureId,
    transcript: String,
    finished_transcript: Option<String>,
    last_error: Option<String>,

    event_tx: Sender<RecognitionEvent>,
    event_rx: Receiver<RecognitionEvent>,
}

impl VoiceAdapter {
    /// Probe the recognizer once and configure it for `language`
    pub fn new(
        mut recognizer: Box<dyn RecognitionBackend>,
        synthesizer: Box<dyn SynthesisBackend>,
        language: Language,
    ) -> Self {
        let supported = recognizer.probe();
        if supported {
            recognizer.configure(&RecognitionConfig::for_language(language));
        }
        info!(
            "Voice adapter ready (recognition: {}, synthesis: {})",
            supported,
            synthesizer.is_available()
        );

        let (event_tx, event_rx) = unbounded();
        Self {
            recognizer,
            synthesizer,
            supported,
            language,
            state: CaptureState::Idle,
            awaiting_start: false,
            current_capture: None,
            next_capture: 1,
            transcript: String::new(),
            finished_transcript: None,
            last_error: None,
            event_tx,
            event_rx,
        }
    }

    /// Adapter with neither capability
    pub fn disabled(language: Language) -> Self {
        Self::new(
            Box::new(super::NullRecognizer),
            Box::new(super::NullSynthesizer),
            language,
        )
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn can_speak(&self) -> bool {
        self.synthesizer.is_available()
    }

    pub fn is_listening(&self) -> bool {
        self.state.is_capturing()
    }

    /// Listening, or a start has been requested and not yet confirmed
    pub fn is_active(&self) -> bool {
        self.awaiting_start || self.state.is_capturing()
    }

    pub fn capture_state(&self) -> CaptureState {
        self.state
    }

    /// Latest recognized text of the current capture
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch locale; any capture in progress is abandoned
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        self.abandon_capture();
        self.language = language;
        if self.supported {
            self.recognizer
                .configure(&RecognitionConfig::for_language(language));
        }
        debug!("Voice language set to {}", language);
    }

    /// Begin a single-utterance capture
    ///
    /// Ignored when unsupported, already listening, or a start is pending.
    pub fn start_listening(&mut self) {
        if !self.supported || self.state.is_capturing() || self.awaiting_start {
            return;
        }

        self.transcript.clear();
        self.finished_transcript = None;
        let capture_id = self.next_capture;
        self.next_capture += 1;
        self.current_capture = Some(capture_id);
        self.awaiting_start = true;

        debug!("Starting capture {}", capture_id);
        if let Err(e) = self.recognizer.start(capture_id, self.event_tx.clone()) {
            warn!("Failed to start capture: {}", e);
            self.awaiting_start = false;
            self.state = CaptureState::Error;
            self.last_error = Some(e.to_string());
        }
    }

    /// Finish the current capture; ignored unless listening
    pub fn stop_listening(&mut self) {
        if !self.state.is_capturing() {
            return;
        }
        self.recognizer.stop();
    }

    /// Speak `text` in the active language, replacing any current utterance
    pub fn speak(&mut self, text: &str) {
        self.speak_in(text, self.language);
    }

    /// Speak `text` in `language` without changing the active language
    pub fn speak_in(&mut self, text: &str, language: Language) {
        if !self.synthesizer.is_available() {
            return;
        }
        self.synthesizer.cancel();
        if text.trim().is_empty() {
            return;
        }

        let locale = language.locale();
        let voices = self.synthesizer.voices();
        let voice = select_voice(&voices, locale).cloned();
        if let Err(e) = self.synthesizer.speak(Utterance::new(text, locale, voice)) {
            warn!("Speech synthesis failed: {}", e);
        }
    }

    /// Silence any current utterance
    pub fn cancel_speech(&mut self) {
        if self.synthesizer.is_available() {
            self.synthesizer.cancel();
        }
    }

    /// Apply pending backend events
    pub fn poll(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply(event);
        }
    }

    /// Tear down voice state when the page changes
    pub fn end_page_session(&mut self) {
        self.abandon_capture();
        self.transcript.clear();
        self.finished_transcript = None;
        self.last_error = None;
        self.state = CaptureState::Idle;
    }

    /// Most recent recognition error, once
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Transcript of a capture that has ended, once
    pub fn take_finished_transcript(&mut self) -> Option<String> {
        self.finished_transcript.take()
    }

    fn abandon_capture(&mut self) {
        if self.state.is_capturing() || self.awaiting_start {
            self.recognizer.stop();
        }
        self.current_capture = None;
        self.awaiting_start = false;
        if self.state.is_capturing() {
            self.state = CaptureState::Idle;
        }
    }

    fn apply(&mut self, event: RecognitionEvent) {
        if self.current_capture != Some(event.capture_id) {
            debug!("Dropping stale event from capture {}", event.capture_id);
            return;
        }

        match event.kind {
            RecognitionEventKind::Started => {
                self.awaiting_start = false;
                self.state = CaptureState::Capturing;
            }
            RecognitionEventKind::Result {
                result_index,
                alternatives,
                is_final,
            } => {
                if let Some(best) = alternatives.into_iter().next() {
                    debug!(
                        "Result {} ({}): {}",
                        result_index,
                        if is_final { "final" } else { "interim" },
                        best
                    );
                    self.transcript = best;
                }
            }
            RecognitionEventKind::Ended => {
                self.awaiting_start = false;
                if !self.state.is_error() {
                    self.state = CaptureState::Idle;
                    if !self.transcript.trim().is_empty() {
                        self.finished_transcript = Some(self.transcript.clone());
                    }
                }
                self.current_capture = None;
            }
            RecognitionEventKind::Error(message) => {
                warn!("Speech recognition error: {}", message);
                self.awaiting_start = false;
                self.state = CaptureState::Error;
                self.last_error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::testing::{RecordingSynthesizer, ScriptedRecognizer};

    #[test]
    fn test_disabled_adapter_is_inert() {
        let mut voice = VoiceAdapter::disabled(Language::En);
        assert!(!voice.is_supported());
        assert!(!voice.can_speak());
        voice.start_listening();
        voice.poll();
        assert!(!voice.is_listening());
        voice.speak("hello");
        assert!(voice.take_error().is_none());
    }

    #[test]
    fn test_pending_start_blocks_second_start() {
        let (rec, script) = ScriptedRecognizer::new();
        let (synth, _log) = RecordingSynthesizer::new();
        let mut voice = VoiceAdapter::new(Box::new(rec), Box::new(synth), Language::En);

        voice.start_listening();
        voice.start_listening();
        assert_eq!(script.start_count(), 1);
    }

    #[test]
    fn test_ended_publishes_finished_transcript() {
        let (rec, script) = ScriptedRecognizer::new();
        let (synth, _log) = RecordingSynthesizer::new();
        let mut voice = VoiceAdapter::new(Box::new(rec), Box::new(synth), Language::En);

        voice.start_listening();
        script.emit(RecognitionEventKind::Started);
        script.emit_result("seven", true);
        script.emit(RecognitionEventKind::Ended);
        voice.poll();

        assert_eq!(voice.take_finished_transcript().as_deref(), Some("seven"));
        assert!(voice.take_finished_transcript().is_none());
        assert_eq!(voice.transcript(), "seven");
    }

    #[test]
    fn test_set_language_reconfigures() {
        let (rec, script) = ScriptedRecognizer::new();
        let (synth, _log) = RecordingSynthesizer::new();
        let mut voice = VoiceAdapter::new(Box::new(rec), Box::new(synth), Language::En);
        voice.set_language(Language::Hi);
        assert_eq!(script.last_config().unwrap().locale, "hi-IN");
        assert_eq!(voice.language(), Language::Hi);
    }
}
