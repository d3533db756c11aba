//! In-memory voice backends for tests
//!
//! Each backend comes with a cloneable handle that shares its state, so a
//! test can drive recognition events and inspect what was spoken after the
//! backend has been boxed into a [`super::VoiceAdapter`].

use super::backend::{RecognitionBackend, SynthesisBackend};
use super::types::{
    CaptureId, RecognitionConfig, RecognitionEvent, RecognitionEventKind, Utterance, VoiceInfo,
};
use crate::{AgriError, Result};
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct ScriptState {
    supported: bool,
    config: Option<RecognitionConfig>,
    starts: usize,
    stops: usize,
    capture: Option<(CaptureId, Sender<RecognitionEvent>)>,
    auto_utterance: Option<String>,
    fail_start: bool,
}

/// Recognizer whose events are pushed by the test
pub struct ScriptedRecognizer {
    state: Arc<Mutex<ScriptState>>,
}

/// Test-side handle of a [`ScriptedRecognizer`]
#[derive(Clone)]
pub struct ScriptHandle {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedRecognizer {
    /// A supported recognizer that only emits what the test sends
    pub fn new() -> (Self, ScriptHandle) {
        let state = Arc::new(Mutex::new(ScriptState {
            supported: true,
            ..Default::default()
        }));
        (
            Self {
                state: state.clone(),
            },
            ScriptHandle { state },
        )
    }

    /// A recognizer that reports itself unsupported
    pub fn unsupported() -> (Self, ScriptHandle) {
        let (rec, handle) = Self::new();
        handle.state.lock().supported = false;
        (rec, handle)
    }

    /// Every capture immediately hears `text` and ends
    pub fn with_utterance(text: impl Into<String>) -> (Self, ScriptHandle) {
        let (rec, handle) = Self::new();
        handle.state.lock().auto_utterance = Some(text.into());
        (rec, handle)
    }
}

impl RecognitionBackend for ScriptedRecognizer {
    fn probe(&mut self) -> bool {
        self.state.lock().supported
    }

    fn configure(&mut self, config: &RecognitionConfig) {
        self.state.lock().config = Some(config.clone());
    }

    fn start(&mut self, capture_id: CaptureId, events: Sender<RecognitionEvent>) -> Result<()> {
        let mut state = self.state.lock();
        if state.fail_start {
            return Err(AgriError::RecognitionError("not-allowed".to_string()));
        }
        state.starts += 1;
        if let Some(text) = state.auto_utterance.clone() {
            let _ = events.send(RecognitionEvent::new(capture_id, RecognitionEventKind::Started));
            let _ = events.send(RecognitionEvent::new(
                capture_id,
                RecognitionEventKind::Result {
                    result_index: 0,
                    alternatives: vec![text],
                    is_final: true,
                },
            ));
            let _ = events.send(RecognitionEvent::new(capture_id, RecognitionEventKind::Ended));
        }
        state.capture = Some((capture_id, events));
        Ok(())
    }

    fn stop(&mut self) {
        self.state.lock().stops += 1;
    }
}

impl ScriptHandle {
    pub fn start_count(&self) -> usize {
        self.state.lock().starts
    }

    pub fn stop_count(&self) -> usize {
        self.state.lock().stops
    }

    pub fn last_config(&self) -> Option<RecognitionConfig> {
        self.state.lock().config.clone()
    }

    /// Id of the most recently started capture
    pub fn current_capture(&self) -> Option<CaptureId> {
        self.state.lock().capture.as_ref().map(|(id, _)| *id)
    }

    /// Make the next `start` calls fail
    pub fn fail_starts(&self) {
        self.state.lock().fail_start = true;
    }

    /// Emit an event for the most recently started capture
    pub fn emit(&self, kind: RecognitionEventKind) {
        if let Some(id) = self.current_capture() {
            self.emit_for(id, kind);
        }
    }

    /// Emit an event stamped with an arbitrary capture id
    pub fn emit_for(&self, capture_id: CaptureId, kind: RecognitionEventKind) {
        let state = self.state.lock();
        if let Some((_, tx)) = state.capture.as_ref() {
            let _ = tx.send(RecognitionEvent::new(capture_id, kind));
        }
    }

    /// Emit a single-alternative result at index 0
    pub fn emit_result(&self, text: &str, is_final: bool) {
        self.emit(RecognitionEventKind::Result {
            result_index: 0,
            alternatives: vec![text.to_string()],
            is_final,
        });
    }
}

#[derive(Default)]
struct SpeechLog {
    available: bool,
    voices: Vec<VoiceInfo>,
    spoken: Vec<Utterance>,
    audible: Option<Utterance>,
    cancels: usize,
}

/// Synthesizer that records utterances instead of playing them
pub struct RecordingSynthesizer {
    log: Arc<Mutex<SpeechLog>>,
}

/// Test-side handle of a [`RecordingSynthesizer`]
#[derive(Clone)]
pub struct SpeechHandle {
    log: Arc<Mutex<SpeechLog>>,
}

impl RecordingSynthesizer {
    pub fn new() -> (Self, SpeechHandle) {
        Self::with_voices(Vec::new())
    }

    pub fn with_voices(voices: Vec<VoiceInfo>) -> (Self, SpeechHandle) {
        let log = Arc::new(Mutex::new(SpeechLog {
            available: true,
            voices,
            ..Default::default()
        }));
        (Self { log: log.clone() }, SpeechHandle { log })
    }
}

impl SynthesisBackend for RecordingSynthesizer {
    fn is_available(&self) -> bool {
        self.log.lock().available
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.log.lock().voices.clone()
    }

    fn cancel(&mut self) {
        let mut log = self.log.lock();
        log.cancels += 1;
        log.audible = None;
    }

    fn speak(&mut self, utterance: Utterance) -> Result<()> {
        let mut log = self.log.lock();
        if log.audible.is_some() {
            return Err(AgriError::SynthesisError(
                "utterance queued behind another".to_string(),
            ));
        }
        log.spoken.push(utterance.clone());
        log.audible = Some(utterance);
        Ok(())
    }
}

impl SpeechHandle {
    /// Every utterance submitted, in order
    pub fn spoken(&self) -> Vec<Utterance> {
        self.log.lock().spoken.clone()
    }

    pub fn spoken_texts(&self) -> Vec<String> {
        self.log.lock().spoken.iter().map(|u| u.text.clone()).collect()
    }

    /// Utterance currently playing
    pub fn audible(&self) -> Option<Utterance> {
        self.log.lock().audible.clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.log.lock().cancels
    }

    /// Simulate the current utterance finishing on its own
    pub fn finish(&self) {
        self.log.lock().audible = None;
    }

    pub fn set_available(&self, available: bool) {
        self.log.lock().available = available;
    }
}
