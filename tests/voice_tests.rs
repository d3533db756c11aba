//! Voice adapter behaviour against scripted backends

use smart_agri::voice::testing::{
    RecordingSynthesizer, ScriptHandle, ScriptedRecognizer, SpeechHandle,
};
use smart_agri::voice::{CaptureState, RecognitionEventKind, VoiceAdapter, VoiceInfo};
use smart_agri::Language;

fn adapter() -> (VoiceAdapter, ScriptHandle, SpeechHandle) {
    let (recognizer, script) = ScriptedRecognizer::new();
    let (synthesizer, speech) = RecordingSynthesizer::new();
    let voice = VoiceAdapter::new(Box::new(recognizer), Box::new(synthesizer), Language::En);
    (voice, script, speech)
}

/// Start a capture and confirm it
fn listening(voice: &mut VoiceAdapter, script: &ScriptHandle) {
    voice.start_listening();
    script.emit(RecognitionEventKind::Started);
    voice.poll();
    assert!(voice.is_listening());
}

#[test]
fn test_start_while_listening_is_noop() {
    let (mut voice, script, _) = adapter();
    listening(&mut voice, &script);

    voice.start_listening();
    voice.poll();

    assert_eq!(script.start_count(), 1);
    assert!(voice.is_listening());
}

#[test]
fn test_stop_while_idle_is_noop() {
    let (mut voice, script, _) = adapter();
    voice.stop_listening();
    assert_eq!(script.stop_count(), 0);
    assert_eq!(voice.capture_state(), CaptureState::Idle);
}

#[test]
fn test_stop_while_listening_reaches_backend() {
    let (mut voice, script, _) = adapter();
    listening(&mut voice, &script);

    voice.stop_listening();
    assert_eq!(script.stop_count(), 1);

    script.emit(RecognitionEventKind::Ended);
    voice.poll();
    assert!(!voice.is_listening());
}

#[test]
fn test_two_rapid_speaks_leave_second_audible() {
    let (mut voice, _, speech) = adapter();

    voice.speak("first");
    voice.speak("second");

    assert_eq!(speech.audible().map(|u| u.text), Some("second".to_string()));
    assert_eq!(speech.spoken_texts(), vec!["first", "second"]);
    assert_eq!(speech.cancel_count(), 2);
}

#[test]
fn test_blank_speak_silences_current_utterance() {
    let (mut voice, _, speech) = adapter();

    voice.speak("first");
    voice.speak("   ");

    assert!(speech.audible().is_none());
    assert_eq!(speech.spoken_texts(), vec!["first"]);
    assert_eq!(speech.cancel_count(), 2);
}

#[test]
fn test_interim_results_overwrite_transcript() {
    let (mut voice, script, _) = adapter();
    listening(&mut voice, &script);

    script.emit_result("to", false);
    voice.poll();
    assert_eq!(voice.transcript(), "to");

    script.emit_result("tomato", false);
    script.emit_result("tomato price", true);
    voice.poll();
    assert_eq!(voice.transcript(), "tomato price");

    script.emit(RecognitionEventKind::Ended);
    voice.poll();
    assert_eq!(voice.take_finished_transcript().as_deref(), Some("tomato price"));
    assert_eq!(voice.take_finished_transcript(), None);
}

#[test]
fn test_stale_capture_events_are_dropped() {
    let (mut voice, script, _) = adapter();
    listening(&mut voice, &script);
    let old = script.current_capture().unwrap();

    voice.end_page_session();
    listening(&mut voice, &script);
    assert_ne!(script.current_capture(), Some(old));

    script.emit_for(old, RecognitionEventKind::Result {
        result_index: 0,
        alternatives: vec!["from the old page".to_string()],
        is_final: true,
    });
    script.emit_for(old, RecognitionEventKind::Ended);
    voice.poll();

    assert_eq!(voice.transcript(), "");
    assert!(voice.is_listening());
}

#[test]
fn test_error_forces_error_state() {
    let (mut voice, script, _) = adapter();
    listening(&mut voice, &script);

    script.emit(RecognitionEventKind::Error("network".to_string()));
    voice.poll();

    assert_eq!(voice.capture_state(), CaptureState::Error);
    assert!(!voice.is_listening());
    assert_eq!(voice.take_error().as_deref(), Some("network"));
    assert_eq!(voice.take_error(), None);

    // Ended after an error keeps the error state
    script.emit(RecognitionEventKind::Ended);
    voice.poll();
    assert_eq!(voice.capture_state(), CaptureState::Error);

    // A new capture can still be started
    voice.start_listening();
    assert_eq!(script.start_count(), 2);
}

#[test]
fn test_start_failure_is_reported() {
    let (mut voice, script, _) = adapter();
    script.fail_starts();

    voice.start_listening();

    assert_eq!(voice.capture_state(), CaptureState::Error);
    assert!(!voice.is_active());
    assert!(voice.take_error().is_some_and(|e| e.contains("not-allowed")));
}

#[test]
fn test_unsupported_recognition_is_silent() {
    let (recognizer, script) = ScriptedRecognizer::unsupported();
    let (synthesizer, _) = RecordingSynthesizer::new();
    let mut voice = VoiceAdapter::new(Box::new(recognizer), Box::new(synthesizer), Language::Hi);

    assert!(!voice.is_supported());
    assert!(script.last_config().is_none());

    voice.start_listening();
    voice.stop_listening();
    assert_eq!(script.start_count(), 0);
    assert_eq!(script.stop_count(), 0);
    assert!(voice.take_error().is_none());
}

#[test]
fn test_missing_synthesizer_is_silent() {
    let (recognizer, _) = ScriptedRecognizer::new();
    let (synthesizer, speech) = RecordingSynthesizer::new();
    speech.set_available(false);
    let mut voice = VoiceAdapter::new(Box::new(recognizer), Box::new(synthesizer), Language::En);

    voice.speak("hello");
    assert!(speech.spoken().is_empty());
    assert!(!voice.can_speak());
}

#[test]
fn test_end_page_session_stops_and_clears() {
    let (mut voice, script, speech) = adapter();
    voice.speak("still talking");
    listening(&mut voice, &script);
    script.emit_result("half a sen", false);
    voice.poll();

    voice.end_page_session();

    assert_eq!(script.stop_count(), 1);
    assert_eq!(voice.transcript(), "");
    assert_eq!(voice.capture_state(), CaptureState::Idle);
    // Speech is not part of the page session
    assert!(speech.audible().is_some());
}

#[test]
fn test_language_change_reconfigures_and_stops_capture() {
    let (mut voice, script, _) = adapter();
    assert_eq!(script.last_config().map(|c| c.locale), Some("en-US".to_string()));
    listening(&mut voice, &script);

    voice.set_language(Language::Hi);

    assert!(!voice.is_listening());
    assert_eq!(script.stop_count(), 1);
    let config = script.last_config().unwrap();
    assert_eq!(config.locale, "hi-IN");
    assert!(!config.continuous);
    assert!(config.interim_results);
}

#[test]
fn test_voice_selection_by_locale() {
    let (recognizer, _) = ScriptedRecognizer::new();
    let (synthesizer, speech) = RecordingSynthesizer::with_voices(vec![
        VoiceInfo::new("english-gb", "en-GB"),
        VoiceInfo::new("english-us", "en-US"),
        VoiceInfo::new("telugu", "te"),
    ]);
    let mut voice = VoiceAdapter::new(Box::new(recognizer), Box::new(synthesizer), Language::En);

    voice.speak("hello");
    voice.set_language(Language::Te);
    voice.speak("namaskaram");
    voice.set_language(Language::Hi);
    voice.speak("namaste");

    let spoken = speech.spoken();
    assert_eq!(spoken[0].voice.as_ref().map(|v| v.name.as_str()), Some("english-us"));
    assert_eq!(spoken[1].locale, "te-IN");
    assert_eq!(spoken[1].voice.as_ref().map(|v| v.name.as_str()), Some("telugu"));
    assert_eq!(spoken[2].locale, "hi-IN");
    assert!(spoken[2].voice.is_none());
    assert!(spoken.iter().all(|u| (u.rate - 0.9).abs() < f32::EPSILON));
}

#[test]
fn test_preview_speaks_without_switching_language() {
    let (mut voice, script, speech) = adapter();

    voice.speak_in(&Language::Te.preview_phrase(), Language::Te);

    assert_eq!(voice.language(), Language::En);
    assert_eq!(speech.audible().map(|u| u.locale), Some("te-IN".to_string()));
    assert_eq!(script.last_config().map(|c| c.locale), Some("en-US".to_string()));
}
