//! Speech recognition through sox `rec` and whisper.cpp
//!
//! One capture records a single utterance to a temporary WAV file, ending on
//! trailing silence, the utterance cap, or [`RecognitionBackend::stop`]. The
//! file is then transcribed and delivered as one final result.

use super::backend::{command_exists, RecognitionBackend};
use super::types::{CaptureId, RecognitionConfig, RecognitionEvent, RecognitionEventKind};
use crate::config::VoiceToolConfig;
use crate::{AgriError, Result};
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

const SAMPLE_RATE: &str = "16000";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Recorder process of the capture in flight
struct ActiveCapture {
    capture_id: CaptureId,
    recorder: Arc<Mutex<Option<Child>>>,
}

/// Process-backed recognizer
pub struct WhisperRecognizer {
    recorder_bin: String,
    whisper_bin: String,
    model_path: PathBuf,
    max_utterance_secs: f32,
    config: RecognitionConfig,
    active: Option<ActiveCapture>,
}

impl WhisperRecognizer {
    pub fn new(tools: &VoiceToolConfig, model_path: PathBuf) -> Self {
        Self {
            recorder_bin: tools.recorder.clone(),
            whisper_bin: tools.whisper.clone(),
            model_path,
            max_utterance_secs: tools.max_utterance_secs,
            config: RecognitionConfig::for_language(Default::default()),
            active: None,
        }
    }

    fn spawn_recorder(&self, wav_path: &Path) -> Result<Child> {
        let max = format!("{}", self.max_utterance_secs);
        let mut args: Vec<String> = vec![
            "-q".into(),
            "-r".into(),
            SAMPLE_RATE.into(),
            "-c".into(),
            "1".into(),
            "-b".into(),
            "16".into(),
            wav_path.to_string_lossy().into_owned(),
            "trim".into(),
            "0".into(),
            max,
        ];
        if !self.config.continuous {
            // Wait for speech, then stop after two seconds below 3%
            args.extend(
                ["silence", "1", "0.1", "3%", "1", "2.0", "3%"]
                    .iter()
                    .map(|s| s.to_string()),
            );
        }

        Command::new(&self.recorder_bin)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AgriError::RecognitionError(format!("failed to start recording: {}", e)))
    }
}

impl RecognitionBackend for WhisperRecognizer {
    fn probe(&mut self) -> bool {
        let recorder = command_exists(&self.recorder_bin);
        let whisper = command_exists(&self.whisper_bin);
        let model = self.model_path.exists();
        if !(recorder && whisper && model) {
            info!(
                "Speech recognition unavailable (recorder: {}, whisper: {}, model: {})",
                recorder, whisper, model
            );
        }
        recorder && whisper && model
    }

    fn configure(&mut self, config: &RecognitionConfig) {
        debug!("Recognition configured for {}", config.locale);
        self.config = config.clone();
    }

    fn start(&mut self, capture_id: CaptureId, events: Sender<RecognitionEvent>) -> Result<()> {
        if self.active.is_some() {
            self.stop();
        }

        let wav_path =
            std::env::temp_dir().join(format!("smart-agri-{}.wav", uuid::Uuid::new_v4()));
        let child = self.spawn_recorder(&wav_path)?;
        let recorder = Arc::new(Mutex::new(Some(child)));

        let job = TranscribeJob {
            capture_id,
            recorder: recorder.clone(),
            wav_path,
            whisper_bin: self.whisper_bin.clone(),
            model_path: self.model_path.clone(),
            language: self.config.base_language().to_string(),
            events,
        };
        thread::Builder::new()
            .name(format!("capture-{}", capture_id))
            .spawn(move || job.run())
            .map_err(|e| AgriError::RecognitionError(e.to_string()))?;

        self.active = Some(ActiveCapture {
            capture_id,
            recorder,
        });
        Ok(())
    }

    fn stop(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        debug!("Stopping capture {}", active.capture_id);
        let recorder = active.recorder.lock();
        if let Some(child) = recorder.as_ref() {
            terminate(child);
        }
    }
}

impl Drop for WhisperRecognizer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ask the recorder to finish so sox can finalize the WAV header
fn terminate(child: &Child) {
    #[cfg(unix)]
    {
        let _ = Command::new("kill")
            .args(["-TERM", &child.id().to_string()])
            .output();
    }
    #[cfg(not(unix))]
    {
        let _ = child;
    }
}

/// Background half of one capture
struct TranscribeJob {
    capture_id: CaptureId,
    recorder: Arc<Mutex<Option<Child>>>,
    wav_path: PathBuf,
    whisper_bin: String,
    model_path: PathBuf,
    language: String,
    events: Sender<RecognitionEvent>,
}

impl TranscribeJob {
    fn run(self) {
        self.send(RecognitionEventKind::Started);

        match self.wait_for_recorder().and_then(|()| self.transcribe()) {
            Ok(text) => self.send(RecognitionEventKind::Result {
                result_index: 0,
                alternatives: vec![text],
                is_final: true,
            }),
            Err(e) => {
                warn!("Capture {} failed: {}", self.capture_id, e);
                self.send(RecognitionEventKind::Error(e.to_string()));
            }
        }
        self.remove_recording();
        self.send(RecognitionEventKind::Ended);
    }

    fn remove_recording(&self) {
        if !self.wav_path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.wav_path) {
            debug!("Could not remove {}: {}", self.wav_path.display(), e);
        }
    }

    fn wait_for_recorder(&self) -> Result<()> {
        loop {
            {
                let mut guard = self.recorder.lock();
                let finished = match guard.as_mut() {
                    Some(child) => child.try_wait()?.is_some(),
                    None => true,
                };
                if finished {
                    guard.take();
                    return Ok(());
                }
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn transcribe(&self) -> Result<String> {
        if !self.wav_path.exists() {
            return Err(AgriError::RecognitionError("no-speech".to_string()));
        }
        let output = Command::new(&self.whisper_bin)
            .arg("-m")
            .arg(&self.model_path)
            .arg("-f")
            .arg(&self.wav_path)
            .arg("--no-timestamps")
            .args(["-l", &self.language])
            .output()
            .map_err(|e| AgriError::RecognitionError(format!("failed to run whisper: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AgriError::RecognitionError(format!(
                "whisper failed: {}",
                stderr.trim()
            )));
        }
        let text = clean_transcript(&String::from_utf8_lossy(&output.stdout));
        if text.is_empty() {
            return Err(AgriError::RecognitionError("no-speech".to_string()));
        }
        Ok(text)
    }

    fn send(&self, kind: RecognitionEventKind) {
        // Receiver gone means the adapter was dropped
        let _ = self
            .events
            .send(RecognitionEvent::new(self.capture_id, kind));
    }
}

/// Join whisper's output lines, drop bracketed markers like `[BLANK_AUDIO]`
/// and the sentence punctuation whisper adds around the words
pub(crate) fn clean_transcript(raw: &str) -> String {
    let joined = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !(line.starts_with('[') && line.ends_with(']')))
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim_matches(is_edge_punctuation).to_string()
}

fn is_edge_punctuation(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '।' | '॥' | '…')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_transcript() {
        assert_eq!(clean_transcript("  six point five \n"), "six point five");
        assert_eq!(clean_transcript("[BLANK_AUDIO]\n"), "");
        assert_eq!(clean_transcript("rice\n\nprice\n"), "rice price");
    }

    #[test]
    fn test_clean_transcript_strips_sentence_punctuation() {
        assert_eq!(clean_transcript(" Cotton.\n"), "Cotton");
        assert_eq!(clean_transcript("\"Six point eight?\""), "Six point eight");
        assert_eq!(clean_transcript("6.8."), "6.8");
        assert_eq!(clean_transcript("పసుపు।"), "పసుపు");
    }

    #[test]
    fn test_punctuated_transcript_finds_market_price() {
        let prices = crate::content::market::prices();
        let hits = crate::content::market::filter_prices(&prices, &clean_transcript(" Cotton.\n"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].crop, "Cotton");
    }

    #[test]
    fn test_failed_capture_removes_recording() {
        let dir = tempfile::tempdir().unwrap();
        let wav_path = dir.path().join("capture.wav");
        std::fs::write(&wav_path, b"RIFF").unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();

        TranscribeJob {
            capture_id: 7,
            recorder: Arc::new(Mutex::new(None)),
            wav_path: wav_path.clone(),
            whisper_bin: "definitely-not-whisper-7f3a".to_string(),
            model_path: PathBuf::from("/nonexistent/model.bin"),
            language: "en".to_string(),
            events: tx,
        }
        .run();

        assert!(!wav_path.exists());
        let kinds: Vec<_> = rx.try_iter().map(|e| e.kind).collect();
        assert_eq!(kinds.first(), Some(&RecognitionEventKind::Started));
        assert!(matches!(kinds[1], RecognitionEventKind::Error(_)));
        assert_eq!(kinds.last(), Some(&RecognitionEventKind::Ended));
    }

    #[test]
    fn test_probe_fails_without_model() {
        let tools = VoiceToolConfig {
            recorder: "definitely-not-rec-7f3a".to_string(),
            ..Default::default()
        };
        let mut rec = WhisperRecognizer::new(&tools, PathBuf::from("/nonexistent/model.bin"));
        assert!(!rec.probe());
    }

    #[test]
    fn test_stop_without_capture_is_noop() {
        let mut rec = WhisperRecognizer::new(
            &VoiceToolConfig::default(),
            PathBuf::from("/nonexistent/model.bin"),
        );
        rec.stop();
        assert!(rec.active.is_none());
    }
}
