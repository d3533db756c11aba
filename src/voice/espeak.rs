//! Speech synthesis through espeak-ng

use super::backend::{command_exists, SynthesisBackend};
use super::types::{base_language, Utterance, VoiceInfo};
use crate::{AgriError, Result};
use std::process::{Child, Command, Stdio};
use tracing::{debug, info};

/// espeak-ng default speaking rate in words per minute
const BASE_WPM: f32 = 175.0;
/// espeak-ng default pitch on its 0-99 scale
const BASE_PITCH: f32 = 50.0;
/// espeak-ng default amplitude on its 0-200 scale
const BASE_AMPLITUDE: f32 = 100.0;

/// One espeak-ng child process per utterance
pub struct EspeakSynthesizer {
    binary: String,
    available: bool,
    voices: Vec<VoiceInfo>,
    current: Option<Child>,
}

impl EspeakSynthesizer {
    /// Probe the binary and read its voice list
    pub fn new(binary: impl Into<String>) -> Self {
        let binary = binary.into();
        let available = command_exists(&binary);
        let voices = if available {
            list_voices(&binary)
        } else {
            info!("Speech synthesis unavailable ({} not found)", binary);
            Vec::new()
        };
        debug!("{} voices available", voices.len());
        Self {
            binary,
            available,
            voices,
            current: None,
        }
    }

    fn args_for(utterance: &Utterance) -> Vec<String> {
        let voice = utterance
            .voice
            .as_ref()
            .map(|v| v.lang.clone())
            .unwrap_or_else(|| base_language(&utterance.locale).to_string());
        vec![
            "-v".to_string(),
            voice,
            "-s".to_string(),
            format!("{}", (BASE_WPM * utterance.rate).round() as u32),
            "-p".to_string(),
            format!("{}", (BASE_PITCH * utterance.pitch).round().min(99.0) as u32),
            "-a".to_string(),
            format!("{}", (BASE_AMPLITUDE * utterance.volume).round().min(200.0) as u32),
            "--".to_string(),
            utterance.text.clone(),
        ]
    }
}

impl SynthesisBackend for EspeakSynthesizer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            if let Ok(None) = child.try_wait() {
                debug!("Cancelling utterance");
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }

    fn speak(&mut self, utterance: Utterance) -> Result<()> {
        if !self.available {
            return Err(AgriError::SynthesisError(format!(
                "{} is not installed",
                self.binary
            )));
        }
        self.cancel();
        let child = Command::new(&self.binary)
            .args(Self::args_for(&utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AgriError::SynthesisError(format!("failed to start {}: {}", self.binary, e)))?;
        self.current = Some(child);
        Ok(())
    }
}

impl Drop for EspeakSynthesizer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn list_voices(binary: &str) -> Vec<VoiceInfo> {
    match Command::new(binary).arg("--voices").output() {
        Ok(output) if output.status.success() => {
            parse_voice_list(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => {
            debug!("{} --voices exited with {}", binary, output.status);
            Vec::new()
        }
        Err(e) => {
            debug!("{} --voices failed: {}", binary, e);
            Vec::new()
        }
    }
}

/// Parse `espeak-ng --voices`
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  en-us           --/M      English_(America)  gmw/en-US            (en 2)
/// ```
fn parse_voice_list(output: &str) -> Vec<VoiceInfo> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            match cols.as_slice() {
                [_, lang, _, name, ..] => Some(VoiceInfo::new(*name, *lang)),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voice_list() {
        let output = "Pty Language       Age/Gender VoiceName          File                 Other Languages\n \
                      5  en-us           --/M      English_(America)  gmw/en-US            (en 2)\n \
                      5  hi              --/M      Hindi              inc/hi\n \
                      5  te              --/M      Telugu             dra/te\n";
        let voices = parse_voice_list(output);
        assert_eq!(voices.len(), 3);
        assert_eq!(voices[0], VoiceInfo::new("English_(America)", "en-us"));
        assert_eq!(voices[2].lang, "te");
    }

    #[test]
    fn test_args_scale_prosody() {
        let utterance = Utterance::new("namaste", "hi-IN", None);
        let args = EspeakSynthesizer::args_for(&utterance);
        assert_eq!(args[1], "hi");
        assert_eq!(args[3], "158");
        assert_eq!(args[5], "50");
        assert_eq!(args[7], "100");
        assert_eq!(args.last().map(String::as_str), Some("namaste"));
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let mut synth = EspeakSynthesizer::new("definitely-not-espeak-7f3a");
        assert!(!synth.is_available());
        assert!(synth.speak(Utterance::new("x", "en-US", None)).is_err());
    }
}
