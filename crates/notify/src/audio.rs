//! Audio cue playback.
//!
//! The audio device layer is an external collaborator. Clips are validated
//! by decoding their WAV header, then piped as-is to an external player
//! process (`aplay -q -` by default) which owns the output device. Playback
//! runs detached; only spawn and decode failures surface synchronously.

use std::io::Write;
use std::process::{Command, Stdio};

/// Errors from clip decoding or player start-up.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("malformed WAV clip: {0}")]
    Decode(String),

    #[error("failed to run audio player: {0}")]
    Io(#[from] std::io::Error),
}

/// Decoded WAV format header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

/// Decodes the RIFF/WAVE header of an embedded clip.
///
/// Expects the canonical layout with the `fmt ` chunk first, which is what
/// the bundled clips use.
pub fn parse_wav_header(bytes: &[u8]) -> Result<WavFormat, AudioError> {
    if bytes.len() < 36 {
        return Err(AudioError::Decode("clip shorter than a WAV header".into()));
    }
    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(AudioError::Decode("missing RIFF/WAVE magic".into()));
    }
    if &bytes[12..16] != b"fmt " {
        return Err(AudioError::Decode("fmt chunk not first".into()));
    }

    let channels = u16::from_le_bytes([bytes[22], bytes[23]]);
    let sample_rate = u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]);
    let bits_per_sample = u16::from_le_bytes([bytes[34], bytes[35]]);

    if channels == 0 || sample_rate == 0 {
        return Err(AudioError::Decode(
            "fmt chunk has zero channels or sample rate".into(),
        ));
    }

    Ok(WavFormat {
        channels,
        sample_rate,
        bits_per_sample,
    })
}

/// Capability contract consumed from the audio backend.
pub trait AudioBackend: Send + Sync {
    /// Decodes one clip and starts playback.
    fn play(&self, clip: &'static [u8]) -> Result<(), AudioError>;
}

/// Plays clips by piping them to an external player process.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandPlayer {
    fn default() -> Self {
        Self::new("aplay")
    }
}

impl AudioBackend for CommandPlayer {
    fn play(&self, clip: &'static [u8]) -> Result<(), AudioError> {
        let format = parse_wav_header(clip)?;
        tracing::debug!(
            program = %self.program,
            sample_rate = format.sample_rate,
            channels = format.channels,
            "starting clip playback"
        );

        let mut child = Command::new(&self.program)
            .args(["-q", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(clip)?;
        }

        // Reap the player off the hot path; clips are a fraction of a second.
        let program = self.program.clone();
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!(%program, %status, "audio player exited with failure");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(%program, error = %e, "failed to reap audio player"),
        });

        Ok(())
    }
}
