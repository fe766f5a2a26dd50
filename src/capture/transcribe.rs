use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

use super::session::{Recording, RecordingId};

/// Placeholder text returned by [`SimulatedTranscriber`].
pub const SIMULATED_TRANSCRIPTION: &str = "Au sa bula vinaka - I am very well";

/// Delay before a simulated transcription completes.
pub const DEFAULT_TRANSCRIPTION_DELAY: Duration = Duration::from_millis(1500);

/// Text produced for a recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Recording this transcript belongs to.
    pub recording_id: RecordingId,
    /// Transcribed text.
    pub text: String,
    /// True when the text is a placeholder rather than real speech-to-text.
    pub simulated: bool,
}

/// Speech-to-text interface.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Name of the transcriber (for audit/debugging).
    fn name(&self) -> &str;

    /// Transcribe a finished recording.
    async fn transcribe(&self, recording: &Recording) -> Result<Transcript, CaptureError>;
}

/// Transcriber that waits, then returns a fixed greeting.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTranscriber {
    delay: Duration,
}

impl Default for SimulatedTranscriber {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCRIPTION_DELAY)
    }
}

impl SimulatedTranscriber {
    /// Transcriber completing after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Transcriber for SimulatedTranscriber {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn transcribe(&self, recording: &Recording) -> Result<Transcript, CaptureError> {
        if recording.is_empty() {
            return Err(CaptureError::EmptyRecording);
        }
        tokio::time::sleep(self.delay).await;
        tracing::debug!(recording = %recording.id, "simulated transcription ready");
        Ok(Transcript {
            recording_id: recording.id,
            text: SIMULATED_TRANSCRIPTION.to_string(),
            simulated: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::capture::CaptureSession;

    fn recording() -> Recording {
        let (session, sink) = CaptureSession::start();
        sink.push(b"pcm".to_vec()).unwrap();
        session.stop().unwrap()
    }

    #[tokio::test]
    async fn returns_placeholder_for_recording() {
        let rec = recording();
        let transcript = SimulatedTranscriber::new(Duration::ZERO)
            .transcribe(&rec)
            .await
            .unwrap();
        assert_eq!(transcript.recording_id, rec.id);
        assert_eq!(transcript.text, SIMULATED_TRANSCRIPTION);
        assert!(transcript.simulated);
    }

    #[tokio::test]
    async fn waits_for_configured_delay() {
        let rec = recording();
        let transcriber = SimulatedTranscriber::new(Duration::from_millis(30));
        let start = Instant::now();
        transcriber.transcribe(&rec).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn default_delay_is_one_and_a_half_seconds() {
        let t = SimulatedTranscriber::default();
        assert_eq!(t.delay(), Duration::from_millis(1500));
        assert_eq!(t.name(), "simulated");
    }
}
