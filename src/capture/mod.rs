//! Heritage audio capture.
//!
//! Capture is independent of the resolver: it never calls into it and never
//! blocks it. Transcription is simulated.

mod session;
mod transcribe;

pub use session::{
    CaptureSession, ChunkSink, Recording, RecordingId, DEFAULT_CHUNK_CAPACITY,
    RECORDING_MIME_TYPE,
};
pub use transcribe::{
    SimulatedTranscriber, Transcriber, Transcript, DEFAULT_TRANSCRIPTION_DELAY,
    SIMULATED_TRANSCRIPTION,
};
