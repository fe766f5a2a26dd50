use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CaptureError;

/// Chunks a sink may hold before the session collects them.
pub const DEFAULT_CHUNK_CAPACITY: usize = 256;

/// MIME type of every recording.
pub const RECORDING_MIME_TYPE: &str = "audio/wav";

/// Unique identifier for a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingId(Uuid);

impl RecordingId {
    /// Creates a new random recording ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finished audio captured by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Recording identity, shared with its transcript.
    pub id: RecordingId,
    /// Always [`RECORDING_MIME_TYPE`].
    pub mime_type: String,
    /// When capture started.
    pub started_at: DateTime<Utc>,
    /// When capture stopped.
    pub stopped_at: DateTime<Utc>,
    /// blake3 digest of `bytes`, hex encoded.
    pub digest: String,

    #[serde(skip)]
    bytes: Vec<u8>,
}

impl Recording {
    /// Raw audio bytes in push order.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when no audio was captured. Sessions never yield these.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Wall-clock span of the capture.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.stopped_at - self.started_at
    }
}

/// Cloneable handle an audio callback uses to hand chunks to a session.
#[derive(Debug, Clone)]
pub struct ChunkSink {
    sender: Sender<Vec<u8>>,
    closed: Arc<AtomicBool>,
    capacity: usize,
}

impl ChunkSink {
    /// Queue one chunk. Never blocks.
    ///
    /// Fails with [`CaptureError::BufferFull`] when the session has not
    /// collected recent chunks, and [`CaptureError::SessionClosed`] after stop.
    pub fn push(&self, chunk: impl Into<Vec<u8>>) -> Result<(), CaptureError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(CaptureError::SessionClosed);
        }
        match self.sender.try_send(chunk.into()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(CaptureError::BufferFull {
                capacity: self.capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(CaptureError::SessionClosed),
        }
    }

    /// Returns true once the owning session has stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// An in-progress audio capture.
///
/// Start a session, hand the [`ChunkSink`] to whatever produces audio, then
/// [`stop`](CaptureSession::stop) to obtain the [`Recording`].
///
/// # Examples
///
/// ```
/// use ivola::capture::CaptureSession;
///
/// let (session, sink) = CaptureSession::start();
/// sink.push(b"RIFF".to_vec()).unwrap();
/// let recording = session.stop().unwrap();
/// assert_eq!(recording.bytes(), b"RIFF");
/// assert!(sink.is_closed());
/// ```
#[derive(Debug)]
pub struct CaptureSession {
    id: RecordingId,
    started_at: DateTime<Utc>,
    receiver: Receiver<Vec<u8>>,
    closed: Arc<AtomicBool>,
    collected: Vec<u8>,
}

impl CaptureSession {
    /// Start capture with the default chunk capacity.
    #[must_use]
    pub fn start() -> (Self, ChunkSink) {
        Self::start_with_capacity(DEFAULT_CHUNK_CAPACITY)
    }

    /// Start capture allowing `capacity` uncollected chunks.
    #[must_use]
    pub fn start_with_capacity(capacity: usize) -> (Self, ChunkSink) {
        let capacity = capacity.max(1);
        let (sender, receiver) = bounded(capacity);
        let closed = Arc::new(AtomicBool::new(false));
        let session = Self {
            id: RecordingId::new(),
            started_at: Utc::now(),
            receiver,
            closed: Arc::clone(&closed),
            collected: Vec::new(),
        };
        tracing::debug!(recording = %session.id, capacity, "capture started");
        (
            session,
            ChunkSink {
                sender,
                closed,
                capacity,
            },
        )
    }

    /// Identity the finished recording will carry.
    #[must_use]
    pub const fn id(&self) -> RecordingId {
        self.id
    }

    /// Move queued chunks into the session buffer, freeing sink capacity.
    ///
    /// Returns the number of chunks collected.
    pub fn collect_pending(&mut self) -> usize {
        let mut count = 0;
        for chunk in self.receiver.try_iter() {
            self.collected.extend_from_slice(&chunk);
            count += 1;
        }
        count
    }

    /// Bytes collected so far (excluding chunks still queued).
    #[must_use]
    pub fn collected_len(&self) -> usize {
        self.collected.len()
    }

    /// Stop capture and yield the recording.
    ///
    /// Fails with [`CaptureError::EmptyRecording`] when nothing was pushed.
    pub fn stop(mut self) -> Result<Recording, CaptureError> {
        self.closed.store(true, Ordering::Release);
        self.collect_pending();
        let stopped_at = Utc::now();

        if self.collected.is_empty() {
            tracing::debug!(recording = %self.id, "capture stopped with no audio");
            return Err(CaptureError::EmptyRecording);
        }

        let digest = blake3::hash(&self.collected).to_hex().to_string();
        tracing::debug!(recording = %self.id, bytes = self.collected.len(), "capture stopped");
        Ok(Recording {
            id: self.id,
            mime_type: RECORDING_MIME_TYPE.to_string(),
            started_at: self.started_at,
            stopped_at,
            digest,
            bytes: self.collected,
        })
    }
}
