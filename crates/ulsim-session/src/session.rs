use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use ulsim_core::DiameterMessage;

/// Session lifecycle
///
/// Client role: `Created -> Sent -> {Answered, TimedOut} -> released`.
/// Server role: `Created -> released` around the synchronous answer.
/// Release removes the session; a released session is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Sent,
    Answered,
    TimedOut,
}

/// Terminal event delivered to the originator of a sent request
#[derive(Debug)]
pub enum TerminalEvent {
    Answered(DiameterMessage),
    TimedOut,
}

/// Continuation invoked with the single terminal event of an exchange
pub type ExchangeCallback = Box<dyn FnOnce(TerminalEvent) + Send + Sync>;

/// The one in-flight request a session covers
pub struct PendingRequest {
    pub command_code: u32,
    pub callback: ExchangeCallback,
}

/// Per-session bookkeeping held by the correlator
pub(crate) struct SessionEntry {
    pub(crate) state: SessionState,
    pub(crate) created_at: Instant,
    pub(crate) pending: Option<PendingRequest>,
}

impl SessionEntry {
    pub(crate) fn new() -> Self {
        Self {
            state: SessionState::Created,
            created_at: Instant::now(),
            pending: None,
        }
    }
}

// Monotonic suffix keeps ids unique within the process even when two
// sessions share a wall-clock millisecond
static NEXT_SESSION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique, never-reused session id
pub(crate) fn next_session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = NEXT_SESSION_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("ulsim;{millis};{seq}")
}
