use crate::session::{
    next_session_id, ExchangeCallback, PendingRequest, SessionEntry, SessionState, TerminalEvent,
};
use dashmap::DashMap;
use tracing::{debug, error, info, warn};
use ulsim_core::{DiameterMessage, Result, UlsimError};

/// Correlates pending exchanges with their terminal events
///
/// Entry points may be invoked from any thread; per-session exclusivity
/// comes from the map shard lock. The callback for a session fires at most
/// once, and always outside the shard lock.
pub struct SessionCorrelator {
    sessions: DashMap<String, SessionEntry>,
}

impl SessionCorrelator {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Allocate a new session in `Created` state
    pub fn create(&self) -> String {
        let session_id = next_session_id();
        self.sessions.insert(session_id.clone(), SessionEntry::new());
        debug!(session_id, "session created");
        session_id
    }

    /// Attach the one in-flight request; transitions `Created -> Sent`
    pub fn attach(
        &self,
        session_id: &str,
        command_code: u32,
        callback: ExchangeCallback,
    ) -> Result<()> {
        let Some(mut entry) = self.sessions.get_mut(session_id) else {
            return Err(UlsimError::Session(format!(
                "attach on unknown session {session_id}"
            )));
        };

        if entry.state != SessionState::Created {
            return Err(UlsimError::Session(format!(
                "attach on session {session_id} in state {:?}",
                entry.state
            )));
        }

        entry.state = SessionState::Sent;
        entry.pending = Some(PendingRequest {
            command_code,
            callback,
        });
        Ok(())
    }

    /// Deliver an answer for the session named by its session id
    ///
    /// A mismatched command code is a protocol violation: logged and
    /// discarded, the session stays `Sent` and remains eligible to time
    /// out. Delivery after a terminal event or release is a no-op.
    pub fn on_answer(&self, answer: DiameterMessage) {
        let session_id = answer.session_id.clone();

        let fired = {
            let Some(mut entry) = self.sessions.get_mut(&session_id) else {
                debug!(session_id, "answer for unknown or released session, discarding");
                return;
            };

            match entry.state {
                SessionState::Sent => {
                    let expected = entry
                        .pending
                        .as_ref()
                        .map(|pending| pending.command_code);
                    if expected != Some(answer.command_code) {
                        warn!(
                            session_id,
                            command_code = answer.command_code,
                            ?expected,
                            "answer command code mismatch, discarding"
                        );
                        None
                    } else {
                        entry.state = SessionState::Answered;
                        entry.pending.take()
                    }
                }
                state => {
                    debug!(session_id, ?state, "duplicate terminal delivery, ignoring");
                    None
                }
            }
        };

        if let Some(pending) = fired {
            (pending.callback)(TerminalEvent::Answered(answer));
        }
    }

    /// Deliver a timeout for a sent request
    ///
    /// Duplicate or late delivery (including after an answer) is a no-op.
    pub fn on_timeout(&self, session_id: &str) {
        let fired = {
            let Some(mut entry) = self.sessions.get_mut(session_id) else {
                debug!(session_id, "timeout for unknown or released session, ignoring");
                return;
            };

            match entry.state {
                SessionState::Sent => {
                    let elapsed_ms = entry.created_at.elapsed().as_millis() as u64;
                    info!(session_id, elapsed_ms, "request timed out");
                    entry.state = SessionState::TimedOut;
                    entry.pending.take()
                }
                state => {
                    debug!(session_id, ?state, "duplicate terminal delivery, ignoring");
                    None
                }
            }
        };

        if let Some(pending) = fired {
            (pending.callback)(TerminalEvent::TimedOut);
        }
    }

    /// Abort a sent request; suppresses any late answer or timeout
    pub fn cancel(&self, session_id: &str) {
        let Some(mut entry) = self.sessions.get_mut(session_id) else {
            debug!(session_id, "cancel on unknown or released session, ignoring");
            return;
        };

        if entry.state != SessionState::Sent {
            debug!(session_id, state = ?entry.state, "cancel outside Sent, ignoring");
            return;
        }

        // Drop the callback without firing it
        entry.pending = None;
        drop(entry);
        self.sessions.remove(session_id);
        info!(session_id, "session cancelled");
    }

    /// Release the session, freeing its resources exactly once
    ///
    /// Valid from `Created` (server role), `Answered`, or `TimedOut`.
    /// Releasing a session that is still `Sent`, or twice, is a contract
    /// violation: asserted in debug builds, logged in release builds.
    pub fn release(&self, session_id: &str) {
        match self.sessions.remove(session_id) {
            Some((_, entry)) if entry.state == SessionState::Sent => {
                error!(session_id, "released session with a request still in flight");
                debug_assert!(false, "release of session {session_id} in Sent state");
            }
            Some(_) => debug!(session_id, "session released"),
            None => {
                error!(session_id, "release of unknown or already released session");
                debug_assert!(false, "duplicate release of session {session_id}");
            }
        }
    }

    /// Number of live (unreleased) sessions
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub(crate) fn state(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.get(session_id).map(|entry| entry.state)
    }
}

impl Default for SessionCorrelator {
    fn default() -> Self {
        Self::new()
    }
}
