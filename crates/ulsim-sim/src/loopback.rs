use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use ulsim_core::{DiameterMessage, PeerStack, Result};
use ulsim_hss::UlrHandler;
use ulsim_session::SessionCorrelator;

/// In-process peer stack: requests go straight to the HSS handler and the
/// answer comes back through the client's correlator
///
/// Stands in for a real Diameter transport. Answers are delivered from a
/// spawned task, so the client sees the same thread model a stack-owned
/// worker would give it. When the handler produces no answer (or answers
/// are deliberately dropped), the stack's timeout window fires instead.
pub struct LoopbackStack {
    handler: Arc<UlrHandler>,
    correlator: Arc<SessionCorrelator>,
    timeout: Duration,
    drop_answers: bool,
}

impl LoopbackStack {
    pub fn new(
        handler: Arc<UlrHandler>,
        correlator: Arc<SessionCorrelator>,
        timeout: Duration,
    ) -> Self {
        Self {
            handler,
            correlator,
            timeout,
            drop_answers: false,
        }
    }

    /// Discard every answer so the timeout path can be exercised
    pub fn dropping_answers(mut self) -> Self {
        self.drop_answers = true;
        self
    }
}

#[async_trait]
impl PeerStack for LoopbackStack {
    async fn send(&self, request: DiameterMessage) -> Result<()> {
        let handler = Arc::clone(&self.handler);
        let correlator = Arc::clone(&self.correlator);
        let timeout = self.timeout;
        let drop_answers = self.drop_answers;

        tokio::spawn(async move {
            let session_id = request.session_id.clone();

            if drop_answers {
                tokio::time::sleep(timeout).await;
                correlator.on_timeout(&session_id);
                return;
            }

            match handler.handle(&request) {
                Some(answer) => correlator.on_answer(answer),
                None => {
                    warn!(session_id, "no answer from handler, waiting out the timeout window");
                    tokio::time::sleep(timeout).await;
                    correlator.on_timeout(&session_id);
                }
            }
        });

        Ok(())
    }
}
