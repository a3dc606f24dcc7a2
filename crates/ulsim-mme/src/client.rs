use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use ulsim_config::ClientConfig;
use ulsim_core::constants::{APP_ID_S6A, AVP_SUBSCRIPTION_DATA, CMD_UPDATE_LOCATION, VENDOR_ID_3GPP};
use ulsim_core::{render_message, DiameterMessage, PeerStack, Result, UlsimError};
use ulsim_dict::AvpDictionary;
use ulsim_metrics::{
    ACTIVE_SESSIONS, EXCHANGE_LATENCY_SECONDS, TIMEOUTS_TOTAL, ULA_ERROR_TOTAL,
    ULA_SUCCESS_TOTAL, ULR_SENT_TOTAL,
};
use ulsim_s6a::{build_ulr, SubscriberContext};
use ulsim_session::{SessionCorrelator, TerminalEvent};

/// Final result of one Update-Location exchange, as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UlrOutcome {
    /// Result-Code 2001; `subscription_data` reports whether the answer
    /// carried the Subscription-Data group
    Success { subscription_data: bool },
    /// Any non-2001 Result-Code
    Failure { result_code: u32 },
    /// Answer arrived without a readable Result-Code
    Malformed,
    /// The stack's timeout window expired
    Timeout,
}

/// Client exchange driver (MME role)
///
/// `send_ulr` is fire-and-forget: the outcome reaches the caller through
/// the completion callback when the correlator delivers the terminal event.
pub struct UlrClient {
    stack: Arc<dyn PeerStack>,
    correlator: Arc<SessionCorrelator>,
    config: ClientConfig,
    dict: AvpDictionary,
}

impl UlrClient {
    pub fn new(
        stack: Arc<dyn PeerStack>,
        correlator: Arc<SessionCorrelator>,
        config: ClientConfig,
    ) -> Self {
        Self {
            stack,
            correlator,
            config,
            dict: AvpDictionary::new(),
        }
    }

    /// Build and send one ULR; returns the session id of the exchange
    pub async fn send_ulr(
        &self,
        on_complete: impl FnOnce(UlrOutcome) + Send + Sync + 'static,
    ) -> Result<String> {
        let ctx = SubscriberContext {
            imsi: self.config.imsi.clone(),
            visited_plmn_id: Bytes::from(self.config.visited_plmn_id.clone()),
            rat_type: Some(self.config.rat_type),
            ulr_flags: Some(self.config.ulr_flags),
        };

        let session_id = self.correlator.create();
        let mut request = DiameterMessage::request(
            CMD_UPDATE_LOCATION,
            APP_ID_S6A,
            session_id.clone(),
            self.config.destination_realm.clone(),
            self.config.destination_host.clone(),
        );
        request.avps = build_ulr(&ctx).map_err(UlsimError::Codec)?;

        let correlator = Arc::clone(&self.correlator);
        let callback_session_id = session_id.clone();
        let sent_at = Instant::now();
        self.correlator.attach(
            &session_id,
            CMD_UPDATE_LOCATION,
            Box::new(move |event| {
                let outcome = match event {
                    TerminalEvent::Answered(answer) => classify_answer(&answer),
                    TerminalEvent::TimedOut => {
                        error!(session_id = %callback_session_id, "Request timed out");
                        TIMEOUTS_TOTAL.inc();
                        UlrOutcome::Timeout
                    }
                };
                EXCHANGE_LATENCY_SECONDS.observe(sent_at.elapsed().as_secs_f64());
                correlator.release(&callback_session_id);
                ACTIVE_SESSIONS.set(correlator.active_sessions() as i64);
                on_complete(outcome);
            }),
        )?;

        info!("Sending Update-Location-Request");
        info!("Sending\n{}", render_message(&request, &self.dict));
        ULR_SENT_TOTAL.inc();
        ACTIVE_SESSIONS.set(self.correlator.active_sessions() as i64);

        if let Err(err) = self.stack.send(request).await {
            error!(session_id, error = %err, "failed to hand request to the stack");
            // The pending callback must never fire for a request that
            // never left; cancel suppresses any stray delivery
            self.correlator.cancel(&session_id);
            ACTIVE_SESSIONS.set(self.correlator.active_sessions() as i64);
            return Err(err);
        }

        Ok(session_id)
    }

    /// Abort a pending exchange; the completion callback will not fire
    pub fn cancel(&self, session_id: &str) {
        self.correlator.cancel(session_id);
        ACTIVE_SESSIONS.set(self.correlator.active_sessions() as i64);
    }
}

fn classify_answer(answer: &DiameterMessage) -> UlrOutcome {
    let dict = AvpDictionary::new();
    info!("Received\n{}", render_message(answer, &dict));

    match answer.result_code() {
        Some(2001) => {
            info!("Successfully received ULA (Update-Location-Answer)");
            let subscription_data = answer
                .avps
                .get(AVP_SUBSCRIPTION_DATA, Some(VENDOR_ID_3GPP))
                .is_some();
            if subscription_data {
                info!("Subscription data is available in the answer");
            }
            ULA_SUCCESS_TOTAL.inc();
            UlrOutcome::Success { subscription_data }
        }
        Some(result_code) => {
            error!(result_code, "ULA contained error");
            ULA_ERROR_TOTAL.inc();
            UlrOutcome::Failure { result_code }
        }
        None => {
            error!("answer carries no readable Result-Code");
            ULA_ERROR_TOTAL.inc();
            UlrOutcome::Malformed
        }
    }
}
