use std::sync::Arc;
use tracing::{error, info};
use ulsim_config::ServerConfig;
use ulsim_core::constants::CMD_UPDATE_LOCATION;
use ulsim_core::{render_message, DiameterMessage};
use ulsim_dict::AvpDictionary;
use ulsim_s6a::{build_ula, decide, validate, ExchangeOutcome, FailureCode, OriginInfo};
use ulsim_session::SessionCorrelator;

/// Server exchange handler (HSS role)
///
/// Handles each inbound ULR synchronously: the session lives only for the
/// duration of the call and is released right after the answer is built,
/// on failure paths as well as success.
pub struct UlrHandler {
    origin: OriginInfo,
    correlator: Arc<SessionCorrelator>,
    dict: AvpDictionary,
}

impl UlrHandler {
    pub fn new(config: ServerConfig, correlator: Arc<SessionCorrelator>) -> Self {
        Self {
            origin: OriginInfo {
                host: config.origin_host,
                realm: config.origin_realm,
            },
            correlator,
            dict: AvpDictionary::new(),
        }
    }

    /// Produce the ULA for an inbound request
    ///
    /// Unsupported command codes are logged and yield no answer.
    pub fn handle(&self, request: &DiameterMessage) -> Option<DiameterMessage> {
        info!("Received\n{}", render_message(request, &self.dict));

        if request.command_code != CMD_UPDATE_LOCATION {
            error!(
                command_code = request.command_code,
                "Received unsupported command"
            );
            return None;
        }

        info!("Received Update-Location-Request (ULR)");
        let session_id = self.correlator.create();

        let outcome = match validate(&request.avps) {
            Ok(ctx) => {
                info!(imsi = %ctx.imsi, "Processing ULR");
                if let Some(rat_type) = ctx.rat_type {
                    info!(rat_type, "RAT type");
                }
                if let Some(flags) = ctx.ulr_flags {
                    log_ulr_flags(flags);
                }
                decide(&ctx)
            }
            Err(failure) => {
                log_validation_failure(failure);
                ExchangeOutcome::Failure(failure)
            }
        };

        let answer = match build_ula(&outcome, &self.origin, request) {
            Ok(answer) => answer,
            Err(err) => {
                // Keeps the exchange answerable even if an attribute write
                // is rejected; the bare Result-Code still goes out
                error!(error = %err, "failed to build full ULA, answering with Result-Code only");
                request.answer(outcome.result_code())
            }
        };

        info!("Sending\n{}", render_message(&answer, &self.dict));
        self.correlator.release(&session_id);

        Some(answer)
    }
}

fn log_validation_failure(failure: FailureCode) {
    match failure {
        FailureCode::MissingAvp => error!("Request missing a mandatory AVP"),
        FailureCode::UnknownUser => error!("Invalid or unknown IMSI"),
        FailureCode::UnknownEpsSubscription => error!("Subscriber has no EPS subscription"),
    }
}

fn log_ulr_flags(flags: u32) {
    info!(ulr_flags = flags, "ULR Flags");
    info!(
        skip_subscriber_data = (flags & 0x1) != 0,
        rau_lu_registration = (flags & 0x2) != 0,
        single_registration = (flags & 0x4) != 0,
        active_apn = (flags & 0x8) != 0,
        "ULR flag bits"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use ulsim_core::constants::*;
    use ulsim_core::{AvpSet, AvpValue};
    use ulsim_s6a::{build_ulr, SubscriberContext};

    fn handler_with_correlator() -> (UlrHandler, Arc<SessionCorrelator>) {
        let correlator = Arc::new(SessionCorrelator::new());
        let handler = UlrHandler::new(ServerConfig::default(), Arc::clone(&correlator));
        (handler, correlator)
    }

    fn ulr_for(imsi: &str) -> DiameterMessage {
        let ctx = SubscriberContext {
            imsi: imsi.to_string(),
            visited_plmn_id: Bytes::from_static(&[0x00, 0x01, 0x02]),
            rat_type: Some(1004),
            ulr_flags: Some(1),
        };
        let mut request = DiameterMessage::request(
            CMD_UPDATE_LOCATION,
            APP_ID_S6A,
            "test-session",
            "exchange.example.org",
            "127.0.0.1",
        );
        request.avps = build_ulr(&ctx).unwrap();
        request
    }

    #[test]
    fn test_success_answer_with_subscription_data() {
        let (handler, correlator) = handler_with_correlator();

        let answer = handler.handle(&ulr_for("123456789012345")).unwrap();

        assert_eq!(answer.result_code(), Some(2001));
        let data = answer
            .avps
            .read_grouped(AVP_SUBSCRIPTION_DATA, Some(VENDOR_ID_3GPP))
            .unwrap();
        assert_eq!(
            data.read_utf8(AVP_MSISDN, Some(VENDOR_ID_3GPP)).unwrap(),
            "16789012345"
        );
        // Session is released inside the call
        assert_eq!(correlator.active_sessions(), 0);
    }

    #[test]
    fn test_unknown_user_answer() {
        let (handler, correlator) = handler_with_correlator();

        let answer = handler.handle(&ulr_for("9999912345678")).unwrap();

        assert_eq!(answer.result_code(), Some(5001));
        assert!(answer
            .avps
            .get(AVP_SUBSCRIPTION_DATA, Some(VENDOR_ID_3GPP))
            .is_none());
        assert_eq!(correlator.active_sessions(), 0);
    }

    #[test]
    fn test_unknown_eps_subscription_answer() {
        let (handler, _) = handler_with_correlator();
        let answer = handler.handle(&ulr_for("8888812345678")).unwrap();
        assert_eq!(answer.result_code(), Some(5420));
    }

    #[test]
    fn test_missing_avp_answer() {
        let (handler, correlator) = handler_with_correlator();

        let mut request = DiameterMessage::request(
            CMD_UPDATE_LOCATION,
            APP_ID_S6A,
            "test-session",
            "exchange.example.org",
            "127.0.0.1",
        );
        // Visited-PLMN-Id only, no User-Name
        request
            .avps
            .write(
                AVP_VISITED_PLMN_ID,
                Some(VENDOR_ID_3GPP),
                false,
                AvpValue::OctetString(Bytes::from_static(&[0x00, 0x01, 0x02])),
            )
            .unwrap();

        let answer = handler.handle(&request).unwrap();
        assert_eq!(answer.result_code(), Some(5004));
        assert!(answer
            .avps
            .get(AVP_SUBSCRIPTION_DATA, Some(VENDOR_ID_3GPP))
            .is_none());
        // Failure paths release the session too
        assert_eq!(correlator.active_sessions(), 0);
    }

    #[test]
    fn test_unsupported_command_yields_no_answer() {
        let (handler, correlator) = handler_with_correlator();

        let mut request = ulr_for("123456789012345");
        request.command_code = 257; // CER

        assert!(handler.handle(&request).is_none());
        assert_eq!(correlator.active_sessions(), 0);
    }

    #[test]
    fn test_answer_carries_origin_identity() {
        let (handler, _) = handler_with_correlator();
        let answer = handler.handle(&ulr_for("123456789012345")).unwrap();

        assert_eq!(
            answer.avps.read_utf8(AVP_ORIGIN_HOST, None).unwrap(),
            "hss.exchange.example.org"
        );
        assert_eq!(
            answer.avps.read_utf8(AVP_ORIGIN_REALM, None).unwrap(),
            "exchange.example.org"
        );
    }

    #[test]
    fn test_empty_request_missing_avp() {
        let (handler, _) = handler_with_correlator();
        let request = DiameterMessage::request(
            CMD_UPDATE_LOCATION,
            APP_ID_S6A,
            "test-session",
            "exchange.example.org",
            "127.0.0.1",
        );
        assert!(request.avps.is_empty());

        let answer = handler.handle(&request).unwrap();
        assert_eq!(answer.result_code(), Some(5004));
    }
}
