use crate::types::{ExchangeOutcome, FailureCode, SubscriberContext, SubscriptionProfile};

// Synthetic subscriber rules standing in for an HSS database lookup.
// A real deployment replaces the body of `decide` and keeps its contract.
const PREFIX_UNKNOWN_USER: &str = "99999";
const PREFIX_NO_EPS_SUBSCRIPTION: &str = "88888";

/// Evaluate acceptance policy for a validated request context
///
/// Deterministic, pure function of the IMSI. The caller has already
/// enforced the [10, 15] length bounds.
pub fn decide(ctx: &SubscriberContext) -> ExchangeOutcome {
    if ctx.imsi.starts_with(PREFIX_UNKNOWN_USER) {
        return ExchangeOutcome::Failure(FailureCode::UnknownUser);
    }

    if ctx.imsi.starts_with(PREFIX_NO_EPS_SUBSCRIPTION) {
        return ExchangeOutcome::Failure(FailureCode::UnknownEpsSubscription);
    }

    ExchangeOutcome::Success(SubscriptionProfile {
        msisdn: msisdn_from_imsi(&ctx.imsi),
        access_restriction_data: 0,
        subscriber_status: 0,
        network_access_mode: 0,
    })
}

/// Derive an MSISDN from an IMSI: "1" + last 10 digits
///
/// Explicit stand-in for a subscriber-number lookup, not real numbering
/// logic. Requires at least 10 digits, which the validator guarantees.
pub fn msisdn_from_imsi(imsi: &str) -> String {
    format!("1{}", &imsi[imsi.len() - 10..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn ctx(imsi: &str) -> SubscriberContext {
        SubscriberContext {
            imsi: imsi.to_string(),
            visited_plmn_id: Bytes::from_static(&[0x00, 0x01, 0x02]),
            rat_type: Some(1004),
            ulr_flags: Some(1),
        }
    }

    #[test]
    fn test_accepts_ordinary_subscriber() {
        match decide(&ctx("123456789012345")) {
            ExchangeOutcome::Success(profile) => {
                assert_eq!(profile.msisdn, "16789012345");
                assert_eq!(profile.access_restriction_data, 0);
                assert_eq!(profile.subscriber_status, 0);
                assert_eq!(profile.network_access_mode, 0);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_user_prefix() {
        assert_eq!(
            decide(&ctx("9999912345678")),
            ExchangeOutcome::Failure(FailureCode::UnknownUser)
        );
    }

    #[test]
    fn test_no_eps_subscription_prefix() {
        assert_eq!(
            decide(&ctx("8888812345678")),
            ExchangeOutcome::Failure(FailureCode::UnknownEpsSubscription)
        );
    }

    #[test]
    fn test_prefix_rules_ignore_other_fields() {
        let mut no_extras = ctx("9999912345678");
        no_extras.rat_type = None;
        no_extras.ulr_flags = None;
        assert_eq!(
            decide(&no_extras),
            ExchangeOutcome::Failure(FailureCode::UnknownUser)
        );
    }

    #[test]
    fn test_msisdn_derivation_is_deterministic() {
        assert_eq!(msisdn_from_imsi("123456789012345"), "16789012345");
        assert_eq!(msisdn_from_imsi("1234567890"), "11234567890");
        assert_eq!(msisdn_from_imsi("123456789012345"), msisdn_from_imsi("123456789012345"));
    }
}
