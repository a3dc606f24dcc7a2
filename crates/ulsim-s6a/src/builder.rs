use crate::types::{ExchangeOutcome, OriginInfo, SubscriberContext, SubscriptionProfile};
use bytes::Bytes;
use tracing::warn;
use ulsim_core::constants::*;
use ulsim_core::{AvpSet, AvpValue, CodecError, DiameterMessage};

/// Build the attribute set for an outbound Update-Location-Request
///
/// Emission order is fixed for wire fidelity: User-Name, Visited-PLMN-Id,
/// ULR-Flags, RAT-Type.
pub fn build_ulr(ctx: &SubscriberContext) -> Result<AvpSet, CodecError> {
    let mut avps = AvpSet::new();

    avps.write(
        AVP_USER_NAME,
        None,
        true,
        AvpValue::OctetString(Bytes::copy_from_slice(ctx.imsi.as_bytes())),
    )?;
    avps.write(
        AVP_VISITED_PLMN_ID,
        Some(VENDOR_ID_3GPP),
        false,
        AvpValue::OctetString(ctx.visited_plmn_id.clone()),
    )?;
    avps.write(
        AVP_ULR_FLAGS,
        Some(VENDOR_ID_3GPP),
        true,
        AvpValue::Unsigned32(ctx.ulr_flags.unwrap_or(0)),
    )?;
    avps.write(
        AVP_RAT_TYPE,
        Some(VENDOR_ID_3GPP),
        true,
        AvpValue::Integer32(ctx.rat_type.unwrap_or(0)),
    )?;

    Ok(avps)
}

/// Build the Update-Location-Answer for a request and a policy outcome
///
/// Origin-Host and Origin-Realm are always present. A failure outcome stops
/// after the Result-Code; a success outcome adds ULA-Flags and the grouped
/// Subscription-Data.
pub fn build_ula(
    outcome: &ExchangeOutcome,
    origin: &OriginInfo,
    request: &DiameterMessage,
) -> Result<DiameterMessage, CodecError> {
    let mut answer = request.answer(outcome.result_code());

    answer.avps.write(
        AVP_ORIGIN_HOST,
        None,
        true,
        AvpValue::OctetString(Bytes::copy_from_slice(origin.host.as_bytes())),
    )?;
    answer.avps.write(
        AVP_ORIGIN_REALM,
        None,
        true,
        AvpValue::OctetString(Bytes::copy_from_slice(origin.realm.as_bytes())),
    )?;

    let ExchangeOutcome::Success(profile) = outcome else {
        return Ok(answer);
    };

    answer.avps.write(
        AVP_ULA_FLAGS,
        Some(VENDOR_ID_3GPP),
        true,
        AvpValue::Unsigned32(1),
    )?;
    answer.avps.write(
        AVP_SUBSCRIPTION_DATA,
        Some(VENDOR_ID_3GPP),
        true,
        AvpValue::Grouped(subscription_data(profile)),
    )?;

    Ok(answer)
}

/// Assemble the grouped Subscription-Data contents
///
/// A construction failure on any sub-attribute is logged and skipped; the
/// group keeps whatever was successfully added. The answer is never aborted
/// over a diagnostic sub-step.
fn subscription_data(profile: &SubscriptionProfile) -> AvpSet {
    let mut group = AvpSet::new();

    let entries: [(u32, AvpValue); 4] = [
        (
            AVP_MSISDN,
            AvpValue::OctetString(Bytes::copy_from_slice(profile.msisdn.as_bytes())),
        ),
        (
            AVP_ACCESS_RESTRICTION_DATA,
            AvpValue::Unsigned32(profile.access_restriction_data),
        ),
        (
            AVP_SUBSCRIBER_STATUS,
            AvpValue::Integer32(profile.subscriber_status),
        ),
        (
            AVP_NETWORK_ACCESS_MODE,
            AvpValue::Integer32(profile.network_access_mode),
        ),
    ];

    for (code, value) in entries {
        if let Err(err) = group.write(code, Some(VENDOR_ID_3GPP), true, value) {
            warn!(code, error = %err, "skipping Subscription-Data sub-attribute");
        }
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FailureCode;

    fn sample_ctx() -> SubscriberContext {
        SubscriberContext {
            imsi: "123456789012345".to_string(),
            visited_plmn_id: Bytes::from_static(&[0x00, 0x01, 0x02]),
            rat_type: Some(1004),
            ulr_flags: Some(1),
        }
    }

    fn origin() -> OriginInfo {
        OriginInfo {
            host: "hss.exchange.example.org".to_string(),
            realm: "exchange.example.org".to_string(),
        }
    }

    fn request() -> DiameterMessage {
        DiameterMessage::request(
            CMD_UPDATE_LOCATION,
            APP_ID_S6A,
            "session-1",
            "exchange.example.org",
            "127.0.0.1",
        )
    }

    #[test]
    fn test_ulr_attribute_order_and_values() {
        let avps = build_ulr(&sample_ctx()).unwrap();

        let entries: Vec<(u32, Option<u32>)> =
            avps.iter().map(|avp| (avp.code, avp.vendor_id)).collect();
        assert_eq!(
            entries,
            vec![
                (AVP_USER_NAME, None),
                (AVP_VISITED_PLMN_ID, Some(VENDOR_ID_3GPP)),
                (AVP_ULR_FLAGS, Some(VENDOR_ID_3GPP)),
                (AVP_RAT_TYPE, Some(VENDOR_ID_3GPP)),
            ]
        );

        assert_eq!(avps.read_utf8(AVP_USER_NAME, None).unwrap(), "123456789012345");
        assert_eq!(
            avps.read_octets(AVP_VISITED_PLMN_ID, Some(VENDOR_ID_3GPP))
                .unwrap()
                .as_ref(),
            &[0x00, 0x01, 0x02]
        );
        assert_eq!(
            avps.read_unsigned32(AVP_ULR_FLAGS, Some(VENDOR_ID_3GPP)).unwrap(),
            1
        );
        assert_eq!(
            avps.read_integer32(AVP_RAT_TYPE, Some(VENDOR_ID_3GPP)).unwrap(),
            1004
        );
    }

    #[test]
    fn test_ulr_mandatory_bits() {
        let avps = build_ulr(&sample_ctx()).unwrap();
        assert!(avps.get(AVP_USER_NAME, None).unwrap().mandatory);
        assert!(avps.get(AVP_ULR_FLAGS, Some(VENDOR_ID_3GPP)).unwrap().mandatory);
        assert!(avps.get(AVP_RAT_TYPE, Some(VENDOR_ID_3GPP)).unwrap().mandatory);
    }

    #[test]
    fn test_ulr_round_trip_through_validator() {
        let avps = build_ulr(&sample_ctx()).unwrap();
        let ctx = crate::validator::validate(&avps).unwrap();
        assert_eq!(ctx, sample_ctx());
    }

    #[test]
    fn test_success_ula_shape() {
        let outcome = crate::policy::decide(&sample_ctx());
        let ula = build_ula(&outcome, &origin(), &request()).unwrap();

        assert_eq!(ula.result_code(), Some(2001));
        assert_eq!(
            ula.avps.read_utf8(AVP_ORIGIN_HOST, None).unwrap(),
            "hss.exchange.example.org"
        );
        assert_eq!(
            ula.avps.read_utf8(AVP_ORIGIN_REALM, None).unwrap(),
            "exchange.example.org"
        );
        assert_eq!(
            ula.avps
                .read_unsigned32(AVP_ULA_FLAGS, Some(VENDOR_ID_3GPP))
                .unwrap(),
            1
        );

        let data = ula
            .avps
            .read_grouped(AVP_SUBSCRIPTION_DATA, Some(VENDOR_ID_3GPP))
            .unwrap();
        assert_eq!(
            data.read_utf8(AVP_MSISDN, Some(VENDOR_ID_3GPP)).unwrap(),
            "16789012345"
        );
        assert_eq!(
            data.read_unsigned32(AVP_ACCESS_RESTRICTION_DATA, Some(VENDOR_ID_3GPP))
                .unwrap(),
            0
        );
        assert_eq!(
            data.read_integer32(AVP_SUBSCRIBER_STATUS, Some(VENDOR_ID_3GPP))
                .unwrap(),
            0
        );
        assert_eq!(
            data.read_integer32(AVP_NETWORK_ACCESS_MODE, Some(VENDOR_ID_3GPP))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_failure_ula_stops_after_origin() {
        let outcome = ExchangeOutcome::Failure(FailureCode::UnknownUser);
        let ula = build_ula(&outcome, &origin(), &request()).unwrap();

        assert_eq!(ula.result_code(), Some(5001));
        assert!(ula.avps.get(AVP_ORIGIN_HOST, None).is_some());
        assert!(ula.avps.get(AVP_ORIGIN_REALM, None).is_some());
        assert!(ula.avps.get(AVP_ULA_FLAGS, Some(VENDOR_ID_3GPP)).is_none());
        assert!(ula
            .avps
            .get(AVP_SUBSCRIPTION_DATA, Some(VENDOR_ID_3GPP))
            .is_none());
    }
}
