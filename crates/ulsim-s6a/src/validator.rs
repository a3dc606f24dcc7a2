use crate::types::{FailureCode, SubscriberContext};
use tracing::warn;
use ulsim_core::constants::{
    AVP_RAT_TYPE, AVP_ULR_FLAGS, AVP_USER_NAME, AVP_VISITED_PLMN_ID, VENDOR_ID_3GPP,
};
use ulsim_core::{AvpSet, CodecError};

/// Validate an inbound ULR attribute set
///
/// Checks run in order and the first failure wins:
/// 1. User-Name present, else 5004
/// 2. Visited-PLMN-Id present, else 5004
/// 3. User-Name decodes as UTF-8, else 5004 (same as absence)
/// 4. IMSI length within [10, 15], else 5001
///
/// RAT-Type and ULR-Flags are informational: a decode failure on either is
/// logged and never fails validation.
pub fn validate(avps: &AvpSet) -> Result<SubscriberContext, FailureCode> {
    if avps.get(AVP_USER_NAME, None).is_none() {
        return Err(FailureCode::MissingAvp);
    }

    let Some(plmn_avp) = avps.get(AVP_VISITED_PLMN_ID, Some(VENDOR_ID_3GPP)) else {
        return Err(FailureCode::MissingAvp);
    };

    let imsi = avps
        .read_utf8(AVP_USER_NAME, None)
        .map_err(|_| FailureCode::MissingAvp)?;

    if imsi.len() < 10 || imsi.len() > 15 {
        return Err(FailureCode::UnknownUser);
    }

    let visited_plmn_id = match &plmn_avp.value {
        ulsim_core::AvpValue::OctetString(bytes) => bytes.clone(),
        other => {
            // Presence satisfied the mandatory check; an odd kind is only
            // a diagnostic concern here
            warn!(kind = %other.kind(), "Visited-PLMN-Id carries unexpected kind");
            bytes::Bytes::new()
        }
    };

    let rat_type = read_optional(
        avps.read_integer32(AVP_RAT_TYPE, Some(VENDOR_ID_3GPP)),
        "RAT-Type",
    );
    let ulr_flags = read_optional(
        avps.read_unsigned32(AVP_ULR_FLAGS, Some(VENDOR_ID_3GPP)),
        "ULR-Flags",
    );

    Ok(SubscriberContext {
        imsi,
        visited_plmn_id,
        rat_type,
        ulr_flags,
    })
}

fn read_optional<T>(result: Result<T, CodecError>, name: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(CodecError::AttributeNotFound { .. }) => None,
        Err(err) => {
            warn!(avp = name, error = %err, "failed to read optional AVP");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use ulsim_core::AvpValue;

    fn well_formed_ulr(imsi: &str) -> AvpSet {
        let mut avps = AvpSet::new();
        avps.write(
            AVP_USER_NAME,
            None,
            true,
            AvpValue::OctetString(Bytes::copy_from_slice(imsi.as_bytes())),
        )
        .unwrap();
        avps.write(
            AVP_VISITED_PLMN_ID,
            Some(VENDOR_ID_3GPP),
            false,
            AvpValue::OctetString(Bytes::from_static(&[0x00, 0x01, 0x02])),
        )
        .unwrap();
        avps.write(
            AVP_ULR_FLAGS,
            Some(VENDOR_ID_3GPP),
            true,
            AvpValue::Unsigned32(1),
        )
        .unwrap();
        avps.write(
            AVP_RAT_TYPE,
            Some(VENDOR_ID_3GPP),
            true,
            AvpValue::Integer32(1004),
        )
        .unwrap();
        avps
    }

    #[test]
    fn test_valid_request() {
        let ctx = validate(&well_formed_ulr("123456789012345")).unwrap();
        assert_eq!(ctx.imsi, "123456789012345");
        assert_eq!(ctx.visited_plmn_id.as_ref(), &[0x00, 0x01, 0x02]);
        assert_eq!(ctx.rat_type, Some(1004));
        assert_eq!(ctx.ulr_flags, Some(1));
    }

    #[test]
    fn test_missing_user_name() {
        let mut avps = AvpSet::new();
        avps.write(
            AVP_VISITED_PLMN_ID,
            Some(VENDOR_ID_3GPP),
            false,
            AvpValue::OctetString(Bytes::from_static(&[0x00, 0x01, 0x02])),
        )
        .unwrap();

        assert_eq!(validate(&avps), Err(FailureCode::MissingAvp));
    }

    #[test]
    fn test_missing_visited_plmn_id() {
        let mut avps = AvpSet::new();
        avps.write(
            AVP_USER_NAME,
            None,
            true,
            AvpValue::OctetString(Bytes::from_static(b"123456789012345")),
        )
        .unwrap();

        assert_eq!(validate(&avps), Err(FailureCode::MissingAvp));
    }

    #[test]
    fn test_non_utf8_imsi_treated_as_missing() {
        let mut avps = well_formed_ulr("123456789012345");
        // Replace with a fresh set carrying invalid UTF-8 in User-Name
        avps = {
            let mut set = AvpSet::new();
            set.write(
                AVP_USER_NAME,
                None,
                true,
                AvpValue::OctetString(Bytes::from_static(&[0xFF, 0xFE, 0xFD, 0xFC, 0xFB])),
            )
            .unwrap();
            for avp in avps.iter().skip(1) {
                set.write(avp.code, avp.vendor_id, avp.mandatory, avp.value.clone())
                    .unwrap();
            }
            set
        };

        assert_eq!(validate(&avps), Err(FailureCode::MissingAvp));
    }

    #[test]
    fn test_imsi_length_bounds() {
        assert_eq!(
            validate(&well_formed_ulr("123456789")),
            Err(FailureCode::UnknownUser)
        );
        assert_eq!(
            validate(&well_formed_ulr("1234567890123456")),
            Err(FailureCode::UnknownUser)
        );
        assert!(validate(&well_formed_ulr("1234567890")).is_ok());
        assert!(validate(&well_formed_ulr("123456789012345")).is_ok());
    }

    #[test]
    fn test_optional_avps_absent() {
        let mut avps = AvpSet::new();
        avps.write(
            AVP_USER_NAME,
            None,
            true,
            AvpValue::OctetString(Bytes::from_static(b"123456789012345")),
        )
        .unwrap();
        avps.write(
            AVP_VISITED_PLMN_ID,
            Some(VENDOR_ID_3GPP),
            false,
            AvpValue::OctetString(Bytes::from_static(&[0x00, 0x01, 0x02])),
        )
        .unwrap();

        let ctx = validate(&avps).unwrap();
        assert_eq!(ctx.rat_type, None);
        assert_eq!(ctx.ulr_flags, None);
    }
}
