use bytes::Bytes;
use ulsim_core::constants::{
    RESULT_CODE_MISSING_AVP, RESULT_CODE_UNKNOWN_EPS_SUBSCRIPTION, RESULT_CODE_USER_UNKNOWN,
};

/// Subscriber identity for one exchange
///
/// Built per exchange (from caller parameters on the client side, from a
/// validated request on the server side) and discarded when the exchange
/// ends.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberContext {
    /// IMSI digits; the validator enforces length bounds [10, 15]
    pub imsi: String,
    /// Visited network identifier, a 3-byte PLMN code
    pub visited_plmn_id: Bytes,
    /// Radio access type, e.g. 1004 = EUTRAN
    pub rat_type: Option<i32>,
    /// ULR-Flags bitfield
    pub ulr_flags: Option<u32>,
}

/// Protocol-level failure, surfaced as a ULA Result-Code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// DIAMETER_MISSING_AVP (5004)
    MissingAvp,
    /// DIAMETER_ERROR_USER_UNKNOWN (5001)
    UnknownUser,
    /// DIAMETER_ERROR_UNKNOWN_EPS_SUBSCRIPTION (5420)
    UnknownEpsSubscription,
}

impl FailureCode {
    /// Wire-visible Diameter Result-Code
    pub fn result_code(&self) -> u32 {
        match self {
            Self::MissingAvp => RESULT_CODE_MISSING_AVP,
            Self::UnknownUser => RESULT_CODE_USER_UNKNOWN,
            Self::UnknownEpsSubscription => RESULT_CODE_UNKNOWN_EPS_SUBSCRIPTION,
        }
    }
}

/// Subscription profile carried in a successful ULA
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionProfile {
    pub msisdn: String,
    /// 0 = no restriction
    pub access_restriction_data: u32,
    /// 0 = SERVICE_GRANTED
    pub subscriber_status: i32,
    /// 0 = PACKET_AND_CIRCUIT
    pub network_access_mode: i32,
}

/// Outcome of acceptance policy evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeOutcome {
    Success(SubscriptionProfile),
    Failure(FailureCode),
}

impl ExchangeOutcome {
    /// Result-Code the answer carries for this outcome
    pub fn result_code(&self) -> u32 {
        match self {
            Self::Success(_) => ulsim_core::constants::RESULT_CODE_SUCCESS,
            Self::Failure(code) => code.result_code(),
        }
    }
}

/// Local identity stamped on every answer
#[derive(Debug, Clone, PartialEq)]
pub struct OriginInfo {
    pub host: String,
    pub realm: String,
}
