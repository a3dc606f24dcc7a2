use crate::kind::AvpKind;
use crate::VENDOR_ID_3GPP;

/// Standard AVP definitions from RFC 6733 and 3GPP TS 29.272
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardAvp {
    // ========================================
    // RFC 6733 Base Protocol
    // ========================================
    UserName,
    SessionId,
    OriginHost,
    ResultCode,
    RouteRecord,
    DestinationRealm,
    DestinationHost,
    OriginRealm,

    // ========================================
    // 3GPP S6a/S6d (TS 29.272)
    // ========================================
    Msisdn,
    RatType,
    SubscriptionData,
    UlrFlags,
    UlaFlags,
    VisitedPlmnId,
    NetworkAccessMode,
    SubscriberStatus,
    AccessRestrictionData,
}

impl StandardAvp {
    /// Resolve a code/vendor pair to a standard definition
    pub fn from_code(code: u32, vendor_id: Option<u32>) -> Option<Self> {
        match (code, vendor_id) {
            (1, None) => Some(Self::UserName),
            (263, None) => Some(Self::SessionId),
            (264, None) => Some(Self::OriginHost),
            (268, None) => Some(Self::ResultCode),
            (282, None) => Some(Self::RouteRecord),
            (283, None) => Some(Self::DestinationRealm),
            (293, None) => Some(Self::DestinationHost),
            (296, None) => Some(Self::OriginRealm),
            (701, Some(VENDOR_ID_3GPP)) => Some(Self::Msisdn),
            (1032, Some(VENDOR_ID_3GPP)) => Some(Self::RatType),
            (1400, Some(VENDOR_ID_3GPP)) => Some(Self::SubscriptionData),
            (1405, Some(VENDOR_ID_3GPP)) => Some(Self::UlrFlags),
            (1406, Some(VENDOR_ID_3GPP)) => Some(Self::UlaFlags),
            (1407, Some(VENDOR_ID_3GPP)) => Some(Self::VisitedPlmnId),
            (1417, Some(VENDOR_ID_3GPP)) => Some(Self::NetworkAccessMode),
            (1424, Some(VENDOR_ID_3GPP)) => Some(Self::SubscriberStatus),
            (1426, Some(VENDOR_ID_3GPP)) => Some(Self::AccessRestrictionData),
            _ => None,
        }
    }

    /// Get AVP code
    pub fn code(&self) -> u32 {
        match self {
            Self::UserName => 1,
            Self::SessionId => 263,
            Self::OriginHost => 264,
            Self::ResultCode => 268,
            Self::RouteRecord => 282,
            Self::DestinationRealm => 283,
            Self::DestinationHost => 293,
            Self::OriginRealm => 296,
            Self::Msisdn => 701,
            Self::RatType => 1032,
            Self::SubscriptionData => 1400,
            Self::UlrFlags => 1405,
            Self::UlaFlags => 1406,
            Self::VisitedPlmnId => 1407,
            Self::NetworkAccessMode => 1417,
            Self::SubscriberStatus => 1424,
            Self::AccessRestrictionData => 1426,
        }
    }

    /// Get vendor id, `None` for base protocol AVPs
    pub fn vendor_id(&self) -> Option<u32> {
        match self {
            Self::UserName
            | Self::SessionId
            | Self::OriginHost
            | Self::ResultCode
            | Self::RouteRecord
            | Self::DestinationRealm
            | Self::DestinationHost
            | Self::OriginRealm => None,
            _ => Some(VENDOR_ID_3GPP),
        }
    }

    /// Get AVP name
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserName => "User-Name",
            Self::SessionId => "Session-Id",
            Self::OriginHost => "Origin-Host",
            Self::ResultCode => "Result-Code",
            Self::RouteRecord => "Route-Record",
            Self::DestinationRealm => "Destination-Realm",
            Self::DestinationHost => "Destination-Host",
            Self::OriginRealm => "Origin-Realm",
            Self::Msisdn => "MSISDN",
            Self::RatType => "RAT-Type",
            Self::SubscriptionData => "Subscription-Data",
            Self::UlrFlags => "ULR-Flags",
            Self::UlaFlags => "ULA-Flags",
            Self::VisitedPlmnId => "Visited-PLMN-Id",
            Self::NetworkAccessMode => "Network-Access-Mode",
            Self::SubscriberStatus => "Subscriber-Status",
            Self::AccessRestrictionData => "Access-Restriction-Data",
        }
    }

    /// Get declared AVP kind
    ///
    /// Text-valued AVPs (User-Name, identities) are declared OctetString;
    /// readers that need text decode the octets as UTF-8 themselves.
    pub fn kind(&self) -> AvpKind {
        match self {
            Self::UserName => AvpKind::OctetString,
            Self::SessionId => AvpKind::OctetString,
            Self::OriginHost => AvpKind::OctetString,
            Self::ResultCode => AvpKind::Unsigned32,
            Self::RouteRecord => AvpKind::OctetString,
            Self::DestinationRealm => AvpKind::OctetString,
            Self::DestinationHost => AvpKind::OctetString,
            Self::OriginRealm => AvpKind::OctetString,
            Self::Msisdn => AvpKind::OctetString,
            Self::RatType => AvpKind::Integer32,
            Self::SubscriptionData => AvpKind::Grouped,
            Self::UlrFlags => AvpKind::Unsigned32,
            Self::UlaFlags => AvpKind::Unsigned32,
            Self::VisitedPlmnId => AvpKind::OctetString,
            Self::NetworkAccessMode => AvpKind::Integer32,
            Self::SubscriberStatus => AvpKind::Integer32,
            Self::AccessRestrictionData => AvpKind::Unsigned32,
        }
    }
}
