// Diameter Command Codes
pub const CMD_UPDATE_LOCATION: u32 = 316;

// Application ids
pub const APP_ID_S6A: u32 = 16777251; // 3GPP S6a/S6d

// Vendor ids
pub const VENDOR_ID_3GPP: u32 = 10415;

// AVP Codes (RFC 6733 base protocol)
pub const AVP_USER_NAME: u32 = 1;
pub const AVP_SESSION_ID: u32 = 263;
pub const AVP_ORIGIN_HOST: u32 = 264;
pub const AVP_RESULT_CODE: u32 = 268;
pub const AVP_ORIGIN_REALM: u32 = 296;

// AVP Codes (3GPP TS 29.272, vendor 10415)
pub const AVP_MSISDN: u32 = 701;
pub const AVP_RAT_TYPE: u32 = 1032;
pub const AVP_SUBSCRIPTION_DATA: u32 = 1400;
pub const AVP_ULR_FLAGS: u32 = 1405;
pub const AVP_ULA_FLAGS: u32 = 1406;
pub const AVP_VISITED_PLMN_ID: u32 = 1407;
pub const AVP_NETWORK_ACCESS_MODE: u32 = 1417;
pub const AVP_SUBSCRIBER_STATUS: u32 = 1424;
pub const AVP_ACCESS_RESTRICTION_DATA: u32 = 1426;

// Result-Code values (AVP 268)
pub const RESULT_CODE_SUCCESS: u32 = 2001; // DIAMETER_SUCCESS
pub const RESULT_CODE_USER_UNKNOWN: u32 = 5001; // DIAMETER_ERROR_USER_UNKNOWN
pub const RESULT_CODE_MISSING_AVP: u32 = 5004; // DIAMETER_MISSING_AVP
pub const RESULT_CODE_UNKNOWN_EPS_SUBSCRIPTION: u32 = 5420; // DIAMETER_ERROR_UNKNOWN_EPS_SUBSCRIPTION
