// AVP kind definitions
pub mod kind;

// Standard AVP code definitions
pub mod standard;

// Dictionary lookup
pub mod manager;

pub use kind::AvpKind;
pub use standard::StandardAvp;
pub use manager::{AvpDictionary, AvpInfo};

/// 3GPP vendor id used by all S6a vendor-specific AVPs
pub const VENDOR_ID_3GPP: u32 = 10415;
