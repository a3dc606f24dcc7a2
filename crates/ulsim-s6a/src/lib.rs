// Exchange data model
pub mod types;

// Inbound request validation
pub mod validator;

// Acceptance policy
pub mod policy;

// ULR/ULA message builders
pub mod builder;

pub use builder::{build_ula, build_ulr};
pub use policy::{decide, msisdn_from_imsi};
pub use types::{ExchangeOutcome, FailureCode, OriginInfo, SubscriberContext, SubscriptionProfile};
pub use validator::validate;
