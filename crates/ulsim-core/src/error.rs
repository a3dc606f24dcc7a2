use thiserror::Error;
use ulsim_dict::AvpKind;

/// Codec-level errors, recoverable by the caller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("attribute not found: code {code}, vendor {vendor_id:?}")]
    AttributeNotFound { code: u32, vendor_id: Option<u32> },

    #[error("attribute type mismatch for code {code}: expected {expected}, found {found}")]
    AttributeTypeMismatch {
        code: u32,
        expected: AvpKind,
        found: AvpKind,
    },

    #[error("attribute {code} does not decode as UTF-8")]
    InvalidUtf8 { code: u32 },
}

/// Main error type for the simulator
#[derive(Error, Debug)]
pub enum UlsimError {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("unsupported command code: {0}")]
    UnsupportedCommand(u32),

    #[error("session error: {0}")]
    Session(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, UlsimError>;
