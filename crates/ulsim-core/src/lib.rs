// Error types module
pub mod error;

// Typed attribute model and codec
pub mod avp;

// Diameter message value type
pub mod message;

// Diagnostic tree rendering
pub mod render;

// Abstract peer stack seam
pub mod stack;

// Protocol constants
pub mod constants;

// Re-export commonly used types
pub use avp::{Avp, AvpSet, AvpValue};
pub use error::{CodecError, Result, UlsimError};
pub use message::DiameterMessage;
pub use render::{render, render_message};
pub use stack::PeerStack;
