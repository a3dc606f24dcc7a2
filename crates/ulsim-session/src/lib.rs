// Session lifecycle types
pub mod session;

// Pending-exchange correlation
pub mod correlator;

pub use correlator::SessionCorrelator;
pub use session::{ExchangeCallback, PendingRequest, SessionState, TerminalEvent};
