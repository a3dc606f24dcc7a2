use crate::error::Result;
use crate::message::DiameterMessage;
use async_trait::async_trait;

/// Abstract peer stack seam
///
/// The real Diameter transport (peer handshake, routing, timers, wire
/// encoding) lives behind this trait. The stack owns the timeout window for
/// each sent request and delivers exactly one terminal event per request
/// through the session correlator.
#[async_trait]
pub trait PeerStack: Send + Sync {
    /// Hand an outbound message to the stack
    ///
    /// Routing or overload failures surface as `UlsimError::Transport`.
    async fn send(&self, request: DiameterMessage) -> Result<()>;
}
