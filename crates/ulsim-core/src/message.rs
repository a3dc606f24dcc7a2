use crate::avp::{AvpSet, AvpValue};
use crate::constants::AVP_RESULT_CODE;
use std::sync::atomic::{AtomicU32, Ordering};

// Process-unique identifier sources for outbound requests
static NEXT_HOP_BY_HOP: AtomicU32 = AtomicU32::new(1);
static NEXT_END_TO_END: AtomicU32 = AtomicU32::new(1);

/// Application-level Diameter message
///
/// Carries the routing header fields and a typed attribute set. Wire-level
/// encoding belongs to the peer stack, not this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterMessage {
    pub command_code: u32,
    pub application_id: u32,
    pub hop_by_hop_id: u32,
    pub end_to_end_id: u32,
    pub is_request: bool,
    pub session_id: String,
    pub destination_realm: Option<String>,
    pub destination_host: Option<String>,
    pub avps: AvpSet,
}

impl DiameterMessage {
    /// Create an outbound request with fresh hop-by-hop and end-to-end ids
    pub fn request(
        command_code: u32,
        application_id: u32,
        session_id: impl Into<String>,
        destination_realm: impl Into<String>,
        destination_host: impl Into<String>,
    ) -> Self {
        Self {
            command_code,
            application_id,
            hop_by_hop_id: NEXT_HOP_BY_HOP.fetch_add(1, Ordering::Relaxed),
            end_to_end_id: NEXT_END_TO_END.fetch_add(1, Ordering::Relaxed),
            is_request: true,
            session_id: session_id.into(),
            destination_realm: Some(destination_realm.into()),
            destination_host: Some(destination_host.into()),
            avps: AvpSet::new(),
        }
    }

    /// Create the answer for this request with the given Result-Code
    ///
    /// Correlation ids and the session id are copied from the request;
    /// Result-Code (268) is the first attribute of the answer.
    pub fn answer(&self, result_code: u32) -> Self {
        let mut avps = AvpSet::new();
        // Result-Code is declared Unsigned32, the write cannot fail
        let _ = avps.write(AVP_RESULT_CODE, None, true, AvpValue::Unsigned32(result_code));

        Self {
            command_code: self.command_code,
            application_id: self.application_id,
            hop_by_hop_id: self.hop_by_hop_id,
            end_to_end_id: self.end_to_end_id,
            is_request: false,
            session_id: self.session_id.clone(),
            destination_realm: None,
            destination_host: None,
            avps,
        }
    }

    /// Result-Code of an answer, if present and well-typed
    pub fn result_code(&self) -> Option<u32> {
        self.avps.read_unsigned32(AVP_RESULT_CODE, None).ok()
    }
}
