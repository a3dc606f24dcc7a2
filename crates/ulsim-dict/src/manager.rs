use crate::kind::AvpKind;
use crate::standard::StandardAvp;

/// AVP information returned by dictionary lookup
#[derive(Debug, Clone)]
pub struct AvpInfo {
    pub code: u32,
    pub vendor_id: Option<u32>,
    pub name: &'static str,
    pub kind: AvpKind,
}

/// Dictionary for AVP lookup, used by diagnostic rendering
pub struct AvpDictionary {
    // Static standard dictionary only; no dynamic entries needed here
}

impl AvpDictionary {
    pub fn new() -> Self {
        Self {}
    }

    /// Lookup AVP information by code and vendor id
    pub fn lookup(&self, code: u32, vendor_id: Option<u32>) -> Option<AvpInfo> {
        StandardAvp::from_code(code, vendor_id).map(|std_avp| AvpInfo {
            code,
            vendor_id,
            name: std_avp.name(),
            kind: std_avp.kind(),
        })
    }
}

impl Default for AvpDictionary {
    fn default() -> Self {
        Self::new()
    }
}
