use crate::error::CodecError;
use bytes::Bytes;
use ulsim_dict::{AvpKind, StandardAvp};

/// Typed AVP value
///
/// Grouped values nest a full attribute set. Text-valued AVPs travel as
/// OctetString; readers that need text use `read_utf8`.
#[derive(Debug, Clone, PartialEq)]
pub enum AvpValue {
    Integer32(i32),
    Integer64(i64),
    Unsigned32(u32),
    Unsigned64(u64),
    Float32(f32),
    OctetString(Bytes),
    Grouped(AvpSet),
}

impl AvpValue {
    /// Kind tag of the stored value
    pub fn kind(&self) -> AvpKind {
        match self {
            Self::Integer32(_) => AvpKind::Integer32,
            Self::Integer64(_) => AvpKind::Integer64,
            Self::Unsigned32(_) => AvpKind::Unsigned32,
            Self::Unsigned64(_) => AvpKind::Unsigned64,
            Self::Float32(_) => AvpKind::Float32,
            Self::OctetString(_) => AvpKind::OctetString,
            Self::Grouped(_) => AvpKind::Grouped,
        }
    }
}

/// Single attribute entry
#[derive(Debug, Clone, PartialEq)]
pub struct Avp {
    pub code: u32,
    pub vendor_id: Option<u32>,
    pub mandatory: bool,
    pub value: AvpValue,
}

/// Ordered attribute set
///
/// Order is preserved for wire fidelity; lookup is by code/vendor pair and
/// returns the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvpSet {
    avps: Vec<Avp>,
}

impl AvpSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed attribute
    ///
    /// When the code/vendor pair is known to the dictionary, the value kind
    /// must match the declared kind. Unknown attributes are appended as-is.
    pub fn write(
        &mut self,
        code: u32,
        vendor_id: Option<u32>,
        mandatory: bool,
        value: AvpValue,
    ) -> Result<(), CodecError> {
        if let Some(declared) = StandardAvp::from_code(code, vendor_id) {
            if declared.kind() != value.kind() {
                return Err(CodecError::AttributeTypeMismatch {
                    code,
                    expected: declared.kind(),
                    found: value.kind(),
                });
            }
        }
        self.avps.push(Avp {
            code,
            vendor_id,
            mandatory,
            value,
        });
        Ok(())
    }

    /// Find an attribute by code and vendor id
    pub fn get(&self, code: u32, vendor_id: Option<u32>) -> Option<&Avp> {
        self.avps
            .iter()
            .find(|avp| avp.code == code && avp.vendor_id == vendor_id)
    }

    /// Find an attribute, failing if absent
    pub fn read(&self, code: u32, vendor_id: Option<u32>) -> Result<&Avp, CodecError> {
        self.get(code, vendor_id)
            .ok_or(CodecError::AttributeNotFound { code, vendor_id })
    }

    pub fn read_integer32(&self, code: u32, vendor_id: Option<u32>) -> Result<i32, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::Integer32(v) => Ok(*v),
            other => Err(Self::mismatch(code, AvpKind::Integer32, other)),
        }
    }

    pub fn read_integer64(&self, code: u32, vendor_id: Option<u32>) -> Result<i64, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::Integer64(v) => Ok(*v),
            other => Err(Self::mismatch(code, AvpKind::Integer64, other)),
        }
    }

    pub fn read_unsigned32(&self, code: u32, vendor_id: Option<u32>) -> Result<u32, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::Unsigned32(v) => Ok(*v),
            other => Err(Self::mismatch(code, AvpKind::Unsigned32, other)),
        }
    }

    pub fn read_unsigned64(&self, code: u32, vendor_id: Option<u32>) -> Result<u64, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::Unsigned64(v) => Ok(*v),
            other => Err(Self::mismatch(code, AvpKind::Unsigned64, other)),
        }
    }

    pub fn read_float32(&self, code: u32, vendor_id: Option<u32>) -> Result<f32, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::Float32(v) => Ok(*v),
            other => Err(Self::mismatch(code, AvpKind::Float32, other)),
        }
    }

    pub fn read_octets(&self, code: u32, vendor_id: Option<u32>) -> Result<&Bytes, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::OctetString(v) => Ok(v),
            other => Err(Self::mismatch(code, AvpKind::OctetString, other)),
        }
    }

    /// Read an octet string attribute and decode it as UTF-8 text
    pub fn read_utf8(&self, code: u32, vendor_id: Option<u32>) -> Result<String, CodecError> {
        let octets = self.read_octets(code, vendor_id)?;
        String::from_utf8(octets.to_vec()).map_err(|_| CodecError::InvalidUtf8 { code })
    }

    pub fn read_grouped(&self, code: u32, vendor_id: Option<u32>) -> Result<&AvpSet, CodecError> {
        match &self.read(code, vendor_id)?.value {
            AvpValue::Grouped(v) => Ok(v),
            other => Err(Self::mismatch(code, AvpKind::Grouped, other)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Avp> {
        self.avps.iter()
    }

    pub fn len(&self) -> usize {
        self.avps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avps.is_empty()
    }

    fn mismatch(code: u32, expected: AvpKind, found: &AvpValue) -> CodecError {
        CodecError::AttributeTypeMismatch {
            code,
            expected,
            found: found.kind(),
        }
    }
}
