/// Primitive AVP kinds supported by the simulator
///
/// Grouped values nest a full attribute set; everything UTF-8 flavoured
/// travels as OctetString and is decoded by the reader that needs text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvpKind {
    Integer32,
    Integer64,
    Unsigned32,
    Unsigned64,
    Float32,
    OctetString,
    Grouped,
}

impl std::fmt::Display for AvpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer32 => "Integer32",
            Self::Integer64 => "Integer64",
            Self::Unsigned32 => "Unsigned32",
            Self::Unsigned64 => "Unsigned64",
            Self::Float32 => "Float32",
            Self::OctetString => "OctetString",
            Self::Grouped => "Grouped",
        };
        write!(f, "{name}")
    }
}
