use crate::avp::{AvpSet, AvpValue};
use crate::message::DiameterMessage;
use std::fmt::Write as _;
use ulsim_dict::AvpDictionary;

/// Render an attribute set as an indented diagnostic tree
///
/// Diagnostic only: output never affects the protocol outcome. Attributes
/// unknown to the dictionary are printed by code alone and never descended
/// into, even when the stored value nests.
pub fn render(set: &AvpSet, dict: &AvpDictionary) -> String {
    let mut out = String::new();
    render_level(set, dict, 0, &mut out);
    out
}

/// Render a message header summary followed by its attribute tree
pub fn render_message(msg: &DiameterMessage, dict: &AvpDictionary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} E2E:{} HBH:{} AppID:{}",
        if msg.is_request { "Request" } else { "Answer" },
        msg.command_code,
        msg.end_to_end_id,
        msg.hop_by_hop_id,
        msg.application_id
    );
    let _ = writeln!(out, "AVPS[{}]:", msg.avps.len());
    render_level(&msg.avps, dict, 0, &mut out);
    out
}

fn render_level(set: &AvpSet, dict: &AvpDictionary, level: usize, out: &mut String) {
    let prefix = "  ".repeat(level);

    for avp in set.iter() {
        let vendor = avp.vendor_id.unwrap_or(0);

        let Some(info) = dict.lookup(avp.code, avp.vendor_id) else {
            let _ = writeln!(out, "{prefix}<avp code=\"{}\" vendor=\"{vendor}\" />", avp.code);
            continue;
        };

        match &avp.value {
            AvpValue::Grouped(group) => {
                let _ = writeln!(
                    out,
                    "{prefix}<avp name=\"{}\" code=\"{}\" vendor=\"{vendor}\">",
                    info.name, avp.code
                );
                render_level(group, dict, level + 1, out);
                let _ = writeln!(out, "{prefix}</avp>");
            }
            value => {
                let _ = writeln!(
                    out,
                    "{prefix}<avp name=\"{}\" code=\"{}\" vendor=\"{vendor}\" value=\"{}\" />",
                    info.name,
                    avp.code,
                    format_value(value)
                );
            }
        }
    }
}

fn format_value(value: &AvpValue) -> String {
    match value {
        AvpValue::Integer32(v) => v.to_string(),
        AvpValue::Integer64(v) => v.to_string(),
        AvpValue::Unsigned32(v) => v.to_string(),
        AvpValue::Unsigned64(v) => v.to_string(),
        AvpValue::Float32(v) => v.to_string(),
        AvpValue::OctetString(v) => String::from_utf8_lossy(v).to_string(),
        // Handled by the caller; grouped values never reach here
        AvpValue::Grouped(_) => String::new(),
    }
}
