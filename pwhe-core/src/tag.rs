use std::fmt;

use serde::Serialize;

/// VLAN ids whose pseudowire carries a bridge domain instead of a tag-pop rewrite.
pub const RESERVED_VLANS: [&str; 2] = ["502", "504"];

const SUFFIX_WIDTH: usize = 3;

/// The single tag that keys a PW-Ether sub-interface.
///
/// Holds the digits exactly as captured from the configuration (the inner
/// `second-dot1q` value, or the sub-interface number as a fallback) and
/// renders them two ways:
///
/// - [`Tag::interface_suffix`] for the `PW-Ether <id>.<suffix>` name, zero
///   padded to three digits (`49` becomes `049`);
/// - [`Tag::vlan_id`] for `encapsulation dot1q <id>`, leading zeros stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Build a tag from a run of ASCII digits; anything else yields `None`.
    pub fn new(digits: impl Into<String>) -> Option<Self> {
        let digits = digits.into();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits))
    }

    /// Digits as captured.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn interface_suffix(&self) -> String {
        format!("{:0>width$}", self.0, width = SUFFIX_WIDTH)
    }

    pub fn vlan_id(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// True for the VLANs that drop their `rewrite ingress tag pop` line.
    /// Compares the digits as captured, so `0502` is not reserved.
    pub fn is_reserved(&self) -> bool {
        RESERVED_VLANS.contains(&self.0.as_str())
    }

    /// Last three digits of the interface suffix when they name a reserved
    /// bridge domain (`1176502` gives `502`).
    pub fn bridge_domain_suffix(&self) -> Option<String> {
        let suffix = self.interface_suffix();
        let tail = &suffix[suffix.len() - SUFFIX_WIDTH..];
        RESERVED_VLANS.contains(&tail).then(|| tail.to_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.interface_suffix())
    }
}
