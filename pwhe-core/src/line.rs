//! Line classification for interface configuration blocks.
//!
//! Every line of a block falls into exactly one [`Line`] category. The
//! converter matches on the category instead of re-running patterns, so adding
//! a rule means adding a variant and the compiler points at every match that
//! has to handle it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

pub const INTERFACE_PREFIX: &str = "interface ";
pub const SHUTDOWN: &str = "shutdown";
pub const DELIMITER: &str = "!";
pub const TAG_POP_DOUBLE: &str = "rewrite ingress tag pop 2 symmetric";

const SERVICE_POLICY_OUTPUT: &str = "service-policy output ";
const SECOND_DOT1Q: &str = "second-dot1q";

/// `interface <Type><rack>/<slot>/<module>/<port>.<subnum>[ l2transport]`
///
/// Digits are ASCII only so every capture is accepted by [`Tag::new`].
///
/// [`Tag::new`]: crate::tag::Tag::new
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^interface\s+(GigabitEthernet|TenGigE|Tengig|TwentyFiveGigE|FortyGigE|HundredGigE)[0-9]+/[0-9]+/[0-9]+/[0-9]+\.([0-9]+)(\s+l2transport)?",
    )
    .expect("invalid interface header pattern")
});

static ENCAPSULATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"encapsulation dot1q [0-9]+ second-dot1q ([0-9]+)")
        .expect("invalid encapsulation pattern")
});

/// Physical interface types the header grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InterfaceKind {
    GigabitEthernet,
    TenGigE,
    /// Lower-case spelling found in hand-edited configs.
    Tengig,
    TwentyFiveGigE,
    FortyGigE,
    HundredGigE,
}

impl InterfaceKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GigabitEthernet" => Some(Self::GigabitEthernet),
            "TenGigE" => Some(Self::TenGigE),
            "Tengig" => Some(Self::Tengig),
            "TwentyFiveGigE" => Some(Self::TwentyFiveGigE),
            "FortyGigE" => Some(Self::FortyGigE),
            "HundredGigE" => Some(Self::HundredGigE),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GigabitEthernet => "GigabitEthernet",
            Self::TenGigE => "TenGigE",
            Self::Tengig => "Tengig",
            Self::TwentyFiveGigE => "TwentyFiveGigE",
            Self::FortyGigE => "FortyGigE",
            Self::HundredGigE => "HundredGigE",
        }
    }
}

/// Fields extracted from a header that matches the known grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderParts {
    pub kind: InterfaceKind,
    pub sub_interface: String,
    /// Transport marker trailing the interface name with its leading
    /// whitespace as written, e.g. ` l2transport`.
    pub transport: Option<String>,
}

/// Category of one configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `interface ...`; `None` when the header does not match the known grammar.
    Header(Option<HeaderParts>),
    /// `encapsulation dot1q <outer> second-dot1q <inner>`.
    Encapsulation { indent: &'a str, inner: &'a str },
    ServicePolicyOutput,
    /// `rewrite ingress tag pop 2 symmetric`.
    TagPop,
    Shutdown,
    Other,
}

/// Parse a (trimmed) header line. Returns `None` for unknown types or shapes.
pub fn parse_header(line: &str) -> Option<HeaderParts> {
    let caps = HEADER_RE.captures(line.trim())?;
    let kind = InterfaceKind::from_name(caps.get(1)?.as_str())?;
    Some(HeaderParts {
        kind,
        sub_interface: caps.get(2)?.as_str().to_string(),
        transport: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

/// Inner tag of a double-tag encapsulation line, if the line is one.
pub fn encapsulation_inner(line: &str) -> Option<&str> {
    ENCAPSULATION_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify one line. Checks run in a fixed order and the first hit wins.
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with(INTERFACE_PREFIX) {
        let parts = parse_header(trimmed);
        if parts.is_none() {
            debug!(line = trimmed, "interface header not in a known format");
        }
        return Line::Header(parts);
    }

    if let Some(inner) = encapsulation_inner(trimmed) {
        return Line::Encapsulation {
            indent: leading_whitespace(line),
            inner,
        };
    }
    if trimmed.contains(SECOND_DOT1Q) {
        debug!(line = trimmed, "double-tag encapsulation not in a known format");
    }

    if trimmed.starts_with(SERVICE_POLICY_OUTPUT) {
        return Line::ServicePolicyOutput;
    }
    if trimmed.contains(TAG_POP_DOUBLE) {
        return Line::TagPop;
    }
    if trimmed == SHUTDOWN {
        return Line::Shutdown;
    }
    Line::Other
}

pub fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gigabit_header() {
        let parts = parse_header("interface GigabitEthernet0/0/0/14.1176049").expect("header");
        assert_eq!(parts.kind, InterfaceKind::GigabitEthernet);
        assert_eq!(parts.sub_interface, "1176049");
        assert_eq!(parts.transport, None);
    }

    #[test]
    fn parses_transport_marker() {
        let parts =
            parse_header("interface TenGigE0/1/0/3.1001200 l2transport").expect("header");
        assert_eq!(parts.kind, InterfaceKind::TenGigE);
        assert_eq!(parts.sub_interface, "1001200");
        assert_eq!(parts.transport.as_deref(), Some(" l2transport"));
    }

    #[test]
    fn transport_marker_keeps_its_spacing() {
        let parts =
            parse_header("interface TenGigE0/1/0/3.1001200\tl2transport").expect("header");
        assert_eq!(parts.transport.as_deref(), Some("\tl2transport"));
    }

    #[test]
    fn only_ascii_digits_count() {
        assert!(parse_header("interface GigabitEthernet0/0/0/14.\u{FF14}\u{FF19}").is_none());
        assert_eq!(
            classify("encapsulation dot1q 3513 second-dot1q \u{FF14}\u{FF19}"),
            Line::Other
        );
    }

    #[test]
    fn rejects_unknown_types_and_short_paths() {
        assert!(parse_header("interface Bundle-Ether10.100").is_none());
        assert!(parse_header("interface GigabitEthernet0/0/1.100").is_none());
        assert!(parse_header("interface GigabitEthernet0/0/0/1").is_none());
    }

    #[test]
    fn classifies_each_category() {
        assert!(matches!(
            classify("interface GigabitEthernet0/0/0/1.10"),
            Line::Header(Some(_))
        ));
        assert_eq!(classify("interface Loopback0"), Line::Header(None));
        assert_eq!(
            classify("  encapsulation dot1q 3513 second-dot1q 49"),
            Line::Encapsulation {
                indent: "  ",
                inner: "49"
            }
        );
        assert_eq!(
            classify(" service-policy output 2M_SHAPE_PARENT"),
            Line::ServicePolicyOutput
        );
        assert_eq!(classify(" rewrite ingress tag pop 2 symmetric"), Line::TagPop);
        assert_eq!(classify(" shutdown"), Line::Shutdown);
        assert_eq!(classify(" no shutdown"), Line::Other);
        assert_eq!(classify("encapsulation dot1q 100"), Line::Other);
        assert_eq!(classify("!"), Line::Other);
    }

    #[test]
    fn malformed_double_tag_line_is_other() {
        assert_eq!(
            classify("encapsulation dot1q any second-dot1q 49"),
            Line::Other
        );
    }

    #[test]
    fn service_policy_input_is_other() {
        assert_eq!(
            classify("service-policy input 2M_POLICE_DATA_IN"),
            Line::Other
        );
    }
}
