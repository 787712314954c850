use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::line::{encapsulation_inner, parse_header, HeaderParts, INTERFACE_PREFIX};
use crate::tag::Tag;

/// One `interface ...` stanza: the header line and the commands under it.
///
/// Blocks are read-only after segmentation; the converter and the report
/// generator derive new text from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceBlock {
    header: String,
    body: Vec<String>,
}

impl InterfaceBlock {
    pub fn new(header: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            header: header.into(),
            body,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Header followed by the body, in input order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.body.iter().map(String::as_str))
    }

    pub fn header_parts(&self) -> Option<HeaderParts> {
        parse_header(&self.header)
    }

    /// Inner tag of the first double-tag encapsulation line in the body.
    pub fn encapsulation_tag(&self) -> Option<Tag> {
        self.body
            .iter()
            .find_map(|line| encapsulation_inner(line.trim()).and_then(Tag::new))
    }

    /// Tag keying the PW-Ether interface: the first inner `second-dot1q`
    /// value, else the sub-interface number from the header.
    pub fn tag(&self) -> Option<Tag> {
        self.encapsulation_tag().or_else(|| {
            self.header_parts()
                .and_then(|parts| Tag::new(parts.sub_interface))
        })
    }

    /// `PW-Ether <target>.<suffix>` for a convertible header.
    pub fn pw_ether_name(&self, target_id: &str) -> Option<String> {
        self.header_parts()?;
        let tag = self.tag()?;
        Some(pw_ether_name(target_id, &tag))
    }

    /// Full replacement header line, transport marker included.
    pub fn pw_ether_header(&self, target_id: &str) -> Option<String> {
        let parts = self.header_parts()?;
        let tag = self.tag()?;
        Some(pw_ether_header(target_id, &tag, &parts))
    }
}

impl fmt::Display for InterfaceBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;
        for line in &self.body {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

pub(crate) fn pw_ether_name(target_id: &str, tag: &Tag) -> String {
    format!("PW-Ether {target_id}.{tag}")
}

pub(crate) fn pw_ether_header(target_id: &str, tag: &Tag, parts: &HeaderParts) -> String {
    let mut header = format!("{INTERFACE_PREFIX}{}", pw_ether_name(target_id, tag));
    if let Some(transport) = &parts.transport {
        header.push_str(transport);
    }
    header
}

/// Split configuration text into interface blocks.
///
/// Lines are trimmed and blank lines dropped. Each `interface ` line opens a
/// new block; anything before the first one is discarded. `!` does not end a
/// block, only the next `interface ` line or the end of input does.
pub fn segment(text: &str) -> Vec<InterfaceBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<InterfaceBlock> = None;
    let mut preamble = 0usize;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with(INTERFACE_PREFIX) {
            if let Some(done) = current.take() {
                blocks.push(done);
            }
            current = Some(InterfaceBlock::new(line, Vec::new()));
        } else if let Some(block) = current.as_mut() {
            block.body.push(line.to_string());
        } else {
            preamble += 1;
        }
    }
    blocks.extend(current);

    if preamble > 0 {
        debug!(lines = preamble, "discarded lines before first interface");
    }
    debug!(blocks = blocks.len(), "segmented configuration");
    blocks
}
