//! Interface block conversion.
//!
//! Turns double-tagged physical sub-interfaces into PW-Ether interfaces:
//!
//! 1. **Tag**: resolved once per block ([`InterfaceBlock::tag`]) and used for
//!    every rewrite in that block
//! 2. **Header**: `interface PW-Ether <target>.<tag>`, transport marker kept
//! 3. **Encapsulation**: `encapsulation dot1q <tag>`
//! 4. **Tag pop**: dropped for reserved VLANs, otherwise `pop 2` becomes `pop 1`
//! 5. **Shutdown**: every converted block comes up administratively down
//! 6. **Delimiter**: every converted block ends with `!`
//!
//! `service-policy output` and every other command pass through untouched.
//! Lines that do not match a known pattern are copied verbatim instead of
//! failing the conversion.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::block::{pw_ether_header, segment, InterfaceBlock};
use crate::bridge::{bridge_members, render_bridge_config, BridgeMember, BridgeSettings};
use crate::error::{validate, ConvertError};
use crate::line::{classify, InterfaceKind, Line, DELIMITER, SHUTDOWN};
use crate::report::{migration_report, MigrationReport};
use crate::tag::Tag;

/// Result of converting one block, with a record of what was changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedBlock {
    pub original_header: String,
    /// Physical interface type, `None` when the header was left as is.
    pub kind: Option<InterfaceKind>,
    pub tag: Option<Tag>,
    pub header_converted: bool,
    pub pop_dropped: usize,
    pub pop_degraded: usize,
    pub shutdown_inserted: bool,
    pub delimiter_appended: bool,
    pub lines: Vec<String>,
}

impl ConvertedBlock {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for ConvertedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Convert one block for PW-Ether pool `target_id`.
pub fn convert_block(block: &InterfaceBlock, target_id: &str) -> ConvertedBlock {
    let tag = block.tag();
    let mut out = ConvertedBlock {
        original_header: block.header().trim().to_string(),
        kind: None,
        tag: tag.clone(),
        header_converted: false,
        pop_dropped: 0,
        pop_degraded: 0,
        shutdown_inserted: false,
        delimiter_appended: false,
        lines: Vec::with_capacity(block.body().len() + 3),
    };

    for line in block.lines() {
        let rewritten = match (classify(line), tag.as_ref()) {
            (Line::Header(Some(parts)), Some(tag)) => {
                out.header_converted = true;
                out.kind = Some(parts.kind);
                Some(pw_ether_header(target_id, tag, &parts))
            }
            (Line::Encapsulation { indent, .. }, Some(tag)) => {
                Some(format!("{indent}encapsulation dot1q {}", tag.vlan_id()))
            }
            (Line::TagPop, Some(tag)) if tag.is_reserved() => {
                out.pop_dropped += 1;
                None
            }
            (Line::TagPop, _) => {
                out.pop_degraded += 1;
                Some(line.replace("pop 2", "pop 1"))
            }
            (
                Line::Header(_)
                | Line::Encapsulation { .. }
                | Line::ServicePolicyOutput
                | Line::Shutdown
                | Line::Other,
                _,
            ) => Some(line.to_string()),
        };
        out.lines.extend(rewritten);
    }

    out.shutdown_inserted = ensure_shutdown(&mut out.lines);
    out.delimiter_appended = ensure_delimiter(&mut out.lines);

    debug!(
        header = %out.original_header,
        kind = out.kind.map(InterfaceKind::as_str).unwrap_or("-"),
        tag = tag.as_ref().map(Tag::as_str).unwrap_or("-"),
        converted = out.header_converted,
        pop_dropped = out.pop_dropped,
        shutdown_inserted = out.shutdown_inserted,
        "converted block"
    );
    out
}

/// Insert `shutdown` before the first `!` (or at the end) unless present.
fn ensure_shutdown(lines: &mut Vec<String>) -> bool {
    if lines.iter().any(|line| line.trim() == SHUTDOWN) {
        return false;
    }
    match lines.iter().position(|line| line.trim() == DELIMITER) {
        Some(idx) => lines.insert(idx, SHUTDOWN.to_string()),
        None => lines.push(SHUTDOWN.to_string()),
    }
    true
}

fn ensure_delimiter(lines: &mut Vec<String>) -> bool {
    if lines.last().map(|line| line.trim()) == Some(DELIMITER) {
        return false;
    }
    lines.push(DELIMITER.to_string());
    true
}

/// A converted document: rewritten blocks, cutover script, bridge domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub target_id: String,
    pub blocks: Vec<ConvertedBlock>,
    pub report: MigrationReport,
    pub bridge_members: Vec<BridgeMember>,
    pub bridge_config: Option<String>,
}

impl Conversion {
    /// Converted blocks separated by a blank line.
    pub fn config_text(&self) -> String {
        self.blocks
            .iter()
            .map(ConvertedBlock::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Converted blocks, a blank line, then the migration report.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.config_text(), self.report)
    }
}

/// Convert a whole configuration document.
///
/// # Errors
///
/// Returns [`ConvertError::Validation`] when `old_config` or `target_id` is
/// blank. Nothing else in the document can make the conversion fail.
pub fn convert_document(
    old_config: &str,
    target_id: &str,
    bridge: &BridgeSettings,
) -> Result<Conversion, ConvertError> {
    validate(old_config, target_id)?;
    let target_id = target_id.trim();

    let blocks = segment(old_config);
    let converted: Vec<ConvertedBlock> = blocks
        .iter()
        .map(|block| convert_block(block, target_id))
        .collect();
    let report = migration_report(&blocks, target_id);
    let members = bridge_members(&blocks, target_id);
    let bridge_config = render_bridge_config(&members, bridge);

    info!(
        target_id,
        blocks = converted.len(),
        converted = converted.iter().filter(|b| b.header_converted).count(),
        bridge_domains = members.len(),
        "converted configuration"
    );

    Ok(Conversion {
        target_id: target_id.to_string(),
        blocks: converted,
        report,
        bridge_members: members,
        bridge_config,
    })
}

/// Convert `old_config` for PW-Ether pool `target_id` and return the
/// converted blocks followed by the migration report.
pub fn convert(old_config: &str, target_id: &str) -> Result<String, ConvertError> {
    convert_document(old_config, target_id, &BridgeSettings::default())
        .map(|conversion| conversion.render())
}
