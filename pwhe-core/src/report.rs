use std::fmt;

use serde::Serialize;

use crate::block::InterfaceBlock;

pub const NO_SHUTDOWN_HEADING: &str = "### no shutdown (from config) ###";
pub const SHUTDOWN_HEADING: &str = "### shutdown (from list) ###";

/// Cutover script: bring the new PW-Ether interfaces up, take the old
/// sub-interfaces down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Replacement headers, one per convertible block, in input order.
    pub new_interfaces: Vec<String>,
    /// Original headers of every block, convertible or not.
    pub old_interfaces: Vec<String>,
}

impl MigrationReport {
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        out.push(NO_SHUTDOWN_HEADING.to_string());
        for header in &self.new_interfaces {
            out.push(header.clone());
            out.push(" no shutdown".to_string());
        }
        out.push(String::new());
        out.push(SHUTDOWN_HEADING.to_string());
        for header in &self.old_interfaces {
            out.push(header.clone());
            out.push(" shutdown".to_string());
        }
        out.join("\n")
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the cutover script for `blocks`.
///
/// Blocks whose header could not be converted are left out of the no-shutdown
/// section but always appear in the shutdown section.
pub fn migration_report(blocks: &[InterfaceBlock], target_id: &str) -> MigrationReport {
    MigrationReport {
        new_interfaces: blocks
            .iter()
            .filter_map(|block| block.pw_ether_header(target_id))
            .collect(),
        old_interfaces: blocks
            .iter()
            .map(|block| block.header().trim().to_string())
            .collect(),
    }
}
