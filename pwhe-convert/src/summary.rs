use colored::Colorize;
use pwhe_core::Conversion;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub blocks: usize,
    pub converted: usize,
    pub passthrough: usize,
    pub pops_degraded: usize,
    pub pops_dropped: usize,
    pub shutdowns_inserted: usize,
    pub bridge_domains: usize,
}

pub fn summarize(conversion: &Conversion) -> ConversionSummary {
    let blocks = &conversion.blocks;
    let converted = blocks.iter().filter(|b| b.header_converted).count();
    ConversionSummary {
        blocks: blocks.len(),
        converted,
        passthrough: blocks.len() - converted,
        pops_degraded: blocks.iter().map(|b| b.pop_degraded).sum(),
        pops_dropped: blocks.iter().map(|b| b.pop_dropped).sum(),
        shutdowns_inserted: blocks.iter().filter(|b| b.shutdown_inserted).count(),
        bridge_domains: conversion.bridge_members.len(),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary blocks={} converted={} passthrough={} pop_degraded={} pop_dropped={} shutdown_inserted={} bridge_domains={}",
        summary.blocks,
        summary.converted,
        summary.passthrough,
        summary.pops_degraded,
        summary.pops_dropped,
        summary.shutdowns_inserted,
        summary.bridge_domains
    )
}

/// Render the summary for a terminal, flagging blocks that were not converted.
pub fn render_colored(summary: ConversionSummary) -> String {
    let line = render(summary).cyan().to_string();
    if summary.passthrough == 0 {
        return line;
    }
    format!(
        "{line}\n{}",
        format!(
            "warning: {} block(s) kept their original header; review them by hand",
            summary.passthrough
        )
        .yellow()
    )
}
