use std::fs;

use anyhow::{Context, Result};
use pwhe_convert::summary::{render_colored, summarize, ConversionSummary};
use pwhe_core::{convert_document, BridgeSettings, Conversion};
use serde::Serialize;

use crate::cli::{BridgeArgs, ConvertArgs, OutputFormat, ReportArgs};
use crate::input::{ensure_output_not_input, read_input, resolve_settings};

#[derive(Debug, Serialize)]
struct ConvertOutput<'a> {
    summary: ConversionSummary,
    conversion: &'a Conversion,
}

/// Convert one config and write the rewritten blocks (plus report/bridge
/// sections as requested) to the output file or stdout.
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        ensure_output_not_input(output, &args.input)?;
    }
    let settings = resolve_settings(args.settings.as_deref())?;
    let raw = read_input(&args.input)?;
    let conversion = convert_document(&raw, &args.pw_ether_id, &settings.bridge)?;
    let summary = summarize(&conversion);

    let rendered = match args.format {
        OutputFormat::Text => render_sections(&conversion, !args.no_report, args.bridge),
        OutputFormat::Json => serde_json::to_string_pretty(&ConvertOutput {
            summary,
            conversion: &conversion,
        })?,
    };

    match &args.output {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write output {}", path.display()))?,
        None => println!("{rendered}"),
    }

    if !args.quiet {
        eprintln!("{}", render_colored(summary));
    }
    Ok(())
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let conversion = convert_document(&raw, &args.pw_ether_id, &BridgeSettings::default())?;
    println!("{}", conversion.report);
    Ok(())
}

pub fn run_bridge(args: BridgeArgs) -> Result<()> {
    let settings = resolve_settings(args.settings.as_deref())?;
    let raw = read_input(&args.input)?;
    let conversion = convert_document(&raw, &args.pw_ether_id, &settings.bridge)?;
    match &conversion.bridge_config {
        Some(config) => println!("{config}"),
        None => eprintln!("no bridge domains required"),
    }
    Ok(())
}

fn render_sections(conversion: &Conversion, with_report: bool, with_bridge: bool) -> String {
    let mut sections = vec![conversion.config_text()];
    if with_report {
        sections.push(conversion.report.render());
    }
    if with_bridge {
        sections.extend(conversion.bridge_config.clone());
    }
    sections.join("\n\n")
}
