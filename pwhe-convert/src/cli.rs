use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pwhe-convert")]
#[command(about = "Convert QinQ sub-interfaces to PW-Ether interfaces and build cutover scripts")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides it.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert interface blocks and append the migration report.
    Convert(ConvertArgs),
    /// Print only the cutover script (no shutdown / shutdown lists).
    Report(ReportArgs),
    /// Print only the L2VPN bridge configuration for tags ending in 502/504.
    Bridge(BridgeArgs),
    /// Answer one JSON conversion request the way the web service does.
    Handle(HandleArgs),
    /// Print the service health payload.
    Health,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Config file with the old interface blocks (`-` reads stdin).
    pub input: PathBuf,
    /// PW-Ether interface number the new sub-interfaces hang off.
    #[arg(long)]
    pub pw_ether_id: String,
    /// Write the result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Append the L2VPN bridge configuration when one is needed.
    #[arg(long)]
    pub bridge: bool,
    /// Leave out the migration report.
    #[arg(long)]
    pub no_report: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Settings TOML overriding the built-in bridge naming.
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Do not print the summary line.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Config file with the old interface blocks (`-` reads stdin).
    pub input: PathBuf,
    #[arg(long)]
    pub pw_ether_id: String,
}

#[derive(Parser, Debug)]
pub struct BridgeArgs {
    /// Config file with the old interface blocks (`-` reads stdin).
    pub input: PathBuf,
    #[arg(long)]
    pub pw_ether_id: String,
    /// Settings TOML overriding the built-in bridge naming.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct HandleArgs {
    /// JSON request body (`-` reads stdin).
    #[arg(default_value = "-")]
    pub request: PathBuf,
    /// Settings TOML overriding the built-in bridge naming.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}
