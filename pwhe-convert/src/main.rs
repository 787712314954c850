use anyhow::Result;
use clap::Parser;

mod cli;
mod convert_cmd;
mod handle_cmd;
mod input;
mod logging;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert_cmd::run_convert(args),
        Command::Report(args) => convert_cmd::run_report(args),
        Command::Bridge(args) => convert_cmd::run_bridge(args),
        Command::Handle(args) => handle_cmd::run_handle(args),
        Command::Health => handle_cmd::run_health(),
    }
}
