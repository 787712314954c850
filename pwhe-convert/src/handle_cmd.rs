use anyhow::{bail, Result};
use pwhe_convert::api::{Handler, Response};

use crate::cli::HandleArgs;
use crate::input::{read_input, resolve_settings};

pub fn run_handle(args: HandleArgs) -> Result<()> {
    let settings = resolve_settings(args.settings.as_deref())?;
    let body = read_input(&args.request)?;
    let response = Handler::new(settings.bridge).convert_json(&body);
    print_response(&response)
}

pub fn run_health() -> Result<()> {
    print_response(&Handler::default().health())
}

fn print_response(response: &Response) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    if !response.is_success() {
        bail!("request failed with status {}", response.status);
    }
    Ok(())
}
