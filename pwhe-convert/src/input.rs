use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pwhe_convert::settings::{default_settings, load_settings, Settings};

const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read the whole input, from stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn resolve_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(load_settings(path)?),
        None => Ok(default_settings()),
    }
}

/// Refuse to write the converted config over the file it was read from.
///
/// An output that does not exist yet cannot be the input, so only existing
/// files are compared, after resolving links and relative segments.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    if is_stdin(input) || !output.exists() {
        return Ok(());
    }
    let resolve = |path: &Path| {
        fs::canonicalize(path).with_context(|| format!("failed to resolve {}", path.display()))
    };
    if resolve(output)? == resolve(input)? {
        bail!(
            "refusing to overwrite source file: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}
