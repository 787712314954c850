//! Hosting surfaces for the PW-Ether migration converter.
//!
//! All conversion rules live in `pwhe-core`; this crate only adapts them to
//! the places they are used from:
//!
//! - [`api`]: JSON request handler with the web service's contract
//! - [`settings`]: TOML settings (bridge-domain naming and storm control)
//! - [`summary`]: per-run counts for terminal output
//!
//! The `pwhe-convert` binary wires these into a CLI.

pub mod api;
pub mod settings;
pub mod summary;
