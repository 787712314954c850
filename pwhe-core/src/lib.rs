//! Conversion engine for migrating QinQ sub-interfaces to PW-Ether interfaces.
//!
//! The pipeline is [`segment`] → [`convert_block`] per block →
//! [`migration_report`], with [`bridge_config`] as an optional extra artifact.
//! [`convert`] runs all of it and is the one entry point every host uses.
//!
//! Everything here is synchronous and pure over in-memory text.

pub mod block;
pub mod bridge;
pub mod convert;
pub mod error;
pub mod line;
pub mod report;
pub mod tag;

pub use block::{segment, InterfaceBlock};
pub use bridge::{
    bridge_config, bridge_members, render_bridge_config, BridgeMember, BridgeSettings,
};
pub use convert::{convert, convert_block, convert_document, Conversion, ConvertedBlock};
pub use error::{ConvertError, ValidationError};
pub use line::{classify, HeaderParts, InterfaceKind, Line};
pub use report::{migration_report, MigrationReport};
pub use tag::Tag;
