//! # meshcfg-core
//!
//! Core Meshtastic configuration model.
//!
//! This crate provides:
//! - The canonical value tree shared by the document codec and the diff engine
//! - Typed config, module config and channel messages
//! - Canonicalization (typed message to pruned value) and reconstruction
//! - Diff and selective merge between a live configuration and a backup
//!
//! This crate is intentionally runtime-agnostic and contains no async or I/O
//! code.

pub mod bytes;
pub mod canonical;
pub mod config;
pub mod diff;
pub mod model;
pub mod module_config;
pub mod policy;
pub mod value;

pub use canonical::{canonicalize, reconstruct, to_json, ReconstructError};
pub use config::{ConfigSection, ConfigVariant, LocalConfig};
pub use diff::{apply, apply_diff, compute_diff, DiffResult, UpdateCommand, UpdateSink};
pub use model::*;
pub use module_config::{LocalModuleConfig, ModuleConfigSection, ModuleConfigVariant};
pub use value::{Mapping, Value};
