//! # meshcfg-protocol
//!
//! Backup document format and channel share URLs.
//!
//! This crate defines:
//! - The block text format used for backup files (emitter and parser)
//! - The binary channel-set wire messages and the share URL codec
//! - Backup assembly and validation on top of the core model

pub mod backup;
pub mod codec;
pub mod document;
pub mod messages;

pub use backup::{build_backup, parse_backup, BackupErrorKind, BackupErrors};
pub use codec::{decode_share_url, encode_share_url, ChannelShare, ChannelUrlError, ShareUrlOptions};
pub use document::{ByteStyle, EmitOptions, ParseError, ParseErrorReason};
