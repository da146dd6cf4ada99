//! # meshcfg-device
//!
//! Device-side collaborators for configuration backup and restore.
//!
//! The only exchange that needs the device itself is fetching canned
//! messages, which the node keeps outside its module config. Everything runs
//! against the [`CannedMessageTransport`] trait so hosts can plug in their own
//! connection (serial, BLE, HTTP).

pub mod admin;
pub mod canned;
pub mod transport;

pub use admin::{decode_canned_messages_response, AdminMessage};
pub use canned::{fetch_canned_messages, FetchConfig, DEFAULT_FETCH_TIMEOUT};
pub use transport::{CannedMessageTransport, Destination, PortNum, TransportError};
