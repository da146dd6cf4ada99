//! Device connection boundary.

use std::fmt;
use std::future::Future;

use thiserror::Error;
use tokio::sync::broadcast;

/// Application port a packet is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PortNum {
    TextMessageApp = 1,
    AdminApp = 6,
}

/// Packet destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The node this client is attached to.
    Local,
    Broadcast,
    Node(u32),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Local => f.write_str("self"),
            Destination::Broadcast => f.write_str("broadcast"),
            Destination::Node(num) => write!(f, "!{num:08x}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Device not connected")]
    Disconnected,

    #[error("Failed to send packet: {0}")]
    Send(String),
}

/// The parts of a device connection used to fetch canned messages.
pub trait CannedMessageTransport: Send + Sync {
    /// Subscribe to canned-message notifications. Dropping the receiver ends
    /// the subscription.
    fn subscribe(&self) -> broadcast::Receiver<String>;

    /// Send a packet, resolving to the packet id once queued.
    fn send_packet(
        &self,
        payload: Vec<u8>,
        port: PortNum,
        destination: Destination,
    ) -> impl Future<Output = Result<u32, TransportError>> + Send;
}
