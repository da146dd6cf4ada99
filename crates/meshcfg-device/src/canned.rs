//! Canned-message fetch.
//!
//! Canned messages are not part of the module config; the node returns them
//! on request as a single `|`-joined string. Each attempt subscribes to the
//! notification stream, sends one admin request and waits for the first
//! response, the timeout, or a send failure, whichever comes first.

use std::time::Duration;

use meshcfg_core::model::split_canned_messages;
use prost::Message;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::admin::AdminMessage;
use crate::transport::{CannedMessageTransport, Destination, PortNum};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Extra attempts after one that yields no data.
    pub retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            retries: 1,
        }
    }
}

/// Fetch the canned messages of the local node.
///
/// Returns an empty list when there is no connection or every attempt comes
/// back empty.
pub async fn fetch_canned_messages<T: CannedMessageTransport>(
    transport: Option<&T>,
    config: &FetchConfig,
) -> Vec<String> {
    let Some(transport) = transport else {
        debug!("No device connection, skipping canned message fetch");
        return Vec::new();
    };

    for attempt in 1..=config.retries.saturating_add(1) {
        let joined = request_once(transport, config.timeout).await;
        let messages = split_canned_messages(&joined);
        if !messages.is_empty() {
            debug!("Fetched {} canned messages", messages.len());
            return messages;
        }
        debug!("Canned message attempt {} returned no data", attempt);
    }
    Vec::new()
}

async fn request_once<T: CannedMessageTransport>(transport: &T, timeout: Duration) -> String {
    let mut responses = transport.subscribe();
    let request = AdminMessage::canned_messages_request().encode_to_vec();

    let exchange = async move {
        if let Err(e) = transport
            .send_packet(request, PortNum::AdminApp, Destination::Local)
            .await
        {
            warn!("Failed to request canned messages: {}", e);
            return String::new();
        }
        loop {
            match responses.recv().await {
                Ok(data) => return data,
                Err(RecvError::Lagged(n)) => warn!("Canned message listener lagged {} messages", n),
                Err(RecvError::Closed) => return String::new(),
            }
        }
    };

    // the receiver lives inside `exchange` and is dropped with it on every path
    match tokio::time::timeout(timeout, exchange).await {
        Ok(data) => data,
        Err(_) => {
            debug!("Canned message request timed out after {:?}", timeout);
            String::new()
        }
    }
}
