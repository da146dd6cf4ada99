//! Admin wire messages exchanged with the local node.
//!
//! Only the canned-message variants of the admin payload are modelled; other
//! variants decode as an empty payload.

use prost::Message;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdminMessage {
    #[prost(oneof = "admin_message::PayloadVariant", tags = "10, 11")]
    pub payload_variant: Option<admin_message::PayloadVariant>,
}

pub mod admin_message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PayloadVariant {
        /// Ask the node for its canned messages.
        #[prost(bool, tag = "10")]
        GetCannedMessageModuleMessagesRequest(bool),
        /// The node's canned messages, `|`-joined.
        #[prost(string, tag = "11")]
        GetCannedMessageModuleMessagesResponse(String),
    }
}

impl AdminMessage {
    pub fn canned_messages_request() -> Self {
        Self {
            payload_variant: Some(
                admin_message::PayloadVariant::GetCannedMessageModuleMessagesRequest(true),
            ),
        }
    }

    pub fn canned_messages_response(messages: impl Into<String>) -> Self {
        Self {
            payload_variant: Some(
                admin_message::PayloadVariant::GetCannedMessageModuleMessagesResponse(
                    messages.into(),
                ),
            ),
        }
    }

    /// True for a canned-message request.
    pub fn is_canned_messages_request(&self) -> bool {
        matches!(
            self.payload_variant,
            Some(admin_message::PayloadVariant::GetCannedMessageModuleMessagesRequest(true))
        )
    }

    /// The joined canned messages carried by a response, if any.
    pub fn canned_messages(&self) -> Option<&str> {
        match &self.payload_variant {
            Some(admin_message::PayloadVariant::GetCannedMessageModuleMessagesResponse(data)) => {
                Some(data)
            }
            _ => None,
        }
    }
}

/// Extract the canned messages from a raw admin packet payload.
///
/// Transports that only see raw admin packets use this to feed the
/// canned-message notification stream.
pub fn decode_canned_messages_response(payload: &[u8]) -> Option<String> {
    AdminMessage::decode(payload)
        .ok()?
        .canned_messages()
        .map(String::from)
}
