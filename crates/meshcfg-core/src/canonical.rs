//! Lowering typed messages into canonical values, and raising them back.
//!
//! The typed model serializes through serde into an order-preserving JSON
//! tree, which is then converted into [`Value`] under the rules of the field
//! policy table. The reverse direction normalizes whatever a producer wrote
//! (snake_case keys, type markers, `base64:` markers) before handing the tree
//! to serde for strict, schema-checked deserialization.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::bytes;
use crate::policy::{camel_case, is_secret, is_type_marker};
use crate::value::{Mapping, Value};

/// Errors raised while rebuilding typed messages from canonical values.
#[derive(Debug, Error)]
pub enum ReconstructError {
    /// The tree does not fit the schema (unknown field, wrong type, bad base64).
    #[error("schema mismatch: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Lower a typed message into a pruned canonical value.
///
/// Unset fields and empty sub-messages disappear; explicitly empty lists stay.
/// Anything serde cannot represent becomes `Null` and is pruned with the rest.
pub fn canonicalize<T: Serialize>(message: &T) -> Value {
    let json = serde_json::to_value(message).unwrap_or(serde_json::Value::Null);
    from_json(json, None).pruned().unwrap_or(Value::Null)
}

fn from_json(json: serde_json::Value, field: Option<&str>) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => match field {
            Some(name) if is_secret(name) => match bytes::decode(&s) {
                Ok(raw) => Value::Bytes(raw),
                Err(_) => Value::Text(s),
            },
            _ => Value::Text(s),
        },
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(|item| from_json(item, field)).collect())
        }
        serde_json::Value::Object(object) => {
            let mut map = Mapping::with_capacity(object.len());
            for (key, item) in object {
                let value = from_json(item, Some(&key));
                map.insert(key, value);
            }
            Value::Map(map)
        }
    }
}

/// Raise a canonical value into a JSON tree ready for serde.
///
/// Keys are normalized to camelCase, type markers are dropped, `base64:`
/// markers are stripped and `Bytes` become standard base64 strings.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::Text(s) => serde_json::Value::String(bytes::strip_prefix(s).to_string()),
        Value::Bytes(raw) => serde_json::Value::String(bytes::encode(raw)),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Map(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, item) in map.iter() {
                if is_type_marker(key) {
                    continue;
                }
                object.insert(camel_case(key), to_json(item));
            }
            serde_json::Value::Object(object)
        }
    }
}

/// Rebuild a typed message from a canonical value.
pub fn reconstruct<T: DeserializeOwned>(value: &Value) -> Result<T, ReconstructError> {
    Ok(serde_json::from_value(to_json(value))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeviceConfig, DeviceRole, LocalConfig, SecurityConfig};
    use crate::model::{Channel, ChannelSettings};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_follow_declaration_order() {
        let config = LocalConfig {
            security: Some(SecurityConfig {
                is_managed: Some(false),
                ..Default::default()
            }),
            device: Some(DeviceConfig {
                role: Some(DeviceRole::Client),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = canonicalize(&config);
        let keys: Vec<&str> = value.as_map().unwrap().keys().collect();
        assert_eq!(keys, vec!["device", "security"]);
    }

    #[test]
    fn test_secret_fields_become_bytes() {
        let settings = ChannelSettings {
            name: Some("Primary".to_string()),
            psk: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        let value = canonicalize(&settings);
        let map = value.as_map().unwrap();
        assert_eq!(map.get("psk"), Some(&Value::Bytes(vec![1, 2, 3])));
        assert_eq!(map.get("name"), Some(&Value::from("Primary")));
    }

    #[test]
    fn test_admin_key_list_becomes_bytes() {
        let security = SecurityConfig {
            admin_key: Some(vec![vec![9, 9], vec![]]),
            ..Default::default()
        };
        let value = canonicalize(&security);
        let keys = value.as_map().unwrap().get("adminKey").unwrap();
        assert_eq!(
            keys,
            &Value::List(vec![Value::Bytes(vec![9, 9]), Value::Bytes(vec![])])
        );
    }

    #[test]
    fn test_empty_message_prunes_to_null() {
        let config = LocalConfig {
            device: Some(DeviceConfig::default()),
            ..Default::default()
        };
        assert!(canonicalize(&config).is_null());
    }

    #[test]
    fn test_reconstruct_normalizes_producer_quirks() {
        let mut settings = Mapping::new();
        settings.insert("$typeName", Value::from("meshtastic.ChannelSettings"));
        settings.insert("psk", Value::from("base64:AQID"));
        settings.insert("uplink_enabled", Value::Bool(true));
        let mut channel = Mapping::new();
        channel.insert("index", Value::from(0i64));
        channel.insert("settings", Value::Map(settings));
        channel.insert("role", Value::from("PRIMARY"));

        let channel: Channel = reconstruct(&Value::Map(channel)).unwrap();
        let settings = channel.settings.unwrap();
        assert_eq!(settings.psk, Some(vec![1, 2, 3]));
        assert_eq!(settings.uplink_enabled, Some(true));
    }

    #[test]
    fn test_reconstruct_rejects_unknown_fields() {
        let mut device = Mapping::new();
        device.insert("role", Value::from("CLIENT"));
        device.insert("warpDrive", Value::Bool(true));
        let result: Result<DeviceConfig, _> = reconstruct(&Value::Map(device));
        assert!(result.is_err());
    }

    #[test]
    fn test_reconstruct_rejects_corrupt_bytes() {
        let mut settings = Mapping::new();
        settings.insert("psk", Value::from("base64:%%%"));
        let result: Result<ChannelSettings, _> = reconstruct(&Value::Map(settings));
        assert!(result.is_err());
    }
}
