//! Channel and backup payload types.
//!
//! These types describe what a configuration backup carries besides the
//! config trees:
//! - Channels (index, role, settings)
//! - Owner names and fixed location
//! - Canned messages

use serde::{Deserialize, Serialize};

use crate::bytes::opt_base64;
use crate::config::LocalConfig;
use crate::module_config::LocalModuleConfig;

/// Scale between degrees and the integer coordinates stored on the device.
pub const COORDINATE_SCALE: f64 = 1e7;

/// Separator used when canned messages travel as a single string.
pub const CANNED_MESSAGE_SEPARATOR: char = '|';

/// A channel slot on the device.
///
/// `index` is the unique key within a backup; channels are always replaced
/// wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Channel {
    pub index: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ChannelSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ChannelRole>,
}

impl Channel {
    /// True for channels that carry traffic (primary or secondary).
    pub fn is_enabled(&self) -> bool {
        matches!(
            self.role,
            Some(ChannelRole::Primary) | Some(ChannelRole::Secondary)
        )
    }
}

/// Channel role. Discriminants are the protobuf numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ChannelRole {
    Disabled = 0,
    Primary = 1,
    Secondary = 2,
}

impl TryFrom<i32> for ChannelRole {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        match value {
            0 => Ok(ChannelRole::Disabled),
            1 => Ok(ChannelRole::Primary),
            2 => Ok(ChannelRole::Secondary),
            other => Err(other),
        }
    }
}

/// Per-channel settings. This is also the element type of a channel share URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ChannelSettings {
    /// Deprecated radio channel number, kept for older producers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_num: Option<u32>,

    /// Pre-shared key (0, 1, 16 or 32 bytes).
    #[serde(with = "opt_base64", skip_serializing_if = "Option::is_none")]
    pub psk: Option<Vec<u8>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplink_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downlink_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_settings: Option<ModuleSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ModuleSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_precision: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_client_muted: Option<bool>,
}

/// Fixed node location in device units (1e-7 degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude_i: i32,
    pub longitude_i: i32,
    /// Altitude in meters above MSL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i32>,
}

impl Location {
    pub fn new(latitude_i: i32, longitude_i: i32) -> Self {
        Self {
            latitude_i,
            longitude_i,
            altitude: None,
        }
    }

    /// Build from decimal degrees, rounding to the nearest device unit.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(to_scaled(latitude), to_scaled(longitude))
    }

    pub fn latitude(&self) -> f64 {
        f64::from(self.latitude_i) / COORDINATE_SCALE
    }

    pub fn longitude(&self) -> f64 {
        f64::from(self.longitude_i) / COORDINATE_SCALE
    }

    /// A zero coordinate means "no fix"; such locations are not exported.
    pub fn is_set(&self) -> bool {
        self.latitude_i != 0 && self.longitude_i != 0
    }
}

fn to_scaled(degrees: f64) -> i32 {
    let scaled = (degrees * COORDINATE_SCALE).round();
    scaled.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Everything a configuration backup carries.
///
/// The same type describes the live device state handed to the exporter and
/// the diff engine, and the payload reconstructed from a backup document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigBackupPayload {
    pub config: LocalConfig,
    pub module_config: LocalModuleConfig,
    pub channels: Vec<Channel>,
    /// Owner long name.
    pub owner: Option<String>,
    /// Owner short name.
    pub owner_short: Option<String>,
    pub location: Option<Location>,
    pub canned_messages: Option<Vec<String>>,
}

impl ConfigBackupPayload {
    pub fn new(config: LocalConfig, module_config: LocalModuleConfig) -> Self {
        Self {
            config,
            module_config,
            ..Default::default()
        }
    }

    /// Look up a channel by its index.
    pub fn channel(&self, index: u32) -> Option<&Channel> {
        self.channels.iter().find(|c| c.index == index)
    }

    /// Insert or replace the channel with the same index.
    pub fn upsert_channel(&mut self, channel: Channel) {
        match self.channels.iter_mut().find(|c| c.index == channel.index) {
            Some(slot) => *slot = channel,
            None => {
                self.channels.push(channel);
                self.channels.sort_by_key(|c| c.index);
            }
        }
    }

    /// Channels sorted by index.
    pub fn sorted_channels(&self) -> Vec<&Channel> {
        let mut channels: Vec<&Channel> = self.channels.iter().collect();
        channels.sort_by_key(|c| c.index);
        channels
    }
}

/// Split a `|`-joined canned message string, dropping empty entries.
pub fn split_canned_messages(joined: &str) -> Vec<String> {
    joined
        .split(CANNED_MESSAGE_SEPARATOR)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}

/// Join canned messages into the single string form used on the wire and in backups.
pub fn join_canned_messages<S: AsRef<str>>(messages: &[S]) -> String {
    messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&CANNED_MESSAGE_SEPARATOR.to_string())
}
