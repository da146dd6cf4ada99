//! Binary wire messages carried by a channel share URL.
//!
//! These mirror the device protobuf schema field for field (same tags, same
//! scalar encodings), so a token produced here decodes in any other client and
//! vice versa. Enum fields are carried as raw `int32`, which is wire-identical
//! to a protobuf enum.
//!
//! Conversions to and from the typed model live here as well: proto3 default
//! values (zero, empty, false) decode to `None`.

use meshcfg_core::config::{LoraConfig, ModemPreset, RegionCode};
use meshcfg_core::model;
use tracing::debug;

/// Packed channel list plus radio parameters.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelSet {
    #[prost(message, repeated, tag = "1")]
    pub settings: Vec<ChannelSettings>,
    #[prost(message, optional, tag = "2")]
    pub lora_config: Option<LoRaConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelSettings {
    #[prost(uint32, tag = "1")]
    pub channel_num: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub psk: Vec<u8>,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(fixed32, tag = "4")]
    pub id: u32,
    #[prost(bool, tag = "5")]
    pub uplink_enabled: bool,
    #[prost(bool, tag = "6")]
    pub downlink_enabled: bool,
    #[prost(message, optional, tag = "7")]
    pub module_settings: Option<ModuleSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleSettings {
    #[prost(uint32, tag = "1")]
    pub position_precision: u32,
    #[prost(bool, tag = "2")]
    pub is_client_muted: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoRaConfig {
    #[prost(bool, tag = "1")]
    pub use_preset: bool,
    #[prost(int32, tag = "2")]
    pub modem_preset: i32,
    #[prost(uint32, tag = "3")]
    pub bandwidth: u32,
    #[prost(uint32, tag = "4")]
    pub spread_factor: u32,
    #[prost(uint32, tag = "5")]
    pub coding_rate: u32,
    #[prost(float, tag = "6")]
    pub frequency_offset: f32,
    #[prost(int32, tag = "7")]
    pub region: i32,
    #[prost(uint32, tag = "8")]
    pub hop_limit: u32,
    #[prost(bool, tag = "9")]
    pub tx_enabled: bool,
    #[prost(int32, tag = "10")]
    pub tx_power: i32,
    #[prost(uint32, tag = "11")]
    pub channel_num: u32,
    #[prost(bool, tag = "12")]
    pub override_duty_cycle: bool,
    #[prost(bool, tag = "13")]
    pub sx126x_rx_boosted_gain: bool,
    #[prost(float, tag = "14")]
    pub override_frequency: f32,
    #[prost(bool, tag = "15")]
    pub pa_fan_disabled: bool,
    #[prost(uint32, repeated, tag = "103")]
    pub ignore_incoming: Vec<u32>,
    #[prost(bool, tag = "104")]
    pub ignore_mqtt: bool,
    #[prost(bool, tag = "105")]
    pub config_ok_to_mqtt: bool,
}

fn set<T: PartialEq + Default>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

/// Widen through the shortest decimal form so `0.1f32` becomes `0.1`, not
/// `0.10000000149011612`.
fn widen(value: f32) -> Option<f64> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

impl From<&model::ChannelSettings> for ChannelSettings {
    fn from(settings: &model::ChannelSettings) -> Self {
        Self {
            channel_num: settings.channel_num.unwrap_or_default(),
            psk: settings.psk.clone().unwrap_or_default(),
            name: settings.name.clone().unwrap_or_default(),
            id: settings.id.unwrap_or_default(),
            uplink_enabled: settings.uplink_enabled.unwrap_or_default(),
            downlink_enabled: settings.downlink_enabled.unwrap_or_default(),
            module_settings: settings.module_settings.as_ref().map(|m| ModuleSettings {
                position_precision: m.position_precision.unwrap_or_default(),
                is_client_muted: m.is_client_muted.unwrap_or_default(),
            }),
        }
    }
}

impl From<ChannelSettings> for model::ChannelSettings {
    fn from(wire: ChannelSettings) -> Self {
        let module_settings = wire
            .module_settings
            .map(|m| model::ModuleSettings {
                position_precision: set(m.position_precision),
                is_client_muted: set(m.is_client_muted),
            })
            .filter(|m| m != &model::ModuleSettings::default());
        Self {
            channel_num: set(wire.channel_num),
            psk: set(wire.psk),
            name: set(wire.name),
            id: set(wire.id),
            uplink_enabled: set(wire.uplink_enabled),
            downlink_enabled: set(wire.downlink_enabled),
            module_settings,
        }
    }
}

impl From<&LoraConfig> for LoRaConfig {
    fn from(lora: &LoraConfig) -> Self {
        Self {
            use_preset: lora.use_preset.unwrap_or_default(),
            modem_preset: lora.modem_preset.map_or(0, |p| p as i32),
            bandwidth: lora.bandwidth.unwrap_or_default(),
            spread_factor: lora.spread_factor.unwrap_or_default(),
            coding_rate: lora.coding_rate.unwrap_or_default(),
            frequency_offset: lora.frequency_offset.unwrap_or_default() as f32,
            region: lora.region.map_or(0, |r| r as i32),
            hop_limit: lora.hop_limit.unwrap_or_default(),
            tx_enabled: lora.tx_enabled.unwrap_or_default(),
            tx_power: lora.tx_power.unwrap_or_default(),
            channel_num: lora.channel_num.unwrap_or_default(),
            override_duty_cycle: lora.override_duty_cycle.unwrap_or_default(),
            sx126x_rx_boosted_gain: lora.sx126x_rx_boosted_gain.unwrap_or_default(),
            override_frequency: lora.override_frequency.unwrap_or_default() as f32,
            pa_fan_disabled: lora.pa_fan_disabled.unwrap_or_default(),
            ignore_incoming: lora.ignore_incoming.clone().unwrap_or_default(),
            ignore_mqtt: lora.ignore_mqtt.unwrap_or_default(),
            config_ok_to_mqtt: lora.config_ok_to_mqtt.unwrap_or_default(),
        }
    }
}

impl From<LoRaConfig> for LoraConfig {
    fn from(wire: LoRaConfig) -> Self {
        let modem_preset = set(wire.modem_preset).and_then(|n| {
            ModemPreset::try_from(n)
                .map_err(|n| debug!("Unknown modem preset {} in channel set", n))
                .ok()
        });
        let region = set(wire.region).and_then(|n| {
            RegionCode::try_from(n)
                .map_err(|n| debug!("Unknown region {} in channel set", n))
                .ok()
        });
        Self {
            use_preset: set(wire.use_preset),
            modem_preset,
            bandwidth: set(wire.bandwidth),
            spread_factor: set(wire.spread_factor),
            coding_rate: set(wire.coding_rate),
            frequency_offset: widen(wire.frequency_offset),
            region,
            hop_limit: set(wire.hop_limit),
            tx_enabled: set(wire.tx_enabled),
            tx_power: set(wire.tx_power),
            channel_num: set(wire.channel_num),
            override_duty_cycle: set(wire.override_duty_cycle),
            sx126x_rx_boosted_gain: set(wire.sx126x_rx_boosted_gain),
            override_frequency: widen(wire.override_frequency),
            pa_fan_disabled: set(wire.pa_fan_disabled),
            ignore_incoming: set(wire.ignore_incoming),
            ignore_mqtt: set(wire.ignore_mqtt),
            config_ok_to_mqtt: set(wire.config_ok_to_mqtt),
        }
    }
}
