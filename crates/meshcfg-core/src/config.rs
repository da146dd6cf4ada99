//! Radio configuration sections.
//!
//! `LocalConfig` mirrors the device's local configuration tree. Every field is
//! optional: `None` is "unset" and is pruned from backups, while
//! `Some(default)` is an explicit value. Field declaration order is the
//! emission order.

use serde::{Deserialize, Serialize};

use crate::bytes::{opt_base64, opt_base64_list};
use crate::canonical::canonicalize;
use crate::value::Value;

/// The device's local configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LocalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora: Option<LoraConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth: Option<BluetoothConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityConfig>,
}

/// Names of the sections in [`LocalConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigSection {
    Device,
    Position,
    Power,
    Network,
    Display,
    Lora,
    Bluetooth,
    Security,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 8] = [
        ConfigSection::Device,
        ConfigSection::Position,
        ConfigSection::Power,
        ConfigSection::Network,
        ConfigSection::Display,
        ConfigSection::Lora,
        ConfigSection::Bluetooth,
        ConfigSection::Security,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigSection::Device => "device",
            ConfigSection::Position => "position",
            ConfigSection::Power => "power",
            ConfigSection::Network => "network",
            ConfigSection::Display => "display",
            ConfigSection::Lora => "lora",
            ConfigSection::Bluetooth => "bluetooth",
            ConfigSection::Security => "security",
        }
    }
}

impl std::fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single config section with its payload, as sent to the device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigVariant {
    Device(DeviceConfig),
    Position(PositionConfig),
    Power(PowerConfig),
    Network(NetworkConfig),
    Display(DisplayConfig),
    Lora(LoraConfig),
    Bluetooth(BluetoothConfig),
    Security(SecurityConfig),
}

impl ConfigVariant {
    pub fn section(&self) -> ConfigSection {
        match self {
            ConfigVariant::Device(_) => ConfigSection::Device,
            ConfigVariant::Position(_) => ConfigSection::Position,
            ConfigVariant::Power(_) => ConfigSection::Power,
            ConfigVariant::Network(_) => ConfigSection::Network,
            ConfigVariant::Display(_) => ConfigSection::Display,
            ConfigVariant::Lora(_) => ConfigSection::Lora,
            ConfigVariant::Bluetooth(_) => ConfigSection::Bluetooth,
            ConfigVariant::Security(_) => ConfigSection::Security,
        }
    }
}

impl LocalConfig {
    /// Canonical form of one section, or `None` when it prunes away entirely.
    pub fn section_value(&self, section: ConfigSection) -> Option<Value> {
        match section {
            ConfigSection::Device => canonicalize(&self.device),
            ConfigSection::Position => canonicalize(&self.position),
            ConfigSection::Power => canonicalize(&self.power),
            ConfigSection::Network => canonicalize(&self.network),
            ConfigSection::Display => canonicalize(&self.display),
            ConfigSection::Lora => canonicalize(&self.lora),
            ConfigSection::Bluetooth => canonicalize(&self.bluetooth),
            ConfigSection::Security => canonicalize(&self.security),
        }
        .pruned()
    }

    /// The section as a sendable variant; an absent section yields its default.
    pub fn variant(&self, section: ConfigSection) -> ConfigVariant {
        match section {
            ConfigSection::Device => ConfigVariant::Device(self.device.clone().unwrap_or_default()),
            ConfigSection::Position => {
                ConfigVariant::Position(self.position.clone().unwrap_or_default())
            }
            ConfigSection::Power => ConfigVariant::Power(self.power.clone().unwrap_or_default()),
            ConfigSection::Network => {
                ConfigVariant::Network(self.network.clone().unwrap_or_default())
            }
            ConfigSection::Display => {
                ConfigVariant::Display(self.display.clone().unwrap_or_default())
            }
            ConfigSection::Lora => ConfigVariant::Lora(self.lora.clone().unwrap_or_default()),
            ConfigSection::Bluetooth => {
                ConfigVariant::Bluetooth(self.bluetooth.clone().unwrap_or_default())
            }
            ConfigSection::Security => {
                ConfigVariant::Security(self.security.clone().unwrap_or_default())
            }
        }
    }

    /// Replace one section wholesale.
    pub fn set_variant(&mut self, variant: ConfigVariant) {
        match variant {
            ConfigVariant::Device(v) => self.device = Some(v),
            ConfigVariant::Position(v) => self.position = Some(v),
            ConfigVariant::Power(v) => self.power = Some(v),
            ConfigVariant::Network(v) => self.network = Some(v),
            ConfigVariant::Display(v) => self.display = Some(v),
            ConfigVariant::Lora(v) => self.lora = Some(v),
            ConfigVariant::Bluetooth(v) => self.bluetooth = Some(v),
            ConfigVariant::Security(v) => self.security = Some(v),
        }
    }
}

// ============================================================================
// Device
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DeviceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<DeviceRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_gpio: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buzzer_gpio: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebroadcast_mode: Option<RebroadcastMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_info_broadcast_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_tap_as_button_press: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_triple_click: Option<bool>,

    /// POSIX timezone definition string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tzdef: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub led_heartbeat_disabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceRole {
    Client,
    ClientMute,
    Router,
    RouterClient,
    Repeater,
    Tracker,
    Sensor,
    Tak,
    ClientHidden,
    LostAndFound,
    TakTracker,
    RouterLate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RebroadcastMode {
    All,
    AllSkipDecoding,
    LocalOnly,
    KnownOnly,
    None,
    CorePortnumsOnly,
}

// ============================================================================
// Position
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PositionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_broadcast_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_broadcast_smart_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_position: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_attempt_time: Option<u32>,

    /// Bitfield of optional position fields to include in broadcasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_flags: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_gpio: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_gpio: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_smart_minimum_distance: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_smart_minimum_interval_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_en_gpio: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_mode: Option<GpsMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GpsMode {
    Disabled,
    Enabled,
    NotPresent,
}

// ============================================================================
// Power
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PowerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_power_saving: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_battery_shutdown_after_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adc_multiplier_override: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_bluetooth_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sds_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ls_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_wake_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_battery_ina_address: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub powermon_enables: Option<u64>,
}

// ============================================================================
// Network
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct NetworkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_psk: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_server: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_mode: Option<AddressMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_config: Option<Ipv4Config>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsyslog_server: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_protocols: Option<u32>,
}

/// Static addressing, each address packed little-endian into a `u32`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Ipv4Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressMode {
    Dhcp,
    Static,
}

// ============================================================================
// Display
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DisplayConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_on_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_format: Option<GpsCoordinateFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_screen_carousel_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compass_north_top: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_screen: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DisplayUnits>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub oled: Option<OledType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaymode: Option<DisplayMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake_on_tap_or_motion: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compass_orientation: Option<CompassOrientation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_12h_clock: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GpsCoordinateFormat {
    Dec,
    Dms,
    Utm,
    Mgrs,
    Olc,
    Osgr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayUnits {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OledType {
    #[serde(rename = "OLED_AUTO")]
    Auto,
    #[serde(rename = "OLED_SSD1306")]
    Ssd1306,
    #[serde(rename = "OLED_SH1106")]
    Sh1106,
    #[serde(rename = "OLED_SH1107")]
    Sh1107,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    Default,
    Twocolor,
    Inverted,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassOrientation {
    #[serde(rename = "DEGREES_0")]
    Degrees0,
    #[serde(rename = "DEGREES_90")]
    Degrees90,
    #[serde(rename = "DEGREES_180")]
    Degrees180,
    #[serde(rename = "DEGREES_270")]
    Degrees270,
    #[serde(rename = "DEGREES_0_INVERTED")]
    Degrees0Inverted,
    #[serde(rename = "DEGREES_90_INVERTED")]
    Degrees90Inverted,
    #[serde(rename = "DEGREES_180_INVERTED")]
    Degrees180Inverted,
    #[serde(rename = "DEGREES_270_INVERTED")]
    Degrees270Inverted,
}

// ============================================================================
// LoRa
// ============================================================================

/// Radio parameters. Also carried inside channel share URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoraConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_preset: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modem_preset: Option<ModemPreset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_factor: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding_rate: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_offset: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_num: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_duty_cycle: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sx126x_rx_boosted_gain: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_frequency: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_fan_disabled: Option<bool>,

    /// Node numbers whose packets are dropped on receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_incoming: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_mqtt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_ok_to_mqtt: Option<bool>,
}

/// Regulatory region. Discriminants are the protobuf numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum RegionCode {
    #[serde(rename = "UNSET")]
    Unset = 0,
    #[serde(rename = "US")]
    Us = 1,
    #[serde(rename = "EU_433")]
    Eu433 = 2,
    #[serde(rename = "EU_868")]
    Eu868 = 3,
    #[serde(rename = "CN")]
    Cn = 4,
    #[serde(rename = "JP")]
    Jp = 5,
    #[serde(rename = "ANZ")]
    Anz = 6,
    #[serde(rename = "KR")]
    Kr = 7,
    #[serde(rename = "TW")]
    Tw = 8,
    #[serde(rename = "RU")]
    Ru = 9,
    #[serde(rename = "IN")]
    In = 10,
    #[serde(rename = "NZ_865")]
    Nz865 = 11,
    #[serde(rename = "TH")]
    Th = 12,
    #[serde(rename = "LORA_24")]
    Lora24 = 13,
    #[serde(rename = "UA_433")]
    Ua433 = 14,
    #[serde(rename = "UA_868")]
    Ua868 = 15,
    #[serde(rename = "MY_433")]
    My433 = 16,
    #[serde(rename = "MY_919")]
    My919 = 17,
    #[serde(rename = "SG_923")]
    Sg923 = 18,
    #[serde(rename = "PH_433")]
    Ph433 = 19,
    #[serde(rename = "PH_868")]
    Ph868 = 20,
    #[serde(rename = "PH_915")]
    Ph915 = 21,
    #[serde(rename = "ANZ_433")]
    Anz433 = 22,
    #[serde(rename = "KZ_433")]
    Kz433 = 23,
    #[serde(rename = "KZ_863")]
    Kz863 = 24,
    #[serde(rename = "NP_865")]
    Np865 = 25,
    #[serde(rename = "BR_902")]
    Br902 = 26,
}

impl TryFrom<i32> for RegionCode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        use RegionCode::*;
        Ok(match value {
            0 => Unset,
            1 => Us,
            2 => Eu433,
            3 => Eu868,
            4 => Cn,
            5 => Jp,
            6 => Anz,
            7 => Kr,
            8 => Tw,
            9 => Ru,
            10 => In,
            11 => Nz865,
            12 => Th,
            13 => Lora24,
            14 => Ua433,
            15 => Ua868,
            16 => My433,
            17 => My919,
            18 => Sg923,
            19 => Ph433,
            20 => Ph868,
            21 => Ph915,
            22 => Anz433,
            23 => Kz433,
            24 => Kz863,
            25 => Np865,
            26 => Br902,
            other => return Err(other),
        })
    }
}

/// Modem preset. Discriminants are the protobuf numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ModemPreset {
    LongFast = 0,
    LongSlow = 1,
    VeryLongSlow = 2,
    MediumSlow = 3,
    MediumFast = 4,
    ShortSlow = 5,
    ShortFast = 6,
    LongModerate = 7,
    ShortTurbo = 8,
}

impl TryFrom<i32> for ModemPreset {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        use ModemPreset::*;
        Ok(match value {
            0 => LongFast,
            1 => LongSlow,
            2 => VeryLongSlow,
            3 => MediumSlow,
            4 => MediumFast,
            5 => ShortSlow,
            6 => ShortFast,
            7 => LongModerate,
            8 => ShortTurbo,
            other => return Err(other),
        })
    }
}

// ============================================================================
// Bluetooth
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct BluetoothConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PairingMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_pin: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairingMode {
    RandomPin,
    FixedPin,
    NoPin,
}

// ============================================================================
// Security
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SecurityConfig {
    #[serde(with = "opt_base64", skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Vec<u8>>,

    #[serde(with = "opt_base64", skip_serializing_if = "Option::is_none")]
    pub private_key: Option<Vec<u8>>,

    /// Public keys authorized to send admin messages (up to three).
    #[serde(with = "opt_base64_list", skip_serializing_if = "Option::is_none")]
    pub admin_key: Option<Vec<Vec<u8>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_log_api_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_channel_enabled: Option<bool>,
}
