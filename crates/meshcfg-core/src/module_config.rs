//! Module configuration sections.

use serde::{Deserialize, Serialize};

use crate::canonical::canonicalize;
use crate::value::Value;

/// The device's local module configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LocalModuleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mqtt: Option<MqttConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<SerialConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_notification: Option<ExternalNotificationConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_forward: Option<StoreForwardConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_test: Option<RangeTestConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub canned_message: Option<CannedMessageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_hardware: Option<RemoteHardwareConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbor_info: Option<NeighborInfoConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_lighting: Option<AmbientLightingConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_sensor: Option<DetectionSensorConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paxcounter: Option<PaxcounterConfig>,
}

/// Names of the sections in [`LocalModuleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleConfigSection {
    Mqtt,
    Serial,
    ExternalNotification,
    StoreForward,
    RangeTest,
    Telemetry,
    CannedMessage,
    Audio,
    RemoteHardware,
    NeighborInfo,
    AmbientLighting,
    DetectionSensor,
    Paxcounter,
}

impl ModuleConfigSection {
    pub const ALL: [ModuleConfigSection; 13] = [
        ModuleConfigSection::Mqtt,
        ModuleConfigSection::Serial,
        ModuleConfigSection::ExternalNotification,
        ModuleConfigSection::StoreForward,
        ModuleConfigSection::RangeTest,
        ModuleConfigSection::Telemetry,
        ModuleConfigSection::CannedMessage,
        ModuleConfigSection::Audio,
        ModuleConfigSection::RemoteHardware,
        ModuleConfigSection::NeighborInfo,
        ModuleConfigSection::AmbientLighting,
        ModuleConfigSection::DetectionSensor,
        ModuleConfigSection::Paxcounter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModuleConfigSection::Mqtt => "mqtt",
            ModuleConfigSection::Serial => "serial",
            ModuleConfigSection::ExternalNotification => "externalNotification",
            ModuleConfigSection::StoreForward => "storeForward",
            ModuleConfigSection::RangeTest => "rangeTest",
            ModuleConfigSection::Telemetry => "telemetry",
            ModuleConfigSection::CannedMessage => "cannedMessage",
            ModuleConfigSection::Audio => "audio",
            ModuleConfigSection::RemoteHardware => "remoteHardware",
            ModuleConfigSection::NeighborInfo => "neighborInfo",
            ModuleConfigSection::AmbientLighting => "ambientLighting",
            ModuleConfigSection::DetectionSensor => "detectionSensor",
            ModuleConfigSection::Paxcounter => "paxcounter",
        }
    }
}

impl std::fmt::Display for ModuleConfigSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single module section with its payload, as sent to the device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleConfigVariant {
    Mqtt(MqttConfig),
    Serial(SerialConfig),
    ExternalNotification(ExternalNotificationConfig),
    StoreForward(StoreForwardConfig),
    RangeTest(RangeTestConfig),
    Telemetry(TelemetryConfig),
    CannedMessage(CannedMessageConfig),
    Audio(AudioConfig),
    RemoteHardware(RemoteHardwareConfig),
    NeighborInfo(NeighborInfoConfig),
    AmbientLighting(AmbientLightingConfig),
    DetectionSensor(DetectionSensorConfig),
    Paxcounter(PaxcounterConfig),
}

impl ModuleConfigVariant {
    pub fn section(&self) -> ModuleConfigSection {
        use ModuleConfigSection as S;
        match self {
            ModuleConfigVariant::Mqtt(_) => S::Mqtt,
            ModuleConfigVariant::Serial(_) => S::Serial,
            ModuleConfigVariant::ExternalNotification(_) => S::ExternalNotification,
            ModuleConfigVariant::StoreForward(_) => S::StoreForward,
            ModuleConfigVariant::RangeTest(_) => S::RangeTest,
            ModuleConfigVariant::Telemetry(_) => S::Telemetry,
            ModuleConfigVariant::CannedMessage(_) => S::CannedMessage,
            ModuleConfigVariant::Audio(_) => S::Audio,
            ModuleConfigVariant::RemoteHardware(_) => S::RemoteHardware,
            ModuleConfigVariant::NeighborInfo(_) => S::NeighborInfo,
            ModuleConfigVariant::AmbientLighting(_) => S::AmbientLighting,
            ModuleConfigVariant::DetectionSensor(_) => S::DetectionSensor,
            ModuleConfigVariant::Paxcounter(_) => S::Paxcounter,
        }
    }
}

impl LocalModuleConfig {
    /// Canonical form of one section, or `None` when it prunes away entirely.
    pub fn section_value(&self, section: ModuleConfigSection) -> Option<Value> {
        use ModuleConfigSection as S;
        match section {
            S::Mqtt => canonicalize(&self.mqtt),
            S::Serial => canonicalize(&self.serial),
            S::ExternalNotification => canonicalize(&self.external_notification),
            S::StoreForward => canonicalize(&self.store_forward),
            S::RangeTest => canonicalize(&self.range_test),
            S::Telemetry => canonicalize(&self.telemetry),
            S::CannedMessage => canonicalize(&self.canned_message),
            S::Audio => canonicalize(&self.audio),
            S::RemoteHardware => canonicalize(&self.remote_hardware),
            S::NeighborInfo => canonicalize(&self.neighbor_info),
            S::AmbientLighting => canonicalize(&self.ambient_lighting),
            S::DetectionSensor => canonicalize(&self.detection_sensor),
            S::Paxcounter => canonicalize(&self.paxcounter),
        }
        .pruned()
    }

    /// The section as a sendable variant; an absent section yields its default.
    pub fn variant(&self, section: ModuleConfigSection) -> ModuleConfigVariant {
        use ModuleConfigSection as S;
        use ModuleConfigVariant as V;
        match section {
            S::Mqtt => V::Mqtt(self.mqtt.clone().unwrap_or_default()),
            S::Serial => V::Serial(self.serial.clone().unwrap_or_default()),
            S::ExternalNotification => {
                V::ExternalNotification(self.external_notification.clone().unwrap_or_default())
            }
            S::StoreForward => V::StoreForward(self.store_forward.clone().unwrap_or_default()),
            S::RangeTest => V::RangeTest(self.range_test.clone().unwrap_or_default()),
            S::Telemetry => V::Telemetry(self.telemetry.clone().unwrap_or_default()),
            S::CannedMessage => V::CannedMessage(self.canned_message.clone().unwrap_or_default()),
            S::Audio => V::Audio(self.audio.clone().unwrap_or_default()),
            S::RemoteHardware => {
                V::RemoteHardware(self.remote_hardware.clone().unwrap_or_default())
            }
            S::NeighborInfo => V::NeighborInfo(self.neighbor_info.clone().unwrap_or_default()),
            S::AmbientLighting => {
                V::AmbientLighting(self.ambient_lighting.clone().unwrap_or_default())
            }
            S::DetectionSensor => {
                V::DetectionSensor(self.detection_sensor.clone().unwrap_or_default())
            }
            S::Paxcounter => V::Paxcounter(self.paxcounter.clone().unwrap_or_default()),
        }
    }

    /// Replace one section wholesale.
    pub fn set_variant(&mut self, variant: ModuleConfigVariant) {
        use ModuleConfigVariant as V;
        match variant {
            V::Mqtt(v) => self.mqtt = Some(v),
            V::Serial(v) => self.serial = Some(v),
            V::ExternalNotification(v) => self.external_notification = Some(v),
            V::StoreForward(v) => self.store_forward = Some(v),
            V::RangeTest(v) => self.range_test = Some(v),
            V::Telemetry(v) => self.telemetry = Some(v),
            V::CannedMessage(v) => self.canned_message = Some(v),
            V::Audio(v) => self.audio = Some(v),
            V::RemoteHardware(v) => self.remote_hardware = Some(v),
            V::NeighborInfo(v) => self.neighbor_info = Some(v),
            V::AmbientLighting(v) => self.ambient_lighting = Some(v),
            V::DetectionSensor(v) => self.detection_sensor = Some(v),
            V::Paxcounter(v) => self.paxcounter = Some(v),
        }
    }
}

// ============================================================================
// MQTT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct MqttConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_to_client_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_reporting_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_report_settings: Option<MapReportSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct MapReportSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_interval_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_precision: Option<u32>,
}

// ============================================================================
// Serial
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SerialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rxd: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub txd: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub baud: Option<SerialBaud>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SerialMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_console_serial_port: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerialBaud {
    #[serde(rename = "BAUD_DEFAULT")]
    Default,
    #[serde(rename = "BAUD_110")]
    Baud110,
    #[serde(rename = "BAUD_300")]
    Baud300,
    #[serde(rename = "BAUD_600")]
    Baud600,
    #[serde(rename = "BAUD_1200")]
    Baud1200,
    #[serde(rename = "BAUD_2400")]
    Baud2400,
    #[serde(rename = "BAUD_4800")]
    Baud4800,
    #[serde(rename = "BAUD_9600")]
    Baud9600,
    #[serde(rename = "BAUD_19200")]
    Baud19200,
    #[serde(rename = "BAUD_38400")]
    Baud38400,
    #[serde(rename = "BAUD_57600")]
    Baud57600,
    #[serde(rename = "BAUD_115200")]
    Baud115200,
    #[serde(rename = "BAUD_230400")]
    Baud230400,
    #[serde(rename = "BAUD_460800")]
    Baud460800,
    #[serde(rename = "BAUD_576000")]
    Baud576000,
    #[serde(rename = "BAUD_921600")]
    Baud921600,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SerialMode {
    Default,
    Simple,
    Proto,
    Textmsg,
    Nmea,
    Caltopo,
    #[serde(rename = "WS85")]
    Ws85,
}

// ============================================================================
// External notification
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ExternalNotificationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_ms: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_vibra: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_buzzer: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_message_vibra: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_message_buzzer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_bell: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_bell_vibra: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_bell_buzzer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_pwm: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nag_timeout: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_i2s_as_buzzer: Option<bool>,
}

// ============================================================================
// Store & forward, range test
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct StoreForwardConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_return_max: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_return_window: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_server: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RangeTestConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
}

// ============================================================================
// Telemetry
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct TelemetryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_measurement_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_screen_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_display_fahrenheit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_measurement_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_screen_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_measurement_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_screen_enabled: Option<bool>,
}

// ============================================================================
// Canned messages
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CannedMessageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotary1_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputbroker_pin_a: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputbroker_pin_b: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputbroker_pin_press: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputbroker_event_cw: Option<InputEventChar>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputbroker_event_ccw: Option<InputEventChar>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputbroker_event_press: Option<InputEventChar>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updown1_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_input_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_bell: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputEventChar {
    None,
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
    Cancel,
}

// ============================================================================
// Audio
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AudioConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec2_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptt_pin: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<AudioBaud>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub i2s_ws: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub i2s_sd: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub i2s_din: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub i2s_sck: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioBaud {
    #[serde(rename = "CODEC2_DEFAULT")]
    Default,
    #[serde(rename = "CODEC2_3200")]
    Codec3200,
    #[serde(rename = "CODEC2_2400")]
    Codec2400,
    #[serde(rename = "CODEC2_1600")]
    Codec1600,
    #[serde(rename = "CODEC2_1400")]
    Codec1400,
    #[serde(rename = "CODEC2_1300")]
    Codec1300,
    #[serde(rename = "CODEC2_1200")]
    Codec1200,
    #[serde(rename = "CODEC2_700")]
    Codec700,
    #[serde(rename = "CODEC2_700B")]
    Codec700B,
}

// ============================================================================
// Remote hardware
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RemoteHardwareConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_undefined_pin_access: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_pins: Option<Vec<RemoteHardwarePin>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RemoteHardwarePin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpio_pin: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pin_type: Option<RemoteHardwarePinType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteHardwarePinType {
    Unknown,
    DigitalRead,
    DigitalWrite,
}

// ============================================================================
// Neighbor info, ambient lighting, detection sensor, paxcounter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct NeighborInfoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmit_over_lora: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AmbientLightingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub led_state: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DetectionSensorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_broadcast_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_broadcast_secs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_bell: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_pin: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_trigger_type: Option<TriggerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_pullup: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    LogicLow,
    LogicHigh,
    FallingEdge,
    RisingEdge,
    EitherEdgeActiveLow,
    EitherEdgeActiveHigh,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PaxcounterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paxcounter_update_interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_threshold: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ble_threshold: Option<i32>,
}
