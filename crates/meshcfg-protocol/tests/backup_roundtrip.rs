//! End-to-end tests for backup export and import.

use meshcfg_core::config::{
    DeviceConfig, DeviceRole, LoraConfig, ModemPreset, NetworkConfig, RegionCode, SecurityConfig,
};
use meshcfg_core::model::{
    Channel, ChannelRole, ChannelSettings, ConfigBackupPayload, Location, ModuleSettings,
};
use meshcfg_core::module_config::{CannedMessageConfig, MqttConfig};
use meshcfg_core::{compute_diff, ConfigSection, LocalConfig, LocalModuleConfig};
use meshcfg_protocol::backup::BACKUP_HEADER;
use meshcfg_protocol::{
    build_backup, encode_share_url, parse_backup, BackupErrorKind, ByteStyle, EmitOptions,
    ShareUrlOptions,
};
use pretty_assertions::assert_eq;

fn channel(index: u32, role: ChannelRole, name: &str, psk: &[u8]) -> Channel {
    Channel {
        index,
        role: Some(role),
        settings: Some(ChannelSettings {
            name: Some(name.to_string()),
            psk: Some(psk.to_vec()),
            uplink_enabled: Some(index == 0),
            ..Default::default()
        }),
    }
}

fn sample_payload() -> ConfigBackupPayload {
    let config = LocalConfig {
        device: Some(DeviceConfig {
            role: Some(DeviceRole::Router),
            node_info_broadcast_secs: Some(10800),
            serial_enabled: Some(false),
            ..Default::default()
        }),
        network: Some(NetworkConfig {
            ntp_server: Some("pool.ntp.org".to_string()),
            ..Default::default()
        }),
        lora: Some(LoraConfig {
            use_preset: Some(true),
            modem_preset: Some(ModemPreset::LongFast),
            region: Some(RegionCode::Eu868),
            hop_limit: Some(3),
            frequency_offset: Some(0.1),
            tx_enabled: Some(true),
            ignore_incoming: Some(vec![]),
            ..Default::default()
        }),
        security: Some(SecurityConfig {
            public_key: Some(vec![0x11; 32]),
            private_key: Some(vec![0x22; 32]),
            admin_key: Some(vec![vec![0x33; 32]]),
            ..Default::default()
        }),
        ..Default::default()
    };

    let module_config = LocalModuleConfig {
        mqtt: Some(MqttConfig {
            enabled: Some(true),
            address: Some("mqtt.example.net".to_string()),
            ..Default::default()
        }),
        canned_message: Some(CannedMessageConfig {
            enabled: Some(true),
            allow_input_source: Some("_any".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut payload = ConfigBackupPayload::new(config, module_config);
    payload.channels = vec![
        channel(0, ChannelRole::Primary, "LongFast", &[1]),
        channel(1, ChannelRole::Secondary, "Admin", &[0x44; 32]),
        Channel {
            index: 2,
            role: Some(ChannelRole::Disabled),
            settings: None,
        },
    ];
    if let Some(settings) = payload.channels[1].settings.as_mut() {
        settings.module_settings = Some(ModuleSettings {
            position_precision: Some(13),
            is_client_muted: None,
        });
    }
    payload.owner = Some("Nicco Pisa Berry \u{1F1EE}\u{1F1F9}".to_string());
    payload.owner_short = Some("NPB".to_string());
    payload.location = Some(Location {
        latitude_i: 451234567,
        longitude_i: 93456789,
        altitude: Some(120),
    });
    payload.canned_messages = Some(vec!["Hi".to_string(), "On my way".to_string()]);
    payload
}

#[test]
fn test_round_trip() {
    let payload = sample_payload();
    for byte_style in [ByteStyle::Quoted, ByteStyle::Plain] {
        let text = build_backup(&payload, &EmitOptions { indent: 2, byte_style });
        let parsed = parse_backup(&text).unwrap();
        assert_eq!(parsed, payload);
    }
}

#[test]
fn test_output_is_deterministic_and_ordered() {
    let payload = sample_payload();
    let text = build_backup(&payload, &EmitOptions::default());
    assert_eq!(text, build_backup(&payload.clone(), &EmitOptions::default()));
    assert!(text.starts_with(&format!("{BACKUP_HEADER}\n")));

    let positions: Vec<usize> = [
        "\ncanned_messages:",
        "\nchannel_url:",
        "\nconfig:",
        "\nlocation:",
        "\nmodule_config:",
        "\nowner:",
        "\nowner_short:",
        "\nchannels:",
    ]
    .iter()
    .map(|key| text.find(key).unwrap_or_else(|| panic!("missing {key}")))
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_secret_fields_are_tagged() {
    let text = build_backup(&sample_payload(), &EmitOptions::default());
    assert!(text.contains("    psk: \"base64:AQ==\"\n"));
    assert!(text.contains("    publicKey: \"base64:"));
    assert!(text.contains("    privateKey: \"base64:"));
    assert!(text.contains("    adminKey:\n      - \"base64:"));

    let plain = build_backup(
        &sample_payload(),
        &EmitOptions {
            indent: 2,
            byte_style: ByteStyle::Plain,
        },
    );
    assert!(plain.contains("    psk: base64:AQ==\n"));
}

#[test]
fn test_psk_with_and_without_prefix() {
    let base = "config: {}\nmodule_config: {}\nchannels:\n  -\n    index: 0\n    settings:\n";
    let tagged = parse_backup(&format!("{base}      psk: \"base64:AQID\"\n")).unwrap();
    let bare = parse_backup(&format!("{base}      psk: AQID\n")).unwrap();
    let psk = |p: &ConfigBackupPayload| p.channels[0].settings.as_ref().and_then(|s| s.psk.clone());
    assert_eq!(psk(&tagged), Some(vec![1, 2, 3]));
    assert_eq!(psk(&tagged), psk(&bare));
}

#[test]
fn test_coordinates() {
    let text = build_backup(&sample_payload(), &EmitOptions::default());
    assert!(text.contains("\nlocation:\n  lat: 45.1234567\n  lon: 9.3456789\n  alt: 120\n"));

    let mut unset = sample_payload();
    unset.location = Some(Location::new(0, 93456789));
    let text = build_backup(&unset, &EmitOptions::default());
    assert!(!text.contains("location:"));
}

#[test]
fn test_pruning_and_explicit_empty_lists() {
    let mut payload = sample_payload();
    payload.config.position = Some(Default::default());
    let text = build_backup(&payload, &EmitOptions::default());
    assert!(!text.contains("position:"));
    assert!(text.contains("    ignoreIncoming: []\n"));
}

#[test]
fn test_unicode_escaping() {
    let text = build_backup(&sample_payload(), &EmitOptions::default());
    assert!(text.contains("\nowner: \"Nicco Pisa Berry \\U0001F1EE\\U0001F1F9\"\n"));
}

#[test]
fn test_malformed_input() {
    let errors = parse_backup("not-yaml").unwrap_err();
    assert_eq!(errors.kinds(), &[BackupErrorKind::InvalidFile]);

    let errors = parse_backup("config:\n  device\nmodule_config: {}\n").unwrap_err();
    assert_eq!(errors.kinds(), &[BackupErrorKind::InvalidFile]);
}

#[test]
fn test_channels_from_channel_url() {
    let primary = ChannelSettings {
        name: Some("Primary".to_string()),
        psk: Some(vec![1]),
        ..Default::default()
    };
    let secondary = ChannelSettings {
        name: Some("Secondary".to_string()),
        psk: Some(vec![9; 16]),
        ..Default::default()
    };
    let url = encode_share_url(
        &[primary.clone(), secondary.clone()],
        None,
        &ShareUrlOptions::default(),
    );
    let source = format!("channel_url: {url}\nconfig: {{}}\nmodule_config: {{}}\n");

    let payload = parse_backup(&source).unwrap();
    assert_eq!(
        payload.channels,
        vec![
            Channel {
                index: 0,
                role: Some(ChannelRole::Primary),
                settings: Some(primary),
            },
            Channel {
                index: 1,
                role: Some(ChannelRole::Secondary),
                settings: Some(secondary),
            },
        ]
    );
}

#[test]
fn test_channels_list_wins_over_channel_url() {
    let payload = sample_payload();
    let text = build_backup(&payload, &EmitOptions::default());
    let parsed = parse_backup(&text).unwrap();
    assert_eq!(parsed.channels.len(), 3);
    assert_eq!(parsed.channels[2].role, Some(ChannelRole::Disabled));
}

#[test]
fn test_reference_tool_document() {
    let source = "\
# start of Meshtastic configure yaml
canned_messages: Hi|Bye
channel_url: https://meshtastic.org/e/#CgMSAQESCAgBOAFAA0gB
config:
  device:
    role: CLIENT
    serial_enabled: true
  lora:
    region: US
    hopLimit: 3
  security:
    adminKey:
    - base64:ESIzRA==
    privateKey: base64:AQID
location:
  alt: 15
  lat: 45.1234567
  lon: 9.3456789
module_config:
  telemetry:
    deviceUpdateInterval: 900
owner: Base Station
owner_short: BS
";
    let payload = parse_backup(source).unwrap();

    let device = payload.config.device.clone().unwrap();
    assert_eq!(device.role, Some(DeviceRole::Client));
    assert_eq!(device.serial_enabled, Some(true));
    let security = payload.config.security.clone().unwrap();
    assert_eq!(security.admin_key, Some(vec![vec![0x11, 0x22, 0x33, 0x44]]));
    assert_eq!(security.private_key, Some(vec![1, 2, 3]));
    assert_eq!(
        payload.location,
        Some(Location {
            latitude_i: 451234567,
            longitude_i: 93456789,
            altitude: Some(15),
        })
    );
    assert_eq!(payload.owner.as_deref(), Some("Base Station"));
    assert_eq!(
        payload.canned_messages,
        Some(vec!["Hi".to_string(), "Bye".to_string()])
    );
    assert_eq!(payload.channels.len(), 1);
    assert_eq!(payload.channels[0].role, Some(ChannelRole::Primary));
}

#[test]
fn test_diff_against_parsed_backup() {
    let live = sample_payload();
    let mut changed = sample_payload();
    if let Some(network) = changed.config.network.as_mut() {
        network.ntp_server = Some("time.example.net".to_string());
    }
    changed.canned_messages = None;
    let backup = parse_backup(&build_backup(&changed, &EmitOptions::default())).unwrap();

    let diff = compute_diff(&live, &backup);
    assert_eq!(
        diff.changed_config_sections.into_iter().collect::<Vec<_>>(),
        vec![ConfigSection::Network]
    );
    assert!(diff.changed_module_sections.is_empty());
    assert!(diff.changed_channel_indexes.is_empty());
    assert!(!diff.owner_changed);
    assert!(!diff.canned_messages_changed);
}

#[test]
fn test_channel_url_in_standard_alphabet() {
    let primary = ChannelSettings {
        name: Some("Primary".to_string()),
        psk: Some(vec![0xff; 32]),
        ..Default::default()
    };
    let url = encode_share_url(&[primary.clone()], None, &ShareUrlOptions::default());
    let standard = url.replace('-', "+").replace('_', "/");
    assert!(standard.rsplit('#').next().unwrap().contains('/'));

    let source = format!("channel_url: \"{standard}\"\nconfig: {{}}\nmodule_config: {{}}\n");
    let payload = parse_backup(&source).unwrap();
    assert_eq!(payload.channels.len(), 1);
    assert_eq!(payload.channels[0].settings, Some(primary));
}

#[test]
fn test_zero_indent_round_trip() {
    let payload = sample_payload();
    let text = build_backup(
        &payload,
        &EmitOptions {
            indent: 0,
            byte_style: ByteStyle::Quoted,
        },
    );
    assert!(text.contains("\nconfig:\n device:\n"));
    assert_eq!(parse_backup(&text).unwrap(), payload);
}
