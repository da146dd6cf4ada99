//! Diff and selective merge between a live configuration and a backup.
//!
//! Sections are compared on their pruned canonical form, so two sections that
//! differ only in unset-vs-default representation are equal. Channels are
//! compared per index; a channel missing from the backup is never treated as
//! a removal.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::canonical::canonicalize;
use crate::config::{ConfigSection, ConfigVariant};
use crate::model::{Channel, ConfigBackupPayload};
use crate::module_config::{ModuleConfigSection, ModuleConfigVariant};

/// What differs between a live configuration and a backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub changed_config_sections: BTreeSet<ConfigSection>,
    pub changed_module_sections: BTreeSet<ModuleConfigSection>,
    pub changed_channel_indexes: BTreeSet<u32>,
    pub owner_changed: bool,
    pub canned_messages_changed: bool,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.changed_config_sections.is_empty()
            && self.changed_module_sections.is_empty()
            && self.changed_channel_indexes.is_empty()
            && !self.owner_changed
            && !self.canned_messages_changed
    }

    pub fn config_count(&self) -> usize {
        self.changed_config_sections.len()
    }

    pub fn module_count(&self) -> usize {
        self.changed_module_sections.len()
    }

    pub fn channel_count(&self) -> usize {
        self.changed_channel_indexes.len()
    }
}

/// A single update to forward to the device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateCommand {
    Config(ConfigVariant),
    ModuleConfig(ModuleConfigVariant),
    Channel(Channel),
    #[serde(rename_all = "camelCase")]
    Owner {
        long_name: Option<String>,
        short_name: Option<String>,
    },
    CannedMessages(Vec<String>),
}

impl UpdateCommand {
    /// Mirror this update into a local copy of the device state.
    pub fn apply_to(&self, state: &mut ConfigBackupPayload) {
        match self {
            UpdateCommand::Config(variant) => state.config.set_variant(variant.clone()),
            UpdateCommand::ModuleConfig(variant) => {
                state.module_config.set_variant(variant.clone())
            }
            UpdateCommand::Channel(channel) => state.upsert_channel(channel.clone()),
            UpdateCommand::Owner {
                long_name,
                short_name,
            } => {
                if long_name.is_some() {
                    state.owner = long_name.clone();
                }
                if short_name.is_some() {
                    state.owner_short = short_name.clone();
                }
            }
            UpdateCommand::CannedMessages(messages) => {
                state.canned_messages = Some(messages.clone());
            }
        }
    }
}

/// Receiver for update commands.
pub trait UpdateSink {
    fn submit(&mut self, command: UpdateCommand);
}

impl UpdateSink for Vec<UpdateCommand> {
    fn submit(&mut self, command: UpdateCommand) {
        self.push(command);
    }
}

/// Compare a live configuration against a parsed backup.
pub fn compute_diff(live: &ConfigBackupPayload, backup: &ConfigBackupPayload) -> DiffResult {
    let changed_config_sections = ConfigSection::ALL
        .into_iter()
        .filter(|&s| live.config.section_value(s) != backup.config.section_value(s))
        .collect();

    let changed_module_sections = ModuleConfigSection::ALL
        .into_iter()
        .filter(|&s| live.module_config.section_value(s) != backup.module_config.section_value(s))
        .collect();

    let live_channels = index_channels(&live.channels);
    let backup_channels = index_channels(&backup.channels);
    let changed_channel_indexes = live_channels
        .keys()
        .chain(backup_channels.keys())
        .copied()
        .collect::<BTreeSet<u32>>()
        .into_iter()
        .filter(|index| match backup_channels.get(index) {
            Some(from_backup) => live_channels
                .get(index)
                .map_or(true, |current| canonicalize(*current) != canonicalize(*from_backup)),
            None => false,
        })
        .collect();

    DiffResult {
        changed_config_sections,
        changed_module_sections,
        changed_channel_indexes,
        owner_changed: owner_differs(live.owner.as_deref(), backup.owner.as_deref())
            || owner_differs(live.owner_short.as_deref(), backup.owner_short.as_deref()),
        canned_messages_changed: backup.canned_messages.is_some(),
    }
}

/// Forward every flagged item of `diff` to `sink`, exactly once each.
pub fn apply<S: UpdateSink>(
    live: &ConfigBackupPayload,
    backup: &ConfigBackupPayload,
    diff: &DiffResult,
    sink: &mut S,
) {
    for &section in &diff.changed_config_sections {
        sink.submit(UpdateCommand::Config(backup.config.variant(section)));
    }

    for &section in &diff.changed_module_sections {
        sink.submit(UpdateCommand::ModuleConfig(
            backup.module_config.variant(section),
        ));
    }

    let backup_channels = index_channels(&backup.channels);
    for index in &diff.changed_channel_indexes {
        if let Some(channel) = backup_channels.get(index) {
            sink.submit(UpdateCommand::Channel((*channel).clone()));
        }
    }

    if diff.owner_changed {
        sink.submit(UpdateCommand::Owner {
            long_name: non_empty(backup.owner.as_deref()).or_else(|| live.owner.clone()),
            short_name: non_empty(backup.owner_short.as_deref())
                .or_else(|| live.owner_short.clone()),
        });
    }

    if diff.canned_messages_changed {
        if let Some(messages) = &backup.canned_messages {
            sink.submit(UpdateCommand::CannedMessages(messages.clone()));
        }
    }
}

/// Collect the update commands for `diff`.
pub fn apply_diff(
    live: &ConfigBackupPayload,
    backup: &ConfigBackupPayload,
    diff: &DiffResult,
) -> Vec<UpdateCommand> {
    let mut commands = Vec::new();
    apply(live, backup, diff, &mut commands);
    commands
}

fn index_channels(channels: &[Channel]) -> BTreeMap<u32, &Channel> {
    channels.iter().map(|c| (c.index, c)).collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn owner_differs(live: Option<&str>, backup: Option<&str>) -> bool {
    match non_empty(backup) {
        Some(wanted) => live.map(str::trim) != Some(wanted.as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeviceConfig, DeviceRole, LocalConfig, NetworkConfig};
    use crate::model::{ChannelRole, ChannelSettings};
    use pretty_assertions::assert_eq;

    fn payload_with(role: DeviceRole, ntp: &str) -> ConfigBackupPayload {
        let mut payload = ConfigBackupPayload::default();
        payload.config.device = Some(DeviceConfig {
            role: Some(role),
            ..Default::default()
        });
        payload.config.network = Some(NetworkConfig {
            ntp_server: Some(ntp.to_string()),
            ..Default::default()
        });
        payload
    }

    fn channel(index: u32, name: &str) -> Channel {
        Channel {
            index,
            role: Some(if index == 0 {
                ChannelRole::Primary
            } else {
                ChannelRole::Secondary
            }),
            settings: Some(ChannelSettings {
                name: Some(name.to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_only_changed_section_is_flagged() {
        let live = payload_with(DeviceRole::Client, "pool.ntp.org");
        let backup = payload_with(DeviceRole::Client, "time.example.net");

        let diff = compute_diff(&live, &backup);
        assert_eq!(
            diff.changed_config_sections,
            BTreeSet::from([ConfigSection::Network])
        );
        assert!(diff.changed_module_sections.is_empty());

        let commands = apply_diff(&live, &backup, &diff);
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            UpdateCommand::Config(ConfigVariant::Network(network)) => {
                assert_eq!(network.ntp_server.as_deref(), Some("time.example.net"));
            }
            other => panic!("Expected network update, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_section_equals_absent_section() {
        let mut live = ConfigBackupPayload::default();
        live.config.device = Some(DeviceConfig::default());
        let backup = ConfigBackupPayload::default();

        assert!(compute_diff(&live, &backup).is_empty());
    }

    #[test]
    fn test_section_missing_from_backup_resets_to_default() {
        let live = payload_with(DeviceRole::Router, "pool.ntp.org");
        let mut backup = live.clone();
        backup.config.device = None;

        let diff = compute_diff(&live, &backup);
        let commands = apply_diff(&live, &backup, &diff);
        assert_eq!(
            commands,
            vec![UpdateCommand::Config(ConfigVariant::Device(
                DeviceConfig::default()
            ))]
        );
    }

    #[test]
    fn test_channels_compared_by_index_without_removals() {
        let mut live = ConfigBackupPayload::default();
        live.channels = vec![channel(0, "Primary"), channel(1, "Old"), channel(2, "Kept")];
        let mut backup = ConfigBackupPayload::default();
        backup.channels = vec![channel(1, "New"), channel(0, "Primary"), channel(3, "Added")];

        let diff = compute_diff(&live, &backup);
        assert_eq!(diff.changed_channel_indexes, BTreeSet::from([1, 3]));

        let commands = apply_diff(&live, &backup, &diff);
        let indexes: Vec<u32> = commands
            .iter()
            .filter_map(|c| match c {
                UpdateCommand::Channel(ch) => Some(ch.index),
                _ => None,
            })
            .collect();
        assert_eq!(indexes, vec![1, 3]);
    }

    #[test]
    fn test_owner_changes_only_on_non_empty_backup_value() {
        let mut live = ConfigBackupPayload::default();
        live.owner = Some("Base Station".to_string());
        live.owner_short = Some("BS".to_string());

        let mut backup = ConfigBackupPayload::default();
        backup.owner = Some("   ".to_string());
        assert!(!compute_diff(&live, &backup).owner_changed);

        backup.owner = Some(" Base Station ".to_string());
        assert!(!compute_diff(&live, &backup).owner_changed);

        backup.owner_short = Some("BS2".to_string());
        let diff = compute_diff(&live, &backup);
        assert!(diff.owner_changed);
        assert_eq!(
            apply_diff(&live, &backup, &diff),
            vec![UpdateCommand::Owner {
                long_name: Some("Base Station".to_string()),
                short_name: Some("BS2".to_string()),
            }]
        );
    }

    #[test]
    fn test_canned_messages_flagged_by_presence() {
        let mut live = ConfigBackupPayload::default();
        live.canned_messages = Some(vec!["Hi".to_string()]);
        let mut backup = ConfigBackupPayload::default();
        assert!(!compute_diff(&live, &backup).canned_messages_changed);

        backup.canned_messages = Some(vec!["Hi".to_string()]);
        assert!(compute_diff(&live, &backup).canned_messages_changed);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut live = payload_with(DeviceRole::Client, "pool.ntp.org");
        live.channels = vec![channel(0, "Primary")];
        let mut backup = payload_with(DeviceRole::Router, "pool.ntp.org");
        backup.channels = vec![channel(0, "Renamed"), channel(1, "Second")];
        backup.owner = Some("Node".to_string());

        let diff = compute_diff(&live, &backup);
        assert!(!diff.is_empty());
        for command in apply_diff(&live, &backup, &diff) {
            command.apply_to(&mut live);
        }

        let again = compute_diff(&live, &backup);
        assert!(again.is_empty(), "unexpected diff after apply: {again:?}");
        assert!(apply_diff(&live, &backup, &again).is_empty());
    }

    #[test]
    fn test_counts() {
        let live = payload_with(DeviceRole::Client, "a");
        let backup = payload_with(DeviceRole::Router, "b");
        let diff = compute_diff(&live, &backup);
        assert_eq!(diff.config_count(), 2);
        assert_eq!(diff.module_count(), 0);
        assert_eq!(diff.channel_count(), 0);
    }
}
