//! Configuration backup documents.
//!
//! A backup is a flat document compatible with the command line tools:
//!
//! ```text
//! # start of Meshtastic configure yaml
//! canned_messages: Hi|Bye
//! channel_url: "https://meshtastic.org/e/#..."
//! config:
//!   ...
//! location:
//!   lat: 45.1234567
//!   lon: 9.3456789
//! module_config:
//!   ...
//! owner: Base Station
//! owner_short: BS
//! channels:
//!   -
//!     index: 0
//!     ...
//! ```
//!
//! Validation accumulates every structural problem it finds and reports them
//! as error kinds; text rendering is left to the caller.

use std::fmt;

use meshcfg_core::canonical::{canonicalize, reconstruct};
use meshcfg_core::model::{
    join_canned_messages, split_canned_messages, Channel, ConfigBackupPayload, Location,
};
use meshcfg_core::{LocalConfig, LocalModuleConfig, Mapping, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::{channels_share_url, decode_share_url, ShareUrlOptions};
use crate::document::{emit, parse, EmitOptions};

/// First line of every exported backup.
pub const BACKUP_HEADER: &str = "# start of Meshtastic configure yaml";

pub const BACKUP_MIME_TYPE: &str = "application/x-yaml";

pub const BACKUP_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Value of the optional `format:` marker written by enveloped exports.
pub const FORMAT_MARKER: &str = "meshtastic-web-config-backup-v1";

/// Top-level keys, in emission order.
pub mod keys {
    pub const CANNED_MESSAGES: &str = "canned_messages";
    pub const CHANNEL_URL: &str = "channel_url";
    pub const CONFIG: &str = "config";
    pub const LOCATION: &str = "location";
    pub const MODULE_CONFIG: &str = "module_config";
    pub const MODULE_CONFIG_CAMEL: &str = "moduleConfig";
    pub const OWNER: &str = "owner";
    pub const OWNER_SHORT: &str = "owner_short";
    pub const CHANNELS: &str = "channels";
    pub const FORMAT: &str = "format";
}

/// Default file name for a backup taken at `timestamp`.
pub fn backup_file_name(timestamp: &str) -> String {
    format!("meshtastic_config_backup_{timestamp}.yaml")
}

/// True when `name` has a backup file extension.
pub fn has_backup_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| BACKUP_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Why a backup document was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackupErrorKind {
    InvalidFile,
    MissingConfig,
    MissingModuleConfig,
    InvalidChannels,
    InvalidChannelUrl,
    UnsupportedVersion,
}

impl BackupErrorKind {
    /// Stable tag for the host's message catalogue.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupErrorKind::InvalidFile => "invalidFile",
            BackupErrorKind::MissingConfig => "missingConfig",
            BackupErrorKind::MissingModuleConfig => "missingModuleConfig",
            BackupErrorKind::InvalidChannels => "invalidChannels",
            BackupErrorKind::InvalidChannelUrl => "invalidChannelUrl",
            BackupErrorKind::UnsupportedVersion => "unsupportedVersion",
        }
    }
}

impl fmt::Display for BackupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every problem found in a rejected document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid backup: {}", .0.iter().map(BackupErrorKind::as_str).collect::<Vec<_>>().join(", "))]
pub struct BackupErrors(pub Vec<BackupErrorKind>);

impl BackupErrors {
    fn single(kind: BackupErrorKind) -> Self {
        Self(vec![kind])
    }

    pub fn kinds(&self) -> &[BackupErrorKind] {
        &self.0
    }

    pub fn contains(&self, kind: BackupErrorKind) -> bool {
        self.0.contains(&kind)
    }
}

/// Render a backup document.
pub fn build_backup(payload: &ConfigBackupPayload, options: &EmitOptions) -> String {
    let mut root = Mapping::new();

    // an empty list is still written: restoring it clears the device's messages
    if let Some(messages) = payload.canned_messages.as_deref() {
        root.insert(
            keys::CANNED_MESSAGES,
            Value::Text(join_canned_messages(messages)),
        );
    }

    let lora = payload.config.lora.as_ref();
    if let Some(url) = channels_share_url(&payload.channels, lora, &ShareUrlOptions::default()) {
        root.insert(keys::CHANNEL_URL, Value::Text(url));
    }

    root.insert(keys::CONFIG, required_section(canonicalize(&payload.config)));

    if let Some(location) = payload.location.filter(Location::is_set) {
        let mut map = Mapping::new();
        map.insert("lat", Value::float(location.latitude()));
        map.insert("lon", Value::float(location.longitude()));
        if let Some(altitude) = location.altitude {
            map.insert("alt", Value::from(i64::from(altitude)));
        }
        root.insert(keys::LOCATION, Value::Map(map));
    }

    root.insert(
        keys::MODULE_CONFIG,
        required_section(canonicalize(&payload.module_config)),
    );

    for (key, name) in [
        (keys::OWNER, &payload.owner),
        (keys::OWNER_SHORT, &payload.owner_short),
    ] {
        if let Some(name) = name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            root.insert(key, Value::from(name));
        }
    }

    let channels: Vec<Value> = payload
        .sorted_channels()
        .into_iter()
        .map(|channel| canonicalize(channel))
        .collect();
    if !channels.is_empty() {
        root.insert(keys::CHANNELS, Value::List(channels));
    }

    format!("{BACKUP_HEADER}\n{}", emit(&Value::Map(root), options))
}

/// `config` and `module_config` are always written, as `{}` when empty, so
/// every export passes validation.
fn required_section(value: Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(map),
        _ => Value::Map(Mapping::new()),
    }
}

/// Parse and validate a backup document.
pub fn parse_backup(source: &str) -> Result<ConfigBackupPayload, BackupErrors> {
    let document = parse(source).map_err(|e| {
        warn!("Rejected backup: {}", e);
        BackupErrors::single(BackupErrorKind::InvalidFile)
    })?;

    let Value::Map(root) = document else {
        warn!("Rejected backup: document is not a mapping");
        return Err(BackupErrors::single(BackupErrorKind::InvalidFile));
    };

    let mut errors = Vec::new();

    if let Some(format) = root.get(keys::FORMAT) {
        if format.as_str() != Some(FORMAT_MARKER) {
            errors.push(BackupErrorKind::UnsupportedVersion);
        }
    }

    let config = root.get(keys::CONFIG).filter(|v| v.as_map().is_some());
    if config.is_none() {
        errors.push(BackupErrorKind::MissingConfig);
    }

    let module_config = [keys::MODULE_CONFIG_CAMEL, keys::MODULE_CONFIG]
        .into_iter()
        .filter_map(|key| root.get(key))
        .find(|v| v.as_map().is_some());
    if module_config.is_none() {
        errors.push(BackupErrorKind::MissingModuleConfig);
    }

    let channels = match root.get(keys::CHANNELS) {
        Some(value) => match channel_entries(value) {
            Some(entries) => entries,
            None => {
                errors.push(BackupErrorKind::InvalidChannels);
                Vec::new()
            }
        },
        None => match root.get(keys::CHANNEL_URL) {
            Some(url) => match channels_from_url(url) {
                Ok(channels) => channels,
                Err(kind) => {
                    errors.push(kind);
                    Vec::new()
                }
            },
            None => Vec::new(),
        },
    };

    let (Some(config), Some(module_config), true) = (config, module_config, errors.is_empty())
    else {
        warn!("Rejected backup: {:?}", errors);
        return Err(BackupErrors(errors));
    };

    let payload = assemble(&root, config, module_config, channels).map_err(|reason| {
        warn!("Rejected backup: {}", reason);
        BackupErrors::single(BackupErrorKind::InvalidFile)
    })?;

    debug!(
        "Parsed backup with {} channels, canned messages: {}",
        payload.channels.len(),
        payload.canned_messages.is_some()
    );
    Ok(payload)
}

/// Entries of a `channels` list, if every entry is a mapping with a numeric index.
fn channel_entries(value: &Value) -> Option<Vec<Value>> {
    let items = value.as_list()?;
    let valid = items.iter().all(|item| {
        item.as_map()
            .and_then(|map| map.get("index"))
            .is_some_and(Value::is_number)
    });
    valid.then(|| items.to_vec())
}

/// Channels carried by a `channel_url` field.
///
/// A URL that does not point at a channel set is an error; a payload that
/// does not decode means no channels.
fn channels_from_url(url: &Value) -> Result<Vec<Value>, BackupErrorKind> {
    let url = url.as_str().ok_or(BackupErrorKind::InvalidChannelUrl)?;
    match decode_share_url(url) {
        Ok(share) => Ok(share.channels.iter().map(canonicalize).collect()),
        Err(e) if e.is_url_mismatch() => {
            warn!("Rejected channel_url: {}", e);
            Err(BackupErrorKind::InvalidChannelUrl)
        }
        Err(e) => {
            warn!("Ignoring undecodable channel_url payload: {}", e);
            Ok(Vec::new())
        }
    }
}

#[derive(Debug, Error)]
enum AssembleError {
    #[error(transparent)]
    Reconstruct(#[from] meshcfg_core::ReconstructError),

    #[error("`{0}` has an unexpected shape")]
    Shape(&'static str),
}

fn assemble(
    root: &Mapping,
    config: &Value,
    module_config: &Value,
    channels: Vec<Value>,
) -> Result<ConfigBackupPayload, AssembleError> {
    let config: LocalConfig = reconstruct(config)?;
    let module_config: LocalModuleConfig = reconstruct(module_config)?;
    let channels = channels
        .iter()
        .map(reconstruct::<Channel>)
        .collect::<Result<Vec<_>, _>>()?;

    let mut payload = ConfigBackupPayload::new(config, module_config);
    payload.channels = channels;
    payload.owner = optional_text(root, keys::OWNER)?;
    payload.owner_short = optional_text(root, keys::OWNER_SHORT)?;
    payload.location = location(root.get(keys::LOCATION))?;
    payload.canned_messages = canned_messages(root.get(keys::CANNED_MESSAGES))?;
    Ok(payload)
}

/// Scalar rendered as text; names like `1234` parse as numbers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Text(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn optional_text(root: &Mapping, key: &'static str) -> Result<Option<String>, AssembleError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let text = scalar_text(value).ok_or(AssembleError::Shape(key))?;
            Ok(Some(text).filter(|t| !t.trim().is_empty()))
        }
    }
}

fn location(value: Option<&Value>) -> Result<Option<Location>, AssembleError> {
    let map = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Map(map)) => map,
        Some(_) => return Err(AssembleError::Shape(keys::LOCATION)),
    };
    let coordinate = |key: &str| match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or(AssembleError::Shape(keys::LOCATION)),
    };
    let (Some(lat), Some(lon)) = (coordinate("lat")?, coordinate("lon")?) else {
        return Ok(None);
    };
    let mut location = Location::from_degrees(lat, lon);
    location.altitude = coordinate("alt")?.map(|alt| alt.round() as i32);
    Ok(Some(location).filter(Location::is_set))
}

fn canned_messages(value: Option<&Value>) -> Result<Option<Vec<String>>, AssembleError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::List(items)) => items
            .iter()
            .map(|item| scalar_text(item).ok_or(AssembleError::Shape(keys::CANNED_MESSAGES)))
            .collect::<Result<Vec<_>, _>>()
            .map(|messages| {
                Some(
                    messages
                        .into_iter()
                        .filter(|m| !m.trim().is_empty())
                        .collect(),
                )
            }),
        Some(value) => scalar_text(value)
            .map(|joined| Some(split_canned_messages(&joined)))
            .ok_or(AssembleError::Shape(keys::CANNED_MESSAGES)),
    }
}
