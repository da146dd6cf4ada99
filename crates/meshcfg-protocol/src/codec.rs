//! Channel share URL codec.
//!
//! A share URL packs an ordered channel list and optional radio parameters
//! into a [`ChannelSet`] protobuf, encodes it as URL-safe base64 without
//! padding, and carries it in the fragment of
//! `https://meshtastic.org/e/#<token>`. The optional `?add=true` query asks the
//! consumer to append the channels instead of replacing its own.
//!
//! Decoding accepts the token with or without padding and in either the
//! URL-safe or the standard base64 alphabet.
//!
//! The wire format carries neither index nor role: on decode, position 0 is
//! the primary channel and every later position is a secondary one.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use meshcfg_core::bytes;
use meshcfg_core::config::LoraConfig;
use meshcfg_core::model::{Channel, ChannelRole, ChannelSettings};
use prost::Message;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::messages;

pub const SHARE_URL_SCHEME: &str = "https";
pub const SHARE_URL_HOST: &str = "meshtastic.org";
pub const SHARE_URL_PATH: &str = "/e/";

/// Errors that can occur while decoding a share URL.
#[derive(Debug, Error)]
pub enum ChannelUrlError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unexpected scheme: {0}")]
    UnexpectedScheme(String),

    #[error("Unexpected host: {0}")]
    UnexpectedHost(String),

    #[error("Unexpected path: {0}")]
    UnexpectedPath(String),

    #[error("Missing channel payload")]
    MissingPayload,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid channel set: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl ChannelUrlError {
    /// True when the URL itself is wrong, as opposed to its payload.
    pub fn is_url_mismatch(&self) -> bool {
        matches!(
            self,
            ChannelUrlError::InvalidUrl(_)
                | ChannelUrlError::UnexpectedScheme(_)
                | ChannelUrlError::UnexpectedHost(_)
                | ChannelUrlError::UnexpectedPath(_)
                | ChannelUrlError::MissingPayload
        )
    }
}

/// Options for building a share URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareUrlOptions {
    /// Emit `?add=true`: the consumer appends instead of replacing.
    pub add: bool,
}

/// The content of a decoded share URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelShare {
    pub channels: Vec<Channel>,
    pub lora_config: Option<LoraConfig>,
    pub add: bool,
}

/// Encode channel settings, in the given order, into a share URL.
pub fn encode_share_url(
    settings: &[ChannelSettings],
    lora_config: Option<&LoraConfig>,
    options: &ShareUrlOptions,
) -> String {
    let set = messages::ChannelSet {
        settings: settings.iter().map(messages::ChannelSettings::from).collect(),
        lora_config: lora_config.map(messages::LoRaConfig::from),
    };
    let token = URL_SAFE_NO_PAD.encode(set.encode_to_vec());
    let query = if options.add { "?add=true" } else { "" };
    format!("https://{SHARE_URL_HOST}{SHARE_URL_PATH}{query}#{token}")
}

/// Share URL for the enabled channels of a device, ordered by index.
///
/// Returns `None` when no channel is primary or secondary.
pub fn channels_share_url(
    channels: &[Channel],
    lora_config: Option<&LoraConfig>,
    options: &ShareUrlOptions,
) -> Option<String> {
    let mut enabled: Vec<&Channel> = channels.iter().filter(|c| c.is_enabled()).collect();
    if enabled.is_empty() {
        return None;
    }
    enabled.sort_by_key(|c| c.index);
    let settings: Vec<ChannelSettings> = enabled
        .into_iter()
        .map(|c| c.settings.clone().unwrap_or_default())
        .collect();
    Some(encode_share_url(&settings, lora_config, options))
}

/// Decode a share URL.
pub fn decode_share_url(input: &str) -> Result<ChannelShare, ChannelUrlError> {
    let url = Url::parse(input.trim())?;

    if url.scheme() != SHARE_URL_SCHEME {
        return Err(ChannelUrlError::UnexpectedScheme(url.scheme().to_string()));
    }

    let host = url.host_str().unwrap_or_default();
    if host != SHARE_URL_HOST {
        return Err(ChannelUrlError::UnexpectedHost(host.to_string()));
    }

    if url.path() != SHARE_URL_PATH {
        return Err(ChannelUrlError::UnexpectedPath(url.path().to_string()));
    }

    let token = url
        .fragment()
        .filter(|f| !f.is_empty())
        .ok_or(ChannelUrlError::MissingPayload)?;
    let add = url.query_pairs().any(|(k, v)| k == "add" && v == "true");

    let standard: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let raw = bytes::decode(&standard)?;
    let set = messages::ChannelSet::decode(raw.as_slice())?;
    debug!(
        "Decoded channel set with {} channels (lora config: {})",
        set.settings.len(),
        set.lora_config.is_some()
    );

    let channels = set
        .settings
        .into_iter()
        .enumerate()
        .map(|(position, wire)| Channel {
            index: position as u32,
            role: Some(if position == 0 {
                ChannelRole::Primary
            } else {
                ChannelRole::Secondary
            }),
            settings: Some(ChannelSettings::from(wire)),
        })
        .collect();

    Ok(ChannelShare {
        channels,
        lora_config: set.lora_config.map(LoraConfig::from),
        add,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshcfg_core::config::RegionCode;
    use pretty_assertions::assert_eq;

    fn settings(name: &str, psk: &[u8]) -> ChannelSettings {
        ChannelSettings {
            name: Some(name.to_string()),
            psk: Some(psk.to_vec()),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_assigns_index_and_role() {
        let primary = settings("Primary", &[1]);
        let secondary = settings("Secondary", &[7; 16]);
        let url = encode_share_url(
            &[primary.clone(), secondary.clone()],
            None,
            &ShareUrlOptions::default(),
        );
        assert!(url.starts_with("https://meshtastic.org/e/#"));
        assert!(!url.contains('='));

        let share = decode_share_url(&url).unwrap();
        assert!(!share.add);
        assert_eq!(share.channels.len(), 2);
        assert_eq!(share.channels[0].index, 0);
        assert_eq!(share.channels[0].role, Some(ChannelRole::Primary));
        assert_eq!(share.channels[0].settings, Some(primary));
        assert_eq!(share.channels[1].index, 1);
        assert_eq!(share.channels[1].role, Some(ChannelRole::Secondary));
        assert_eq!(share.channels[1].settings, Some(secondary));
    }

    #[test]
    fn test_add_flag_and_lora() {
        let lora = LoraConfig {
            region: Some(RegionCode::Us),
            hop_limit: Some(3),
            ..Default::default()
        };
        let url = encode_share_url(
            &[settings("Only", &[1])],
            Some(&lora),
            &ShareUrlOptions { add: true },
        );
        assert!(url.starts_with("https://meshtastic.org/e/?add=true#"));

        let share = decode_share_url(&url).unwrap();
        assert!(share.add);
        assert_eq!(share.lora_config, Some(lora));
    }

    #[test]
    fn test_accepts_padded_token() {
        let url = encode_share_url(&[settings("A", &[1])], None, &ShareUrlOptions::default());
        let token = url.rsplit('#').next().unwrap();
        let padding = "=".repeat((4 - token.len() % 4) % 4);
        let variant = format!("https://meshtastic.org/e/#{token}{padding}");
        assert_eq!(decode_share_url(&variant).unwrap().channels.len(), 1);
    }

    #[test]
    fn test_accepts_standard_alphabet_token() {
        let key = settings("Primary", &[0xff; 32]);
        let url = encode_share_url(&[key.clone()], None, &ShareUrlOptions::default());
        let token = url.rsplit('#').next().unwrap();
        assert!(token.contains('_'));

        let standard = token.replace('-', "+").replace('_', "/");
        let share = decode_share_url(&format!("https://meshtastic.org/e/#{standard}")).unwrap();
        assert_eq!(share.channels.len(), 1);
        assert_eq!(share.channels[0].settings, Some(key));
    }

    #[test]
    fn test_rejects_inexact_scheme_and_path() {
        let url = encode_share_url(&[settings("A", &[1])], None, &ShareUrlOptions::default());
        let token = url.rsplit('#').next().unwrap();

        for path in ["/e", "/e//", "/e/x/"] {
            let variant = format!("https://meshtastic.org{path}#{token}");
            assert!(
                matches!(
                    decode_share_url(&variant),
                    Err(ChannelUrlError::UnexpectedPath(_))
                ),
                "{variant}"
            );
        }

        let err = decode_share_url(&format!("http://meshtastic.org/e/#{token}")).unwrap_err();
        assert!(matches!(err, ChannelUrlError::UnexpectedScheme(_)));
        assert!(err.is_url_mismatch());
    }

    #[test]
    fn test_rejects_wrong_host_path_and_empty_fragment() {
        assert!(matches!(
            decode_share_url("https://example.org/e/#CgA"),
            Err(ChannelUrlError::UnexpectedHost(_))
        ));
        assert!(matches!(
            decode_share_url("https://meshtastic.org/x/#CgA"),
            Err(ChannelUrlError::UnexpectedPath(_))
        ));
        assert!(matches!(
            decode_share_url("https://meshtastic.org/e/"),
            Err(ChannelUrlError::MissingPayload)
        ));
        assert!(matches!(
            decode_share_url("not a url"),
            Err(ChannelUrlError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_garbage_payload() {
        let err = decode_share_url("https://meshtastic.org/e/#____").unwrap_err();
        assert!(!err.is_url_mismatch());
    }

    #[test]
    fn test_channels_share_url_skips_disabled() {
        let channels = vec![
            Channel {
                index: 2,
                role: Some(ChannelRole::Secondary),
                settings: Some(settings("Second", &[2])),
            },
            Channel {
                index: 1,
                role: Some(ChannelRole::Disabled),
                settings: Some(settings("Off", &[3])),
            },
            Channel {
                index: 0,
                role: Some(ChannelRole::Primary),
                settings: Some(settings("First", &[1])),
            },
        ];
        let url = channels_share_url(&channels, None, &ShareUrlOptions::default()).unwrap();
        let names: Vec<Option<String>> = decode_share_url(&url)
            .unwrap()
            .channels
            .into_iter()
            .map(|c| c.settings.and_then(|s| s.name))
            .collect();
        assert_eq!(
            names,
            vec![Some("First".to_string()), Some("Second".to_string())]
        );

        assert!(channels_share_url(&channels[1..2], None, &ShareUrlOptions::default()).is_none());
    }
}
