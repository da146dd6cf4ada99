use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use meshcfg_core::{apply_diff, canonicalize, compute_diff, ConfigBackupPayload, Mapping, Value};
use meshcfg_protocol::backup::{backup_file_name, has_backup_extension};
use meshcfg_protocol::codec::channels_share_url;
use meshcfg_protocol::document::emit;
use meshcfg_protocol::{
    build_backup, decode_share_url, parse_backup, BackupErrorKind, ByteStyle, EmitOptions,
    ShareUrlOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "meshcfg", version, about = "Meshtastic configuration backup tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a backup and summarize its content
    Inspect { file: PathBuf },
    /// Show what restoring BACKUP onto LIVE would change
    Diff { live: PathBuf, backup: PathBuf },
    /// Re-emit a backup in canonical form
    Normalize {
        file: PathBuf,
        /// Output path (default: timestamped file in the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Spaces per nesting level
        #[arg(
            long,
            default_value_t = 2,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        indent: usize,
        /// Write key material as base64:... without quotes
        #[arg(long)]
        plain_bytes: bool,
    },
    /// Print the channel share URL of a backup
    ShareUrl {
        file: PathBuf,
        /// Ask the consumer to add the channels instead of replacing
        #[arg(long)]
        add: bool,
    },
    /// Print the channels carried by a share URL
    DecodeUrl { url: String },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,meshcfg_protocol=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Command::Inspect { file } => inspect(&file),
        Command::Diff { live, backup } => diff(&live, &backup),
        Command::Normalize {
            file,
            out,
            indent,
            plain_bytes,
        } => {
            let options = EmitOptions {
                indent,
                byte_style: if plain_bytes {
                    ByteStyle::Plain
                } else {
                    ByteStyle::Quoted
                },
            };
            normalize(&file, out, &options)
        }
        Command::ShareUrl { file, add } => share_url(&file, add),
        Command::DecodeUrl { url } => decode_url(&url),
    }
}

/// Read and validate a backup file.
fn load(path: &Path) -> anyhow::Result<ConfigBackupPayload> {
    let name = path.to_string_lossy();
    if !has_backup_extension(&name) {
        bail!("{}: {}", name, BackupErrorKind::InvalidFile);
    }
    let source =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", name))?;
    tracing::debug!("Loaded {} bytes from {}", source.len(), name);
    parse_backup(&source).with_context(|| format!("{} was rejected", name))
}

fn inspect(path: &Path) -> anyhow::Result<()> {
    let payload = load(path)?;
    let config = canonicalize(&payload.config);
    let module_config = canonicalize(&payload.module_config);
    let names = |value: &Value| -> String {
        value
            .as_map()
            .map(|map| map.keys().collect::<Vec<_>>().join(", "))
            .unwrap_or_default()
    };

    println!("config:        {}", names(&config));
    println!("module_config: {}", names(&module_config));
    println!("channels:      {}", payload.channels.len());
    for channel in payload.sorted_channels() {
        let name = channel
            .settings
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or("");
        let role = channel.role.map(|r| format!("{r:?}")).unwrap_or_default();
        println!("  [{}] {} {}", channel.index, role, name);
    }
    if let Some(owner) = &payload.owner {
        println!("owner:         {}", owner);
    }
    if let Some(short) = &payload.owner_short {
        println!("owner_short:   {}", short);
    }
    if let Some(location) = &payload.location {
        println!(
            "location:      {}, {}",
            location.latitude(),
            location.longitude()
        );
    }
    if let Some(messages) = &payload.canned_messages {
        println!("canned:        {} messages", messages.len());
    }
    Ok(())
}

fn diff(live: &Path, backup: &Path) -> anyhow::Result<()> {
    let live = load(live)?;
    let backup = load(backup)?;
    let result = compute_diff(&live, &backup);

    if result.is_empty() {
        println!("No changes");
        return Ok(());
    }

    println!(
        "{} config, {} module, {} channel changes{}{}",
        result.config_count(),
        result.module_count(),
        result.channel_count(),
        if result.owner_changed { ", owner" } else { "" },
        if result.canned_messages_changed {
            ", canned messages"
        } else {
            ""
        },
    );
    for command in apply_diff(&live, &backup, &result) {
        println!("{}", serde_json::to_string(&command)?);
    }
    Ok(())
}

fn normalize(path: &Path, out: Option<PathBuf>, options: &EmitOptions) -> anyhow::Result<()> {
    let payload = load(path)?;
    let out = out.unwrap_or_else(|| {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ");
        PathBuf::from(backup_file_name(&timestamp.to_string()))
    });
    std::fs::write(&out, build_backup(&payload, options))
        .with_context(|| format!("Failed to write {}", out.display()))?;
    tracing::info!("Wrote {}", out.display());
    println!("{}", out.display());
    Ok(())
}

fn share_url(path: &Path, add: bool) -> anyhow::Result<()> {
    let payload = load(path)?;
    let url = channels_share_url(
        &payload.channels,
        payload.config.lora.as_ref(),
        &ShareUrlOptions { add },
    )
    .context("Backup has no primary or secondary channels")?;
    println!("{url}");
    Ok(())
}

fn decode_url(url: &str) -> anyhow::Result<()> {
    let share = decode_share_url(url).context("Invalid channel URL")?;

    let mut root = Mapping::new();
    if share.add {
        root.insert("add", Value::Bool(true));
    }
    root.insert(
        "channels",
        Value::List(share.channels.iter().map(canonicalize).collect()),
    );
    if let Some(lora) = &share.lora_config {
        root.insert("lora", canonicalize(lora));
    }
    print!("{}", emit(&Value::Map(root), &EmitOptions::default()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_indent_must_be_positive() {
        assert!(Cli::try_parse_from(["meshcfg", "normalize", "a.yaml", "--indent", "0"]).is_err());

        let cli = Cli::try_parse_from(["meshcfg", "normalize", "a.yaml", "--indent", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Normalize { indent: 4, .. }));

        let cli = Cli::try_parse_from(["meshcfg", "normalize", "a.yaml"]).unwrap();
        assert!(matches!(cli.command, Command::Normalize { indent: 2, .. }));
    }
}
