//! Builds the generator from config and flags and renders its output lines.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use actorid_identifier::{
    ActorIdentifier, Generator, SegmentKind, SegmentOrder, UuidFacility, machine_segment,
};
use actorid_machine::{BrowserEnvironment, Environment, HostProbe, MachineIdentityProvider};
use serde::Serialize;

use crate::cli::{Args, OutputFormat};
use crate::config::Config;

/// One JSON output line.
#[derive(Debug, Serialize)]
struct IdentifierRecord<'a> {
    id: &'a ActorIdentifier,
    platform: &'a str,
    random: &'a str,
    machine: &'a str,
    unique: &'a str,
}

/// Runs the command and returns the lines to print.
pub async fn run(args: &Args, config: &Config) -> anyhow::Result<Vec<String>> {
    let provider = build_provider(args, config)?;
    tracing::info!(platform = %provider.platform(), "identity source selected");

    if args.machine_segment {
        let identity = provider.machine_identity().await?;
        return Ok(vec![machine_segment(&identity)?]);
    }

    let order = if args.canonical {
        SegmentOrder::Canonical
    } else {
        SegmentOrder::Shuffled
    };
    let uuid = config.native_uuid.then_some(UuidFacility::Native);
    let platform = provider.platform().to_string();
    let generator = Generator::new(provider)
        .with_uuid_facility(uuid)
        .with_segment_order(order);

    let mut lines = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let id = generator.generate().await?;
        let line = match args.format {
            OutputFormat::Text => id.to_string(),
            OutputFormat::Json => serde_json::to_string(&IdentifierRecord {
                id: &id,
                platform: &platform,
                random: id.segment(SegmentKind::Random),
                machine: id.machine_segment(),
                unique: id.segment(SegmentKind::Unique),
            })?,
        };
        lines.push(line);
    }
    Ok(lines)
}

fn build_provider(args: &Args, config: &Config) -> anyhow::Result<MachineIdentityProvider> {
    let env = match &args.browser_env {
        Some(path) => Environment::browser(load_browser_env(path)?),
        None => {
            let platform = args.platform.as_deref().unwrap_or(&config.platform);
            if platform.eq_ignore_ascii_case("auto") {
                Environment::host()
            } else {
                Environment {
                    os_family: Some(platform.to_ascii_lowercase()),
                    browser: None,
                }
            }
        }
    };

    let provider = MachineIdentityProvider::from_environment(env, Arc::new(HostProbe))?
        .with_machine_id_path(&config.machine_id_path)
        .with_timeout(Duration::from_secs(config.probe_timeout_secs));
    Ok(provider)
}

fn load_browser_env(path: &Path) -> anyhow::Result<BrowserEnvironment> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
