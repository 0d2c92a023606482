use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use listing_core::{FilterSession, UrlLocation};
use shared::domain::{ConsultMode, Provider, SortKey};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::load_settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    VideoConsult,
    InClinic,
}

impl From<ModeArg> for ConsultMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::VideoConsult => ConsultMode::Remote,
            ModeArg::InClinic => ConsultMode::InPerson,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Fees,
    Experience,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Fees => SortKey::Fees,
            SortArg::Experience => SortKey::Experience,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Filter and sort a provider list the way the directory page does, starting
/// from a shared link.
#[derive(Parser, Debug)]
#[command(name = "directory")]
struct Args {
    /// JSON array of provider records.
    #[arg(long)]
    providers: Option<PathBuf>,
    /// Address to seed the filters from.
    #[arg(long)]
    url: Option<String>,
    #[arg(long, value_enum)]
    toggle_mode: Vec<ModeArg>,
    #[arg(long)]
    toggle_specialty: Vec<String>,
    #[arg(long, value_enum)]
    toggle_sort: Vec<SortArg>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also print the filter controls and their state.
    #[arg(long)]
    panel: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (settings, config_error) = load_settings();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = config_error {
        warn!(%err, "ignoring unreadable directory.toml");
    }

    let providers_path = args
        .providers
        .or(settings.providers_path)
        .context("no provider list given; pass --providers or set APP__PROVIDERS_PATH")?;
    let raw = fs::read_to_string(&providers_path)
        .with_context(|| format!("failed to read '{}'", providers_path.display()))?;
    let providers = Provider::list_from_json(&raw)
        .with_context(|| format!("failed to load providers from '{}'", providers_path.display()))?;

    let url = args.url.unwrap_or(settings.base_url);
    let location = UrlLocation::parse(&url)?;
    info!(providers = providers.len(), %url, "opening directory listing");

    let mut session = FilterSession::open(providers, location);
    for mode in args.toggle_mode {
        session.toggle_mode(mode.into());
    }
    for specialty in &args.toggle_specialty {
        session.toggle_specialty(specialty);
    }
    for key in args.toggle_sort {
        session.toggle_sort(key.into());
    }

    match args.format {
        OutputFormat::Text => print!("{}", render::text(&session, args.panel)),
        OutputFormat::Json => {
            let snapshot = render::Snapshot::capture(&session, args.panel);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
