use anyhow::{Context, Result};
use clap::Parser;
use linien_card::settings;
use linien_card::{global_registry, register_builtin, DepartureCard, StateSnapshot};
use linien_card_render::render_card;
use log::{info, warn};
use std::path::PathBuf;

/// linien-card - render the transit departure card against a state snapshot
#[derive(Parser, Debug)]
#[command(name = "linien-card")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// State snapshot JSON file (sensor identifier -> reading)
    #[arg(value_name = "SNAPSHOT_FILE")]
    snapshot_file: Option<PathBuf>,

    /// Card configuration file (defaults to the saved configuration)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the rendered card HTML to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the first-time-setup configuration as JSON and exit
    #[arg(long)]
    stub_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.stub_config {
        let stub = DepartureCard::stub_config();
        println!("{}", serde_json::to_string_pretty(&stub)?);
        return Ok(());
    }

    let snapshot_file = cli
        .snapshot_file
        .context("SNAPSHOT_FILE is required unless --stub-config is given")?;

    register_builtin();
    if let Ok(registry) = global_registry().read() {
        info!("registered card types: {}", registry.list().join(", "));
    }

    let config = match &cli.config {
        Some(path) => settings::load_config_from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match settings::load_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load saved configuration, using stub: {e}");
                DepartureCard::stub_config()
            }
        },
    };

    let mut card = DepartureCard::new();
    card.set_config(Some(config))?;

    let raw = std::fs::read_to_string(&snapshot_file)
        .with_context(|| format!("failed to read {}", snapshot_file.display()))?;
    let snapshot: StateSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", snapshot_file.display()))?;

    info!(
        "loaded {} reading(s) from {}",
        snapshot.len(),
        snapshot_file.display()
    );

    let rows = card.update(&snapshot).row_count();
    info!("{} departure row(s), card size {}", rows, card.card_size());

    let html = render_card(card.view());
    match &cli.output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}
