//! Binary entry point: CLI parsing, config load, output-dir resolution,
//! then the hotkey event loop.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use keysnap::app;
use keysnap::config::{self, Config};
use keysnap::storage;

#[derive(Parser)]
#[command(name = "keysnap", version, about = "Hotkey-driven screenshot capture")]
struct Cli {
    /// Output directory for screenshots (overrides KEYSNAP_OUT and the
    /// configured directory)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (config_path, config) = load_config();
    let out_dir = resolve_cli_output_dir(&cli, &config);
    storage::ensure_dir(&out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;
    log::info!("[STARTUP] Saving screenshots to {}", out_dir.display());

    app::run(out_dir, config_path, config)
}

fn resolve_cli_output_dir(cli: &Cli, config: &Config) -> PathBuf {
    app::resolve_output_dir(
        cli.out.as_deref(),
        |key| std::env::var(key).ok(),
        &config.output_dir,
    )
}

/// Loads the persisted config, degrading to defaults on any failure.
fn load_config() -> (Option<PathBuf>, Config) {
    let Some(path) = config::default_path() else {
        log::warn!("[STARTUP] No user config directory available");
        return (None, Config::default());
    };
    match config::load(&path) {
        Ok(config) => (Some(path), config),
        Err(e) => {
            log::warn!("[STARTUP] Failed to load config {}: {e}", path.display());
            (Some(path), Config::default())
        }
    }
}
