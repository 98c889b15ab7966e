//! corvid-settings-gui entry point.
//!
//! Standalone preferences window for a Corvid Wallet configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use iced::Size;

use corvid_wallet::config::{ConfigStore, WalletConfig};
use corvid_wallet::gui::app::SettingsApp;
use corvid_wallet::logging;

/// Command-line arguments for corvid-settings-gui.
#[derive(Parser, Debug)]
#[command(name = "corvid-settings-gui")]
#[command(version, about = "Corvid Wallet preferences", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "CORVID_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.unwrap_or_else(WalletConfig::default_path);
    let config = WalletConfig::load_or_default(path.clone());

    let log_dir = path.parent().unwrap_or(Path::new(".")).join("logs");
    let _log_guard = logging::init(args.verbose, config.log_to_file(), &log_dir)
        .context("failed to initialize logging")?;

    // The network task needs a tokio runtime; keep it alive for the
    // whole iced event loop.
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _enter = runtime.enter();

    iced::application(
        move || SettingsApp::new(config.clone()),
        SettingsApp::update,
        SettingsApp::view,
    )
    .title(SettingsApp::title)
    .theme(SettingsApp::theme)
    .window_size(Size::new(760.0, 640.0))
    .centered()
    .antialiasing(true)
    .run()?;

    Ok(())
}
