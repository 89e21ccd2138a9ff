mod commands;
mod init;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wachat_core::config;

#[derive(Parser)]
#[command(
    name = "wachat",
    version,
    about = "WhatsApp click-to-chat links for storefront product pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "~/.wachat/config.toml", env = "WACHAT_CONFIG")]
    config: String,

    /// Settings file (defaults to `<data_dir>/settings.toml`).
    #[arg(short, long, env = "WACHAT_SETTINGS")]
    settings: Option<PathBuf>,

    /// Only accept phone numbers that are all digits after cleanup.
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product-button link for a product.
    Link {
        #[command(flatten)]
        product: commands::ProductArgs,
        /// The page being rendered is not a product page.
        #[arg(long)]
        not_product_page: bool,
        /// Print phone, message and URL as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the floating-button link.
    Floating {
        /// Greeting to pre-fill (defaults to `link.floating_message`).
        #[arg(short, long)]
        message: Option<String>,
        /// The page being rendered is not a product page.
        #[arg(long)]
        not_product_page: bool,
        /// Print phone, message and URL as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Preview the configured number with a test message.
    TestLink {
        /// Message to pre-fill (defaults to `link.test_message`).
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Show a link as a QR code, or write it to a PNG.
    Qr {
        #[command(flatten)]
        product: commands::ProductArgs,
        /// Use the floating-button greeting instead of a product.
        #[arg(long, conflicts_with_all = ["name", "url", "price", "product_json"])]
        floating: bool,
        /// Write a PNG here instead of printing to the terminal.
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Pixels per QR module in PNG output.
        #[arg(long, default_value_t = wachat_link::qr::DEFAULT_MODULE_PX)]
        module_px: u32,
    },
    /// Read and change stored settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Interactive settings setup.
    Init,
    /// Show effective settings, problems, and the preview link.
    Status,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print every setting with its effective value.
    Show,
    /// Print one setting.
    Get { key: String },
    /// Store one setting.
    Set { key: String, value: String },
    /// Remove one setting so its default applies again.
    Unset { key: String },
    /// Store the documented defaults for settings that are not set.
    Defaults,
    /// Overwrite every setting with its documented default.
    Reset,
    /// List problems with the current settings.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.wachat.log_level)),
        )
        .init();

    let app = commands::App::new(cfg, cli.settings, cli.strict);

    match cli.command {
        Commands::Link {
            product,
            not_product_page,
            json,
        } => app.link(&product, !not_product_page, json),
        Commands::Floating {
            message,
            not_product_page,
            json,
        } => app.floating(message.as_deref(), !not_product_page, json),
        Commands::TestLink { message } => app.test_link(message.as_deref()),
        Commands::Qr {
            product,
            floating,
            out,
            module_px,
        } => app.qr(&product, floating, out.as_deref(), module_px),
        Commands::Settings { action } => match action {
            SettingsAction::Show => app.settings_show(),
            SettingsAction::Get { key } => app.settings_get(&key),
            SettingsAction::Set { key, value } => app.settings_set(&key, &value),
            SettingsAction::Unset { key } => app.settings_unset(&key),
            SettingsAction::Defaults => app.settings_defaults(),
            SettingsAction::Reset => app.settings_reset(),
            SettingsAction::Check => app.settings_check(),
        },
        Commands::Init => init::run(&app),
        Commands::Status => app.status(),
    }
}
