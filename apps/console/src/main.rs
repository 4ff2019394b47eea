//! Basket terminal entry point.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (tracing-subscriber with env filter, stderr)
//! 2. Parse arguments (--url / BASKET_URL, default local dev service)
//! 3. Construct the HTTP remote + terminal renderer + app
//! 4. Initial load (populates the cache wholesale, first redraw)
//! 5. Hand control to the interactive shell
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use basket_console::commands::App;
use basket_console::render::TermRenderer;
use basket_console::shell;
use basket_sync::{HttpRemote, RemoteConfig, DEFAULT_COLLECTION_URL};

/// Terminal front-end for a remote shopping list.
#[derive(Debug, Parser)]
#[command(name = "basket", version, about)]
struct Args {
    /// Collection URL of the remote shopping-list service.
    #[arg(long, env = "BASKET_URL", default_value = DEFAULT_COLLECTION_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let config = match RemoteConfig::new(&args.url) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, url = %args.url, "unusable collection URL");
            eprintln!("unusable collection URL: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(url = %config.collection_url(), "starting basket");
    let mut app = App::new(HttpRemote::new(config), TermRenderer::new());

    // Populate the cache wholesale; on failure the notification is shown and
    // the shell still starts (the user can retry with `reload`).
    app.on_load().await;

    if let Err(err) = shell::run(&mut app).await {
        error!(%err, "shell terminated");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=basket_sync=trace` - Trace a single crate
/// - Default: INFO, DEBUG for the basket crates
///
/// Diagnostics go to stderr so they never interleave with the rendered list.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,basket_core=debug,basket_sync=debug,basket_console=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
