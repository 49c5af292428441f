use calboard::commands::Cli;
use calboard::libs::messages::macros::{is_debug_mode, DEBUG_ENV};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Installs the tracing subscriber when debug mode is on.
///
/// `RUST_LOG` wins when set; otherwise `CALBOARD_DEBUG` may name a level
/// (`trace`, `info`, ...) and anything else means `debug`.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var(DEBUG_ENV)
            .ok()
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::DEBUG);
        EnvFilter::default().add_directive(level.into())
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu().await
}
