//! main.rs
//! Entry point for dirpeek

use dirpeek::app::Browser;
use dirpeek::config::Config;

use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    // Diagnostics go to stderr so they never interleave with the listing on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("DIRPEEK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::load();
    let start_dir = std::env::current_dir()?;
    tracing::debug!(dir = %start_dir.display(), "starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut browser = Browser::new(config, start_dir, stdin.lock(), stdout.lock());
    browser.run()
}
