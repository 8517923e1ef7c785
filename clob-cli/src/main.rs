use std::io;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = clob_cli::run(io::stdin().lock(), &mut out) {
        error!(%err, "run aborted");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
