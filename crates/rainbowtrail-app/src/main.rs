use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rainbowtrail_desktop::run_app;

fn main() {
    // Init logging; RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Rainbow Trail starting");
    if let Err(e) = run_app() {
        eprintln!("Rainbow Trail error: {e}");
    }
}
