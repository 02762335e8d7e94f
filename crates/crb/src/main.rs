use std::sync::Arc;

use tracing::error;

use crb_core::config::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = crb_core::logging::init("crb") {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    // Invalid configuration is fatal: diagnose and exit before any update is
    // processed.
    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = crb_telegram::router::run_polling(cfg).await {
        error!("telegram bot failed: {e:#}");
        std::process::exit(1);
    }
}
