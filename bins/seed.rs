use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};

fn init_logging() {
    // load .env first so RUST_LOG and DATABASE_URL apply
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "seed", event = "logger_init", "tracing subscriber initialized");
}

/// config.toml when present, otherwise defaults plus `DATABASE_URL`.
fn load_config() -> anyhow::Result<configs::AppConfig> {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            info!(service = "seed", event = "config_fallback", reason = %e, "config file unusable, using defaults");
            let mut cfg = configs::AppConfig::default();
            if cfg.database.url.is_empty() {
                cfg.database.url = models::db::DATABASE_URL.clone();
            }
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!(service = "seed", event = "migrated", "schema up to date");

    let report = service::seed::seed_catalog(&db, &cfg.content).await?;
    info!(
        service = "seed",
        event = "done",
        skipped = report.skipped,
        pages = report.pages,
        texts = report.texts,
        links = report.links,
        menu_items = report.menu_items,
        images = report.images,
        "seed finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    info!(service = "seed", event = "start", version = env!("CARGO_PKG_VERSION"), "seeding content database");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "seed", event = "run_failed", error = %e, "seed failed");
            ExitCode::FAILURE
        }
    }
}
