//! Follout - main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use follout_engine::app::Settlement;
use follout_engine::demo::run_demo;
use follout_engine::infrastructure::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "follout_engine=info,follout_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Follout");

    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        load_on_start = config.load_on_start,
        "Configuration loaded"
    );

    let mut settlement = Settlement::with_system_ports();
    if config.load_on_start {
        settlement.load_all(&config.data_dir);
    }

    let report = run_demo(&mut settlement)?;
    for (attribute, total) in &report.totals {
        println!("Total {attribute} of all villagers: {total}");
    }

    settlement.save_all(&config.data_dir);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
