use anyhow::Context;

use wellness_tracker::db::JsonFileStore;
use wellness_tracker::{Config, SessionUser, TrackerSession};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellness_tracker=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;
    let today = config.today();

    let store = JsonFileStore::new(&config.data_path);
    let mut session = TrackerSession::new(store, today);
    session.set_analytics_range(config.analytics_range);
    session.sign_in(SessionUser {
        id: config.user_id.clone(),
        name: config.user_name.clone(),
    });
    session.refresh().with_context(|| {
        format!("Failed to load entries from {}", config.data_path.display())
    })?;

    tracing::info!(
        user_id = %config.user_id,
        today = %today,
        range = %config.analytics_range,
        entries = session.tracking_data().len(),
        "Building report"
    );

    let report = session.report(&mut rand::thread_rng());
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
