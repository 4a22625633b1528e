// Night Shift - single-user productivity dashboard core
// Entry point: opens the workspace and reports a dashboard summary

use anyhow::Context;
use nightshift::document::now_ms;
use nightshift::metrics;
use nightshift::services::Workspace;
use nightshift::store::StateStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nightshift=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Night Shift core");

    let data_dir = dirs::data_dir()
        .context("could not resolve the platform data directory")?
        .join("nightshift");
    tokio::fs::create_dir_all(&data_dir)
        .await
        .with_context(|| format!("could not create data directory {data_dir:?}"))?;

    let store = StateStore::new(data_dir);
    let workspace = Workspace::open(store).await;
    let doc = workspace.document();
    let now = now_ms();

    for count in metrics::status_distribution(&doc.tasks) {
        tracing::info!("Board column {:?}: {} tasks", count.status, count.count);
    }

    tracing::info!(
        "Lifetime focus: {} minutes over {} sessions",
        metrics::total_focus_minutes(&doc.pomodoro_sessions),
        doc.pomodoro_sessions.len()
    );

    for bucket in metrics::weekly_velocity(&doc.pomodoro_sessions, now) {
        tracing::info!("{} {}: {} minutes", bucket.weekday, bucket.date, bucket.minutes);
    }

    if doc.tools_config.show_caffeine_counter {
        let active = metrics::active_caffeine(&doc.caffeine_log, now);
        tracing::info!("Active caffeine: {:.0} mg", active);
        match metrics::peak_estimate(&doc.caffeine_log, now) {
            Some(metrics::PeakEstimate::At(at_ms)) => {
                tracing::info!("Peak effect at {} (epoch ms)", at_ms)
            }
            Some(metrics::PeakEstimate::PastPeak) => tracing::info!("Past peak"),
            None => {}
        }
    }

    Ok(())
}
