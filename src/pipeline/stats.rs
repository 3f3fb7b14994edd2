// src/pipeline/stats.rs

//! Statistics display pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, FetchReport, StatsSnapshot};
use crate::services::{LoadingAnimator, StatsAggregator};
use crate::utils::format::format_count;
use crate::utils::http;
use crate::utils::log;

/// Fetch the portal statistics and render the landing cards.
///
/// While the aggregation is pending, randomized placeholder counts are
/// shown; the final counts replace them the instant both sources have
/// settled. Exactly one of the two is ever on screen.
pub async fn run_stats(config: Arc<Config>, animate: bool) -> Result<StatsSnapshot> {
    log::header("Collection Statistics");
    log::info(&format!("Portal: {}", config.portal.base_url));

    let client = http::create_async_client(&config.client)?;
    let aggregator = StatsAggregator::new(Arc::clone(&config), client);

    let started_at = Utc::now();
    let snapshot = if animate && config.animation.enabled {
        aggregate_with_placeholders(&aggregator, &config).await
    } else {
        aggregator.aggregate().await
    };
    let report = FetchReport {
        started_at,
        finished_at: Utc::now(),
    };

    log::summary(
        "Collection statistics",
        &[
            ("Research Articles", format_count(snapshot.articles)),
            ("Digital Books", format_count(snapshot.books)),
            ("Academic Journals", format_count(snapshot.journals)),
            ("Global Access", "24/7".to_string()),
        ],
    );
    log::sub_item(&format!("Fetched in {} ms", report.elapsed_ms()));

    Ok(snapshot)
}

/// Run the aggregation with placeholder frames rendered until it
/// settles.
async fn aggregate_with_placeholders(
    aggregator: &StatsAggregator,
    config: &Config,
) -> StatsSnapshot {
    let animator = LoadingAnimator::spawn(config.animation.period());
    let mut frames = animator.frames();

    let fetch = aggregator.aggregate();
    tokio::pin!(fetch);

    let settled = loop {
        tokio::select! {
            snapshot = &mut fetch => break snapshot,
            changed = frames.changed() => match changed {
                Ok(()) => {
                    let frame = *frames.borrow_and_update();
                    log::progress(&format!(
                        "Loading… {} articles · {} books · {} journals",
                        format_count(frame.articles),
                        format_count(frame.books),
                        format_count(frame.journals),
                    ));
                }
                // Animator went away early; wait out the fetch alone.
                Err(_) => break (&mut fetch).await,
            },
        }
    };

    // Release the timer before rendering anything final.
    animator.stop().await;
    settled
}
