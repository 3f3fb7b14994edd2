// src/services/aggregator.rs

//! Statistics aggregation service.
//!
//! Fetches the portal's two statistics sources concurrently and merges
//! them into a single snapshot. Each source carries its own failure
//! boundary: a transport or parse error on one side substitutes zero
//! counts and must not affect the other.

use std::sync::Arc;

use futures::future;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{AggregateCounts, CatalogCounts, CatalogListing, Config, StatsSnapshot};
use crate::utils::http;
use crate::utils::log;

/// Service aggregating collection statistics from the portal's sources.
pub struct StatsAggregator {
    config: Arc<Config>,
    client: Client,
}

impl StatsAggregator {
    /// Create a new aggregator with the given configuration and client.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetch both sources concurrently and merge their results.
    ///
    /// Never fails and never retries. By the time this returns, both
    /// sub-fetches have settled (successfully or zero-substituted) and
    /// the returned snapshot has left the loading state for good. No
    /// ordering is guaranteed between the two completions; each request
    /// is bounded only by the client's own timeout.
    pub async fn aggregate(&self) -> StatsSnapshot {
        let (external, local) = future::join(self.fetch_aggregate(), self.fetch_catalog()).await;
        StatsSnapshot::merged(local, external)
    }

    /// Fetch the external aggregate counts, zero-substituting failures.
    pub async fn fetch_aggregate(&self) -> AggregateCounts {
        match self.try_fetch_aggregate().await {
            Ok(counts) => counts,
            Err(error) => {
                log::warn(&format!("Falling back to zero counts: {error}"));
                AggregateCounts::default()
            }
        }
    }

    /// Fetch the local catalog counts, zero-substituting failures.
    pub async fn fetch_catalog(&self) -> CatalogCounts {
        match self.try_fetch_catalog().await {
            Ok(counts) => counts,
            Err(error) => {
                log::warn(&format!("Falling back to zero counts: {error}"));
                CatalogCounts::default()
            }
        }
    }

    async fn try_fetch_aggregate(&self) -> Result<AggregateCounts> {
        let url = self.config.portal.aggregate_url()?;
        http::fetch_json(&self.client, url.as_str())
            .await
            .map_err(|e| AppError::source("aggregate", e))
    }

    async fn try_fetch_catalog(&self) -> Result<CatalogCounts> {
        let url = self.config.portal.catalog_url()?;
        let listing: CatalogListing = http::fetch_json(&self.client, url.as_str())
            .await
            .map_err(|e| AppError::source("catalog", e))?;
        Ok(listing.counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::utils::http::create_async_client;

    /// Minimal HTTP stub serving the two portal endpoints.
    async fn serve_portal(aggregate: (u16, &'static str), catalog: (u16, &'static str)) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 2048];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let (status, body) = if request.starts_with("GET /api/doaj-stats") {
                    aggregate
                } else {
                    catalog
                };
                let reason = if status == 200 { "OK" } else { "Internal Server Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{addr}")
    }

    fn aggregator_for(base: &str) -> StatsAggregator {
        let mut config = Config::default();
        config.portal.base_url = base.to_string();
        config.client.timeout_secs = 5;
        let config = Arc::new(config);
        let client = create_async_client(&config.client).unwrap();
        StatsAggregator::new(config, client)
    }

    #[tokio::test]
    async fn aggregate_merges_both_sources() {
        let base = serve_portal(
            (200, r#"{"articles": 5, "journals": 3, "total": 8}"#),
            (
                200,
                r#"{"journals": [{"type": "E-Book"}, {"type": "Journal Article"}, {}]}"#,
            ),
        )
        .await;

        let snapshot = aggregator_for(&base).aggregate().await;
        assert_eq!(snapshot.articles, 6); // 1 local non-book + 5 external
        assert_eq!(snapshot.books, 1);
        assert_eq!(snapshot.journals, 3);
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn failed_external_source_does_not_poison_local_counts() {
        let base = serve_portal(
            (500, "{}"),
            (
                200,
                r#"{"journals": [{"type": "Book"}, {"type": "Article"}]}"#,
            ),
        )
        .await;

        let snapshot = aggregator_for(&base).aggregate().await;
        assert_eq!(snapshot.articles, 1);
        assert_eq!(snapshot.books, 1);
        assert_eq!(snapshot.journals, 0);
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn malformed_body_is_treated_as_zero_counts() {
        let base = serve_portal((200, "<!doctype html>"), (200, "not json either")).await;

        let snapshot = aggregator_for(&base).aggregate().await;
        assert_eq!(snapshot.articles, 0);
        assert_eq!(snapshot.books, 0);
        assert_eq!(snapshot.journals, 0);
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn unreachable_portal_settles_with_all_zero_snapshot() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let snapshot = aggregator_for(&format!("http://{addr}")).aggregate().await;
        assert_eq!(snapshot, StatsSnapshot::merged(Default::default(), Default::default()));
        assert!(!snapshot.loading);
    }
}
