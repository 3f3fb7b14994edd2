//! Statistics snapshot data structures.

use std::ops::Range;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::{AggregateCounts, CatalogCounts};

/// Aggregated collection statistics for the portal landing view.
///
/// Starts in the pending state and transitions exactly once to its
/// final values when both statistics sources have settled. Never
/// resets within a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Research article count (local non-book entries + external articles)
    pub articles: u64,

    /// Digital book count (local book-typed entries)
    pub books: u64,

    /// Academic journal count (external journals)
    pub journals: u64,

    /// True until both sources have settled
    pub loading: bool,
}

impl StatsSnapshot {
    /// Initial snapshot: zero counts, aggregation still in flight.
    pub fn pending() -> Self {
        Self {
            articles: 0,
            books: 0,
            journals: 0,
            loading: true,
        }
    }

    /// Merge the two settled source results into the final snapshot.
    ///
    /// Article counts from both sources are added together; books come
    /// only from the local catalog, journals only from the external
    /// aggregate source.
    pub fn merged(local: CatalogCounts, external: AggregateCounts) -> Self {
        Self {
            articles: local.articles + external.articles,
            books: local.books,
            journals: external.journals,
            loading: false,
        }
    }
}

/// Randomized placeholder counts shown while aggregation is pending.
///
/// A fresh snapshot is produced every animation tick and discarded the
/// moment loading ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatedSnapshot {
    pub articles: u64,
    pub books: u64,
    pub journals: u64,
}

impl AnimatedSnapshot {
    /// Placeholder bounds for the articles card.
    pub const ARTICLES: Range<u64> = 100_000..1_100_000;

    /// Placeholder bounds for the books card.
    pub const BOOKS: Range<u64> = 10_000..109_999;

    /// Placeholder bounds for the journals card.
    pub const JOURNALS: Range<u64> = 1_000..10_999;

    /// Draw a fresh placeholder snapshot, each field independently
    /// bounded.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            articles: rng.gen_range(Self::ARTICLES),
            books: rng.gen_range(Self::BOOKS),
            journals: rng.gen_range(Self::JOURNALS),
        }
    }
}

/// Timing report for one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl FetchReport {
    /// Elapsed wall-clock time in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_snapshot_is_zeroed_and_loading() {
        let snapshot = StatsSnapshot::pending();
        assert_eq!(snapshot.articles, 0);
        assert_eq!(snapshot.books, 0);
        assert_eq!(snapshot.journals, 0);
        assert!(snapshot.loading);
    }

    #[test]
    fn merged_adds_article_counts_from_both_sources() {
        let local = CatalogCounts {
            articles: 4,
            books: 2,
            total: 6,
        };
        let external = AggregateCounts {
            articles: 10,
            journals: 3,
            total: 13,
        };
        let snapshot = StatsSnapshot::merged(local, external);
        assert_eq!(snapshot.articles, 14);
        assert_eq!(snapshot.books, 2);
        assert_eq!(snapshot.journals, 3);
        assert!(!snapshot.loading);
    }

    #[test]
    fn merged_with_failed_external_source_keeps_local_counts() {
        let local = CatalogCounts {
            articles: 1,
            books: 1,
            total: 2,
        };
        let snapshot = StatsSnapshot::merged(local, AggregateCounts::default());
        assert_eq!(snapshot.articles, 1);
        assert_eq!(snapshot.books, 1);
        assert_eq!(snapshot.journals, 0);
        assert!(!snapshot.loading);
    }

    #[test]
    fn merged_with_both_sources_failed_is_all_zero_and_settled() {
        let snapshot = StatsSnapshot::merged(CatalogCounts::default(), AggregateCounts::default());
        assert_eq!(snapshot.articles, 0);
        assert_eq!(snapshot.books, 0);
        assert_eq!(snapshot.journals, 0);
        assert!(!snapshot.loading);
    }

    #[test]
    fn random_placeholders_stay_within_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let frame = AnimatedSnapshot::random(&mut rng);
            assert!(AnimatedSnapshot::ARTICLES.contains(&frame.articles));
            assert!(AnimatedSnapshot::BOOKS.contains(&frame.books));
            assert!(AnimatedSnapshot::JOURNALS.contains(&frame.journals));
        }
    }
}
