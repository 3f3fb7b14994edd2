// src/models/catalog.rs

//! Response shapes for the two statistics sources.

use serde::{Deserialize, Serialize};

/// Counts reported by the external aggregate-count endpoint.
///
/// All fields are optional in the response body and default to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateCounts {
    #[serde(default)]
    pub articles: u64,

    #[serde(default)]
    pub journals: u64,

    #[serde(default)]
    pub total: u64,
}

/// Listing returned by the local catalog endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogListing {
    #[serde(default)]
    pub journals: Vec<CatalogEntry>,
}

/// A single record in the local catalog listing.
///
/// Records carry more fields than the type; everything else is ignored
/// here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Book vs non-book classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Book,
    Article,
}

impl CatalogEntry {
    /// Classify the entry by its type field.
    ///
    /// Case-insensitive substring match on "book"; entries without a
    /// type field stay unclassified and count toward neither side.
    pub fn classify(&self) -> Option<EntryKind> {
        let kind = self.kind.as_deref()?;
        if kind.to_lowercase().contains("book") {
            Some(EntryKind::Book)
        } else {
            Some(EntryKind::Article)
        }
    }
}

/// Counts derived from a local catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    /// Non-book entries
    pub articles: u64,

    /// Book-typed entries
    pub books: u64,

    /// All entries, classified or not
    pub total: u64,
}

impl CatalogListing {
    /// Split the listing into book and non-book counts.
    pub fn counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts {
            total: self.journals.len() as u64,
            ..CatalogCounts::default()
        };
        for entry in &self.journals {
            match entry.classify() {
                Some(EntryKind::Book) => counts.books += 1,
                Some(EntryKind::Article) => counts.articles += 1,
                None => {}
            }
        }
        counts
    }
}
