// src/services/search.rs

//! Search navigation and category links.
//!
//! Turns a raw query string into the portal's search navigation target
//! and owns the static category link table from the landing view.

use crate::models::PortalConfig;

/// A category shortcut from the landing view.
///
/// Entries without a path are placeholders with no destination yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLink {
    pub label: &'static str,
    pub path: Option<&'static str>,
}

/// The landing view's category shortcuts, in display order.
pub const CATEGORIES: [CategoryLink; 5] = [
    CategoryLink {
        label: "E-Books",
        path: Some("/type/E-Books"),
    },
    CategoryLink {
        label: "Journals",
        path: Some("/subjects"),
    },
    CategoryLink {
        label: "Archives",
        path: None,
    },
    CategoryLink {
        label: "Datasets",
        path: None,
    },
    CategoryLink {
        label: "Advanced Search",
        path: Some("/advanceSearch"),
    },
];

/// Build the search navigation target for a raw query.
///
/// The query is trimmed first; an empty result means no navigation at
/// all. Otherwise the trimmed query is percent-encoded into the search
/// path.
pub fn search_target(portal: &PortalConfig, query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}",
        portal.search_path.trim_end_matches('/'),
        urlencoding::encode(trimmed)
    ))
}

/// Build the absolute search URL for a raw query.
pub fn search_url(portal: &PortalConfig, query: &str) -> Option<String> {
    let target = search_target(portal, query)?;
    crate::utils::resolve(&portal.base_url, &target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_queries_do_not_navigate() {
        let portal = PortalConfig::default();
        assert_eq!(search_target(&portal, ""), None);
        assert_eq!(search_target(&portal, "   \t"), None);
    }

    #[test]
    fn query_is_trimmed_and_percent_encoded() {
        let portal = PortalConfig::default();
        assert_eq!(
            search_target(&portal, "neural networks"),
            Some("/search/neural%20networks".to_string())
        );
        assert_eq!(
            search_target(&portal, "  deep learning  "),
            Some("/search/deep%20learning".to_string())
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let portal = PortalConfig::default();
        assert_eq!(
            search_target(&portal, "C++ & beyond?"),
            Some("/search/C%2B%2B%20%26%20beyond%3F".to_string())
        );
    }

    #[test]
    fn absolute_search_url_resolves_against_base() {
        let mut portal = PortalConfig::default();
        portal.base_url = "https://library.example.edu".to_string();
        assert_eq!(
            search_url(&portal, "neural networks"),
            Some("https://library.example.edu/search/neural%20networks".to_string())
        );
    }

    #[test]
    fn category_table_matches_landing_view() {
        assert_eq!(CATEGORIES.len(), 5);
        let placeholders = CATEGORIES.iter().filter(|c| c.path.is_none()).count();
        assert_eq!(placeholders, 2);
        assert_eq!(CATEGORIES[0].path, Some("/type/E-Books"));
        assert_eq!(CATEGORIES[4].path, Some("/advanceSearch"));
    }
}
