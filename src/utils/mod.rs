//! Utility functions and helpers.

pub mod format;
pub mod http;
pub mod log;

use url::Url;

/// Resolve a potentially relative path against a base URL.
pub fn resolve_url(base: &Url, path: &str) -> String {
    base.join(path)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| path.to_string())
}

/// Resolve a path against a base URL string.
pub fn resolve(base_url: &str, path: &str) -> Option<String> {
    Url::parse(base_url)
        .ok()
        .map(|base| resolve_url(&base, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://library.example.edu/").unwrap();
        assert_eq!(
            resolve_url(&base, "/subjects"),
            "https://library.example.edu/subjects"
        );
        assert_eq!(
            resolve_url(&base, "https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(
            resolve("https://library.example.edu", "/type/E-Books"),
            Some("https://library.example.edu/type/E-Books".to_string())
        );
        assert_eq!(resolve("not a url", "/type/E-Books"), None);
    }
}
