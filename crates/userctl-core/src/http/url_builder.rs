//! URL building for directory service endpoints

use crate::error::{DirectoryError, DirectoryResult};
use url::Url;

/// URL builder that appends encoded path segments to the service base URL
pub struct UrlBuilder;

impl UrlBuilder {
    /// Append path segments to the base URL, encoding each one
    ///
    /// Examples:
    /// - `join("http://users-api", &["users"])` -> `http://users-api/users`
    /// - `join("http://users-api/v1/", &["users", "42"])` -> `http://users-api/v1/users/42`
    /// - `join("http://users-api", &["users", "a b"])` -> `http://users-api/users/a%20b`
    pub fn join(base: &Url, segments: &[&str]) -> DirectoryResult<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                DirectoryError::InvalidUrl(format!("'{}' cannot be used as a base URL", base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Parse and check that a URL can carry paths
    pub fn parse_base(url: &str) -> DirectoryResult<Url> {
        let parsed = Url::parse(url)
            .map_err(|e| DirectoryError::InvalidUrl(format!("Invalid URL '{}': {}", url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl(format!(
                "'{}' cannot be used as a base URL",
                url
            )));
        }
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(DirectoryError::InvalidUrl(format!(
                "Unsupported scheme '{}' in '{}'",
                other, url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        UrlBuilder::parse_base(url).unwrap()
    }

    #[test]
    fn test_basic_url_joining() {
        assert_eq!(
            UrlBuilder::join(&base("http://users-api.users-api.svc.cluster.local:80"), &["users"])
                .unwrap()
                .as_str(),
            "http://users-api.users-api.svc.cluster.local/users"
        );

        assert_eq!(
            UrlBuilder::join(&base("http://users-api/"), &["users", "42"])
                .unwrap()
                .as_str(),
            "http://users-api/users/42"
        );
    }

    #[test]
    fn test_path_with_base_path() {
        assert_eq!(
            UrlBuilder::join(&base("https://api.example.com/v1"), &["users"])
                .unwrap()
                .as_str(),
            "https://api.example.com/v1/users"
        );

        assert_eq!(
            UrlBuilder::join(&base("https://api.example.com/v1/"), &["users"])
                .unwrap()
                .as_str(),
            "https://api.example.com/v1/users"
        );
    }

    #[test]
    fn test_ids_are_encoded_as_one_segment() {
        assert_eq!(
            UrlBuilder::join(&base("http://users-api"), &["users", "a b/c"])
                .unwrap()
                .as_str(),
            "http://users-api/users/a%20b%2Fc"
        );
    }

    #[test]
    fn test_base_query_is_dropped() {
        assert_eq!(
            UrlBuilder::join(&base("http://users-api/?x=1"), &["users"])
                .unwrap()
                .as_str(),
            "http://users-api/users"
        );
    }

    #[test]
    fn test_error_scenarios() {
        assert!(UrlBuilder::parse_base("not-a-url").is_err());
        assert!(UrlBuilder::parse_base("").is_err());
        assert!(UrlBuilder::parse_base("mailto:a@x.com").is_err());
        assert!(UrlBuilder::parse_base("ftp://users-api").is_err());
    }
}
