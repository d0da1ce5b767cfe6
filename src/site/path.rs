use std::fmt;

use crate::error::route::RouteError;

/// A validated URL path used both as a route pattern and as a lookup key.
///
/// A path is valid when it is non-empty, starts with `/`, and contains no
/// whitespace, ASCII control characters, query (`?`) or fragment (`#`).
/// Matching is exact, so `/products` and `/products/` are distinct paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Validates `raw` as a route path.
    ///
    /// # Returns
    /// - `Ok(RoutePath)` - The path satisfies every rule
    /// - `Err(RouteError::InvalidPattern)` - The first rule the path broke
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("path is empty"));
        }
        if !raw.starts_with('/') {
            return Err(invalid("path must start with '/'"));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_ascii_control()) {
            return Err(invalid("path contains whitespace or control characters"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("path contains a query or fragment"));
        }

        Ok(Self(raw.to_string()))
    }

    /// Reduces a full location such as `/products?page=2#top` to its path
    /// component and validates it.
    pub fn from_location(location: &str) -> Result<Self, RouteError> {
        let end = location.find(['?', '#']).unwrap_or(location.len());
        Self::parse(&location[..end])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that well-formed paths are accepted unchanged.
    ///
    /// Expected: Ok with the original string preserved
    #[test]
    fn test_parse_valid_paths() {
        for raw in ["/", "/products", "/products/", "/a/b/c", "/caf%C3%A9"] {
            let path = RoutePath::parse(raw).unwrap();
            assert_eq!(path.as_str(), raw);
        }
    }

    /// Tests that each validation rule rejects its input.
    ///
    /// Expected: Err(InvalidPattern) for every malformed path
    #[test]
    fn test_parse_rejects_malformed_paths() {
        for raw in ["", "products", " /", "/with space", "/tab\there", "/q?x=1", "/f#top"] {
            let result = RoutePath::parse(raw);
            assert!(
                matches!(result, Err(RouteError::InvalidPattern { ref pattern, .. }) if pattern == raw),
                "expected {raw:?} to be rejected, got {result:?}"
            );
        }
    }

    /// Tests stripping query strings and fragments from a location.
    ///
    /// Expected: Ok with only the path component kept
    #[test]
    fn test_from_location_strips_query_and_fragment() {
        assert_eq!(
            RoutePath::from_location("/products?page=2#top").unwrap().as_str(),
            "/products"
        );
        assert_eq!(RoutePath::from_location("/#top").unwrap().as_str(), "/");
        assert_eq!(RoutePath::from_location("/plain").unwrap().as_str(), "/plain");
    }

    /// Tests that a location made only of a query has no usable path.
    ///
    /// Expected: Err(InvalidPattern) because the path component is empty
    #[test]
    fn test_from_location_without_path() {
        assert!(RoutePath::from_location("?page=2").is_err());
    }
}
