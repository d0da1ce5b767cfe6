use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A route with the same pattern is already registered.
    ///
    /// Patterns are matched by exact string equality, so two entries with the
    /// same pattern could never both be reached. Raised at registration time so
    /// the site fails during start-up rather than while rendering.
    #[error("Route pattern already registered: {0}")]
    DuplicatePattern(String),

    /// The pattern is not a usable URL path.
    ///
    /// # Fields
    /// - `pattern` - The rejected pattern as supplied
    /// - `reason` - Which rule the pattern broke
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
}
