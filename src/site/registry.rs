use dioxus_logger::tracing;

use crate::{error::route::RouteError, site::path::RoutePath};

/// A single binding of a route pattern to a view.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<V> {
    pub pattern: RoutePath,
    pub view: V,
}

/// Outcome of looking a path up in the registry.
#[derive(Debug, PartialEq)]
pub enum Resolution<'a, V> {
    /// The path equals the pattern of a registered entry.
    Found(&'a RouteEntry<V>),
    /// No entry matches, or the path is empty or malformed.
    NotFound,
}

impl<'a, V> Resolution<'a, V> {
    pub fn view(&self) -> Option<&'a V> {
        match self {
            Resolution::Found(entry) => Some(&entry.view),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Ordered set of path to view bindings.
///
/// Built once during start-up and read-only afterwards. Entries keep their
/// registration order, which is also the order navigation menus list them in.
#[derive(Debug, Clone)]
pub struct RouteRegistry<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteRegistry<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a binding from `pattern` to `view`.
    ///
    /// The registry is left untouched when registration fails.
    ///
    /// # Arguments
    /// - `pattern` - URL path the view is served at
    /// - `view` - View rendered when the current path equals `pattern`
    ///
    /// # Returns
    /// - `Ok(())` - Entry appended
    /// - `Err(RouteError::InvalidPattern)` - `pattern` is not a valid path
    /// - `Err(RouteError::DuplicatePattern)` - `pattern` is already registered
    pub fn register(&mut self, pattern: &str, view: V) -> Result<(), RouteError> {
        let pattern = RoutePath::parse(pattern)?;

        if self.contains(pattern.as_str()) {
            tracing::error!("Duplicate route pattern {}", pattern);
            return Err(RouteError::DuplicatePattern(pattern.to_string()));
        }

        tracing::debug!("Registered route {}", pattern);
        self.entries.push(RouteEntry { pattern, view });
        Ok(())
    }

    /// Builder form of [`register`](Self::register) for start-up wiring.
    pub fn with_route(mut self, pattern: &str, view: V) -> Result<Self, RouteError> {
        self.register(pattern, view)?;
        Ok(self)
    }

    /// Looks up the view bound to `path` by exact string equality.
    ///
    /// Never fails: empty or malformed input resolves to `NotFound` like any
    /// other unregistered path.
    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.as_str() == path)
            .map_or(Resolution::NotFound, Resolution::Found)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_found()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for RouteRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
