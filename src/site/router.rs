use std::sync::Arc;

use dioxus_logger::tracing;

use crate::site::{path::RoutePath, registry::RouteRegistry};

/// The view chosen for the content slot.
#[derive(Debug, PartialEq)]
pub enum Content<'a, V> {
    /// A registry entry matched the path.
    Matched(&'a V),
    /// Nothing matched, the router's fallback view is shown instead.
    Fallback(&'a V),
}

impl<'a, V> Content<'a, V> {
    pub fn view(&self) -> &'a V {
        match self {
            Content::Matched(view) | Content::Fallback(view) => *view,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Content::Fallback(_))
    }
}

/// Bridges the current path to the route registry.
///
/// The router never owns the current path. Whoever does (browser history,
/// a test) calls [`select`](Self::select) each time it changes.
#[derive(Debug)]
pub struct Router<V> {
    registry: Arc<RouteRegistry<V>>,
    fallback: V,
}

impl<V> Router<V> {
    pub fn new(registry: Arc<RouteRegistry<V>>, fallback: V) -> Self {
        Self { registry, fallback }
    }

    /// Picks the view for `path`, falling back when the registry has no match.
    pub fn select(&self, path: &str) -> Content<'_, V> {
        match self.registry.resolve(path).view() {
            Some(view) => {
                tracing::debug!("Resolved {} to registered route", path);
                Content::Matched(view)
            }
            None => {
                tracing::warn!("No route registered for {:?}, rendering fallback", path);
                Content::Fallback(&self.fallback)
            }
        }
    }

    /// Like [`select`](Self::select) but accepts a full location, ignoring
    /// any query string or fragment.
    pub fn select_location(&self, location: &str) -> Content<'_, V> {
        match RoutePath::from_location(location) {
            Ok(path) => self.select(path.as_str()),
            Err(err) => {
                tracing::warn!("{}, rendering fallback", err);
                Content::Fallback(&self.fallback)
            }
        }
    }

    pub fn registry(&self) -> &RouteRegistry<V> {
        &self.registry
    }
}
