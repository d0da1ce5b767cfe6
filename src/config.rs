use std::sync::Arc;

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    error::{config::ConfigError, AppError},
    model::view::View,
    site::{RouteRegistry, Router, Shell, Site},
};

const DEFAULT_SITE_NAME: &str = "Storefront";
const EMBEDDED_ROUTE_TABLE: &str = include_str!("../routes.json");

/// One `path -> view` line of the route table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteBinding {
    pub path: String,
    pub view: View,
}

/// Route table and site settings, supplied by whoever deploys the storefront.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_fallback")]
    pub fallback: View,

    #[serde(default)]
    pub routes: Vec<RouteBinding>,
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_fallback() -> View {
    View::NotFound
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Route table compiled into the binary from `routes.json`.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_ROUTE_TABLE)
    }

    /// Loads `.env` and reads the configuration from the process environment.
    ///
    /// See [`from_vars`](Self::from_vars) for the variables read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Variables
    /// - `ROUTE_TABLE` - Path to a JSON route table; the embedded table is used when unset
    /// - `SITE_NAME` - Overrides the table's `site_name`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("ROUTE_TABLE") {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::ReadRouteTable { path, source })?;
                Self::from_json(&json)?
            }
            None => Self::embedded()?,
        };

        if let Some(site_name) = lookup("SITE_NAME") {
            config.site_name = site_name;
        }

        Ok(config)
    }

    /// Configuration for the current platform.
    ///
    /// Browsers have no process environment, so web builds always use the
    /// embedded table.
    pub fn load() -> Result<Self, AppError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::embedded()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_env()
        }
    }

    /// Registers every binding and assembles the site.
    ///
    /// Fails on the first malformed or duplicate pattern so a broken table is
    /// reported at start-up.
    pub fn build_site(self) -> Result<Site<View>, AppError> {
        if !self.fallback.is_routable() {
            return Err(ConfigError::UnroutableView {
                target: "fallback".to_string(),
                view: self.fallback,
            }
            .into());
        }

        let mut registry = RouteRegistry::new();
        for binding in self.routes {
            if !binding.view.is_routable() {
                return Err(ConfigError::UnroutableView {
                    target: binding.path,
                    view: binding.view,
                }
                .into());
            }
            registry = registry.with_route(&binding.path, binding.view)?;
        }

        if registry.is_empty() {
            tracing::warn!("Route table is empty, every path renders the fallback");
        }

        tracing::info!(
            "Built site {:?} with {} routes",
            self.site_name,
            registry.len()
        );

        Ok(Site::new(
            self.site_name,
            Shell::new(View::Header, View::Footer),
            Router::new(Arc::new(registry), self.fallback),
        ))
    }
}
