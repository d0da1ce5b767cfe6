//! Error types for site start-up.
//!
//! Every error here is raised while the route table is loaded and registered,
//! before the first render. Resolving a path never fails: an unmatched path is
//! a `NotFound` outcome handled by the router's fallback view.

pub mod config;
pub mod route;

use thiserror::Error;

use crate::error::{config::ConfigError, route::RouteError};

/// Top-level application error type.
///
/// Aggregates configuration and route registration failures so start-up code
/// can use `?` across both.
#[derive(Error, Debug)]
pub enum AppError {
    /// Route table could not be loaded.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A binding from the route table was rejected by the registry.
    #[error(transparent)]
    RouteErr(#[from] RouteError),
}
