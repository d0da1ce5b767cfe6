use thiserror::Error;

use crate::model::view::View;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The route table file named by `ROUTE_TABLE` could not be read.
    #[error("Failed to read route table {path}: {source}")]
    ReadRouteTable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The route table is not valid JSON or does not match the expected shape.
    ///
    /// Unknown view names are reported here as well, since views are
    /// deserialized straight into the `View` catalog.
    #[error("Failed to parse route table: {0}")]
    ParseRouteTable(#[from] serde_json::Error),

    /// A shell view was bound where only content views are allowed.
    ///
    /// `header` and `footer` are rendered on every page by the shell and can be
    /// neither routed to nor used as the fallback.
    #[error("View {view:?} cannot be bound to {target}")]
    UnroutableView { target: String, view: View },
}
