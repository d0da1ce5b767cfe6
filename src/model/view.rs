use serde::{Deserialize, Serialize};

/// Catalog of views the client knows how to render.
///
/// Route tables name views by their `snake_case` form, e.g. `"product_list"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Header,
    Footer,
    Home,
    ProductList,
    NotFound,
}

impl View {
    /// Label used for navigation links.
    pub fn title(&self) -> &'static str {
        match self {
            View::Header => "Header",
            View::Footer => "Footer",
            View::Home => "Home",
            View::ProductList => "Products",
            View::NotFound => "Not Found",
        }
    }

    /// Whether the view may be bound to a route.
    ///
    /// Header and footer belong to the shell and are rendered on every page.
    pub fn is_routable(&self) -> bool {
        !matches!(self, View::Header | View::Footer)
    }
}
