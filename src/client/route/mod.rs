pub mod home;
pub mod not_found;
pub mod product_list;

pub use home::Home;
pub use not_found::NotFound;
pub use product_list::ProductList;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{host::RsxHost, SiteHandle};

#[component]
pub fn Root() -> Element {
    rsx! {
        Resolved {}
    }
}

#[component]
pub fn Section(segments: Vec<String>) -> Element {
    tracing::trace!("Section route with {} segments", segments.len());

    rsx! {
        Resolved {}
    }
}

/// Content slot for the current location.
///
/// Resolves the history's raw location rather than the parsed route, whose
/// segments are percent-decoded with empty ones dropped.
#[component]
fn Resolved() -> Element {
    let site = use_context::<SiteHandle>();
    let location = router().full_route_string();

    site.navigate(&location, &mut RsxHost)
}
