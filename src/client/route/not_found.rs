use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, model::error::PageError, SiteHandle};

#[component]
pub fn NotFound() -> Element {
    let site = use_context::<SiteHandle>();
    let site_name = site.name().to_string();
    let err = PageError::not_found(&router().full_route_string());

    rsx! {
        document::Title { "Not Found | {site_name}" }
        ErrorPage { status: err.status, message: err.message }
    }
}
