use dioxus::prelude::*;

use crate::{
    client::{component::Page, SiteHandle},
    model::view::View,
};

#[component]
pub fn Home() -> Element {
    let site = use_context::<SiteHandle>();
    let site_name = site.name().to_string();
    let products_path = site
        .routes()
        .find(|entry| entry.view == View::ProductList)
        .map(|entry| entry.pattern.to_string());

    rsx! {
        document::Title { "{site_name}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center",
            p {
                class: "text-3xl",
                "Welcome to {site_name}"
            }
            if let Some(to) = products_path {
                Link {
                    to,
                    class: "btn btn-primary",
                    "Browse products"
                }
            }
        }
    }
}
