use dioxus::prelude::*;

use crate::client::{component::Page, SiteHandle};

#[component]
pub fn ProductList() -> Element {
    let site = use_context::<SiteHandle>();
    let site_name = site.name().to_string();

    rsx! {
        document::Title { "Products | {site_name}" }
        Page {
            class: "flex flex-col gap-4",
            p {
                class: "text-2xl",
                "Products"
            }
            p {
                class: "opacity-70",
                "No products to show yet."
            }
        }
    }
}
