use dioxus::prelude::*;

use crate::client::SiteHandle;

#[component]
pub fn Footer() -> Element {
    let site = use_context::<SiteHandle>();
    let site_name = site.name().to_string();

    rsx!(footer {
        class: "flex justify-center w-full py-6 px-4 bg-base-200",
        p {
            class: "text-sm opacity-70",
            "© {site_name}"
        }
    })
}
