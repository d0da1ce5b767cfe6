use dioxus::prelude::*;

use crate::client::SiteHandle;

#[component]
pub fn Header() -> Element {
    let site = use_context::<SiteHandle>();
    let site_name = site.name().to_string();
    let links: Vec<(String, &'static str)> = site
        .routes()
        .map(|entry| (entry.pattern.to_string(), entry.view.title()))
        .collect();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: "/".to_string(),
                p {
                    class: "md:text-xl text-wrap",
                    {site_name}
                }
            }
        }
        nav {
            class: "flex items-center gap-2",
            for (path, title) in links {
                Link {
                    key: "{path}",
                    to: path.clone(),
                    class: "btn btn-ghost",
                    p {
                        {title}
                    }
                }
            }
        }
    })
}
