use std::{ops::Deref, sync::Arc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::page::ErrorPage, model::error::PageError, router::Route},
    config::Config,
    model::view::View,
    site::Site,
};

/// Shared handle to the site, provided as context to every view.
///
/// Two handles are equal when they point at the same site, which is all
/// Dioxus needs to decide whether props changed.
#[derive(Clone)]
pub struct SiteHandle(Arc<Site<View>>);

impl SiteHandle {
    pub fn new(site: Site<View>) -> Self {
        Self(Arc::new(site))
    }
}

impl Deref for SiteHandle {
    type Target = Site<View>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SiteHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn App() -> Element {
    // Route table is loaded once; a broken table is reported instead of routing
    let site = use_hook(|| {
        Config::load()
            .and_then(Config::build_site)
            .map(SiteHandle::new)
            .map_err(|err| {
                tracing::error!("Failed to build site: {}", err);
                PageError::from(err)
            })
    });

    match site {
        Ok(site) => rsx! {
            SiteRoot { site }
        },
        Err(err) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
    }
}

#[component]
fn SiteRoot(site: SiteHandle) -> Element {
    use_context_provider(|| site.clone());
    let site_name = site.name().to_string();

    rsx! {
        document::Title { "{site_name}" }
        Router::<Route> {}
    }
}
