use dioxus::prelude::*;

use crate::client::{host::RsxHost, SiteHandle};

/// Header and footer around the router outlet.
///
/// The layout stays mounted across navigation; only the outlet's content
/// component is swapped.
#[component]
pub fn Layout() -> Element {
    let site = use_context::<SiteHandle>();

    site.mount(&mut RsxHost)
}
