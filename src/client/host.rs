use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Footer, Header},
        route::{Home, NotFound, ProductList},
        router::Route,
    },
    model::view::View,
    site::{Content, RenderHost, Shell},
};

/// Renders the site as Dioxus elements.
///
/// The shell's content slot is the router outlet, so navigation re-renders
/// the outlet's component and leaves header and footer mounted.
pub struct RsxHost;

impl RenderHost<View> for RsxHost {
    type Output = Element;

    fn render_shell(&mut self, shell: &Shell<View>) -> Element {
        let header = view(*shell.header());
        let footer = view(*shell.footer());

        rsx!(div {
            class: "flex flex-col min-h-screen",
            {header}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            {footer}
        })
    }

    fn render_content(&mut self, content: Content<'_, View>) -> Element {
        tracing::debug!(
            "Rendering {:?} (fallback: {})",
            content.view(),
            content.is_fallback()
        );

        view(*content.view())
    }
}

fn view(view: View) -> Element {
    match view {
        View::Header => rsx!(Header {}),
        View::Footer => rsx!(Footer {}),
        View::Home => rsx!(Home {}),
        View::ProductList => rsx!(ProductList {}),
        View::NotFound => rsx!(NotFound {}),
    }
}
