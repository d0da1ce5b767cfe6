use std::sync::Arc;

use crate::{
    error::route::RouteError,
    site::{Content, RenderHost, RouteRegistry, Router, Shell, Site},
};

mod router;

/// Owned copy of one rendered page.
#[derive(Debug, Clone, PartialEq)]
struct Rendered {
    header: &'static str,
    content: &'static str,
    fallback: bool,
    footer: &'static str,
}

/// Host that keeps the mounted shell and every page it is asked to render.
#[derive(Default)]
struct RecordingHost {
    shell: Option<(&'static str, &'static str)>,
    shell_renders: usize,
    frames: Vec<Rendered>,
}

impl RenderHost<&'static str> for RecordingHost {
    type Output = ();

    fn render_shell(&mut self, shell: &Shell<&'static str>) {
        self.shell = Some((*shell.header(), *shell.footer()));
        self.shell_renders += 1;
    }

    fn render_content(&mut self, content: Content<'_, &'static str>) {
        let (header, footer) = self.shell.expect("shell must be mounted before content");
        self.frames.push(Rendered {
            header,
            content: *content.view(),
            fallback: content.is_fallback(),
            footer,
        });
    }
}

/// Helper building the single-route table used across the scenarios
fn home_registry() -> RouteRegistry<&'static str> {
    RouteRegistry::new().with_route("/", "HomeView").unwrap()
}

/// Helper building a site around `registry` with fixed chrome
fn site(registry: RouteRegistry<&'static str>) -> Site<&'static str> {
    Site::new(
        "Test",
        Shell::new("Header", "Footer"),
        Router::new(Arc::new(registry), "NotFoundView"),
    )
}

/// Helper mounting `site` and navigating through `locations` in order
fn visit(site: &Site<&'static str>, locations: &[&str]) -> RecordingHost {
    let mut host = RecordingHost::default();
    site.mount(&mut host);
    for location in locations {
        site.navigate(location, &mut host);
    }
    host
}
