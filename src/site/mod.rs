//! Route-to-view resolution and layout composition.
//!
//! A [`Site`] pairs a [`Shell`] with a [`Router`]. Mounting hands the shell's
//! header and footer to a [`RenderHost`]; every navigation afterwards resolves
//! the current location and hands only the content view to the host. Nothing
//! in this module depends on a rendering framework; views are any `V`.

pub mod host;
pub mod path;
pub mod registry;
pub mod router;
pub mod shell;

#[cfg(test)]
mod test;

pub use host::RenderHost;
pub use registry::{RouteEntry, RouteRegistry};
pub use router::{Content, Router};
pub use shell::Shell;

#[derive(Debug)]
pub struct Site<V> {
    name: String,
    shell: Shell<V>,
    router: Router<V>,
}

impl<V> Site<V> {
    pub fn new(name: impl Into<String>, shell: Shell<V>, router: Router<V>) -> Self {
        Self {
            name: name.into(),
            shell,
            router,
        }
    }

    /// Renders the header and footer regions.
    pub fn mount<H: RenderHost<V>>(&self, host: &mut H) -> H::Output {
        host.render_shell(&self.shell)
    }

    /// Resolves `location` and renders the content slot.
    ///
    /// `location` is the full current URL path as the history reports it;
    /// query string and fragment are ignored.
    pub fn navigate<H: RenderHost<V>>(&self, location: &str, host: &mut H) -> H::Output {
        host.render_content(self.router.select_location(location))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.router.registry().entries()
    }
}
