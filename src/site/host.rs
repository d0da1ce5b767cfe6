use crate::site::{router::Content, shell::Shell};

/// Turns the shell and the resolved content into visible output.
///
/// The shell is drawn once when the host mounts; afterwards only the content
/// slot is redrawn as the current path changes. The Dioxus client produces
/// `Element`s, tests record what they were handed.
pub trait RenderHost<V> {
    type Output;

    /// Draws header and footer around an empty content slot.
    fn render_shell(&mut self, shell: &Shell<V>) -> Self::Output;

    /// Draws `content` into the content slot.
    fn render_content(&mut self, content: Content<'_, V>) -> Self::Output;
}
