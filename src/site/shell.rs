/// Fixed layout wrapped around whatever the router resolves.
///
/// Header and footer are bound once and are the same for every route; the
/// content slot between them is the only region that changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell<V> {
    header: V,
    footer: V,
}

impl<V> Shell<V> {
    pub fn new(header: V, footer: V) -> Self {
        Self { header, footer }
    }

    pub fn header(&self) -> &V {
        &self.header
    }

    pub fn footer(&self) -> &V {
        &self.footer
    }
}
