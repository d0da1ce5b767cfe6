pub mod footer;
pub mod header;
pub mod layout;
pub mod page;

pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
pub use page::Page;
