pub mod header;
pub mod sidebar;
pub mod footer;

pub use header::Header;
pub use sidebar::Sidebar;
pub use footer::Footer;
