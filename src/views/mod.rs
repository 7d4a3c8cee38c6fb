pub mod layout;
pub mod shared;

pub use layout::Layout;
pub use shared::{Footer, Header, Sidebar};
