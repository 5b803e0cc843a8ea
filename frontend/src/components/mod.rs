pub mod data_table;
pub mod icons;
pub mod layout;
pub mod sidebar;

pub use data_table::{Column, DataTable};
pub use layout::Layout;
pub use sidebar::Sidebar;
