pub mod page;

pub use page::page_layout;
