pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::status_badge;
pub use layouts::page_layout;
