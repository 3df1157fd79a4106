//! Rendered PDF handling

pub mod metadata;

// Re-export commonly used items
pub use metadata::count_pages;
