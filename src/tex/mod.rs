//! XeLaTeX markup generation

pub mod block;
pub mod document;

// Re-export commonly used items
pub use block::render_block;
pub use document::{assemble, preamble, render_section, END_DOCUMENT};
