//! Report renderers.
//!
//! - Text function table and per-function detail
//! - JSON summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::summary_to_string;
pub use text::{render_function_detail, render_summary};
