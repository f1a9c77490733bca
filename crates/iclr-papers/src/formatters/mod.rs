//! Output formatters for the analysis summary (Markdown and JSON).

mod json;
mod markdown;

pub use self::json::*;
pub use markdown::*;
