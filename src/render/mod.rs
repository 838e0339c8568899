//! Rendering module for converting reports to output formats.

mod detail;
mod json;
mod text;

pub use detail::{suggestions, to_detailed_json};
pub use json::{to_json, JsonFormat};
pub use text::to_text;
