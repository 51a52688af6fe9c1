//! Output formatting for bootstrap results.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_medians, format_result};
