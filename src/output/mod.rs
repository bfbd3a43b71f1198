//! Output formatting for a computed prefix.
//!
//! - [`terminal`] - human readable block
//! - [`script`] - pipe delimited line for shell scripts
//! - [`json`] - single JSON object
//! - [`report`] - stream and exit code for a finished run

mod json;
mod report;
mod script;
mod terminal;

use crate::models::CidrResult;
use std::error::Error;

pub use json::format_json;
pub use report::{report, Report, Stream};
pub use script::format_script;
pub use terminal::format_normal;

/// How a [`CidrResult`] is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Normal,
    Script,
    Json,
}

/// Render `result` in the given style. Every call returns its own string.
pub fn render(result: &CidrResult, style: OutputStyle) -> Result<String, Box<dyn Error>> {
    let text = match style {
        OutputStyle::Normal => format_normal(result),
        OutputStyle::Script => format_script(result),
        OutputStyle::Json => format_json(result)?,
    };
    Ok(text)
}
