//! JSON output.

use crate::models::CidrResult;
use std::error::Error;

/// Format as one line of JSON followed by a newline.
pub fn format_json(result: &CidrResult) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string(result).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(format!("{json}\n"))
}
