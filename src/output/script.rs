//! Pipe delimited output for scripts.

use crate::models::CidrResult;

/// Format as `network|prefix_len|address_count|netmask`.
pub fn format_script(result: &CidrResult) -> String {
    format!(
        "{}|{}|{}|{}\n",
        result.network, result.prefix_len, result.address_count, result.mask
    )
}
