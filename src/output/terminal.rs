//! Human readable output.

use crate::models::CidrResult;

/// Format as a short block:
///
/// ```text
///
/// 192.168.1.0/28, (16)
/// netmask: 255.255.255.240
///
/// ```
pub fn format_normal(result: &CidrResult) -> String {
    format!(
        "\n{network}/{prefix_len}, ({count})\nnetmask: {mask}\n\n",
        network = result.network,
        prefix_len = result.prefix_len,
        count = result.address_count,
        mask = result.mask,
    )
}
