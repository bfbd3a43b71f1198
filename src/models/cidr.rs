//! Result of comparing two addresses.

use super::{Address, Mask};
use serde::{Deserialize, Serialize};

/// The common network block shared by two addresses.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CidrResult {
    /// Network address (address AND mask).
    pub network: Address,
    /// Number of leading bits the two addresses share (0-32).
    pub prefix_len: u8,
    /// Size of the block, network and broadcast included.
    ///
    /// `u64` because a /0 block holds 2^32 addresses.
    pub address_count: u64,
    /// Netmask for `prefix_len`.
    #[serde(rename = "netmask")]
    pub mask: Mask,
}

impl std::fmt::Display for CidrResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_cidr() {
        let result = CidrResult {
            network: Address::new(192, 168, 1, 0),
            prefix_len: 28,
            address_count: 16,
            mask: Mask::new(255, 255, 255, 240),
        };
        assert_eq!(result.to_string(), "192.168.1.0/28");
    }
}
