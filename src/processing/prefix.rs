//! Common-prefix calculation between two IPv4 addresses.
//!
//! The engine is pure: every function takes its inputs by value and returns a
//! fresh result, so it can be called from any thread without coordination.

use crate::models::{Address, CidrResult, Mask, MAX_LENGTH, OCTETS};
use colored::Colorize;

/// Find the longest run of leading bits shared by `a` and `b`.
///
/// Bits are compared from the most significant bit of octet 0 down to the
/// least significant bit of octet 3. Scanning stops at the first mismatch, so
/// bits that happen to agree after it are not part of the mask.
///
/// # Returns
/// The contiguous mask of the shared bits and its length (0-32).
pub fn compute_prefix(a: Address, b: Address) -> (Mask, u8) {
    let mut mask = Mask::default();
    let mut prefix_len: u8 = 0;

    'octets: for i in 0..OCTETS {
        for bit in 0..8 {
            let probe = 0x80u8 >> bit;
            if a.octets[i] & probe != b.octets[i] & probe {
                log::trace!("first mismatch at octet {i} bit {bit}");
                break 'octets;
            }
            mask.octets[i] |= probe;
            prefix_len += 1;
        }
    }

    debug_assert!(prefix_len <= MAX_LENGTH);
    debug_assert!(mask.is_contiguous(), "mask {mask} has a gap");
    debug_assert_eq!(mask.prefix_len(), prefix_len);
    (mask, prefix_len)
}

/// Network portion of `address` under `mask` (octet-wise AND).
pub fn derive_network(address: Address, mask: Mask) -> Address {
    Address::from(std::array::from_fn::<u8, OCTETS, _>(|i| {
        address.octets[i] & mask.octets[i]
    }))
}

/// Number of addresses in the block spanned by `mask`, network and broadcast
/// included. A zero mask gives 2^32.
pub fn derive_address_count(mask: Mask) -> u64 {
    u64::from(!mask.bits()) + 1
}

/// Compare two addresses and describe the network block they share.
///
/// The network address is taken from `a`; `b` gives the same result by
/// construction.
pub fn compute_cidr(a: Address, b: Address) -> CidrResult {
    let (mask, prefix_len) = compute_prefix(a, b);
    let result = CidrResult {
        network: derive_network(a, mask),
        prefix_len,
        address_count: derive_address_count(mask),
        mask,
    };
    log::debug!(
        "compute_cidr({a}, {b}) -> {cidr} ({count})",
        cidr = result.to_string().on_blue(),
        count = result.address_count
    );
    result
}
