//! Prefix calculation logic.
//!
//! - [`prefix`] - longest common prefix, network and block size

mod prefix;

// Re-export public functions
pub use prefix::{compute_cidr, compute_prefix, derive_address_count, derive_network};
