//! Domain models for the prefix calculator.
//!
//! - [`Address`] and [`Mask`] - four-octet IPv4 values
//! - [`CidrResult`] - the common block shared by two addresses

mod cidr;
mod ipv4;

// Re-export public types
pub use cidr::CidrResult;
pub use ipv4::{Address, Mask, MAX_LENGTH, OCTETS};
