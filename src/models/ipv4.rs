//! IPv4 address and netmask values.
//!
//! Both [`Address`] and [`Mask`] are an explicit ordered set of four octets,
//! most significant first (network byte order).

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in an IPv4 address.
pub const OCTETS: usize = 4;

/// Convert a CIDR prefix length to a subnet mask as u32.
#[cfg(test)]
fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err(format!("Prefix length /{len} is too long").into())
    } else {
        let right_len = MAX_LENGTH - len;
        // u64 so that a shift by 32 is defined
        let all_bits = u32::MAX as u64;
        let mask = (all_bits >> right_len) << right_len;
        Ok(mask as u32)
    }
}

/// Shared conversions and serde support for the four-octet types.
macro_rules! impl_octets {
    ($name:ident) => {
        impl $name {
            /// Build from four octets, most significant first.
            pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
                $name {
                    octets: [a, b, c, d],
                }
            }

            /// The 32 bits of this value, octet 0 in the high byte.
            pub fn bits(&self) -> u32 {
                u32::from_be_bytes(self.octets)
            }
        }

        impl From<[u8; OCTETS]> for $name {
            fn from(octets: [u8; OCTETS]) -> Self {
                $name { octets }
            }
        }

        #[cfg(test)]
        impl From<u32> for $name {
            fn from(bits: u32) -> Self {
                $name {
                    octets: bits.to_be_bytes(),
                }
            }
        }

        impl From<Ipv4Addr> for $name {
            fn from(addr: Ipv4Addr) -> Self {
                $name {
                    octets: addr.octets(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Box<dyn Error>;

            /// Strict dotted-quad parse, every octet must be 0-255.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let addr = Ipv4Addr::from_str(s.trim())
                    .map_err(|_| format!("Invalid dotted-quad {s}"))?;
                Ok($name::from(addr))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let [a, b, c, d] = self.octets;
                write!(f, "{a}.{b}.{c}.{d}")
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<$name, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::from_str(&s).map_err(|e| de::Error::custom(e.to_string()))
            }
        }
    };
}

/// IPv4 address as four octets.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Address {
    /// Octets, most significant first.
    pub octets: [u8; OCTETS],
}

/// IPv4 netmask as four octets.
///
/// A mask produced by this crate always has its 1 bits as one leading run.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Mask {
    /// Octets, most significant first.
    pub octets: [u8; OCTETS],
}

impl_octets!(Address);
impl_octets!(Mask);

impl Mask {
    /// Build the mask for a CIDR prefix length (e.g. 24 -> 255.255.255.0).
    #[cfg(test)]
    pub(crate) fn from_prefix_len(len: u8) -> Result<Mask, Box<dyn Error>> {
        Ok(Mask::from(get_cidr_mask(len)?))
    }

    /// Number of 1 bits in the mask.
    pub fn prefix_len(&self) -> u8 {
        self.bits().count_ones() as u8
    }

    /// True when no 1 bit follows a 0 bit, scanning from the top.
    pub fn is_contiguous(&self) -> bool {
        let bits = self.bits();
        bits.leading_ones() == bits.count_ones()
    }
}
