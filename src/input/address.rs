//! Dotted-quad address validation and octet parsing.

use super::InputError;
use crate::models::{Address, OCTETS};
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for a syntactically valid dotted quad. Octet ranges are not checked.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("Invalid Regex")
    })
}

/// How octet values above 255 are handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OctetPolicy {
    /// Keep the low 8 bits (`999` becomes `231`).
    #[default]
    Lenient,
    /// Reject the address.
    Strict,
}

/// True when `input` looks like `d.d.d.d` with 1-3 digits per field.
pub fn is_dotted_quad(input: &str) -> bool {
    get_dotted_quad_regex().is_match(input)
}

/// Validate and split one address argument.
///
/// # Arguments
/// * `which` - Argument name used in errors (`ip1`, `ip2`)
/// * `input` - The raw argument
/// * `policy` - What to do with octets above 255
pub fn parse_address(which: &str, input: &str, policy: OctetPolicy) -> Result<Address, InputError> {
    if !is_dotted_quad(input) {
        return Err(InputError::InvalidFormat {
            which: which.to_string(),
            value: input.to_string(),
        });
    }

    let mut octets = [0u8; OCTETS];
    for (octet, field) in octets.iter_mut().zip(input.split('.')) {
        // at most 3 digits, always fits
        let value: u16 = field.parse().map_err(|_| InputError::InvalidFormat {
            which: which.to_string(),
            value: input.to_string(),
        })?;
        *octet = match u8::try_from(value) {
            Ok(v) => v,
            Err(_) if policy == OctetPolicy::Strict => {
                return Err(InputError::OctetOutOfRange {
                    which: which.to_string(),
                    value: input.to_string(),
                    octet: value,
                });
            }
            Err(_) => {
                let truncated = (value & 0xFF) as u8;
                log::warn!(
                    "{which}: octet {value} out of range, using {truncated} ({input})",
                    value = value.to_string().on_red()
                );
                truncated
            }
        };
    }

    Ok(Address::from(octets))
}
