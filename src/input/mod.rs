//! Command line input handling.
//!
//! - [`args`] - clap argument definitions and request building
//! - [`address`] - dotted-quad validation and octet parsing

mod address;
mod args;

pub use address::{is_dotted_quad, parse_address, OctetPolicy};
pub use args::{parse_args, Cli, Request};

/// Exit code for a malformed address argument.
pub const ERR_INVALID_INPUT_IP: i32 = 254;
/// Exit code for unknown options or missing arguments.
pub const ERR_INVALID_OPTION: i32 = 252;

/// Why the command line could not be turned into a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Address argument does not look like a dotted quad.
    InvalidFormat { which: String, value: String },
    /// Strict mode and an octet is above 255.
    OctetOutOfRange {
        which: String,
        value: String,
        octet: u16,
    },
    /// Bad options or missing arguments, holds the rendered usage text.
    Usage(String),
    /// `--help` or `--version` was requested, holds the text to print.
    Info(String),
}

impl InputError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::InvalidFormat { .. } | InputError::OctetOutOfRange { .. } => {
                ERR_INVALID_INPUT_IP
            }
            InputError::Usage(_) => ERR_INVALID_OPTION,
            InputError::Info(_) => 0,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InputError::InvalidFormat { which, value } => {
                write!(f, "{which} has invalid format: {value}")
            }
            InputError::OctetOutOfRange {
                which,
                value,
                octet,
            } => write!(
                f,
                "{which} has invalid format: octet {octet} out of range in {value}"
            ),
            InputError::Usage(text) | InputError::Info(text) => write!(f, "{text}"),
        }
    }
}

impl std::error::Error for InputError {}
