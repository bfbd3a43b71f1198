// cargo watch -x 'fmt' -x 'run -- 192.168.1.10 192.168.1.20'

//! Find the network prefix shared by two IPv4 addresses.
//!
//! - [`input`] - arguments, address validation
//! - [`processing`] - the common-prefix engine
//! - [`output`] - normal, script and JSON formatting

pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;
use std::ffi::OsString;

pub use models::{Address, CidrResult, Mask};
pub use processing::compute_cidr;

/// Parse an argument vector, compute the shared prefix and render it.
///
/// Input problems come back as a boxed [`input::InputError`] so the caller
/// can pick the exit code.
pub fn run<I, T>(args: I) -> Result<String, Box<dyn Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let request = input::parse_args(args)?;
    let result = compute_cidr(request.a, request.b);
    output::render(&result, request.style)
}
