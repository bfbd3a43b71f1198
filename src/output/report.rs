//! Where the result of a run is printed and with which exit code.

use crate::input::{Cli, InputError};
use clap::CommandFactory;
use std::error::Error;

/// Output stream for a [`Report`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Text to print, where to print it and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stream: Stream,
    pub text: String,
    pub exit_code: u8,
}

/// Turn the outcome of [`crate::run`] into a [`Report`].
///
/// Rendered results, `--help` and `--version` go to stdout with exit code 0.
/// Usage errors go to stderr as clap rendered them. Address errors get a
/// short message plus the usage line. Anything else exits with 1.
pub fn report(outcome: Result<String, Box<dyn Error>>) -> Report {
    let err = match outcome {
        Ok(text) => {
            return Report {
                stream: Stream::Stdout,
                text,
                exit_code: 0,
            }
        }
        Err(e) => e,
    };

    match err.downcast_ref::<InputError>() {
        Some(input) => {
            let (stream, text) = match input {
                InputError::Info(text) => (Stream::Stdout, text.clone()),
                InputError::Usage(text) => (Stream::Stderr, text.clone()),
                _ => (
                    Stream::Stderr,
                    format!(
                        "{input}, exiting....\n\n{usage}\n",
                        usage = Cli::command().render_usage()
                    ),
                ),
            };
            Report {
                stream,
                text,
                // codes are 0, 252 or 254
                exit_code: input.exit_code() as u8,
            }
        }
        None => {
            log::error!("{err}");
            Report {
                stream: Stream::Stderr,
                text: format!("ERROR {err}\n"),
                exit_code: 1,
            }
        }
    }
}
