//! clap argument definitions.

use super::address::{parse_address, OctetPolicy};
use super::InputError;
use crate::models::Address;
use crate::output::OutputStyle;
use clap::builder::FalseyValueParser;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

/// Find the network prefix shared by two IPv4 addresses.
#[derive(Parser, Debug)]
#[command(name = "cidr-calc")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output for scripts: network|prefix|count|netmask
    #[arg(short = 'b', long = "script", env = "CIDR_CALC_SCRIPT", value_parser = FalseyValueParser::new())]
    pub script: bool,

    /// Output a single JSON object.
    #[arg(short = 'j', long = "json", env = "CIDR_CALC_JSON", value_parser = FalseyValueParser::new())]
    pub json: bool,

    /// Reject octets above 255 instead of keeping their low 8 bits.
    #[arg(long, env = "CIDR_CALC_STRICT", value_parser = FalseyValueParser::new())]
    pub strict: bool,

    /// First address (e.g. 192.168.1.10)
    pub ip1: String,

    /// Second address (e.g. 192.168.1.20)
    pub ip2: String,
}

impl Cli {
    /// Pick the output style. A flag given on the command line beats one set
    /// through the environment; `-b` and `-j` together on the command line
    /// are an error. With both set only in the environment, script wins.
    ///
    /// `on_command_line` tells whether an argument id came from argv.
    pub fn style<F>(&self, on_command_line: F) -> Result<OutputStyle, InputError>
    where
        F: Fn(&str) -> bool,
    {
        let script_cli = self.script && on_command_line("script");
        let json_cli = self.json && on_command_line("json");
        match (script_cli, json_cli) {
            (true, true) => Err(usage_error(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "the argument '--json' cannot be used with '--script'",
            ))),
            (true, false) => Ok(OutputStyle::Script),
            (false, true) => Ok(OutputStyle::Json),
            (false, false) if self.script => Ok(OutputStyle::Script),
            (false, false) if self.json => Ok(OutputStyle::Json),
            (false, false) => Ok(OutputStyle::Normal),
        }
    }

    pub fn policy(&self) -> OctetPolicy {
        if self.strict {
            OctetPolicy::Strict
        } else {
            OctetPolicy::Lenient
        }
    }
}

/// Everything the engine and the printer need for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub a: Address,
    pub b: Address,
    pub style: OutputStyle,
}

fn usage_error(e: clap::Error) -> InputError {
    let text = e.render().to_string();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => InputError::Info(text),
        _ => InputError::Usage(text),
    }
}

fn from_command_line(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Parse a full argument vector (program name first) into a [`Request`].
pub fn parse_args<I, T>(args: I) -> Result<Request, InputError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command()
        .try_get_matches_from(args)
        .map_err(usage_error)?;
    let cli = Cli::from_arg_matches(&matches).map_err(usage_error)?;
    log::debug!("{cli:?}");

    let style = cli.style(|id| from_command_line(&matches, id))?;
    let policy = cli.policy();
    let a = parse_address("ip1", &cli.ip1, policy)?;
    let b = parse_address("ip2", &cli.ip2, policy)?;

    Ok(Request { a, b, style })
}
