use cidr_calc::config::{init_logging, Settings};
use cidr_calc::output::{report, Stream};
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings) {
        eprintln!("{} {e}", "WARN".on_red());
    }
    log::info!("#Start main()");

    let outcome = report(cidr_calc::run(std::env::args_os()));
    match outcome.stream {
        Stream::Stdout => print!("{}", outcome.text),
        Stream::Stderr => eprint!("{}", outcome.text),
    }
    ExitCode::from(outcome.exit_code)
}
