use std::process::ExitCode;

use clap::Parser;
use console::style;

use bookingcss::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold().for_stderr(), err);
            ExitCode::FAILURE
        }
    }
}
