mod cli;
mod hook;
mod run;

use std::process::ExitCode;

use cli::Invocation;

fn main() -> ExitCode {
    let cli = match cli::parse_from(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Informational(err) => err.exit(),
        Invocation::Usage => {
            print!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };
    run::initialise_tracing();

    match run::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
