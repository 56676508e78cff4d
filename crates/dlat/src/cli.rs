use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "dlat",
    version,
    about = "Measure display latency by toggling the screen and timing a photosensor"
)]
pub struct Cli {
    /// Serial port the photosensor is attached to (e.g. `COM5` or `/dev/ttyUSB0`).
    #[arg(value_name = "COM-PORT")]
    pub port: String,
}

/// What `main` should do after looking at the arguments.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Help or version was requested; clap prints it and exits 0.
    Informational(clap::Error),
    /// Wrong number or shape of arguments.
    Usage,
}

pub fn parse_from<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Run(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Informational(err)
        }
        Err(_) => Invocation::Usage,
    }
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_one_port() {
        match parse_from(["dlat", "com5"]) {
            Invocation::Run(cli) => assert_eq!(cli.port, "com5"),
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[test]
    fn missing_or_extra_arguments_are_usage_errors() {
        assert!(matches!(parse_from(["dlat"]), Invocation::Usage));
        assert!(matches!(
            parse_from(["dlat", "com5", "com6"]),
            Invocation::Usage
        ));
    }

    #[test]
    fn help_is_informational() {
        assert!(matches!(
            parse_from(["dlat", "--help"]),
            Invocation::Informational(_)
        ));
    }

    #[test]
    fn usage_names_the_port_argument() {
        let text = usage();
        assert!(text.contains("COM-PORT"));
        assert!(text.contains("Usage"));
    }
}
