//! Command line parsing and [`CompileConfig`] construction.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, builder::PathBufValueParser};

/// Description of the parameters of a compilation.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CompileConfig {
    /// Destination path; its stem names the generated header and implementation file.
    pub output: PathBuf,
}

/// Parses `resource-compiler`'s arguments to construct a [`CompileConfig`].
pub fn get_config() -> CompileConfig {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`CompileConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> CompileConfig {
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| unreachable!("`output` is a required argument"));

    CompileConfig { output }
}

/// Returns the command parser for `resource-compiler`.
pub fn command_parser() -> Command {
    let output = Arg::new("output")
        .value_parser(PathBufValueParser::new())
        .help("Destination file; its extension is replaced by `.h` and `.cc`")
        .required(true);

    Command::new("resource-compiler")
        .about("Compiles the `pfm2sid` resource definitions into C++ sources")
        .arg(output)
        .arg_required_else_help(true)
}
