use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};
use log::SetLoggerError;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::diagnostics::config::TracingConfig;

// Exit Codes for different types of errors
pub const ERR_LEXER_ERROR: i32 = 1;
pub const ERR_PARSER_ERROR: i32 = 2;
pub const ERR_IO_ERROR: i32 = 3;
pub const ERR_CLI_ERROR: i32 = 4;

/// What the compiler writes to its output
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Emit {
    Asm,
    Tokens,
    Ast,
}

/// Where the source code comes from
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Text(String),
    File(PathBuf),
}

pub fn configure_cli() -> clap::App<'static, 'static> {
    let app = App::new("Stack Machine Compiler")
        .version("0.1.0")
        .author("Erich Ess")
        .about("Compiles a program of integer expression statements into x86-64 assembly for use by the GNU assembler")
        .arg(
            Arg::with_name("source")
                .index(1)
                .required_unless("input")
                .conflicts_with("input")
                .help("Source code to compile, e.g. \"a = 3; b = 5; a + b;\". Put -- in front of source that starts with -"),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Source code file to compile"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Name the output file that the assembly will be written to. Defaults to stdout"),
        )
        .arg(
            Arg::with_name("emit")
                .long("emit")
                .possible_values(&["asm", "tokens", "ast"])
                .default_value("asm")
                .takes_value(true)
                .help("Select what is written to the output: the assembly, or the tokens or syntax tree as JSON"),
        )
        .arg(
            Arg::with_name("log")
                .long("log")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .takes_value(true)
                .help("Sets the level of log messages written to stderr"),
        )
        .arg(
            Arg::with_name("trace-parser")
                .long("trace-parser")
                .takes_value(true)
                .help("Prints out a trace of all the steps the parser follows as it converts the token vector into statements.  The current token is printed next to the step.
                Takes a range of source lines to trace: all, N, N.., ..N, or N..M.")
        );
    app
}

pub fn get_input(args: &ArgMatches) -> Option<Input> {
    match (args.value_of("source"), args.value_of("input")) {
        (Some(text), _) => Some(Input::Text(text.into())),
        (None, Some(path)) => Some(Input::File(PathBuf::from(path))),
        (None, None) => None,
    }
}

/// Reads the source code from wherever the user said it is.
pub fn read_source(input: &Input) -> std::io::Result<String> {
    match input {
        Input::Text(text) => Ok(text.clone()),
        Input::File(path) => std::fs::read_to_string(path),
    }
}

pub fn get_output(args: &ArgMatches) -> Option<PathBuf> {
    args.value_of("output").map(PathBuf::from)
}

pub fn get_emit(args: &ArgMatches) -> Emit {
    match args.value_of("emit") {
        Some("tokens") => Emit::Tokens,
        Some("ast") => Emit::Ast,
        _ => Emit::Asm,
    }
}

pub fn get_log_level(args: &ArgMatches) -> Option<LevelFilter> {
    match args.value_of("log")? {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Sends log messages at `level` and above to stderr, so that they never
/// mix with assembly written to stdout.
pub fn configure_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    WriteLogger::init(level, Config::default(), std::io::stderr())
}

pub fn get_tracing_config(args: &ArgMatches) -> Result<TracingConfig, String> {
    match args.value_of("trace-parser") {
        None => Ok(TracingConfig::Off),
        Some(range) => range.parse(),
    }
}
