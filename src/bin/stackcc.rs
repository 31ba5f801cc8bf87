extern crate log;
extern crate simplelog;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use clap::ArgMatches;
use log::info;
use serde::Serialize;

use stackcc::compiler::parser::set_tracing;
use stackcc::compiler::source::Source;
use stackcc::compiler::{parse, Compiler, CompilerDisplay, Lexer};
use stackcc::*;

fn main() {
    let config = configure_cli().get_matches();

    if let Some(level) = get_log_level(&config) {
        configure_logging(level).expect("Failed to configure logger.")
    }

    if let Err(code) = run(&config) {
        std::process::exit(code)
    }
}

fn run(config: &ArgMatches) -> Result<(), i32> {
    match get_tracing_config(config) {
        Ok(tracing) => set_tracing(tracing),
        Err(msg) => {
            eprintln!("Invalid --trace-parser range: {}", msg);
            return Err(ERR_CLI_ERROR);
        }
    }

    let input = get_input(config).ok_or(ERR_CLI_ERROR)?;
    let text = match read_source(&input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Could not read source: {}", e);
            return Err(ERR_IO_ERROR);
        }
    };
    let src = Source::new(&text);
    let emit = get_emit(config);

    let tokenize_time = Instant::now();
    let tokens = match Lexer::new(&src).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            print_err(&err, &src);
            return Err(ERR_LEXER_ERROR);
        }
    };
    info!("Lexer: {}", tokenize_time.elapsed().as_secs_f32());

    if emit == Emit::Tokens {
        return write_output(config, |out| write_json(&tokens, out));
    }

    let parse_time = Instant::now();
    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(err) => {
            print_err(&err, &src);
            return Err(ERR_PARSER_ERROR);
        }
    };
    info!("Parser: {}", parse_time.elapsed().as_secs_f32());

    if emit == Emit::Ast {
        return write_output(config, |out| write_json(&program, out));
    }

    let compile_time = Instant::now();
    let compiler = Compiler::compile(&program);
    info!("Compiler: {}", compile_time.elapsed().as_secs_f32());

    write_output(config, |out| compiler.print(out))
}

fn print_err<E: CompilerDisplay>(err: &E, src: &Source) {
    match err.fmt(src) {
        Ok(msg) => eprintln!("{}", msg),
        Err(e) => eprintln!("Could not display error: {}", e),
    }
}

fn write_json<T: Serialize>(value: &T, out: &mut dyn Write) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Opens the output that the user selected, the given file or stdout, and
/// writes to it with `write`.  The output is only created once compilation
/// has succeeded.
fn write_output<F>(config: &ArgMatches, write: F) -> Result<(), i32>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let result = match get_output(config) {
        Some(path) => File::create(&path).and_then(|f| {
            let mut out = BufWriter::new(f);
            write(&mut out)?;
            out.flush()
        }),
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write(&mut out).and_then(|_| out.flush())
        }
    };

    result.map_err(|e| {
        eprintln!("Could not write output: {}", e);
        ERR_IO_ERROR
    })
}
