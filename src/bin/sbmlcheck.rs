// Document checker
//
//  Copyright (C) 2014-2021 Ryan Specialty Group, LLC.
//
//  This file is part of sbmlobj.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Read an SBML,
//!   SBGN-ML,
//!   or SED-ML document and report its diagnostics.
//!
//! `sbmlcheck` detects the dialect of its input from the root element,
//!   prints every diagnostic raised while reading it,
//!   and optionally writes the document back out as it was understood.
//! The exit status is [`exitcode::DATAERR`] if any diagnostic is an
//!   error.
//!
//! Logging is controlled by `RUST_LOG` and written to stderr.

extern crate sbmlobj;

use getopts::{Fail, Options};
use sbmlobj::{
    diagnose::{ErrorLog, Reporter, Severity},
    io::{self as doc_io, AnyDocument, ReadError},
    xml::WriterOptions,
};
use std::{
    env,
    error::Error,
    fmt::{self, Display},
    fs,
    io::{self, Write},
};
use tracing_subscriber::EnvFilter;

/// Types of commands
#[derive(Debug, PartialEq)]
enum Command {
    Check(Config),
    Usage,
}

#[derive(Debug, PartialEq)]
struct Config {
    input: String,
    output: Option<String>,
    writer: WriterOptions,
    quiet: bool,
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = &args[0];
    let opts = get_opts();
    let usage = opts.usage(&format!("Usage: {} [OPTIONS] INPUT", program));

    match parse_options(opts, args) {
        Ok(Command::Check(config)) => match check(&config) {
            Ok(log) if log.has_errors() => std::process::exit(exitcode::DATAERR),
            Ok(_) => std::process::exit(exitcode::OK),
            Err(e) => {
                eprintln!("fatal: failed to check `{}`: {e}", config.input);
                std::process::exit(e.exit_code());
            }
        },
        Ok(Command::Usage) => {
            println!("{}", usage);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("{}", usage);
            std::process::exit(exitcode::USAGE);
        }
    }
}

fn get_opts() -> Options {
    let mut opts = Options::new();
    opts.optopt("o", "output", "write the document to FILE (- for stdout)", "FILE");
    opts.optopt("", "indent", "indent output by N spaces (0 for one line)", "N");
    opts.optflag("q", "quiet", "do not print diagnostics");
    opts.optflag("h", "help", "print this help menu");

    opts
}

fn parse_options(opts: Options, args: Vec<String>) -> Result<Command, Fail> {
    let matches = opts.parse(&args[1..])?;

    if matches.opt_present("h") {
        return Ok(Command::Usage);
    }

    let input = match matches.free.len() {
        0 => return Err(Fail::OptionMissing(String::from("INPUT"))),
        1 => matches.free[0].clone(),
        _ => return Err(Fail::UnrecognizedOption(matches.free[1].clone())),
    };

    let writer = match matches.opt_str("indent") {
        None => WriterOptions::default(),
        Some(n) => match n.parse::<usize>() {
            Ok(0) => WriterOptions {
                indent: None,
                ..WriterOptions::default()
            },
            Ok(width) => WriterOptions {
                indent: Some(width),
                ..WriterOptions::default()
            },
            Err(_) => return Err(Fail::ArgumentMissing(String::from("--indent N"))),
        },
    };

    Ok(Command::Check(Config {
        input,
        output: matches.opt_str("o"),
        writer,
        quiet: matches.opt_present("q"),
    }))
}

/// Read, report on, and optionally rewrite the input document,
///   returning its diagnostics.
fn check(config: &Config) -> Result<ErrorLog, CheckError> {
    let src = fs::read_to_string(&config.input)?;
    let doc = doc_io::read_str(&src)?;
    let log = doc.error_log();

    tracing::debug!(
        input = %config.input,
        dialect = %doc.dialect(),
        diagnostics = log.len(),
        "checked document"
    );

    if !config.quiet && !log.is_empty() {
        // Rendering to a string first keeps the report contiguous.
        let reporter = Reporter::new(&config.input, &src);
        eprint!("{}", reporter.render_log(log));
        eprintln!("{}", summary(&config.input, log));
    }

    if let Some(dest) = &config.output {
        write_output(&doc, dest, &config.writer)?;
    }

    Ok(log.clone())
}

fn summary(input: &str, log: &ErrorLog) -> String {
    let errors = log.iter().filter(|d| d.severity() >= Severity::Error).count();
    let warnings = log.len() - errors;

    format!("{input}: {errors} error(s), {warnings} other diagnostic(s)")
}

fn write_output(
    doc: &AnyDocument,
    dest: &str,
    opts: &WriterOptions,
) -> Result<(), CheckError> {
    let mut xml = doc.to_xml_string_with(opts);
    xml.push('\n');

    if dest == "-" {
        io::stdout().write_all(xml.as_bytes())?;
    } else {
        fs::write(dest, xml)?;
    }

    Ok(())
}

/// Checker (`sbmlcheck`) error.
///
/// Diagnostics of a document that could be read are not errors;
///   these are the failures that prevent a document from being read or
///   written at all.
#[derive(Debug)]
pub enum CheckError {
    Io(io::Error),
    Read(ReadError),
}

impl CheckError {
    fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Io(_) | Self::Read(ReadError::Io(_)) => exitcode::IOERR,
            Self::Read(_) => exitcode::DATAERR,
        }
    }
}

impl From<io::Error> for CheckError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ReadError> for CheckError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => Display::fmt(e, f),
            Self::Read(e) => Display::fmt(e, f),
        }
    }
}

impl Error for CheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Read(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(rest: &[&str]) -> Vec<String> {
        std::iter::once("sbmlcheck")
            .chain(rest.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_options_help() {
        let result = parse_options(get_opts(), args(&["-h"]));
        assert_eq!(result, Ok(Command::Usage));
    }

    #[test]
    fn parse_options_input_only() {
        let result = parse_options(get_opts(), args(&["model.xml"]));

        assert_eq!(
            result,
            Ok(Command::Check(Config {
                input: "model.xml".into(),
                output: None,
                writer: WriterOptions::default(),
                quiet: false,
            }))
        );
    }

    #[test]
    fn parse_options_all() {
        let result = parse_options(
            get_opts(),
            args(&["-q", "--indent", "0", "-o", "out.xml", "in.xml"]),
        );

        match result {
            Ok(Command::Check(config)) => {
                assert!(config.quiet);
                assert_eq!(config.output.as_deref(), Some("out.xml"));
                assert_eq!(config.writer.indent, None);
                assert!(config.writer.declaration);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_options_missing_input() {
        let result = parse_options(get_opts(), args(&["-q"]));
        assert_eq!(result, Err(Fail::OptionMissing("INPUT".into())));
    }

    #[test]
    fn parse_options_extra_input() {
        let result = parse_options(get_opts(), args(&["a.xml", "b.xml"]));
        assert_eq!(result, Err(Fail::UnrecognizedOption("b.xml".into())));
    }

    #[test]
    fn parse_options_bad_indent() {
        let result = parse_options(get_opts(), args(&["--indent", "wide", "a.xml"]));
        assert_eq!(result, Err(Fail::ArgumentMissing("--indent N".into())));
    }

    #[test]
    fn summary_counts_errors() {
        let log = ErrorLog::new();
        assert_eq!(summary("x.xml", &log), "x.xml: 0 error(s), 0 other diagnostic(s)");
    }
}
