// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dotgen CLI entrypoint.
//!
//! Reads a JSON graph document from a file (or stdin) and prints its DOT text. `--schema`
//! prints the JSON Schema of the document format instead.

use std::error::Error;
use std::io::{Read, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<graph.json>] [--output <file>] [--verbose]\n  {program} --schema [--output <file>]\n\nReads the graph document from stdin when no file is given.\n--output writes to <file> instead of stdout.\n--verbose enables debug logging on stderr (RUST_LOG overrides it)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    output: Option<String>,
    schema: bool,
    verbose: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--verbose" | "-v" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            "--output" | "-o" => {
                if options.output.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.output = Some(path);
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = None;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.schema && options.input.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read {path}: {err}").into()),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&str>, text: &str) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|err| format!("failed to write {path}: {err}"))?
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "dotgen".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing(options.verbose);

        let text = if options.schema {
            dotgen::doc::document_schema()?
        } else {
            let src = read_input(options.input.as_deref())?;
            tracing::debug!(bytes = src.len(), input = ?options.input, "read graph document");
            dotgen::doc::render_document(&src)?
        };

        write_output(options.output.as_deref(), &text)
    })();

    if let Err(err) = result {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
