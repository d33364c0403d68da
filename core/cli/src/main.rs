#![warn(clippy::pedantic)]

//! # Prism CLI
//!
//! Command line front end for the prism 0.24.0 serialization format.
//!
//! * `decode <SOURCE> <SERIALIZED>` prints the decoded tree in pre-order, one node per
//!   line, followed by the syntax errors and warnings the engine reported. `--json`
//!   prints the whole parse result as JSON instead.
//! * `options ... --output FILE` writes the binary options record the engine reads
//!   next to the source.
//!
//! Log output goes to stderr and is filtered by the `PRISM_LOG` environment variable
//! (`warn` when unset), so `PRISM_LOG=debug prism decode ...` shows each decoding stage.
//!
//! ## Exit codes
//! * 0 – success, including sources that contain syntax errors.
//! * 1 – usage / IO / decode failure.
//!
//! ## Example
//! ```bash
//! prism decode hello.rb hello.bin
//! ```

mod parser;
use anyhow::Context;
use clap::Parser;
use parser::{Cli, Command};
use prism::ast::nodes::Node;
use prism::{ParseOptions, ParseResult};
use std::{
    fmt::{self, Write as _},
    fs,
    path::Path,
    process::{self},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Entry point for the CLI executable.
///
/// On any failure a diagnostic is printed to stderr and the process exits with code `1`.
fn main() {
    let args = Cli::parse();
    init_logging();

    let outcome = match args.command {
        Command::Decode {
            source,
            serialized,
            json,
        } => decode(&source, &serialized, json),
        Command::Options {
            filepath,
            line,
            encoding,
            frozen_string_literal,
            command_line,
            syntax_version,
            scopes,
            output,
        } => {
            let options = scopes.iter().fold(
                ParseOptions::new()
                    .filepath(filepath)
                    .line(line)
                    .encoding(encoding)
                    .frozen_string_literal(frozen_string_literal)
                    .command_line(command_line)
                    .version(syntax_version.into()),
                |options, scope| {
                    options.scope(scope.split(',').filter(|local| !local.is_empty()))
                },
            );
            write_options(&options, &output)
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PRISM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn decode(source: &Path, serialized: &Path, json: bool) -> anyhow::Result<()> {
    let source_bytes =
        fs::read(source).with_context(|| format!("failed to read {}", source.display()))?;
    let serialized_bytes = fs::read(serialized)
        .with_context(|| format!("failed to read {}", serialized.display()))?;
    debug!(
        source = source_bytes.len(),
        serialized = serialized_bytes.len(),
        "read input files"
    );

    let result = prism::deserialize(&serialized_bytes, &source_bytes)
        .with_context(|| format!("failed to decode {}", serialized.display()))?;
    info!(
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "decoded parse result"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result)?);
    }
    Ok(())
}

/// Formats the tree in pre-order, then the diagnostics.
fn render(result: &ParseResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let mut stack: Vec<(&Node, usize)> = vec![(result.root(), 0)];
    while let Some((node, depth)) = stack.pop() {
        writeln!(
            out,
            "{:indent$}{} {}",
            "",
            node.kind(),
            node.location(),
            indent = depth * 2
        )?;
        stack.extend(node.children().into_iter().rev().map(|child| (child, depth + 1)));
    }
    for error in result.errors() {
        writeln!(out, "{error}")?;
    }
    for warning in result.warnings() {
        writeln!(out, "{warning}")?;
    }
    Ok(out)
}

fn write_options(options: &ParseOptions, output: &Path) -> anyhow::Result<()> {
    let bytes = options.encode().context("failed to encode parse options")?;
    fs::write(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(bytes = bytes.len(), path = %output.display(), "wrote parse options");
    Ok(())
}
