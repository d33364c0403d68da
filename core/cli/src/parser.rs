//! Command line argument parsing for the `prism` tool.
//!
//! The tool has two jobs that mirror the two directions of the engine
//! boundary: `decode` reads a stream the engine produced, `options` writes the
//! record the engine expects as input.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use prism::{CommandLineFlags, SyntaxVersion};

/// Command line interface definition for the `prism` tool.
///
/// ## Examples
///
/// Print the tree stored in `hello.bin`, which the engine produced for `hello.rb`:
/// ```bash
/// prism decode hello.rb hello.bin
/// ```
///
/// Dump the same result as JSON:
/// ```bash
/// prism decode hello.rb hello.bin --json
/// ```
///
/// Encode options for a `ruby -n` script with one enclosing scope:
/// ```bash
/// prism options --filepath script.rb --command-line n --scope a,b --output opts.bin
/// ```
#[derive(Parser)]
#[command(
    name = "prism",
    author,
    version,
    about = "Decode prism 0.24.0 streams and encode parse options",
    long_about = "The 'prism' command works on both sides of a prism parser engine. \
'decode' turns a serialized stream back into a syntax tree and prints it; 'options' writes the binary options record the engine reads."
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Decode a serialized stream and print its tree and diagnostics.
    ///
    /// Each node is printed on its own line in pre-order as
    /// `<KindName> <start>..<end>`, indented two spaces per depth.
    /// Errors and warnings follow the tree.
    Decode {
        /// Source file the engine parsed. Locations in the stream point into it.
        source: PathBuf,

        /// File holding the engine's serialized output.
        serialized: PathBuf,

        /// Print the whole parse result as JSON instead of the indented tree.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },

    /// Encode a parse options record and write it to a file.
    Options {
        /// File name the engine reports for `__FILE__`.
        #[arg(long, default_value = "")]
        filepath: String,

        /// Line number of the first source line.
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        line: i32,

        /// Source encoding name. Empty leaves the choice to the engine.
        #[arg(long, default_value = "")]
        encoding: String,

        /// Treat string literals as frozen.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        frozen_string_literal: bool,

        /// Interpreter switch letters, any of `aelnpx` (for example `nl`).
        #[arg(long, value_parser = parse_command_line, default_value = "")]
        command_line: CommandLineFlags,

        /// Ruby syntax version to accept.
        #[arg(long, value_enum, default_value_t = SyntaxVersionArg::Latest)]
        syntax_version: SyntaxVersionArg,

        /// Comma separated local names of one enclosing scope. Repeat for
        /// nested scopes, outermost first. Pass an empty string for a scope
        /// without locals.
        #[arg(long = "scope")]
        scopes: Vec<String>,

        /// Where to write the encoded record.
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub(crate) enum SyntaxVersionArg {
    Latest,
    #[value(name = "3.3.0")]
    V3_3_0,
}

impl From<SyntaxVersionArg> for SyntaxVersion {
    fn from(arg: SyntaxVersionArg) -> Self {
        match arg {
            SyntaxVersionArg::Latest => SyntaxVersion::Latest,
            SyntaxVersionArg::V3_3_0 => SyntaxVersion::V3_3_0,
        }
    }
}

fn parse_command_line(letters: &str) -> Result<CommandLineFlags, String> {
    CommandLineFlags::from_letters(letters)
        .ok_or_else(|| format!("unknown switch in {letters:?}, expected letters from \"aelnpx\""))
}
