#![warn(clippy::pedantic)]
//! Parse Ruby source through an external Prism engine.
//!
//! This crate is the thin layer between callers and the engine: it encodes the
//! [`ParseOptions`] record, hands source and options to an [`Engine`], and decodes
//! the returned stream with `prism-deserializer`.
//!
//! ```text
//! ParseOptions ──encode──▶ options bytes ─┐
//!                                         ├─▶ Engine::serialize ──▶ stream
//! source bytes ───────────────────────────┘                           │
//!                                                        deserialize ◀┘
//!                                                             │
//!                                                        ParseResult
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prism::{ParseOptions, Parser};
//!
//! let mut parser = Parser::new(engine);
//! let result = parser.parse(b"puts 'Hello, World!'")?;
//! assert!(result.is_success());
//! for node in result.root().descendants() {
//!     println!("{} {}", node.kind(), node.location());
//! }
//! ```
//!
//! The engine is a collaborator supplied by the caller; see [`Engine`]. Everything
//! after the engine call is deterministic, so a stream captured once can be decoded
//! again with [`prism_deserializer::deserialize`] without an engine at all.
//!
//! ## Error Handling
//!
//! Every failure is a [`PrismError`]. Syntax errors in the source are not
//! failures: they are carried in [`ParseResult::errors`].

pub mod engine;
pub mod errors;
pub mod options;

pub use prism_ast as ast;
pub use prism_ast::result::ParseResult;
pub use prism_deserializer::{DeserializeError, deserialize};
use tracing::debug;

pub use crate::engine::Engine;
pub use crate::errors::{OptionsError, PrismError};
pub use crate::options::{CommandLineFlags, ParseOptions, SyntaxVersion};

/// Runs source text through an [`Engine`] and decodes the result.
pub struct Parser<E> {
    engine: E,
}

impl<E: Engine> Parser<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Parses `source` with default options.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse_with_options`].
    pub fn parse(&mut self, source: &[u8]) -> Result<ParseResult, PrismError> {
        self.parse_with_options(source, &ParseOptions::default())
    }

    /// Parses `source` with `options`.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::Options`] when the options cannot be encoded,
    /// [`PrismError::Engine`] when the engine fails, and
    /// [`PrismError::Deserialize`] when its output cannot be decoded.
    pub fn parse_with_options(
        &mut self,
        source: &[u8],
        options: &ParseOptions,
    ) -> Result<ParseResult, PrismError> {
        let options = options.encode()?;
        let serialized = self
            .engine
            .serialize(source, &options)
            .map_err(|e| PrismError::Engine(Box::new(e)))?;
        debug!(
            source = source.len(),
            options = options.len(),
            serialized = serialized.len(),
            "engine produced serialized tree"
        );
        Ok(deserialize(&serialized, source)?)
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> E {
        self.engine
    }
}
