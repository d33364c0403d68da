use serde::Serialize;

use crate::comments::{Comment, MagicComment};
use crate::diagnostics::{SyntaxError, SyntaxWarning};
use crate::nodes::{Location, Node};

/// Everything decoded from one serialized stream. Immutable once built.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ParseResult {
    encoding: String,
    root: Node,
    comments: Vec<Comment>,
    magic_comments: Vec<MagicComment>,
    data_location: Option<Location>,
    errors: Vec<SyntaxError>,
    warnings: Vec<SyntaxWarning>,
}

impl ParseResult {
    #[must_use]
    pub fn new(
        encoding: String,
        root: Node,
        comments: Vec<Comment>,
        magic_comments: Vec<MagicComment>,
        data_location: Option<Location>,
        errors: Vec<SyntaxError>,
        warnings: Vec<SyntaxWarning>,
    ) -> Self {
        Self {
            encoding,
            root,
            comments,
            magic_comments,
            data_location,
            errors,
            warnings,
        }
    }

    /// Name of the source encoding, e.g. `"UTF-8"`.
    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// The program node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[must_use]
    pub fn into_root(self) -> Node {
        self.root
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn magic_comments(&self) -> &[MagicComment] {
        &self.magic_comments
    }

    /// Location of the `__END__` data section, if present.
    #[must_use]
    pub fn data_location(&self) -> Option<&Location> {
        self.data_location.as_ref()
    }

    #[must_use]
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[SyntaxWarning] {
        &self.warnings
    }

    /// `true` when the engine reported no syntax errors. Warnings do not count.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
