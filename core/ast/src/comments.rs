use serde::Serialize;

use crate::nodes::Location;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum CommentKind {
    /// `# ...`
    Inline,
    /// `=begin` ... `=end`
    EmbDoc,
    /// A kind this decoder does not know; the raw value is kept.
    Other(u32),
}

impl From<u32> for CommentKind {
    fn from(kind: u32) -> Self {
        match kind {
            0 => CommentKind::Inline,
            1 => CommentKind::EmbDoc,
            other => CommentKind::Other(other),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub location: Location,
}

/// A `# key: value` comment the engine recognised, such as
/// `# frozen_string_literal: true`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct MagicComment {
    pub key_location: Location,
    pub value_location: Location,
}

impl MagicComment {
    #[must_use]
    pub fn key<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        self.key_location.slice(source)
    }

    #[must_use]
    pub fn value<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        self.value_location.slice(source)
    }
}
