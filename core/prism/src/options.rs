//! Parse options sent to the engine alongside the source.
//!
//! The record is small and written once per parse, so it uses fixed-width
//! little-endian fields instead of the varints of the serialized tree:
//!
//! ```text
//! filepath        u32 length + bytes
//! line            i32
//! encoding        u32 length + bytes
//! frozen literal  u8 (0 or 1)
//! command line    u8 (OR of CommandLineFlags)
//! version         u8 (SyntaxVersion)
//! scopes          u32 count, per scope u32 count, per local u32 length + bytes
//! ```

use std::ops::BitOr;

use crate::errors::OptionsError;

/// Interpreter switches that change how the source is parsed (`ruby -n`, ...).
///
/// The constants are masks, not bit indices: combine them with `|`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CommandLineFlags(u8);

impl CommandLineFlags {
    /// `-a`: split each line into `$F`.
    pub const A: Self = Self(0x01);
    /// `-e`: source comes from the command line.
    pub const E: Self = Self(0x02);
    /// `-l`: chomp each line.
    pub const L: Self = Self(0x04);
    /// `-n`: wrap the source in a `gets` loop.
    pub const N: Self = Self(0x08);
    /// `-p`: like `-n`, printing `$_` after each iteration.
    pub const P: Self = Self(0x10);
    /// `-x`: skip text before the `#!ruby` line.
    pub const X: Self = Self(0x20);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parses switch letters such as `"nl"`. Unknown letters yield `None`.
    #[must_use]
    pub fn from_letters(letters: &str) -> Option<Self> {
        letters.chars().try_fold(Self::default(), |flags, letter| {
            let flag = match letter {
                'a' => Self::A,
                'e' => Self::E,
                'l' => Self::L,
                'n' => Self::N,
                'p' => Self::P,
                'x' => Self::X,
                _ => return None,
            };
            Some(flags | flag)
        })
    }
}

impl BitOr for CommandLineFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Ruby syntax version the engine should accept.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum SyntaxVersion {
    #[default]
    Latest = 0,
    V3_3_0 = 1,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseOptions {
    filepath: String,
    line: i32,
    encoding: String,
    frozen_string_literal: bool,
    command_line: CommandLineFlags,
    version: SyntaxVersion,
    scopes: Vec<Vec<Vec<u8>>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            filepath: String::new(),
            // Not the zeroed record: an engine handed line 0 numbers from 0.
            line: 1,
            encoding: String::new(),
            frozen_string_literal: false,
            command_line: CommandLineFlags::default(),
            version: SyntaxVersion::Latest,
            scopes: Vec::new(),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File name reported by `__FILE__` and in diagnostics.
    #[must_use]
    pub fn filepath(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = filepath.into();
        self
    }

    /// Line number of the first source line. Defaults to 1; pass 0 to get the
    /// numbering of an all-zero record.
    #[must_use]
    pub fn line(mut self, line: i32) -> Self {
        self.line = line;
        self
    }

    /// Source encoding name. Empty lets the engine pick its default.
    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn frozen_string_literal(mut self, frozen: bool) -> Self {
        self.frozen_string_literal = frozen;
        self
    }

    #[must_use]
    pub fn command_line(mut self, flags: CommandLineFlags) -> Self {
        self.command_line = flags;
        self
    }

    #[must_use]
    pub fn version(mut self, version: SyntaxVersion) -> Self {
        self.version = version;
        self
    }

    /// Appends an enclosing scope whose locals are already defined, innermost last.
    #[must_use]
    pub fn scope<I, S>(mut self, locals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.scopes
            .push(locals.into_iter().map(|local| local.as_ref().to_vec()).collect());
        self
    }

    #[must_use]
    pub fn scopes(&self) -> &[Vec<Vec<u8>>] {
        &self.scopes
    }

    /// Encodes the record in the layout the engine reads.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::TooLong`] when a string or list does not fit its
    /// 32-bit length prefix.
    pub fn encode(&self) -> Result<Vec<u8>, OptionsError> {
        let mut out = Vec::new();
        write_bytes(&mut out, "filepath", self.filepath.as_bytes())?;
        out.extend_from_slice(&self.line.to_le_bytes());
        write_bytes(&mut out, "encoding", self.encoding.as_bytes())?;
        out.push(u8::from(self.frozen_string_literal));
        out.push(self.command_line.bits());
        out.push(self.version as u8);
        write_len(&mut out, "scopes", self.scopes.len())?;
        for scope in &self.scopes {
            write_len(&mut out, "scope locals", scope.len())?;
            for local in scope {
                write_bytes(&mut out, "local name", local)?;
            }
        }
        Ok(out)
    }
}

fn write_len(out: &mut Vec<u8>, field: &'static str, len: usize) -> Result<(), OptionsError> {
    let len = u32::try_from(len).map_err(|_| OptionsError::TooLong { field, len })?;
    out.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn write_bytes(out: &mut Vec<u8>, field: &'static str, bytes: &[u8]) -> Result<(), OptionsError> {
    write_len(out, field, bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}
