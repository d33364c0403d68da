//! Fixtures shared by the end to end tests and the CLI tests.
//!
//! [`StreamBuilder`] assembles serialized streams byte by byte the way the engine
//! lays them out, and [`Fields`] writes the body of a node tree. Together they let
//! tests describe exactly the stream they want, including broken ones.

use std::collections::HashMap;

use num_bigint::{BigInt, Sign};
use prism::Engine;
use prism::ast::nodes::{Location, NodeKind};
use prism_deserializer::{MAGIC, MAJOR_VERSION, MINOR_VERSION, PATCH_VERSION};

const EMBEDDED_BIT: u32 = 0x8000_0000;

fn write_uint(out: &mut Vec<u8>, value: u32) {
    leb128::write::unsigned(out, u64::from(value)).unwrap();
}

fn write_sint(out: &mut Vec<u8>, value: i32) {
    #[allow(clippy::cast_sign_loss)]
    let zigzag = ((value << 1) ^ (value >> 31)) as u32;
    write_uint(out, zigzag);
}

fn write_location(out: &mut Vec<u8>, location: Location) {
    write_uint(out, location.start);
    write_uint(out, location.length);
}

fn write_embedded(out: &mut Vec<u8>, bytes: &[u8]) {
    write_uint(out, u32::try_from(bytes.len()).unwrap());
    out.extend_from_slice(bytes);
}

/// Field-by-field writer for the node section of a stream.
///
/// Calls must follow the field layout of the node kinds being written; nothing
/// here checks that.
#[derive(Clone, Default, Debug)]
pub struct Fields(Vec<u8>);

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a node: tag byte, then its location.
    #[must_use]
    pub fn node(self, kind: NodeKind, start: u32, length: u32) -> Self {
        self.byte(kind.tag()).location(start, length)
    }

    /// An absent optional node, optional constant or optional location.
    #[must_use]
    pub fn absent(self) -> Self {
        self.byte(0)
    }

    #[must_use]
    pub fn byte(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }

    /// A varuint: list counts, constant ids, `uint32` fields and flags.
    #[must_use]
    pub fn uint(mut self, value: u32) -> Self {
        write_uint(&mut self.0, value);
        self
    }

    #[must_use]
    pub fn location(mut self, start: u32, length: u32) -> Self {
        write_location(&mut self.0, Location::new(start, length));
        self
    }

    #[must_use]
    pub fn some_location(self, start: u32, length: u32) -> Self {
        self.byte(1).location(start, length)
    }

    #[must_use]
    pub fn source_string(self, start: u32, length: u32) -> Self {
        self.byte(1).location(start, length)
    }

    #[must_use]
    pub fn embedded_string(mut self, bytes: &[u8]) -> Self {
        self.0.push(2);
        write_embedded(&mut self.0, bytes);
        self
    }

    /// Sign byte, word count, then the 32-bit words least significant first.
    #[must_use]
    pub fn integer(mut self, value: &BigInt) -> Self {
        let (sign, mut words) = value.to_u32_digits();
        if words.is_empty() {
            words.push(0);
        }
        self.0.push(u8::from(sign == Sign::Minus));
        write_uint(&mut self.0, u32::try_from(words.len()).unwrap());
        for word in words {
            write_uint(&mut self.0, word);
        }
        self
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Diagnostic {
    id: u8,
    message: String,
    location: Location,
    level: u8,
}

#[derive(Clone, Debug)]
enum Constant {
    Source(Location),
    Embedded(Vec<u8>),
}

/// Builds a complete serialized stream.
///
/// Defaults to a valid 0.24.0 header, `UTF-8` encoding, start line 1, a single
/// line offset and empty sections. The constant pool is written after the root
/// node with embedded constant bytes placed before the table, so cutting the
/// stream anywhere past the pool count also cuts the table.
#[derive(Clone, Debug)]
pub struct StreamBuilder {
    version: [u8; 3],
    location_mode: u8,
    encoding: String,
    start_line: i32,
    line_offsets: Vec<u32>,
    comments: Vec<(u32, Location)>,
    magic_comments: Vec<(Location, Location)>,
    data_location: Option<Location>,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    constants: Vec<Constant>,
    root: Vec<u8>,
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self {
            version: [MAJOR_VERSION, MINOR_VERSION, PATCH_VERSION],
            location_mode: 0,
            encoding: "UTF-8".to_string(),
            start_line: 1,
            line_offsets: vec![0],
            comments: Vec::new(),
            magic_comments: Vec::new(),
            data_location: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            constants: Vec::new(),
            root: Vec::new(),
        }
    }
}

impl StreamBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn version(mut self, major: u8, minor: u8, patch: u8) -> Self {
        self.version = [major, minor, patch];
        self
    }

    #[must_use]
    pub fn location_mode(mut self, mode: u8) -> Self {
        self.location_mode = mode;
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: &str) -> Self {
        self.encoding = encoding.to_string();
        self
    }

    #[must_use]
    pub fn start_line(mut self, line: i32) -> Self {
        self.start_line = line;
        self
    }

    #[must_use]
    pub fn line_offsets(mut self, offsets: &[u32]) -> Self {
        self.line_offsets = offsets.to_vec();
        self
    }

    #[must_use]
    pub fn comment(mut self, kind: u32, start: u32, length: u32) -> Self {
        self.comments.push((kind, Location::new(start, length)));
        self
    }

    #[must_use]
    pub fn magic_comment(mut self, key: (u32, u32), value: (u32, u32)) -> Self {
        self.magic_comments.push((
            Location::new(key.0, key.1),
            Location::new(value.0, value.1),
        ));
        self
    }

    #[must_use]
    pub fn data_location(mut self, start: u32, length: u32) -> Self {
        self.data_location = Some(Location::new(start, length));
        self
    }

    /// Adds an error with its raw wire id.
    #[must_use]
    pub fn error(mut self, id: u8, message: &str, start: u32, length: u32, level: u8) -> Self {
        self.errors.push(Diagnostic {
            id,
            message: message.to_string(),
            location: Location::new(start, length),
            level,
        });
        self
    }

    /// Adds a warning with its raw wire id, which includes the 224 offset.
    #[must_use]
    pub fn warning(mut self, id: u8, message: &str, start: u32, length: u32, level: u8) -> Self {
        self.warnings.push(Diagnostic {
            id,
            message: message.to_string(),
            location: Location::new(start, length),
            level,
        });
        self
    }

    /// Adds a pool entry naming a slice of the source. Returns its 1-based id.
    pub fn source_constant(&mut self, start: u32, length: u32) -> u32 {
        self.constants
            .push(Constant::Source(Location::new(start, length)));
        u32::try_from(self.constants.len()).unwrap()
    }

    /// Adds a pool entry whose bytes live in the stream. Returns its 1-based id.
    pub fn embedded_constant(&mut self, bytes: &[u8]) -> u32 {
        self.constants.push(Constant::Embedded(bytes.to_vec()));
        u32::try_from(self.constants.len()).unwrap()
    }

    #[must_use]
    pub fn root(mut self, fields: Fields) -> Self {
        self.root = fields.into_bytes();
        self
    }

    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut out = MAGIC.to_vec();
        out.extend_from_slice(&self.version);
        out.push(self.location_mode);

        write_embedded(&mut out, self.encoding.as_bytes());
        write_sint(&mut out, self.start_line);
        write_uint(&mut out, u32::try_from(self.line_offsets.len()).unwrap());
        for offset in &self.line_offsets {
            write_uint(&mut out, *offset);
        }

        write_uint(&mut out, u32::try_from(self.comments.len()).unwrap());
        for (kind, location) in &self.comments {
            write_uint(&mut out, *kind);
            write_location(&mut out, *location);
        }
        write_uint(&mut out, u32::try_from(self.magic_comments.len()).unwrap());
        for (key, value) in &self.magic_comments {
            write_location(&mut out, *key);
            write_location(&mut out, *value);
        }
        match self.data_location {
            Some(location) => {
                out.push(1);
                write_location(&mut out, location);
            }
            None => out.push(0),
        }
        for diagnostics in [&self.errors, &self.warnings] {
            write_uint(&mut out, u32::try_from(diagnostics.len()).unwrap());
            for diagnostic in diagnostics {
                out.push(diagnostic.id);
                write_embedded(&mut out, diagnostic.message.as_bytes());
                write_location(&mut out, diagnostic.location);
                out.push(diagnostic.level);
            }
        }

        let table_base_at = out.len();
        out.extend_from_slice(&[0; 4]);
        write_uint(&mut out, u32::try_from(self.constants.len()).unwrap());
        out.extend_from_slice(&self.root);

        let mut entries = Vec::new();
        for constant in &self.constants {
            match constant {
                Constant::Source(location) => entries.push((location.start, location.length)),
                Constant::Embedded(bytes) => {
                    let offset = u32::try_from(out.len()).unwrap();
                    out.extend_from_slice(bytes);
                    entries.push((offset | EMBEDDED_BIT, u32::try_from(bytes.len()).unwrap()));
                }
            }
        }
        let table_base = u32::try_from(out.len()).unwrap();
        out[table_base_at..table_base_at + 4].copy_from_slice(&table_base.to_le_bytes());
        for (offset, length) in entries {
            out.extend_from_slice(&offset.to_le_bytes());
            out.extend_from_slice(&length.to_le_bytes());
        }
        out
    }
}

/// Source text of the hello world fixture.
pub const HELLO_WORLD: &[u8] = b"puts 'Hello, World!'";

/// The stream the engine produces for [`HELLO_WORLD`] with default options:
///
/// ```text
/// ProgramNode 0..20
///   StatementsNode 0..20
///     CallNode 0..20          name "puts"
///       ArgumentsNode 5..20
///         StringNode 5..20    unescaped "Hello, World!"
/// ```
#[must_use]
pub fn hello_world_stream() -> Vec<u8> {
    let mut builder = StreamBuilder::new();
    let puts = builder.source_constant(0, 4);
    let root = Fields::new()
        .node(NodeKind::Program, 0, 20)
        .uint(0)
        .node(NodeKind::Statements, 0, 20)
        .uint(1)
        .node(NodeKind::Call, 0, 20)
        .uint(0)
        .absent()
        .absent()
        .uint(puts)
        .some_location(0, 4)
        .absent()
        .node(NodeKind::Arguments, 5, 15)
        .uint(0)
        .uint(1)
        .node(NodeKind::String, 5, 15)
        .uint(0)
        .some_location(5, 1)
        .location(6, 13)
        .some_location(19, 1)
        .source_string(6, 13)
        .absent()
        .absent();
    builder.root(root).build()
}

/// Wraps `body` in `ProgramNode` and `StatementsNode` spanning `0..length`.
#[must_use]
pub fn program(length: u32, statements: u32, body: Fields) -> Fields {
    let mut bytes = Fields::new()
        .node(NodeKind::Program, 0, length)
        .uint(0)
        .node(NodeKind::Statements, 0, length)
        .uint(statements)
        .into_bytes();
    bytes.extend_from_slice(&body.into_bytes());
    Fields(bytes)
}

#[derive(Debug, thiserror::Error)]
#[error("no fixture stream registered for source {0:?}")]
pub struct MissingFixture(String);

/// Engine stand-in that answers with streams registered per source text.
#[derive(Default)]
pub struct FixtureEngine {
    streams: HashMap<Vec<u8>, Vec<u8>>,
    options: Vec<Vec<u8>>,
}

impl FixtureEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, source: &[u8], stream: Vec<u8>) -> Self {
        self.streams.insert(source.to_vec(), stream);
        self
    }

    /// Every options record the engine was handed, in call order.
    #[must_use]
    pub fn received_options(&self) -> &[Vec<u8>] {
        &self.options
    }
}

impl Engine for FixtureEngine {
    type Error = MissingFixture;

    fn serialize(&mut self, source: &[u8], options: &[u8]) -> Result<Vec<u8>, MissingFixture> {
        self.options.push(options.to_vec());
        self.streams
            .get(source)
            .cloned()
            .ok_or_else(|| MissingFixture(String::from_utf8_lossy(source).into_owned()))
    }
}
