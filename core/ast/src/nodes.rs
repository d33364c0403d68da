//! Syntax tree node definitions for serialization format 0.24.0.
//!
//! Every node kind is declared exactly once in the [`ast_nodes!`] table below. The
//! order of fields in a declaration is the order in which the fields appear on the
//! wire, and the table generates:
//!
//! - one struct per kind, carrying the node's own `location` plus its fields,
//! - [`NodeKind`], whose discriminant is the wire tag,
//! - the [`Node`] sum type with `kind`, `location`, `children` and `accept`,
//! - the [`Visitor`] trait with one handler per kind,
//! - [`Node::decode_fields`], the exhaustive dispatch used by the deserializer.
//!
//! Adding a kind to the table is therefore a compile-visible change everywhere a
//! `Node` is matched.

use core::fmt;
use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::decode::FieldDecoder;
use crate::flags::{
    ArgumentsNodeFlags, ArrayNodeFlags, CallNodeFlags, EncodingFlags, IntegerBaseFlags,
    KeywordHashNodeFlags, LoopFlags, ParameterFlags, RangeFlags, RegularExpressionFlags,
    StringFlags, SymbolFlags,
};

/// Half-open byte range `[start, start + length)` into the source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct Location {
    pub start: u32,
    pub length: u32,
}

impl Location {
    #[must_use]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    #[must_use]
    pub fn end(self) -> usize {
        self.start as usize + self.length as usize
    }

    #[must_use]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end()
    }

    /// The bytes of `source` covered by this location, or `None` when the range
    /// falls outside of it.
    #[must_use]
    pub fn slice<'a>(self, source: &'a [u8]) -> Option<&'a [u8]> {
        source.get(self.range())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// String field contents. Not guaranteed to be valid UTF-8: escapes such as
/// `"\xff"` produce arbitrary bytes.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[must_use]
    pub fn to_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for ByteString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_str_lossy())
    }
}

/// Arbitrary-precision integer literal value.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Integer(BigInt);

impl Integer {
    #[must_use]
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// The value as `i64` when it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

macro_rules! field_type {
    (node) => { Box<Node> };
    (optional_node) => { Option<Box<Node>> };
    (node_list) => { Vec<Node> };
    (string) => { ByteString };
    (constant) => { ByteString };
    (optional_constant) => { Option<ByteString> };
    (constant_list) => { Vec<ByteString> };
    (location) => { Location };
    (optional_location) => { Option<Location> };
    (integer) => { Integer };
    (uint8) => { u8 };
    (uint32) => { u32 };
    (flags($group:ident)) => { $group };
}

macro_rules! decode_field {
    ($decoder:ident, node) => { Box::new($decoder.node()?) };
    ($decoder:ident, optional_node) => { $decoder.optional_node()?.map(Box::new) };
    ($decoder:ident, node_list) => { $decoder.node_list()? };
    ($decoder:ident, string) => { $decoder.string()? };
    ($decoder:ident, constant) => { $decoder.constant()? };
    ($decoder:ident, optional_constant) => { $decoder.optional_constant()? };
    ($decoder:ident, constant_list) => { $decoder.constant_list()? };
    ($decoder:ident, location) => { $decoder.location()? };
    ($decoder:ident, optional_location) => { $decoder.optional_location()? };
    ($decoder:ident, integer) => { $decoder.integer()? };
    ($decoder:ident, uint8) => { $decoder.uint8()? };
    ($decoder:ident, uint32) => { $decoder.uint32()? };
    ($decoder:ident, flags($group:ident)) => { $group::from_bits($decoder.flags()?) };
}

macro_rules! collect_children {
    ($out:ident, $value:expr, node) => {
        $out.push(&**$value)
    };
    ($out:ident, $value:expr, optional_node) => {
        if let Some(child) = $value {
            $out.push(&**child);
        }
    };
    ($out:ident, $value:expr, node_list) => {
        $out.extend($value.iter())
    };
    ($out:ident, $value:expr, $($other:tt)+) => {};
}

macro_rules! detach_children {
    ($out:ident, $value:expr, node) => {
        $out.push(std::mem::replace(&mut **$value, Node::PLACEHOLDER))
    };
    ($out:ident, $value:expr, optional_node) => {
        if let Some(child) = $value.take() {
            $out.push(*child);
        }
    };
    ($out:ident, $value:expr, node_list) => {
        $out.append($value)
    };
    ($out:ident, $value:expr, $($other:tt)+) => {};
}

macro_rules! ast_nodes {
    (
        $(
            $(#[$outer:meta])*
            $tag:literal => $variant:ident($name:ident, $visit:ident) {
                $(
                    $(#[$field_attr:meta])*
                    $field:ident : $kind:ident $( ( $group:ident ) )?
                ),* $(,)?
            }
        )+
    ) => {
        $(
            $(#[$outer])*
            #[derive(Clone, PartialEq, Eq, Debug, Serialize)]
            pub struct $name {
                pub location: Location,
                $(
                    $(#[$field_attr])*
                    pub $field: field_type!($kind $( ($group) )?),
                )*
            }

            impl $name {
                #[inline(never)]
                #[allow(unused_variables, clippy::unnecessary_wraps)]
                fn decode<D: FieldDecoder + ?Sized>(
                    location: Location,
                    decoder: &mut D,
                ) -> Result<Self, D::Error> {
                    Ok(Self {
                        location,
                        $( $field: decode_field!(decoder, $kind $( ($group) )?), )*
                    })
                }
            }

            impl From<$name> for Node {
                fn from(node: $name) -> Self {
                    Node::$variant(node)
                }
            }
        )+

        /// Discriminant of a [`Node`]. The numeric value is the tag byte that
        /// introduces the node on the wire.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
        #[repr(u8)]
        pub enum NodeKind {
            $( $variant = $tag, )+
        }

        impl NodeKind {
            /// Every kind, in tag order.
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )+ ];

            #[must_use]
            pub fn from_tag(tag: u8) -> Option<Self> {
                match tag {
                    $( $tag => Some(NodeKind::$variant), )+
                    _ => None,
                }
            }

            #[must_use]
            pub const fn tag(self) -> u8 {
                self as u8
            }

            /// Struct name of the kind, e.g. `"CallNode"`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$variant => stringify!($name), )+
                }
            }
        }

        impl Display for NodeKind {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        /// A decoded syntax tree node. Each node exclusively owns its children.
        #[derive(Clone, PartialEq, Eq, Debug, Serialize)]
        #[serde(tag = "type")]
        pub enum Node {
            $( $variant($name), )+
        }

        impl Node {
            #[must_use]
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( Node::$variant(_) => NodeKind::$variant, )+
                }
            }

            #[must_use]
            pub fn location(&self) -> &Location {
                match self {
                    $( Node::$variant(node) => &node.location, )+
                }
            }

            /// Direct children, in field declaration order.
            #[must_use]
            #[allow(unused_variables)]
            pub fn children(&self) -> Vec<&Node> {
                let mut children: Vec<&Node> = Vec::new();
                match self {
                    $(
                        Node::$variant(node) => {
                            $( collect_children!(children, &node.$field, $kind $( ($group) )?); )*
                        }
                    )+
                }
                children
            }

            /// Dispatches to the visitor handler of this node's kind. Does not
            /// descend into children; see [`crate::visitor::walk`].
            pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                match self {
                    $( Node::$variant(node) => visitor.$visit(node), )+
                }
            }

            /// Decodes the fields of a `kind` node whose tag and leading location
            /// have already been consumed.
            ///
            /// # Errors
            ///
            /// Propagates the first error reported by `decoder`.
            pub fn decode_fields<D: FieldDecoder + ?Sized>(
                kind: NodeKind,
                location: Location,
                decoder: &mut D,
            ) -> Result<Node, D::Error> {
                match kind {
                    $( NodeKind::$variant => $name::decode(location, decoder).map(Node::$variant), )+
                }
            }

            /// Moves every direct child into `out`, leaving the node childless.
            #[allow(unused_variables)]
            fn detach_children(&mut self, out: &mut Vec<Node>) {
                match self {
                    $(
                        Node::$variant(node) => {
                            $( detach_children!(out, &mut node.$field, $kind $( ($group) )?); )*
                        }
                    )+
                }
            }
        }

        /// Drops children from an explicit work list; nesting depth does not grow
        /// the call stack.
        impl Drop for Node {
            fn drop(&mut self) {
                let mut pending = Vec::new();
                self.detach_children(&mut pending);
                while let Some(mut node) = pending.pop() {
                    node.detach_children(&mut pending);
                }
            }
        }

        /// Per-kind handlers invoked by [`Node::accept`]. Every handler defaults to
        /// doing nothing, so implementors only override the kinds they care about.
        pub trait Visitor {
            $(
                fn $visit(&mut self, node: &$name) {
                    let _ = node;
                }
            )+
        }
    };
}

ast_nodes! {
    /// `alias $new $old`
    1 => AliasGlobalVariable(AliasGlobalVariableNode, visit_alias_global_variable_node) {
        new_name: node,
        old_name: node,
        keyword_loc: location,
    }

    /// `alias new old`
    2 => AliasMethod(AliasMethodNode, visit_alias_method_node) {
        new_name: node,
        old_name: node,
        keyword_loc: location,
    }

    3 => AlternationPattern(AlternationPatternNode, visit_alternation_pattern_node) {
        left: node,
        right: node,
        operator_loc: location,
    }

    4 => And(AndNode, visit_and_node) {
        left: node,
        right: node,
        operator_loc: location,
    }

    5 => Arguments(ArgumentsNode, visit_arguments_node) {
        flags: flags(ArgumentsNodeFlags),
        arguments: node_list,
    }

    6 => Array(ArrayNode, visit_array_node) {
        flags: flags(ArrayNodeFlags),
        elements: node_list,
        opening_loc: optional_location,
        closing_loc: optional_location,
    }

    7 => ArrayPattern(ArrayPatternNode, visit_array_pattern_node) {
        constant: optional_node,
        requireds: node_list,
        rest: optional_node,
        posts: node_list,
        opening_loc: optional_location,
        closing_loc: optional_location,
    }

    /// `key => value` or `key: value`
    8 => Assoc(AssocNode, visit_assoc_node) {
        key: node,
        value: node,
        operator_loc: optional_location,
    }

    9 => AssocSplat(AssocSplatNode, visit_assoc_splat_node) {
        /// `None` for anonymous `**` forwarding.
        value: optional_node,
        operator_loc: location,
    }

    /// `$&`, `` $` ``, `$'`, `$+`
    10 => BackReferenceRead(BackReferenceReadNode, visit_back_reference_read_node) {
        name: constant,
    }

    11 => Begin(BeginNode, visit_begin_node) {
        begin_keyword_loc: optional_location,
        statements: optional_node,
        rescue_clause: optional_node,
        else_clause: optional_node,
        ensure_clause: optional_node,
        end_keyword_loc: optional_location,
    }

    12 => BlockArgument(BlockArgumentNode, visit_block_argument_node) {
        expression: optional_node,
        operator_loc: location,
    }

    13 => BlockLocalVariable(BlockLocalVariableNode, visit_block_local_variable_node) {
        flags: flags(ParameterFlags),
        name: constant,
    }

    14 => Block(BlockNode, visit_block_node) {
        locals: constant_list,
        parameters: optional_node,
        body: optional_node,
        opening_loc: location,
        closing_loc: location,
    }

    15 => BlockParameter(BlockParameterNode, visit_block_parameter_node) {
        flags: flags(ParameterFlags),
        name: optional_constant,
        name_loc: optional_location,
        operator_loc: location,
    }

    16 => BlockParameters(BlockParametersNode, visit_block_parameters_node) {
        parameters: optional_node,
        locals: node_list,
        opening_loc: optional_location,
        closing_loc: optional_location,
    }

    17 => Break(BreakNode, visit_break_node) {
        arguments: optional_node,
        keyword_loc: location,
    }

    /// `foo.bar &&= value`
    18 => CallAndWrite(CallAndWriteNode, visit_call_and_write_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        message_loc: optional_location,
        read_name: constant,
        write_name: constant,
        operator_loc: location,
        value: node,
    }

    /// A method call: `foo`, `foo.bar(1)`, `foo&.bar { }`, `a + b`, ...
    19 => Call(CallNode, visit_call_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        name: constant,
        message_loc: optional_location,
        opening_loc: optional_location,
        arguments: optional_node,
        closing_loc: optional_location,
        block: optional_node,
    }

    20 => CallOperatorWrite(CallOperatorWriteNode, visit_call_operator_write_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        message_loc: optional_location,
        read_name: constant,
        write_name: constant,
        operator: constant,
        operator_loc: location,
        value: node,
    }

    21 => CallOrWrite(CallOrWriteNode, visit_call_or_write_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        message_loc: optional_location,
        read_name: constant,
        write_name: constant,
        operator_loc: location,
        value: node,
    }

    /// `foo.bar, = 1`
    22 => CallTarget(CallTargetNode, visit_call_target_node) {
        flags: flags(CallNodeFlags),
        receiver: node,
        call_operator_loc: location,
        name: constant,
        message_loc: location,
    }

    23 => CapturePattern(CapturePatternNode, visit_capture_pattern_node) {
        value: node,
        target: node,
        operator_loc: location,
    }

    /// `case ... in ...`
    24 => CaseMatch(CaseMatchNode, visit_case_match_node) {
        predicate: optional_node,
        conditions: node_list,
        consequent: optional_node,
        case_keyword_loc: location,
        end_keyword_loc: location,
    }

    /// `case ... when ...`
    25 => Case(CaseNode, visit_case_node) {
        predicate: optional_node,
        conditions: node_list,
        consequent: optional_node,
        case_keyword_loc: location,
        end_keyword_loc: location,
    }

    26 => Class(ClassNode, visit_class_node) {
        locals: constant_list,
        class_keyword_loc: location,
        constant_path: node,
        inheritance_operator_loc: optional_location,
        superclass: optional_node,
        body: optional_node,
        end_keyword_loc: location,
        name: constant,
    }

    27 => ClassVariableAndWrite(ClassVariableAndWriteNode, visit_class_variable_and_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    28 => ClassVariableOperatorWrite(ClassVariableOperatorWriteNode, visit_class_variable_operator_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
        operator: constant,
    }

    29 => ClassVariableOrWrite(ClassVariableOrWriteNode, visit_class_variable_or_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    30 => ClassVariableRead(ClassVariableReadNode, visit_class_variable_read_node) {
        name: constant,
    }

    31 => ClassVariableTarget(ClassVariableTargetNode, visit_class_variable_target_node) {
        name: constant,
    }

    32 => ClassVariableWrite(ClassVariableWriteNode, visit_class_variable_write_node) {
        name: constant,
        name_loc: location,
        value: node,
        operator_loc: optional_location,
    }

    33 => ConstantAndWrite(ConstantAndWriteNode, visit_constant_and_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    34 => ConstantOperatorWrite(ConstantOperatorWriteNode, visit_constant_operator_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
        operator: constant,
    }

    35 => ConstantOrWrite(ConstantOrWriteNode, visit_constant_or_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    36 => ConstantPathAndWrite(ConstantPathAndWriteNode, visit_constant_path_and_write_node) {
        target: node,
        operator_loc: location,
        value: node,
    }

    /// `Parent::Child`, or `::Child` when `parent` is `None`.
    37 => ConstantPath(ConstantPathNode, visit_constant_path_node) {
        parent: optional_node,
        child: node,
        delimiter_loc: location,
    }

    38 => ConstantPathOperatorWrite(ConstantPathOperatorWriteNode, visit_constant_path_operator_write_node) {
        target: node,
        operator_loc: location,
        value: node,
        operator: constant,
    }

    39 => ConstantPathOrWrite(ConstantPathOrWriteNode, visit_constant_path_or_write_node) {
        target: node,
        operator_loc: location,
        value: node,
    }

    40 => ConstantPathTarget(ConstantPathTargetNode, visit_constant_path_target_node) {
        parent: optional_node,
        child: node,
        delimiter_loc: location,
    }

    41 => ConstantPathWrite(ConstantPathWriteNode, visit_constant_path_write_node) {
        target: node,
        operator_loc: location,
        value: node,
    }

    42 => ConstantRead(ConstantReadNode, visit_constant_read_node) {
        name: constant,
    }

    43 => ConstantTarget(ConstantTargetNode, visit_constant_target_node) {
        name: constant,
    }

    44 => ConstantWrite(ConstantWriteNode, visit_constant_write_node) {
        name: constant,
        name_loc: location,
        value: node,
        operator_loc: location,
    }

    /// Method definition, including singleton (`def self.foo`) and endless forms.
    45 => Def(DefNode, visit_def_node) {
        name: constant,
        name_loc: location,
        receiver: optional_node,
        parameters: optional_node,
        body: optional_node,
        locals: constant_list,
        def_keyword_loc: location,
        operator_loc: optional_location,
        lparen_loc: optional_location,
        rparen_loc: optional_location,
        equal_loc: optional_location,
        end_keyword_loc: optional_location,
    }

    46 => Defined(DefinedNode, visit_defined_node) {
        lparen_loc: optional_location,
        value: node,
        rparen_loc: optional_location,
        keyword_loc: location,
    }

    47 => Else(ElseNode, visit_else_node) {
        else_keyword_loc: location,
        statements: optional_node,
        end_keyword_loc: optional_location,
    }

    /// `#{ ... }` inside an interpolated literal.
    48 => EmbeddedStatements(EmbeddedStatementsNode, visit_embedded_statements_node) {
        opening_loc: location,
        statements: optional_node,
        closing_loc: location,
    }

    /// `#@ivar`, `#$global`, `#@@cvar` inside an interpolated literal.
    49 => EmbeddedVariable(EmbeddedVariableNode, visit_embedded_variable_node) {
        operator_loc: location,
        variable: node,
    }

    50 => Ensure(EnsureNode, visit_ensure_node) {
        ensure_keyword_loc: location,
        statements: optional_node,
        end_keyword_loc: location,
    }

    51 => False(FalseNode, visit_false_node) {}

    52 => FindPattern(FindPatternNode, visit_find_pattern_node) {
        constant: optional_node,
        left: node,
        requireds: node_list,
        right: node,
        opening_loc: optional_location,
        closing_loc: optional_location,
    }

    53 => FlipFlop(FlipFlopNode, visit_flip_flop_node) {
        flags: flags(RangeFlags),
        left: optional_node,
        right: optional_node,
        operator_loc: location,
    }

    /// Float literal; the value is read back from the source text.
    54 => Float(FloatNode, visit_float_node) {}

    55 => For(ForNode, visit_for_node) {
        index: node,
        collection: node,
        statements: optional_node,
        for_keyword_loc: location,
        in_keyword_loc: location,
        do_keyword_loc: optional_location,
        end_keyword_loc: location,
    }

    56 => ForwardingArguments(ForwardingArgumentsNode, visit_forwarding_arguments_node) {}

    57 => ForwardingParameter(ForwardingParameterNode, visit_forwarding_parameter_node) {}

    /// `super` without arguments or parentheses.
    58 => ForwardingSuper(ForwardingSuperNode, visit_forwarding_super_node) {
        block: optional_node,
    }

    59 => GlobalVariableAndWrite(GlobalVariableAndWriteNode, visit_global_variable_and_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    60 => GlobalVariableOperatorWrite(GlobalVariableOperatorWriteNode, visit_global_variable_operator_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
        operator: constant,
    }

    61 => GlobalVariableOrWrite(GlobalVariableOrWriteNode, visit_global_variable_or_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    62 => GlobalVariableRead(GlobalVariableReadNode, visit_global_variable_read_node) {
        name: constant,
    }

    63 => GlobalVariableTarget(GlobalVariableTargetNode, visit_global_variable_target_node) {
        name: constant,
    }

    64 => GlobalVariableWrite(GlobalVariableWriteNode, visit_global_variable_write_node) {
        name: constant,
        name_loc: location,
        value: node,
        operator_loc: location,
    }

    65 => Hash(HashNode, visit_hash_node) {
        opening_loc: location,
        elements: node_list,
        closing_loc: location,
    }

    66 => HashPattern(HashPatternNode, visit_hash_pattern_node) {
        constant: optional_node,
        elements: node_list,
        rest: optional_node,
        opening_loc: optional_location,
        closing_loc: optional_location,
    }

    /// `if`, `elsif`, the `if` modifier and the ternary operator.
    67 => If(IfNode, visit_if_node) {
        if_keyword_loc: optional_location,
        predicate: node,
        then_keyword_loc: optional_location,
        statements: optional_node,
        consequent: optional_node,
        end_keyword_loc: optional_location,
    }

    68 => Imaginary(ImaginaryNode, visit_imaginary_node) {
        numeric: node,
    }

    /// A value implied by the source, such as the value of `{ foo: }`.
    69 => Implicit(ImplicitNode, visit_implicit_node) {
        value: node,
    }

    /// The trailing comma in `foo, = bar` or `|a,|`.
    70 => ImplicitRest(ImplicitRestNode, visit_implicit_rest_node) {}

    71 => In(InNode, visit_in_node) {
        pattern: node,
        statements: optional_node,
        in_loc: location,
        then_loc: optional_location,
    }

    72 => IndexAndWrite(IndexAndWriteNode, visit_index_and_write_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        opening_loc: location,
        arguments: optional_node,
        closing_loc: location,
        block: optional_node,
        operator_loc: location,
        value: node,
    }

    73 => IndexOperatorWrite(IndexOperatorWriteNode, visit_index_operator_write_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        opening_loc: location,
        arguments: optional_node,
        closing_loc: location,
        block: optional_node,
        operator: constant,
        operator_loc: location,
        value: node,
    }

    74 => IndexOrWrite(IndexOrWriteNode, visit_index_or_write_node) {
        flags: flags(CallNodeFlags),
        receiver: optional_node,
        call_operator_loc: optional_location,
        opening_loc: location,
        arguments: optional_node,
        closing_loc: location,
        block: optional_node,
        operator_loc: location,
        value: node,
    }

    75 => IndexTarget(IndexTargetNode, visit_index_target_node) {
        flags: flags(CallNodeFlags),
        receiver: node,
        opening_loc: location,
        arguments: optional_node,
        closing_loc: location,
        block: optional_node,
    }

    76 => InstanceVariableAndWrite(InstanceVariableAndWriteNode, visit_instance_variable_and_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    77 => InstanceVariableOperatorWrite(InstanceVariableOperatorWriteNode, visit_instance_variable_operator_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
        operator: constant,
    }

    78 => InstanceVariableOrWrite(InstanceVariableOrWriteNode, visit_instance_variable_or_write_node) {
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    79 => InstanceVariableRead(InstanceVariableReadNode, visit_instance_variable_read_node) {
        name: constant,
    }

    80 => InstanceVariableTarget(InstanceVariableTargetNode, visit_instance_variable_target_node) {
        name: constant,
    }

    81 => InstanceVariableWrite(InstanceVariableWriteNode, visit_instance_variable_write_node) {
        name: constant,
        name_loc: location,
        value: node,
        operator_loc: location,
    }

    82 => Integer(IntegerNode, visit_integer_node) {
        flags: flags(IntegerBaseFlags),
        value: integer,
    }

    83 => InterpolatedMatchLastLine(InterpolatedMatchLastLineNode, visit_interpolated_match_last_line_node) {
        flags: flags(RegularExpressionFlags),
        opening_loc: location,
        parts: node_list,
        closing_loc: location,
    }

    84 => InterpolatedRegularExpression(InterpolatedRegularExpressionNode, visit_interpolated_regular_expression_node) {
        flags: flags(RegularExpressionFlags),
        opening_loc: location,
        parts: node_list,
        closing_loc: location,
    }

    85 => InterpolatedString(InterpolatedStringNode, visit_interpolated_string_node) {
        opening_loc: optional_location,
        parts: node_list,
        closing_loc: optional_location,
    }

    86 => InterpolatedSymbol(InterpolatedSymbolNode, visit_interpolated_symbol_node) {
        opening_loc: optional_location,
        parts: node_list,
        closing_loc: optional_location,
    }

    87 => InterpolatedXString(InterpolatedXStringNode, visit_interpolated_x_string_node) {
        opening_loc: location,
        parts: node_list,
        closing_loc: location,
    }

    /// Hash written without braces in an argument list: `foo(a: 1)`.
    88 => KeywordHash(KeywordHashNode, visit_keyword_hash_node) {
        flags: flags(KeywordHashNodeFlags),
        elements: node_list,
    }

    89 => KeywordRestParameter(KeywordRestParameterNode, visit_keyword_rest_parameter_node) {
        flags: flags(ParameterFlags),
        name: optional_constant,
        name_loc: optional_location,
        operator_loc: location,
    }

    90 => Lambda(LambdaNode, visit_lambda_node) {
        locals: constant_list,
        operator_loc: location,
        opening_loc: location,
        closing_loc: location,
        parameters: optional_node,
        body: optional_node,
    }

    91 => LocalVariableAndWrite(LocalVariableAndWriteNode, visit_local_variable_and_write_node) {
        name_loc: location,
        operator_loc: location,
        value: node,
        name: constant,
        depth: uint32,
    }

    92 => LocalVariableOperatorWrite(LocalVariableOperatorWriteNode, visit_local_variable_operator_write_node) {
        name_loc: location,
        operator_loc: location,
        value: node,
        name: constant,
        operator: constant,
        depth: uint32,
    }

    93 => LocalVariableOrWrite(LocalVariableOrWriteNode, visit_local_variable_or_write_node) {
        name_loc: location,
        operator_loc: location,
        value: node,
        name: constant,
        depth: uint32,
    }

    94 => LocalVariableRead(LocalVariableReadNode, visit_local_variable_read_node) {
        name: constant,
        /// Number of scopes between the read and the scope declaring the variable.
        depth: uint32,
    }

    95 => LocalVariableTarget(LocalVariableTargetNode, visit_local_variable_target_node) {
        name: constant,
        depth: uint32,
    }

    96 => LocalVariableWrite(LocalVariableWriteNode, visit_local_variable_write_node) {
        name: constant,
        depth: uint32,
        name_loc: location,
        value: node,
        operator_loc: location,
    }

    /// A regular expression used as a condition, implicitly matched against `$_`.
    97 => MatchLastLine(MatchLastLineNode, visit_match_last_line_node) {
        flags: flags(RegularExpressionFlags),
        opening_loc: location,
        content_loc: location,
        closing_loc: location,
        unescaped: string,
    }

    98 => MatchPredicate(MatchPredicateNode, visit_match_predicate_node) {
        value: node,
        pattern: node,
        operator_loc: location,
    }

    99 => MatchRequired(MatchRequiredNode, visit_match_required_node) {
        value: node,
        pattern: node,
        operator_loc: location,
    }

    /// `/(?<name>.)/ =~ value`, which also writes the named captures.
    100 => MatchWrite(MatchWriteNode, visit_match_write_node) {
        call: node,
        targets: node_list,
    }

    /// Placeholder the engine inserts where a syntax error left a hole.
    101 => Missing(MissingNode, visit_missing_node) {}

    102 => Module(ModuleNode, visit_module_node) {
        locals: constant_list,
        module_keyword_loc: location,
        constant_path: node,
        body: optional_node,
        end_keyword_loc: location,
        name: constant,
    }

    103 => MultiTarget(MultiTargetNode, visit_multi_target_node) {
        lefts: node_list,
        rest: optional_node,
        rights: node_list,
        lparen_loc: optional_location,
        rparen_loc: optional_location,
    }

    104 => MultiWrite(MultiWriteNode, visit_multi_write_node) {
        lefts: node_list,
        rest: optional_node,
        rights: node_list,
        lparen_loc: optional_location,
        rparen_loc: optional_location,
        operator_loc: location,
        value: node,
    }

    105 => Next(NextNode, visit_next_node) {
        arguments: optional_node,
        keyword_loc: location,
    }

    106 => Nil(NilNode, visit_nil_node) {}

    /// `**nil` in a parameter list.
    107 => NoKeywordsParameter(NoKeywordsParameterNode, visit_no_keywords_parameter_node) {
        operator_loc: location,
        keyword_loc: location,
    }

    /// Implicit `_1`..`_9` parameters of a block.
    108 => NumberedParameters(NumberedParametersNode, visit_numbered_parameters_node) {
        maximum: uint8,
    }

    /// `$1`, `$2`, ...
    109 => NumberedReferenceRead(NumberedReferenceReadNode, visit_numbered_reference_read_node) {
        number: uint32,
    }

    110 => OptionalKeywordParameter(OptionalKeywordParameterNode, visit_optional_keyword_parameter_node) {
        flags: flags(ParameterFlags),
        name: constant,
        name_loc: location,
        value: node,
    }

    111 => OptionalParameter(OptionalParameterNode, visit_optional_parameter_node) {
        flags: flags(ParameterFlags),
        name: constant,
        name_loc: location,
        operator_loc: location,
        value: node,
    }

    112 => Or(OrNode, visit_or_node) {
        left: node,
        right: node,
        operator_loc: location,
    }

    113 => Parameters(ParametersNode, visit_parameters_node) {
        requireds: node_list,
        optionals: node_list,
        rest: optional_node,
        posts: node_list,
        keywords: node_list,
        keyword_rest: optional_node,
        block: optional_node,
    }

    114 => Parentheses(ParenthesesNode, visit_parentheses_node) {
        body: optional_node,
        opening_loc: location,
        closing_loc: location,
    }

    115 => PinnedExpression(PinnedExpressionNode, visit_pinned_expression_node) {
        expression: node,
        operator_loc: location,
        lparen_loc: location,
        rparen_loc: location,
    }

    116 => PinnedVariable(PinnedVariableNode, visit_pinned_variable_node) {
        variable: node,
        operator_loc: location,
    }

    /// `END { }`
    117 => PostExecution(PostExecutionNode, visit_post_execution_node) {
        statements: optional_node,
        keyword_loc: location,
        opening_loc: location,
        closing_loc: location,
    }

    /// `BEGIN { }`
    118 => PreExecution(PreExecutionNode, visit_pre_execution_node) {
        statements: optional_node,
        keyword_loc: location,
        opening_loc: location,
        closing_loc: location,
    }

    /// Root of every tree.
    119 => Program(ProgramNode, visit_program_node) {
        locals: constant_list,
        statements: node,
    }

    120 => Range(RangeNode, visit_range_node) {
        flags: flags(RangeFlags),
        left: optional_node,
        right: optional_node,
        operator_loc: location,
    }

    121 => Rational(RationalNode, visit_rational_node) {
        numeric: node,
    }

    122 => Redo(RedoNode, visit_redo_node) {}

    123 => RegularExpression(RegularExpressionNode, visit_regular_expression_node) {
        flags: flags(RegularExpressionFlags),
        opening_loc: location,
        content_loc: location,
        closing_loc: location,
        unescaped: string,
    }

    124 => RequiredKeywordParameter(RequiredKeywordParameterNode, visit_required_keyword_parameter_node) {
        flags: flags(ParameterFlags),
        name: constant,
        name_loc: location,
    }

    125 => RequiredParameter(RequiredParameterNode, visit_required_parameter_node) {
        flags: flags(ParameterFlags),
        name: constant,
    }

    126 => RescueModifier(RescueModifierNode, visit_rescue_modifier_node) {
        expression: node,
        keyword_loc: location,
        rescue_expression: node,
    }

    127 => Rescue(RescueNode, visit_rescue_node) {
        keyword_loc: location,
        exceptions: node_list,
        operator_loc: optional_location,
        reference: optional_node,
        statements: optional_node,
        consequent: optional_node,
    }

    128 => RestParameter(RestParameterNode, visit_rest_parameter_node) {
        flags: flags(ParameterFlags),
        name: optional_constant,
        name_loc: optional_location,
        operator_loc: location,
    }

    129 => Retry(RetryNode, visit_retry_node) {}

    130 => Return(ReturnNode, visit_return_node) {
        keyword_loc: location,
        arguments: optional_node,
    }

    131 => SelfNode(SelfNode, visit_self_node) {}

    /// `class << expression`
    132 => SingletonClass(SingletonClassNode, visit_singleton_class_node) {
        locals: constant_list,
        class_keyword_loc: location,
        operator_loc: location,
        expression: node,
        body: optional_node,
        end_keyword_loc: location,
    }

    133 => SourceEncoding(SourceEncodingNode, visit_source_encoding_node) {}

    /// `__FILE__`
    134 => SourceFile(SourceFileNode, visit_source_file_node) {
        filepath: string,
    }

    135 => SourceLine(SourceLineNode, visit_source_line_node) {}

    136 => Splat(SplatNode, visit_splat_node) {
        operator_loc: location,
        expression: optional_node,
    }

    137 => Statements(StatementsNode, visit_statements_node) {
        body: node_list,
    }

    138 => String(StringNode, visit_string_node) {
        flags: flags(StringFlags),
        opening_loc: optional_location,
        content_loc: location,
        closing_loc: optional_location,
        unescaped: string,
    }

    139 => Super(SuperNode, visit_super_node) {
        keyword_loc: location,
        lparen_loc: optional_location,
        arguments: optional_node,
        rparen_loc: optional_location,
        block: optional_node,
    }

    140 => Symbol(SymbolNode, visit_symbol_node) {
        flags: flags(SymbolFlags),
        opening_loc: optional_location,
        value_loc: optional_location,
        closing_loc: optional_location,
        unescaped: string,
    }

    141 => True(TrueNode, visit_true_node) {}

    142 => Undef(UndefNode, visit_undef_node) {
        names: node_list,
        keyword_loc: location,
    }

    143 => Unless(UnlessNode, visit_unless_node) {
        keyword_loc: location,
        predicate: node,
        then_keyword_loc: optional_location,
        statements: optional_node,
        consequent: optional_node,
        end_keyword_loc: optional_location,
    }

    144 => Until(UntilNode, visit_until_node) {
        flags: flags(LoopFlags),
        keyword_loc: location,
        closing_loc: optional_location,
        predicate: node,
        statements: optional_node,
    }

    145 => When(WhenNode, visit_when_node) {
        keyword_loc: location,
        conditions: node_list,
        statements: optional_node,
    }

    146 => While(WhileNode, visit_while_node) {
        flags: flags(LoopFlags),
        keyword_loc: location,
        closing_loc: optional_location,
        predicate: node,
        statements: optional_node,
    }

    /// Backtick command: `` `ls` ``
    147 => XString(XStringNode, visit_x_string_node) {
        flags: flags(EncodingFlags),
        opening_loc: location,
        content_loc: location,
        closing_loc: location,
        unescaped: string,
    }

    148 => Yield(YieldNode, visit_yield_node) {
        keyword_loc: location,
        lparen_loc: optional_location,
        arguments: optional_node,
        rparen_loc: optional_location,
    }
}

impl Node {
    /// Stand-in left behind when a boxed child is detached during drop.
    const PLACEHOLDER: Node = Node::Nil(NilNode {
        location: Location::new(0, 0),
    });
}
