use prism::ast::nodes::{Location, Node, NodeKind};
use prism::{DeserializeError, deserialize};
use proptest::prelude::*;
use rstest::rstest;

use crate::utils::{Fields, HELLO_WORLD, StreamBuilder, hello_world_stream, program};

/// `if x then nil end`, with every optional field either present or absent.
fn if_node(keyword: bool, statements: bool) -> Fields {
    let fields = Fields::new().node(NodeKind::If, 0, 18);
    let fields = if keyword {
        fields.some_location(0, 2)
    } else {
        fields.absent()
    };
    let fields = fields.node(NodeKind::True, 3, 1).absent();
    let fields = if statements {
        fields
            .node(NodeKind::Statements, 10, 3)
            .uint(1)
            .node(NodeKind::Nil, 10, 3)
    } else {
        fields.absent()
    };
    fields.absent().some_location(14, 3)
}

#[rstest]
#[case(false, false)]
#[case(true, false)]
#[case(false, true)]
#[case(true, true)]
fn optional_fields_are_symmetric(#[case] keyword: bool, #[case] statements: bool) {
    let stream = StreamBuilder::new().root(if_node(keyword, statements)).build();
    let result = deserialize(&stream, b"if 1 then nil end ").unwrap();
    let Node::If(node) = result.root() else {
        panic!("expected an if node");
    };

    assert_eq!(node.if_keyword_loc, keyword.then_some(Location::new(0, 2)));
    assert_eq!(node.statements.is_some(), statements);
    assert_eq!(node.predicate.kind(), NodeKind::True);
    assert_eq!(node.consequent, None);
    assert_eq!(node.end_keyword_loc, Some(Location::new(14, 3)));
    assert_eq!(result.root().children().len(), 1 + usize::from(statements));
}

#[test]
fn strings_from_source_and_stream() {
    let source = b"['a', \"\\n\"]";
    let root = Fields::new()
        .node(NodeKind::Array, 0, 11)
        .uint(0)
        .uint(2)
        .node(NodeKind::String, 1, 3)
        .uint(0)
        .some_location(1, 1)
        .location(2, 1)
        .some_location(3, 1)
        .source_string(2, 1)
        .node(NodeKind::String, 6, 4)
        .uint(0)
        .some_location(6, 1)
        .location(7, 2)
        .some_location(9, 1)
        .embedded_string(b"\n")
        .some_location(0, 1)
        .some_location(10, 1);
    let stream = StreamBuilder::new().root(root).build();

    let result = deserialize(&stream, source).unwrap();
    let unescaped: Vec<&[u8]> = result
        .root()
        .children()
        .into_iter()
        .map(|child| match child {
            Node::String(string) => string.unescaped.as_bytes(),
            other => panic!("expected a string, got {:?}", other.kind()),
        })
        .collect();
    assert_eq!(unescaped, vec![&b"a"[..], &b"\n"[..]]);
}

#[test]
fn unknown_string_kind_is_out_of_data() {
    let root = Fields::new()
        .node(NodeKind::String, 0, 3)
        .uint(0)
        .absent()
        .location(0, 3)
        .absent()
        .byte(3);
    let stream = StreamBuilder::new().root(root).build();
    assert!(matches!(
        deserialize(&stream, b"abc"),
        Err(DeserializeError::OutOfData { .. })
    ));
}

#[test]
fn raw_byte_and_varuint_fields() {
    let root = program(
        6,
        2,
        Fields::new()
            .node(NodeKind::NumberedParameters, 0, 2)
            .byte(200)
            .node(NodeKind::NumberedReferenceRead, 3, 3)
            .uint(300),
    );
    let stream = StreamBuilder::new().root(root).build();
    let result = deserialize(&stream, b"_2 $30").unwrap();

    let kinds: Vec<NodeKind> = result.root().descendants().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Program,
            NodeKind::Statements,
            NodeKind::NumberedParameters,
            NodeKind::NumberedReferenceRead,
        ]
    );
    let statements = result.root().children()[0];
    let body = statements.children();
    assert!(matches!(body[0], Node::NumberedParameters(node) if node.maximum == 200));
    assert!(matches!(body[1], Node::NumberedReferenceRead(node) if node.number == 300));
}

#[test]
fn flags_reach_the_node() {
    let root = Fields::new().node(NodeKind::Range, 0, 4).uint(1).absent().absent().location(0, 3);
    let stream = StreamBuilder::new().root(root).build();
    let result = deserialize(&stream, b"...1").unwrap();
    let Node::Range(range) = result.root() else {
        panic!("expected a range");
    };
    assert!(range.is_exclude_end());
}

#[rstest]
#[case(0x8000)]
#[case(0xFFFF)]
#[case(0x1_0000)]
fn flags_wider_than_15_bits_are_rejected(#[case] value: u32) {
    let root = Fields::new().node(NodeKind::Arguments, 0, 0).uint(value).uint(0);
    let stream = StreamBuilder::new().root(root).build();
    let offset = stream.len() - root_len(value) + 3;
    assert_eq!(
        deserialize(&stream, b""),
        Err(DeserializeError::InvalidFlags { value, offset })
    );
}

/// Bytes taken by an `ArgumentsNode 0..0` with `flags` and no arguments.
fn root_len(flags: u32) -> usize {
    let mut varint = Vec::new();
    leb128::write::unsigned(&mut varint, u64::from(flags)).unwrap();
    3 + varint.len() + 1
}

#[rstest]
#[case(0)]
#[case(149)]
#[case(255)]
fn unknown_root_tag(#[case] tag: u8) {
    let stream = StreamBuilder::new().root(Fields::new().byte(tag)).build();
    assert_eq!(
        deserialize(&stream, b""),
        Err(DeserializeError::UnknownNodeType {
            tag,
            offset: stream.len() - 1,
        })
    );
}

#[test]
fn unknown_nested_tag() {
    let root = program(1, 1, Fields::new().byte(220).location(0, 1));
    let stream = StreamBuilder::new().root(root).build();
    assert!(matches!(
        deserialize(&stream, b"x"),
        Err(DeserializeError::UnknownNodeType { tag: 220, .. })
    ));
}

proptest! {
    #[test]
    fn corrupted_tails_never_panic(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut stream = hello_world_stream();
        stream.truncate(9);
        stream.extend_from_slice(&tail);
        let result = deserialize(&stream, HELLO_WORLD);
        prop_assert!(!matches!(result, Err(DeserializeError::Internal(_))), "{result:?}");
    }
}
