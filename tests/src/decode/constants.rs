use prism::ast::nodes::{ByteString, Node, NodeKind};
use prism::{DeserializeError, deserialize};

use crate::utils::{Fields, StreamBuilder};

const SOURCE: &[u8] = b"def m(*rest) = rest";

fn rest_parameter(builder: StreamBuilder, name: u32) -> Vec<u8> {
    builder
        .root(
            Fields::new()
                .node(NodeKind::RestParameter, 6, 5)
                .uint(0)
                .uint(name)
                .some_location(7, 4)
                .location(6, 1),
        )
        .build()
}

#[test]
fn source_and_embedded_entries_resolve() {
    let mut builder = StreamBuilder::new();
    let rest = builder.source_constant(7, 4);
    let block = builder.embedded_constant(b"&block");
    let root = Fields::new()
        .node(NodeKind::Program, 0, 19)
        .uint(2)
        .uint(block)
        .uint(rest)
        .node(NodeKind::Statements, 0, 19)
        .uint(1)
        .node(NodeKind::LocalVariableRead, 15, 4)
        .uint(rest)
        .uint(0);
    let stream = builder.root(root).build();

    let result = deserialize(&stream, SOURCE).unwrap();
    let Node::Program(program) = result.root() else {
        panic!("expected a program, got {:?}", result.root().kind());
    };
    let locals: Vec<&[u8]> = program.locals.iter().map(ByteString::as_bytes).collect();
    assert_eq!(locals, vec![&b"&block"[..], &b"rest"[..]]);
    let read = program.statements().unwrap().body.first().unwrap();
    let Node::LocalVariableRead(read) = read else {
        panic!("expected a local variable read, got {:?}", read.kind());
    };
    assert_eq!(read.name.as_bytes(), b"rest");
    assert_eq!(read.depth, 0);
}

#[test]
fn optional_constant_zero_is_absent() {
    let mut builder = StreamBuilder::new();
    builder.source_constant(7, 4);
    let stream = rest_parameter(builder, 0);

    let result = deserialize(&stream, SOURCE).unwrap();
    let Node::RestParameter(rest) = result.root() else {
        panic!("expected a rest parameter");
    };
    assert_eq!(rest.name, None);
    assert!(rest.is_anonymous());
}

#[test]
fn optional_constant_present() {
    let mut builder = StreamBuilder::new();
    let id = builder.source_constant(7, 4);
    let stream = rest_parameter(builder, id);

    let result = deserialize(&stream, SOURCE).unwrap();
    let Node::RestParameter(rest) = result.root() else {
        panic!("expected a rest parameter");
    };
    assert_eq!(rest.name.as_ref().map(ByteString::as_bytes), Some(&b"rest"[..]));
}

#[test]
fn required_constant_zero_is_out_of_range() {
    let mut builder = StreamBuilder::new();
    builder.source_constant(7, 4);
    let stream = builder
        .root(Fields::new().node(NodeKind::LocalVariableRead, 15, 4).uint(0).uint(0))
        .build();

    assert_eq!(
        deserialize(&stream, SOURCE),
        Err(DeserializeError::IndexOutOfRange { index: 0, count: 1 })
    );
}

#[test]
fn constant_past_the_pool_is_out_of_range() {
    let mut builder = StreamBuilder::new();
    builder.source_constant(7, 4);
    let stream = rest_parameter(builder, 3);

    assert_eq!(
        deserialize(&stream, SOURCE),
        Err(DeserializeError::IndexOutOfRange { index: 2, count: 1 })
    );
}

#[test]
fn source_entry_outside_the_source_is_out_of_data() {
    let mut builder = StreamBuilder::new();
    let id = builder.source_constant(15, 40);
    let stream = rest_parameter(builder, id);

    assert!(matches!(
        deserialize(&stream, SOURCE),
        Err(DeserializeError::OutOfData { .. })
    ));
}

#[test]
fn names_keep_their_exact_bytes() {
    let mut builder = StreamBuilder::new();
    let id = builder.embedded_constant(b"r\xffst");
    let stream = rest_parameter(builder, id);

    let result = deserialize(&stream, SOURCE).unwrap();
    let Node::RestParameter(rest) = result.root() else {
        panic!("expected a rest parameter");
    };
    assert_eq!(rest.name.as_ref().map(ByteString::as_bytes), Some(&b"r\xffst"[..]));
}

#[test]
fn source_names_keep_their_exact_bytes() {
    const LATIN1: &[u8] = b"def m(*r\xe9st) = r\xe9st";
    let mut builder = StreamBuilder::new();
    let id = builder.source_constant(7, 4);
    let stream = rest_parameter(builder, id);

    let result = deserialize(&stream, LATIN1).unwrap();
    let Node::RestParameter(rest) = result.root() else {
        panic!("expected a rest parameter");
    };
    assert_eq!(rest.name.as_ref().map(ByteString::as_bytes), Some(&b"r\xe9st"[..]));
}

#[test]
fn padded_zero_optional_constant_is_present() {
    let mut builder = StreamBuilder::new();
    builder.source_constant(7, 4);
    let stream = builder
        .root(
            Fields::new()
                .node(NodeKind::RestParameter, 6, 5)
                .uint(0)
                .byte(0x80)
                .byte(0x00)
                .some_location(7, 4)
                .location(6, 1),
        )
        .build();

    assert_eq!(
        deserialize(&stream, SOURCE),
        Err(DeserializeError::IndexOutOfRange { index: 0, count: 1 })
    );
}
