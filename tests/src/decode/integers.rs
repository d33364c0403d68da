use num_bigint::{BigInt, BigUint, Sign};
use prism::ast::nodes::{Node, NodeKind};
use prism::{DeserializeError, deserialize};
use proptest::prelude::*;
use rstest::rstest;

use crate::utils::{Fields, StreamBuilder};

fn decode_integer(flags: u32, value: &BigInt) -> Result<Node, DeserializeError> {
    let root = Fields::new()
        .node(NodeKind::Integer, 0, 1)
        .uint(flags)
        .integer(value);
    let stream = StreamBuilder::new().root(root).build();
    deserialize(&stream, b"0").map(prism::ParseResult::into_root)
}

fn integer_value(node: &Node) -> &BigInt {
    match node {
        Node::Integer(integer) => integer.value.value(),
        other => panic!("expected an integer, got {:?}", other.kind()),
    }
}

#[rstest]
#[case("0")]
#[case("1")]
#[case("-1")]
#[case("4294967295")]
#[case("4294967296")]
#[case("-18446744073709551616")]
#[case("340282366920938463463374607431768211457")]
fn words_rebuild_the_value(#[case] literal: &str) {
    let value: BigInt = literal.parse().unwrap();
    let node = decode_integer(2, &value).unwrap();
    assert_eq!(integer_value(&node), &value);
    assert_eq!(integer_value(&node).to_string(), literal);
}

#[rstest]
#[case(1, 2)]
#[case(2, 10)]
#[case(4, 8)]
#[case(8, 16)]
fn base_flags_give_the_radix(#[case] flags: u32, #[case] radix: u32) {
    let node = decode_integer(flags, &BigInt::from(7)).unwrap();
    let Node::Integer(integer) = &node else {
        panic!("expected an integer");
    };
    assert_eq!(integer.radix(), radix);
}

#[test]
fn zero_words_is_out_of_data() {
    let root = Fields::new()
        .node(NodeKind::Integer, 0, 1)
        .uint(2)
        .byte(0)
        .uint(0);
    let stream = StreamBuilder::new().root(root).build();
    assert!(matches!(
        deserialize(&stream, b"0"),
        Err(DeserializeError::OutOfData { .. })
    ));
}

proptest! {
    #[test]
    fn any_word_sequence_rebuilds(
        negative in any::<bool>(),
        words in proptest::collection::vec(any::<u32>(), 1..8),
    ) {
        let magnitude = BigUint::from_slice(&words);
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let expected = BigInt::from_biguint(sign, magnitude);

        let mut root = Fields::new()
            .node(NodeKind::Integer, 0, 1)
            .uint(2)
            .byte(u8::from(negative))
            .uint(u32::try_from(words.len()).unwrap());
        for word in &words {
            root = root.uint(*word);
        }
        let stream = StreamBuilder::new().root(root).build();
        let node = deserialize(&stream, b"0").unwrap().into_root();
        prop_assert_eq!(integer_value(&node), &expected);
    }

    #[test]
    fn i64_values_survive(value in any::<i64>()) {
        let node = decode_integer(2, &BigInt::from(value)).unwrap();
        let Node::Integer(integer) = &node else {
            panic!("expected an integer");
        };
        prop_assert_eq!(integer.value.to_i64(), Some(value));
    }
}
