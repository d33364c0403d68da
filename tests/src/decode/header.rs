use prism::{DeserializeError, deserialize};
use rstest::rstest;

use crate::utils::{HELLO_WORLD, StreamBuilder, hello_world_stream};

#[test]
fn accepts_current_version() {
    let result = deserialize(&hello_world_stream(), HELLO_WORLD).unwrap();
    assert_eq!(result.encoding(), "UTF-8");
}

#[rstest]
#[case(1, 24, 0, "1.24.0")]
#[case(0, 23, 0, "0.23.0")]
#[case(0, 25, 0, "0.25.0")]
#[case(0, 24, 1, "0.24.1")]
fn rejects_other_versions(
    #[case] major: u8,
    #[case] minor: u8,
    #[case] patch: u8,
    #[case] found: &str,
) {
    let stream = StreamBuilder::new().version(major, minor, patch).build();
    assert_eq!(
        deserialize(&stream, b""),
        Err(DeserializeError::VersionMismatch {
            expected: "0.24.0".to_string(),
            found: found.to_string(),
        })
    );
}

#[test]
fn rejects_line_column_locations() {
    let stream = StreamBuilder::new().location_mode(1).build();
    assert_eq!(
        deserialize(&stream, b""),
        Err(DeserializeError::UnsupportedConfiguration(1))
    );
}

#[rstest]
#[case(b"RUBY!\x00\x18\x00\x00")]
#[case(b"{\"type\":\"ProgramNode\"}")]
fn rejects_foreign_streams(#[case] stream: &[u8]) {
    assert_eq!(deserialize(stream, b""), Err(DeserializeError::FormatMismatch));
}

#[test]
fn version_is_checked_before_anything_else() {
    let mut stream = hello_world_stream();
    stream.truncate(9);
    stream[6] = 99;
    assert!(matches!(
        deserialize(&stream, HELLO_WORLD),
        Err(DeserializeError::VersionMismatch { .. })
    ));
}
