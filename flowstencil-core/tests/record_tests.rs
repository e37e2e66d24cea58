use rstest::rstest;

use flowstencil_core::{Edge, Record};

#[rstest]
#[case(Edge::Success, "success")]
#[case(Edge::Failure, "failure")]
#[case(Edge::JsonFailure, "json_failure")]
fn edge_wire_names(#[case] edge: Edge, #[case] expected: &str) {
    assert_eq!(edge.name(), expected);
}

#[test]
fn edge_all_lists_each_edge_once() {
    let edges = Edge::all();
    assert_eq!(edges.len(), 3);
    for edge in [Edge::Success, Edge::Failure, Edge::JsonFailure] {
        assert_eq!(edges.iter().filter(|e| **e == edge).count(), 1);
    }
}

#[rstest]
#[case("attr", "test")]
#[case("", "empty key is still a key")]
#[case("path/with/slashes", "v")]
#[case("unicode-日本語", "emoji-🚀")]
fn attributes_round_trip(#[case] key: &str, #[case] value: &str) {
    let record = Record::new().with_attribute(key, value);
    assert_eq!(record.attribute(key), Some(value));
}

#[test]
fn copies_do_not_share_attribute_growth() {
    let original = Record::new().with_attribute("a", "1");
    let grown = original.clone().with_attribute("b", "2");
    assert_eq!(original.attributes().len(), 1);
    assert_eq!(grown.attributes().len(), 2);
}
