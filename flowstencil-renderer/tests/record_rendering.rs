//! Context-build + render paths exercised together, from records.

use rstest::rstest;

use flowstencil_core::Record;
use flowstencil_renderer::{TemplateContext, TemplateEngine};

fn render(template: &str, record: &Record, parse_json: bool) -> String {
    let ctx = TemplateContext::build(record, parse_json).expect("context");
    let engine = TemplateEngine::new(template).expect("engine");
    engine.render(&ctx).expect("render")
}

#[rstest]
#[case("hello", "hello")]
#[case("hello_{{ attributes.attr }}", "hello_test")]
#[case("{{ attributes.attr }}/{{ attributes.missing }}", "test/")]
fn attribute_rendering(#[case] template: &str, #[case] expected: &str) {
    let record = Record::new().with_attribute("attr", "test");
    assert_eq!(render(template, &record, false), expected);
}

#[test]
fn parsed_content_is_reachable_by_path() {
    let record = Record::new()
        .with_payload(br#"{"array":[{"text":"a1"},{"text":"a2"}],"object":{"text":"o"}}"#.to_vec());
    let rendered = render(
        "hello_{{ content.array[0].text }}_{{ content.array[1].text }}_{{ content.object.text }}",
        &record,
        true,
    );
    assert_eq!(rendered, "hello_a1_a2_o");
}

#[test]
fn content_paths_render_empty_when_parsing_disabled() {
    // Same payload, parsing off: the payload must never be consulted.
    let record = Record::new().with_payload(br#"{"object":{"text":"o"}}"#.to_vec());
    let rendered = render("hello_{{ content.object.text }}", &record, false);
    assert_eq!(rendered, "hello_");
}

#[test]
fn content_paths_render_empty_on_empty_payload() {
    let record = Record::new();
    let rendered = render("hello_{{ content.attr }}", &record, true);
    assert_eq!(rendered, "hello_");
}

#[test]
fn scalar_content_renders_directly() {
    let record = Record::new().with_payload(b"42".to_vec());
    assert_eq!(render("n={{ content }}", &record, true), "n=42");
}

#[test]
fn malformed_payload_surfaces_record_id() {
    let record = Record::new().with_payload(b"[1, 2".to_vec());
    let err = TemplateContext::build(&record, true).expect_err("parse error");
    assert!(err.to_string().contains(&record.id().to_string()));
}
