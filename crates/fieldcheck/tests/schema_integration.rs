//! Integration tests validating complete schemas against decoded payloads.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn registration_schema() -> Schema {
    Schema::new()
        .field(
            string("username")
                .required()
                .min_length(3)
                .max_length(16)
                .pattern("^[a-z0-9_]+$")
                .unwrap(),
        )
        .field(
            string("email")
                .required()
                .pattern("^[^@ ]+@[^@ ]+$")
                .unwrap(),
        )
        .field(integer("age").required().range(13, 120))
        .field(boolean("terms_accepted").required().must_be(true))
        .field(array("tags", string("tag").min_length(1)).max_length(4))
        .field(object(
            "profile",
            Schema::new()
                .field(string("display_name").min_length(1))
                .field(float("reputation").min(0.0)),
        ))
}

fn valid_registration() -> Value {
    json!({
        "username": "alice_42",
        "email": "alice@example.com",
        "age": 28,
        "terms_accepted": true,
        "tags": ["rust", "validation"],
        "profile": {
            "display_name": "Alice",
            "reputation": 42.5
        }
    })
}

// ============================================================================
// A: FIELD CONTRACT THROUGH A SCHEMA
// ============================================================================

#[test]
fn required_field_missing_from_payload() {
    let schema = Schema::new().field(string("name").required());

    let report = schema.validate(&json!({})).unwrap_err();
    assert_eq!(report.len(), 1);

    let wrapper = report.first().unwrap();
    assert_eq!(wrapper.code.as_ref(), "property_invalid");
    assert_eq!(wrapper.field.as_deref(), Some("name"));
    assert_eq!(wrapper.nested[0].code.as_ref(), "required");
}

#[test]
fn optional_fields_tolerate_missing_and_null_members() {
    let schema = Schema::new()
        .field(string("nickname").min_length(3))
        .field(float("score").positive());

    assert!(schema.validate(&json!({})).is_ok());
    assert!(
        schema
            .validate(&json!({"nickname": null, "score": null}))
            .is_ok()
    );
}

#[test]
fn shape_mismatch_is_terminal_for_the_field() {
    let schema = Schema::new().field(float("score").required().positive().min(10.0));

    let report = schema.validate(&json!({"score": "high"})).unwrap_err();
    let wrapper = report.first().unwrap();

    // One kind-mismatch, constraints never ran.
    assert_eq!(wrapper.nested.len(), 1);
    assert_eq!(wrapper.nested[0].code.as_ref(), "kind_mismatch");
}

// ============================================================================
// B: AGGREGATION ACROSS FIELDS
// ============================================================================

#[test]
fn every_failing_field_reports_in_declaration_order() {
    let schema = Schema::new()
        .field(string("name").required())
        .field(integer("age").required().min(0))
        .field(boolean("active").required());

    let report = schema
        .validate(&json!({"age": -3, "unrelated": true}))
        .unwrap_err();

    let fields: Vec<_> = report
        .iter()
        .map(|e| e.field.as_deref().unwrap())
        .collect();
    assert_eq!(fields, ["name", "age", "active"]);

    let nested_codes: Vec<_> = report.iter().map(|e| e.nested[0].code.as_ref()).collect();
    assert_eq!(nested_codes, ["required", "min", "required"]);
}

#[test]
fn one_wrapper_per_failing_field_even_with_many_violations() {
    let schema = Schema::new().field(string("code").min_length(5).choices(["AB-12345"]));

    let report = schema.validate(&json!({"code": "x"})).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.first().unwrap().nested.len(), 2);
}

// ============================================================================
// C: NESTED TREES
// ============================================================================

#[test]
fn array_of_objects_reports_per_element_and_per_property() {
    let contacts = array(
        "contacts",
        object(
            "contact",
            Schema::new()
                .field(string("name").required().min_length(1))
                .field(string("email").required()),
        )
        .required(),
    );

    let report = contacts
        .validate(&json!([
            {"name": "Alice", "email": "alice@example.com"},
            {"name": "", "email": null},
        ]))
        .unwrap_err();

    // Only element 1 fails, wrapped once.
    assert_eq!(report.len(), 1);
    let element = report.first().unwrap();
    assert_eq!(element.code.as_ref(), "item_invalid");
    assert_eq!(element.param("index"), Some("1"));

    // Inside: both member failures, in declaration order.
    let properties: Vec<_> = element
        .nested
        .iter()
        .map(|e| e.field.as_deref().unwrap())
        .collect();
    assert_eq!(properties, ["name", "email"]);
    assert_eq!(element.nested[0].nested[0].code.as_ref(), "min_length");
    assert_eq!(element.nested[1].nested[0].code.as_ref(), "required");
}

#[test]
fn object_with_array_member() {
    let schema = Schema::new().field(
        object(
            "settings",
            Schema::new().field(array("levels", integer("level").required().range(0, 9)).required()),
        )
        .required(),
    );

    assert!(
        schema
            .validate(&json!({"settings": {"levels": [0, 3, 9]}}))
            .is_ok()
    );

    let report = schema
        .validate(&json!({"settings": {"levels": [1, 42]}}))
        .unwrap_err();

    // settings -> levels -> element 1 -> range
    let settings = report.first().unwrap();
    let levels = &settings.nested[0];
    let element = &levels.nested[0];
    assert_eq!(element.code.as_ref(), "item_invalid");
    assert_eq!(element.param("index"), Some("1"));
    assert_eq!(element.nested[0].code.as_ref(), "range");
}

#[test]
fn matrix_of_floats_recurses_without_special_casing() {
    let matrix = array(
        "matrix",
        array("row", float("cell").required()).required().min_length(2),
    )
    .required();

    assert!(matrix.validate(&json!([[1.0, 2.0], [3.0, 4.0]])).is_ok());

    let report = matrix
        .validate(&json!([[1.0, 2.0], [3.0], "not a row"]))
        .unwrap_err();
    assert_eq!(report.len(), 2);

    let codes: Vec<_> = report.iter().map(|e| e.nested[0].code.as_ref()).collect();
    assert_eq!(codes, ["min_length", "kind_mismatch"]);
}

// ============================================================================
// D: LENGTH BOUNDS
// ============================================================================

#[rstest]
#[case(json!([1]), Some("min_length"))]
#[case(json!([1, 2]), None)]
#[case(json!([1, 2, 3]), None)]
#[case(json!([1, 2, 3, 4]), None)]
#[case(json!([1, 2, 3, 4, 5]), Some("max_length"))]
fn array_length_bounds(#[case] value: Value, #[case] expected_code: Option<&str>) {
    let field = array("items", integer("item")).min_length(2).max_length(4);

    match expected_code {
        None => assert!(field.validate(&value).is_ok()),
        Some(code) => {
            let report = field.validate(&value).unwrap_err();
            assert_eq!(report.len(), 1);
            assert_eq!(report.first().unwrap().code.as_ref(), code);
        }
    }
}

#[rstest]
#[case("ab", Some("min_length"))]
#[case("abc", None)]
#[case("abcdefgh", None)]
#[case("abcdefghi", Some("max_length"))]
fn string_length_bounds(#[case] text: &str, #[case] expected_code: Option<&str>) {
    let field = string("name").min_length(3).max_length(8);

    match expected_code {
        None => assert!(field.validate(&json!(text)).is_ok()),
        Some(code) => {
            let report = field.validate(&json!(text)).unwrap_err();
            assert_eq!(report.first().unwrap().code.as_ref(), code);
        }
    }
}

// ============================================================================
// E: REAL-WORLD SCENARIO
// ============================================================================

#[test]
fn registration_payload_valid() {
    let schema = registration_schema();
    assert!(schema.validate(&valid_registration()).is_ok());
}

#[test]
fn registration_payload_minimal() {
    // Optional members omitted entirely.
    let schema = registration_schema();
    let minimal = json!({
        "username": "bob",
        "email": "bob@example.com",
        "age": 44,
        "terms_accepted": true
    });

    assert!(schema.validate(&minimal).is_ok());
}

#[test]
fn registration_payload_collects_every_violation() {
    let schema = registration_schema();
    let broken = json!({
        "username": "A!",
        "age": 10,
        "terms_accepted": false,
        "tags": ["rust", ""],
        "profile": {
            "display_name": "Al",
            "reputation": -5.0
        }
    });

    let report = schema.validate(&broken).unwrap_err();

    let fields: Vec<_> = report
        .iter()
        .map(|e| e.field.as_deref().unwrap())
        .collect();
    assert_eq!(
        fields,
        ["username", "email", "age", "terms_accepted", "tags", "profile"]
    );

    // username: too short AND bad characters — both reported.
    let username_codes: Vec<_> = report.errors()[0]
        .nested
        .iter()
        .map(|e| e.code.as_ref())
        .collect();
    assert_eq!(username_codes, ["min_length", "pattern"]);

    // email: missing key behaves as null on a required field.
    assert_eq!(report.errors()[1].nested[0].code.as_ref(), "required");

    // age: outside the single registered range.
    assert_eq!(report.errors()[2].nested[0].code.as_ref(), "range");

    // terms_accepted: present but not the expected constant.
    assert_eq!(report.errors()[3].nested[0].code.as_ref(), "constant");

    // tags: the empty element is wrapped with its index.
    let tags_error = &report.errors()[4].nested[0];
    assert_eq!(tags_error.code.as_ref(), "item_invalid");
    assert_eq!(tags_error.param("index"), Some("1"));
    assert_eq!(tags_error.nested[0].code.as_ref(), "min_length");

    // profile: nested object's failing member, one more level down.
    let profile_error = &report.errors()[5].nested[0];
    assert_eq!(profile_error.field.as_deref(), Some("reputation"));
    assert_eq!(profile_error.nested[0].code.as_ref(), "min");
}

#[test]
fn report_renders_human_readable_text() {
    let schema = registration_schema();
    let report = schema.validate(&json!({})).unwrap_err();

    let rendered = report.to_string();
    assert!(rendered.starts_with("Validation failed with 4 error(s):"));
    assert!(rendered.contains("[username] property_invalid"));
    assert!(rendered.contains("Nested errors:"));
}

// ============================================================================
// F: REUSE AND CONCURRENCY
// ============================================================================

#[test]
fn repeated_validation_yields_equal_reports() {
    let schema = registration_schema();
    let broken = json!({"username": "A!", "age": 10});

    let first = schema.validate(&broken);
    let second = schema.validate(&broken);
    assert_eq!(first, second);

    // A failing pass leaves no state behind that could affect a passing one.
    assert!(schema.validate(&valid_registration()).is_ok());
}

#[test]
fn configured_schema_is_shareable_across_threads() {
    let schema = registration_schema();

    std::thread::scope(|scope| {
        let ok = scope.spawn(|| schema.validate(&valid_registration()).is_ok());
        let err = scope.spawn(|| schema.validate(&json!({})).is_err());

        assert!(ok.join().unwrap());
        assert!(err.join().unwrap());
    });
}
