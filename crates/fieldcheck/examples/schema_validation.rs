//! Validating decoded JSON payloads with fieldcheck.
//!
//! Run: `cargo run -p fieldcheck --example schema_validation`

use fieldcheck::prelude::*;
use serde_json::json;

fn main() -> Result<(), PatternError> {
    single_field_validation();
    schema_validation()?;
    nested_composites();
    error_reporting();
    Ok(())
}

/// Validate standalone fields against raw values.
fn single_field_validation() {
    println!("=== Single Field Validation ===\n");

    let price = float("price").required().positive();
    println!("price on 9.99:  {}", status(&price.validate(&json!(9.99))));
    println!("price on -1.0:  {}", status(&price.validate(&json!(-1.0))));
    println!("price on null:  {}", status(&price.validate(&json!(null))));

    // Disjunctive ranges: the value must land in at least one.
    let offset = float("offset").required().range(-10.0, 10.0).range(20.0, 30.0);
    println!("offset on 2.0:  {}", status(&offset.validate(&json!(2.0))));
    println!("offset on 25.0: {}", status(&offset.validate(&json!(25.0))));
    println!("offset on 15.0: {}", status(&offset.validate(&json!(15.0))));

    // Shape mismatch is terminal: one error, constraints skipped.
    println!("price on \"hi\":  {}", status(&price.validate(&json!("hi"))));

    println!();
}

/// Validate a whole payload against a declared schema.
fn schema_validation() -> Result<(), PatternError> {
    println!("=== Schema Validation ===\n");

    let schema = Schema::new()
        .field(
            string("username")
                .required()
                .min_length(3)
                .max_length(16)
                .pattern("^[a-z0-9_]+$")?,
        )
        .field(integer("age").required().range(13, 120))
        .field(boolean("terms_accepted").required().must_be(true))
        .field(array("tags", string("tag").min_length(1)).max_length(4));

    let valid = json!({
        "username": "alice_42",
        "age": 28,
        "terms_accepted": true,
        "tags": ["rust", "validation"]
    });
    println!("valid payload:   {}", status(&schema.validate(&valid)));

    // Optional members may be missing entirely.
    let minimal = json!({
        "username": "bob",
        "age": 44,
        "terms_accepted": true
    });
    println!("minimal payload: {}", status(&schema.validate(&minimal)));

    let broken = json!({
        "username": "A!",
        "age": 10,
        "terms_accepted": false
    });
    println!("broken payload:  {}", status(&schema.validate(&broken)));

    println!();
    Ok(())
}

/// Composites recurse: arrays of objects of arrays need no special casing.
fn nested_composites() {
    println!("=== Nested Composites ===\n");

    let schema = Schema::new().field(
        array(
            "servers",
            object(
                "server",
                Schema::new()
                    .field(string("host").required().min_length(1))
                    .field(integer("port").required().range(1, 65535)),
            )
            .required(),
        )
        .required()
        .min_length(1),
    );

    let good = json!({
        "servers": [
            {"host": "web1", "port": 80},
            {"host": "web2", "port": 443}
        ]
    });
    println!("two servers:   {}", status(&schema.validate(&good)));

    let bad = json!({
        "servers": [
            {"host": "web1", "port": 80},
            {"host": "", "port": 0}
        ]
    });
    println!("broken server: {}", status(&schema.validate(&bad)));

    println!();
}

/// Walk an aggregated report: every violation from one pass, in order.
fn error_reporting() {
    println!("=== Error Reporting ===\n");

    let schema = Schema::new()
        .field(string("name").required().min_length(1))
        .field(float("score").required().min(0.0).max(100.0))
        .field(array("samples", float("sample").required().positive()).min_length(2));

    let payload = json!({
        "score": 250.0,
        "samples": [1.0, -2.0, 3.0, -4.0]
    });

    let Err(report) = schema.validate(&payload) else {
        println!("payload unexpectedly valid");
        return;
    };

    println!("{report}");

    println!("Structured walk:");
    for error in &report {
        println!(
            "  field={} code={}",
            error.field.as_deref().unwrap_or("-"),
            error.code
        );
        for nested in &error.nested {
            print!("    -> {}", nested.code);
            for (key, value) in &nested.params {
                print!(" {key}={value}");
            }
            println!();
        }
    }
}

fn status(result: &Result<(), ValidationErrors>) -> &'static str {
    match result {
        Ok(()) => "PASS",
        Err(_) => "FAIL",
    }
}
