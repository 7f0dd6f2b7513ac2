//! End-to-end driver tests over raw JSON node sequences

use minilang::convert::convert_node;
use minilang::interpreter::{interpret, run_nodes, ErrorCategory};
use minilang::{Type, Value};
use serde_json::json;

fn number(n: f64) -> serde_json::Value {
    json!({"kind": "number-literal", "value": n})
}

fn string(s: &str) -> serde_json::Value {
    json!({"kind": "string-literal", "value": s})
}

fn identifier(name: &str) -> serde_json::Value {
    json!({"kind": "identifier", "name": name})
}

fn print(value: serde_json::Value) -> serde_json::Value {
    json!({"kind": "print", "value": value})
}

fn declare(id: &str, ty: &str, value: serde_json::Value) -> serde_json::Value {
    json!({"kind": "declaration", "id": id, "type": ty, "value": value})
}

fn assign(id: &str, value: serde_json::Value) -> serde_json::Value {
    json!({"kind": "assignment", "id": id, "value": value})
}

fn binary(kind: &str, left: serde_json::Value, right: serde_json::Value) -> serde_json::Value {
    json!({"kind": kind, "left": left, "right": right})
}

#[test]
fn test_empty_program_yields_empty_result() {
    let result = interpret(&json!([]));
    assert_eq!(result.console_output, "");
    assert!(result.errors.is_empty());
    assert!(result.symbols.is_empty());
}

#[test]
fn test_absent_program_is_treated_as_empty() {
    assert_eq!(interpret(&json!(null)), interpret(&json!([])));
    assert_eq!(interpret(&json!({"not": "an array"})), interpret(&json!([])));
}

#[test]
fn test_print_number_literal() {
    let result = interpret(&json!([print(number(5.0))]));
    assert_eq!(result.console_output, "5\n");
    assert!(result.errors.is_empty());
}

#[test]
fn test_print_absent_value_writes_null() {
    // The identifier is undeclared, so its value is absent; the print
    // normalizes that to the literal text "null".
    let result = interpret(&json!([print(identifier("missing"))]));
    assert_eq!(result.console_output, "null\n");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, ErrorCategory::Semantic);
}

#[test]
fn test_declare_then_print() {
    let program = json!([
        declare("x", "number", binary("add", number(2.0), number(3.0))),
        print(identifier("x")),
    ]);
    let result = interpret(&program);
    assert_eq!(result.console_output, "5\n");
    assert!(result.errors.is_empty());
    assert_eq!(result.symbols.len(), 1);
    assert_eq!(result.symbols[0].id, "x");
    assert_eq!(result.symbols[0].ty, Type::Number);
    assert_eq!(result.symbols[0].value, Value::Number(5.0));
}

#[test]
fn test_unrecognized_node_is_tolerated() {
    let program = json!([
        {"kind": "loop", "body": []},
        print(number(1.0)),
    ]);
    let result = interpret(&program);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, ErrorCategory::Syntactic);
    assert_eq!(result.errors[0].description, "Invalid node");
    // The bad node leaves no trace beyond the error; the next node runs.
    assert_eq!(result.console_output, "1\n");
    assert!(result.symbols.is_empty());
}

#[test]
fn test_null_and_non_object_nodes_are_tolerated() {
    let program = json!([null, 42, "print", print(number(9.0))]);
    let result = interpret(&program);
    assert_eq!(result.errors.len(), 3);
    assert!(result
        .errors
        .iter()
        .all(|e| e.category == ErrorCategory::Syntactic && e.description == "Invalid node"));
    assert_eq!(result.console_output, "9\n");
}

#[test]
fn test_processing_order_is_preserved() {
    let result = interpret(&json!([print(number(1.0)), print(number(2.0))]));
    assert_eq!(result.console_output, "1\n2\n");
}

#[test]
fn test_assignment_updates_printed_value() {
    let program = json!([
        declare("x", "number", number(1.0)),
        assign("x", binary("multiply", identifier("x"), number(10.0))),
        print(identifier("x")),
    ]);
    let result = interpret(&program);
    assert_eq!(result.console_output, "10\n");
    assert_eq!(result.symbols[0].value, Value::Number(10.0));
}

#[test]
fn test_string_declaration_and_concatenation() {
    let program = json!([
        declare("name", "string", string("world")),
        print(binary("add", string("hello "), identifier("name"))),
    ]);
    let result = interpret(&program);
    assert_eq!(result.console_output, "hello world\n");
    assert!(result.errors.is_empty());
}

#[test]
fn test_division_prints_fractional_result() {
    let result = interpret(&json!([print(binary("divide", number(5.0), number(2.0)))]));
    assert_eq!(result.console_output, "2.5\n");
}

#[test]
fn test_symbol_snapshot_keeps_declaration_order() {
    let program = json!([
        declare("b", "number", number(2.0)),
        declare("a", "string", string("first")),
        declare("c", "number", number(3.0)),
    ]);
    let result = interpret(&program);
    let ids: Vec<&str> = result.symbols.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_top_level_expression_runs_for_effect_only() {
    // A bare expression node is valid; it produces no output and no
    // symbols, but its sub-evaluation errors still surface.
    let result = interpret(&json!([binary("add", number(1.0), number(2.0))]));
    assert_eq!(result.console_output, "");
    assert!(result.errors.is_empty());

    let result = interpret(&json!([identifier("ghost")]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, ErrorCategory::Semantic);
}

#[test]
fn test_interpret_is_deterministic() {
    let program = json!([
        declare("x", "number", binary("subtract", number(9.0), number(4.0))),
        print(identifier("x")),
        {"kind": "garbage"},
    ]);
    let first = interpret(&program);
    let second = interpret(&program);
    assert_eq!(first, second);
}

#[test]
fn test_converted_nodes_are_independent() {
    let raw = print(binary("add", number(2.0), number(3.0)));
    let first = convert_node(&raw).unwrap();
    let second = convert_node(&raw).unwrap();
    assert_eq!(first, second);

    // Executing each against its own environment gives identical runs.
    let runs: Vec<_> = (0..2).map(|_| run_nodes(std::slice::from_ref(&raw))).collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0].console_output, "5\n");
}
