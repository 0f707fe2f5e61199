//! Integration tests for compiling selector documents.
//!
//! Cases follow the CouchDB selector documentation:
//! http://docs.couchdb.org/en/2.0.0/api/database/find.html#selector-syntax

use mango::{BuildError, Operator, Selector};
use serde_json::{json, Value};

fn check(input: &str, expected: Selector) {
    let result = Selector::new(input).unwrap_or_else(|e| panic!("build({input}) failed: {e}"));
    assert_eq!(result.sorted(), expected.sorted(), "input: {input}");
}

fn check_err(input: &str) -> BuildError {
    Selector::new(input)
        .err()
        .unwrap_or_else(|| panic!("expected error for {input}"))
}

fn cond(operator: Operator, field: &str, value: Value) -> Selector {
    Selector::Condition {
        operator,
        field: field.to_string(),
        value,
    }
}

fn combination(operator: Operator, children: Vec<Selector>) -> Selector {
    Selector::Combination { operator, children }
}

// ----------------------------------------------------------------- Errors

#[test]
fn test_invalid_json() {
    let err = check_err("xxx");
    assert!(matches!(err, BuildError::Decode(_)), "got: {err}");
}

#[test]
fn test_non_object_root() {
    for input in ["[]", "\"director\"", "42", "null"] {
        assert!(matches!(check_err(input), BuildError::Decode(_)), "{input}");
    }
}

#[test]
fn test_unknown_top_level_operator() {
    let err = check_err(r#"{"$foo": null}"#);
    assert!(matches!(&err, BuildError::UnknownOperator(op) if op == "$foo"));
    assert_eq!(err.to_string(), "unknown mango operator '$foo'");
}

#[test]
fn test_unknown_nested_operator() {
    let err = check_err(r#"{"foo": {"$invalid": "bar"}}"#);
    assert_eq!(err.to_string(), "unknown mango operator '$invalid'");
}

#[test]
fn test_invalid_key_beside_valid_nested_object() {
    for _ in 0..20 {
        let err = check_err(r#"{"foo": {"foo": "bar"}, "$invalid": "bar"}"#);
        assert_eq!(err.to_string(), "unknown mango operator '$invalid'");
    }
}

#[test]
fn test_unimplemented_operators_rejected() {
    for op in ["$not", "$nor", "$in", "$nin", "$all", "$elemMatch", "$exists", "$type", "$size", "$mod", "$regex"] {
        let input = json!({"field": {op: 1}}).to_string();
        assert!(
            matches!(check_err(&input), BuildError::UnknownOperator(ref name) if name == op),
            "{input}"
        );
    }
}

#[test]
fn test_subfield() {
    let err = check_err(r#"{"director": {"city": "New York"}}"#);
    assert!(matches!(err, BuildError::SubfieldsNotImplemented));
    assert_eq!(err.to_string(), "subfields not implemented");
}

#[test]
fn test_implicit_and_with_subfield() {
    let err = check_err(r#"{"name": "Paul", "location": {"city": "Boston"}}"#);
    assert!(matches!(err, BuildError::SubfieldsNotImplemented));
}

#[test]
fn test_multi_operator_condition() {
    let err = check_err(r#"{"year": {"$gt": 2000, "$lt": 2010}}"#);
    assert!(matches!(err, BuildError::UnsupportedCondition));
}

#[test]
fn test_combination_needs_array() {
    let err = check_err(r#"{"$or": {"city": "New York"}}"#);
    assert!(matches!(err, BuildError::UnsupportedCombinationArgument));
}

// ----------------------------------------------------------------- Trees

#[test]
fn test_empty_selector() {
    check("{}", Selector::None);
}

#[test]
fn test_basic() {
    check(
        r#"{"director": "Lars von Trier"}"#,
        cond(Operator::Eq, "director", json!("Lars von Trier")),
    );
}

#[test]
fn test_explicit_conditions() {
    for op in Operator::CONDITION {
        let input = json!({"director": {op.name(): "Lars von Trier"}}).to_string();
        check(&input, cond(op, "director", json!("Lars von Trier")));
    }
}

#[test]
fn test_explicit_lt() {
    check(r#"{"director": {"$lt": "M"}}"#, cond(Operator::Lt, "director", json!("M")));
}

#[test]
fn test_null_literal() {
    check(r#"{"_id": {"$gt": null}}"#, cond(Operator::Gt, "_id", Value::Null));
}

#[test]
fn test_array_literal_is_implicit_equality() {
    check(r#"{"tags": ["a", "b"]}"#, cond(Operator::Eq, "tags", json!(["a", "b"])));
}

#[test]
fn test_implicit_and() {
    check(
        r#"{"name": "Paul", "location": "Boston"}"#,
        combination(
            Operator::And,
            vec![
                cond(Operator::Eq, "location", json!("Boston")),
                cond(Operator::Eq, "name", json!("Paul")),
            ],
        ),
    );
}

#[test]
fn test_explicit_and() {
    check(
        r#"{"$and": [{"name": "Paul"}, {"location": "Boston"}]}"#,
        combination(
            Operator::And,
            vec![
                cond(Operator::Eq, "location", json!("Boston")),
                cond(Operator::Eq, "name", json!("Paul")),
            ],
        ),
    );
}

#[test]
fn test_or() {
    check(
        r#"{"$or": [{"year": {"$lt": 1990}}, {"year2": 2000}]}"#,
        combination(
            Operator::Or,
            vec![
                cond(Operator::Lt, "year", json!(1990)),
                cond(Operator::Eq, "year2", json!(2000)),
            ],
        ),
    );
}

#[test]
fn test_nested_combinations() {
    check(
        r#"{"name": "Paul", "$or": [{"city": "New York"}, {"country": "France"}]}"#,
        combination(
            Operator::And,
            vec![
                combination(
                    Operator::Or,
                    vec![
                        cond(Operator::Eq, "city", json!("New York")),
                        cond(Operator::Eq, "country", json!("France")),
                    ],
                ),
                cond(Operator::Eq, "name", json!("Paul")),
            ],
        ),
    );
}

#[test]
fn test_from_slice_and_parse_agree() {
    let input = r#"{"name": "Paul", "age": {"$gte": 18}}"#;
    let a = Selector::from_slice(input.as_bytes()).unwrap();
    let b: Selector = input.parse().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_from_map() {
    let doc = json!({"rating": {"$ne": 0}});
    let s = Selector::from_map(doc.as_object().unwrap()).unwrap();
    assert_eq!(s, cond(Operator::Ne, "rating", json!(0)));
}
