// tests/compiler_tests.rs

use cassia::ast::{FunctionNode, Node, RangeOperator};
use cassia::compiler::{CompileError, SearchOptions, compile};
use cassia::schema::{Field, Schema};
use serde_json::json;

fn logs_schema() -> Schema {
    Schema::new(vec![
        Field::new("@timestamp", "date"),
        Field::new("bytes", "number"),
        Field::new("machine.os", "keyword"),
        Field::new("machine.os.raw", "keyword"),
        Field::new("comments.author", "keyword").nested("comments"),
        Field::new("comments.stars", "number").nested("comments"),
        Field::new("bytes_pct", "number").scripted("doc['bytes'].value / 100", "painless"),
    ])
}

fn range(field: &str, operator: RangeOperator, value: i64) -> Node {
    Node::from(FunctionNode::range(field, operator, value).unwrap())
}

fn is(field: &str, value: &str) -> Node {
    Node::from(FunctionNode::is(field, value).unwrap())
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literal_nodes_compile_to_their_value() {
    let node = Node::literal(42);
    assert_eq!(compile(&node, None, &SearchOptions::default()).unwrap(), json!(42));

    let node = Node::literal("linux");
    assert_eq!(compile(&node, None, &SearchOptions::default()).unwrap(), json!("linux"));
}

// ============================================================================
// Range
// ============================================================================

#[test]
fn test_range_without_schema() {
    let query = compile(&range("age", RangeOperator::Gte, 21), None, &SearchOptions::default())
        .unwrap();

    assert_eq!(
        query,
        json!({
            "bool": {
                "should": [
                    { "range": { "age": { "gte": 21 } } }
                ],
                "minimum_should_match": 1,
            }
        })
    );
}

#[test]
fn test_range_operator_keys() {
    for (op, key) in [
        (RangeOperator::Gt, "gt"),
        (RangeOperator::Gte, "gte"),
        (RangeOperator::Lt, "lt"),
        (RangeOperator::Lte, "lte"),
    ] {
        let query = compile(&range("bytes", op, 100), None, &SearchOptions::default()).unwrap();
        assert_eq!(
            query["bool"]["should"][0]["range"]["bytes"],
            json!({ key: 100 })
        );
    }
}

#[test]
fn test_range_fan_out_matches_resolved_field_count() {
    let schema = logs_schema();
    let query = compile(
        &range("machine.os*", RangeOperator::Gt, 0),
        Some(&schema),
        &SearchOptions::default(),
    )
    .unwrap();

    let clauses = query["bool"]["should"].as_array().unwrap();
    assert_eq!(clauses.len(), 2);
    assert_eq!(query["bool"]["minimum_should_match"], json!(1));
    assert_eq!(clauses[0], json!({ "range": { "machine.os": { "gt": 0 } } }));
    assert_eq!(clauses[1], json!({ "range": { "machine.os.raw": { "gt": 0 } } }));
}

#[test]
fn test_range_miss_compiles_against_literal_name() {
    let schema = logs_schema();
    let query = compile(
        &range("not.in.schema", RangeOperator::Lt, 5),
        Some(&schema),
        &SearchOptions::default(),
    )
    .unwrap();

    let clauses = query["bool"]["should"].as_array().unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0], json!({ "range": { "not.in.schema": { "lt": 5 } } }));
}

#[test]
fn test_range_date_field_gets_time_zone() {
    let schema = logs_schema();
    let options = SearchOptions {
        date_format_tz: Some("UTC".to_string()),
        ..Default::default()
    };
    let query = compile(&range("@timestamp", RangeOperator::Gte, 0), Some(&schema), &options)
        .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "range": { "@timestamp": { "gte": 0, "time_zone": "UTC" } } })
    );
}

#[test]
fn test_range_date_field_without_time_zone_setting() {
    let schema = logs_schema();
    let query = compile(
        &range("@timestamp", RangeOperator::Gte, 0),
        Some(&schema),
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "range": { "@timestamp": { "gte": 0 } } })
    );
}

#[test]
fn test_range_non_date_field_ignores_time_zone() {
    let schema = logs_schema();
    let options = SearchOptions {
        date_format_tz: Some("UTC".to_string()),
        ..Default::default()
    };
    let query = compile(&range("bytes", RangeOperator::Gt, 100), Some(&schema), &options).unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "range": { "bytes": { "gt": 100 } } })
    );
}

#[test]
fn test_range_scripted_field() {
    let schema = logs_schema();
    let query = compile(
        &range("bytes_pct", RangeOperator::Gte, 50),
        Some(&schema),
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({
            "script": {
                "script": {
                    "source": "(doc['bytes'].value / 100) >= params.gte",
                    "params": { "gte": 50 },
                    "lang": "painless",
                }
            }
        })
    );
}

// ============================================================================
// Nested auto-wrap
// ============================================================================

#[test]
fn test_wildcard_field_under_nested_path_is_auto_wrapped() {
    let schema = logs_schema();
    let query = compile(
        &range("comments.st*", RangeOperator::Gt, 3),
        Some(&schema),
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({
            "nested": {
                "path": "comments",
                "query": { "range": { "comments.stars": { "gt": 3 } } },
                "score_mode": "none",
            }
        })
    );
}

#[test]
fn test_explicit_field_under_nested_path_is_not_wrapped() {
    let schema = logs_schema();
    let query = compile(
        &range("comments.stars", RangeOperator::Gt, 3),
        Some(&schema),
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "range": { "comments.stars": { "gt": 3 } } })
    );
}

#[test]
fn test_auto_wrap_forwards_ignore_unmapped() {
    let schema = logs_schema();
    let options = SearchOptions {
        nested_ignore_unmapped: Some(true),
        ..Default::default()
    };
    let query = compile(&range("comments.st*", RangeOperator::Gt, 3), Some(&schema), &options)
        .unwrap();

    assert_eq!(query["bool"]["should"][0]["nested"]["ignore_unmapped"], json!(true));
}

#[test]
fn test_no_auto_wrap_inside_active_nested_scope() {
    // An active scope's path is authoritative; clauses are never
    // double-wrapped.
    let schema = logs_schema();
    let inner = range("st*", RangeOperator::Gt, 3);
    let node = Node::from(FunctionNode::nested("comments", inner).unwrap());
    let query = compile(&node, Some(&schema), &SearchOptions::default()).unwrap();

    assert_eq!(
        query,
        json!({
            "nested": {
                "path": "comments",
                "query": {
                    "bool": {
                        "should": [
                            { "range": { "comments.stars": { "gt": 3 } } }
                        ],
                        "minimum_should_match": 1,
                    }
                },
                "score_mode": "none",
            }
        })
    );
}

// ============================================================================
// Is
// ============================================================================

#[test]
fn test_is_match_clause() {
    let schema = logs_schema();
    let query = compile(&is("machine.os", "linux"), Some(&schema), &SearchOptions::default())
        .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "match": { "machine.os": "linux" } })
    );
}

#[test]
fn test_is_star_value_is_presence_check() {
    let schema = logs_schema();
    let query = compile(&is("machine.os", "*"), Some(&schema), &SearchOptions::default()).unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "exists": { "field": "machine.os" } })
    );
}

#[test]
fn test_is_star_star_is_match_all() {
    let query = compile(&is("*", "*"), None, &SearchOptions::default()).unwrap();
    assert_eq!(query, json!({ "match_all": {} }));
}

#[test]
fn test_is_wildcard_value() {
    let schema = logs_schema();
    let query = compile(&is("machine.os", "win*"), Some(&schema), &SearchOptions::default())
        .unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "wildcard": { "machine.os": { "value": "win*" } } })
    );
}

#[test]
fn test_is_date_field_match_body() {
    let schema = logs_schema();
    let options = SearchOptions {
        date_format_tz: Some("America/New_York".to_string()),
        ..Default::default()
    };
    let query = compile(&is("@timestamp", "\"2026-01-01\""), Some(&schema), &options).unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({
            "match": {
                "@timestamp": {
                    "query": "2026-01-01",
                    "time_zone": "America/New_York",
                }
            }
        })
    );
}

#[test]
fn test_is_scripted_field() {
    let schema = logs_schema();
    let query = compile(&is("bytes_pct", "50"), Some(&schema), &SearchOptions::default()).unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({
            "script": {
                "script": {
                    "source": "(doc['bytes'].value / 100) == params.value",
                    "params": { "value": 50 },
                    "lang": "painless",
                }
            }
        })
    );
}

// ============================================================================
// Boolean combinators
// ============================================================================

#[test]
fn test_and_compiles_children_into_must() {
    let node = Node::from(FunctionNode::and(vec![
        range("bytes", RangeOperator::Gt, 100),
        is("machine.os", "linux"),
    ]));
    let query = compile(&node, None, &SearchOptions::default()).unwrap();

    let must = query["bool"]["must"].as_array().unwrap();
    assert_eq!(must.len(), 2);
    assert_eq!(must[0]["bool"]["should"][0]["range"]["bytes"], json!({ "gt": 100 }));
}

#[test]
fn test_or_compiles_children_into_should() {
    let node = Node::from(FunctionNode::or(vec![
        is("machine.os", "linux"),
        is("machine.os", "osx"),
    ]));
    let query = compile(&node, None, &SearchOptions::default()).unwrap();

    let should = query["bool"]["should"].as_array().unwrap();
    assert_eq!(should.len(), 2);
    assert_eq!(query["bool"]["minimum_should_match"], json!(1));
}

#[test]
fn test_not_wraps_child_in_must_not() {
    let node = Node::from(FunctionNode::not(is("machine.os", "linux")));
    let query = compile(&node, None, &SearchOptions::default()).unwrap();

    assert!(query["bool"]["must_not"]["bool"]["should"].is_array());
}

#[test]
fn test_sibling_branches_are_independent() {
    // The nested scope of one branch must not leak into its sibling.
    let schema = logs_schema();
    let nested = Node::from(
        FunctionNode::nested("comments", is("author", "kim")).unwrap(),
    );
    let sibling = range("bytes", RangeOperator::Gt, 0);
    let node = Node::from(FunctionNode::and(vec![nested, sibling]));
    let query = compile(&node, Some(&schema), &SearchOptions::default()).unwrap();

    let must = query["bool"]["must"].as_array().unwrap();
    assert_eq!(
        must[1]["bool"]["should"][0],
        json!({ "range": { "bytes": { "gt": 0 } } })
    );
}

// ============================================================================
// Exists
// ============================================================================

#[test]
fn test_exists_clause_per_field() {
    let schema = logs_schema();
    let node = Node::from(FunctionNode::exists("machine.os*").unwrap());
    let query = compile(&node, Some(&schema), &SearchOptions::default()).unwrap();

    let clauses = query["bool"]["should"].as_array().unwrap();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0], json!({ "exists": { "field": "machine.os" } }));
}

#[test]
fn test_exists_on_scripted_field_is_an_error() {
    let schema = logs_schema();
    let node = Node::from(FunctionNode::exists("bytes_pct").unwrap());
    let err = compile(&node, Some(&schema), &SearchOptions::default()).unwrap_err();

    assert!(matches!(err, CompileError::ScriptedField { function: "exists", .. }));
}

// ============================================================================
// Wildcard function
// ============================================================================

#[test]
fn test_wildcard_clause() {
    let schema = logs_schema();
    let node = Node::from(FunctionNode::wildcard("machine.os", "win*").unwrap());
    let query = compile(&node, Some(&schema), &SearchOptions::default()).unwrap();

    assert_eq!(
        query["bool"]["should"][0],
        json!({ "wildcard": { "machine.os": { "value": "win*" } } })
    );
}

#[test]
fn test_wildcard_fans_out_over_field_pattern() {
    let schema = logs_schema();
    let node = Node::from(FunctionNode::wildcard("machine.os*", "win*").unwrap());
    let query = compile(&node, Some(&schema), &SearchOptions::default()).unwrap();

    assert_eq!(query["bool"]["should"].as_array().unwrap().len(), 2);
}

// ============================================================================
// Nested function
// ============================================================================

#[test]
fn test_nested_scope_qualifies_child_fields() {
    let schema = logs_schema();
    let node = Node::from(FunctionNode::nested("comments", is("author", "kim")).unwrap());
    let query = compile(&node, Some(&schema), &SearchOptions::default()).unwrap();

    assert_eq!(query["nested"]["path"], json!("comments"));
    assert_eq!(query["nested"]["score_mode"], json!("none"));
    assert_eq!(
        query["nested"]["query"]["bool"]["should"][0],
        json!({ "match": { "comments.author": "kim" } })
    );
}

#[test]
fn test_nested_scopes_extend() {
    let inner = Node::from(FunctionNode::nested("child", is("name", "x")).unwrap());
    let node = Node::from(FunctionNode::nested("parent", inner).unwrap());
    let query = compile(&node, None, &SearchOptions::default()).unwrap();

    assert_eq!(query["nested"]["path"], json!("parent"));
    assert_eq!(query["nested"]["query"]["nested"]["path"], json!("parent.child"));
    assert_eq!(
        query["nested"]["query"]["nested"]["query"]["bool"]["should"][0]["match"],
        json!({ "parent.child.name": "x" })
    );
}

#[test]
fn test_nested_forwards_ignore_unmapped() {
    let options = SearchOptions {
        nested_ignore_unmapped: Some(false),
        ..Default::default()
    };
    let node = Node::from(FunctionNode::nested("comments", is("author", "kim")).unwrap());
    let query = compile(&node, None, &options).unwrap();

    assert_eq!(query["nested"]["ignore_unmapped"], json!(false));
}
