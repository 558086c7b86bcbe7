//! The function-node family: per-kind compilation and serialization.
//!
//! Each submodule implements the two transforms for one function kind:
//! `to_search_query` (compile against a schema and settings) and
//! `to_expression` (render back to source text). Construction lives on
//! [`FunctionNode`](crate::ast::FunctionNode); dispatch lives in
//! [`compiler`](crate::compiler) and [`serializer`](crate::serializer).

pub mod and;
pub mod exists;
pub mod is;
pub mod nested;
pub mod not;
pub mod or;
pub mod range;
pub mod wildcard;

use serde_json::{Value, json};

use crate::ast::Literal;
use crate::compiler::{CompileContext, SearchOptions};
use crate::schema::Field;

/// Combine per-field clauses: the query matches when the value satisfies
/// the predicate on ANY of the fields the name resolved to.
pub(crate) fn any_field_match(queries: Vec<Value>) -> Value {
    json!({
        "bool": {
            "should": queries,
            "minimum_should_match": 1,
        }
    })
}

/// The wildcard-driven nested auto-wrap policy.
///
/// A wildcard field pattern can span both nested and non-nested fields in
/// one dataset, and the caller has no way to disambiguate up front, so a
/// nested query is added automatically when:
///
/// - the field name was given as a wildcard pattern, and
/// - the resolved field lives under a nested path, and
/// - no nested scope is already active (an active scope's path is
///   authoritative; clauses are never double-wrapped).
pub(crate) fn wrap_nested(
    query: Value,
    field: &Field,
    field_name: &Literal,
    options: &SearchOptions,
    context: &CompileContext,
) -> Value {
    let Some(path) = &field.nested_path else {
        return query;
    };
    if !field_name.is_wildcard() || context.nested.is_some() {
        return query;
    }

    let mut nested = json!({
        "path": path,
        "query": query,
        "score_mode": "none",
    });
    if let Some(ignore_unmapped) = options.nested_ignore_unmapped {
        nested["ignore_unmapped"] = json!(ignore_unmapped);
    }
    json!({ "nested": nested })
}
