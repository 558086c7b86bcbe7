//! Disjunction: at least one child query must match.

use serde_json::{Value, json};

use crate::ast::Node;
use crate::compiler::{self, CompileContext, CompileError, SearchOptions};
use crate::schema::Schema;
use crate::serializer;

pub fn to_search_query(
    children: &[Node],
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    let compiled = children
        .iter()
        .map(|child| compiler::compile_in(child, schema, options, context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "bool": {
            "should": compiled,
            "minimum_should_match": 1,
        }
    }))
}

/// `(a OR b)`
pub fn to_expression(children: &[Node]) -> String {
    let parts: Vec<String> = children.iter().map(serializer::serialize).collect();
    format!("({})", parts.join(" OR "))
}
