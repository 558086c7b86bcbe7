//! Negation of a child query.

use serde_json::{Value, json};

use crate::ast::Node;
use crate::compiler::{self, CompileContext, CompileError, SearchOptions};
use crate::schema::Schema;
use crate::serializer;

pub fn to_search_query(
    child: &Node,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    let compiled = compiler::compile_in(child, schema, options, context)?;
    Ok(json!({ "bool": { "must_not": compiled } }))
}

/// `NOT x`
pub fn to_expression(child: &Node) -> String {
    format!("NOT {}", serializer::serialize(child))
}
