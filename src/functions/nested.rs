//! Nested scope: `comments: { author: kim AND stars > 3 }`.

use serde_json::{Value, json};

use crate::ast::{Literal, Node};
use crate::compiler::{self, CompileContext, CompileError, SearchOptions};
use crate::schema::Schema;
use crate::serializer;

/// Establishes a nested scope for the child query.
///
/// Inside an existing scope the path extends it (`parent.child`); field
/// names in the child resolve relative to the resulting path.
pub fn to_search_query(
    path: &Literal,
    child: &Node,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    let full_path = match context.nested_path() {
        Some(parent) => format!("{}.{}", parent, path.as_text()),
        None => path.as_text(),
    };
    let scoped = context.descend(&full_path);

    let mut nested = json!({
        "path": full_path.as_str(),
        "query": compiler::compile_in(child, schema, options, &scoped)?,
        "score_mode": "none",
    });
    if let Some(ignore_unmapped) = options.nested_ignore_unmapped {
        nested["ignore_unmapped"] = json!(ignore_unmapped);
    }

    Ok(json!({ "nested": nested }))
}

/// `<path>: { <child> }`
pub fn to_expression(path: &Literal, child: &Node) -> String {
    format!("{}: {{ {} }}", path.to_expression(), serializer::serialize(child))
}
