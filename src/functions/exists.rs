//! Field presence check: `status: *`.

use serde_json::{Value, json};

use crate::ast::Literal;
use crate::compiler::{CompileContext, CompileError, SearchOptions};
use crate::fields;
use crate::functions::{any_field_match, wrap_nested};
use crate::schema::Schema;

/// Compiles a presence check, one `exists` clause per resolved field.
///
/// Scripted fields have no backing document field to probe, so they are
/// rejected.
pub fn to_search_query(
    field_name: &Literal,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    let resolved = fields::resolve(field_name, schema, context.nested_path());

    let mut queries = Vec::with_capacity(resolved.len());
    for field in &resolved {
        if field.scripted {
            return Err(CompileError::ScriptedField {
                function: "exists",
                field: field.name.clone(),
            });
        }
        let clause = json!({ "exists": { "field": field.name.as_str() } });
        queries.push(wrap_nested(clause, field, field_name, options, context));
    }

    Ok(any_field_match(queries))
}

/// `<field>: *`
pub fn to_expression(field: &Literal) -> String {
    format!("{}: *", field.to_expression())
}
