//! Wildcard value match: `machine.os: win*`.

use log::debug;
use serde_json::{Value, json};

use crate::ast::Literal;
use crate::compiler::{CompileContext, CompileError, SearchOptions};
use crate::fields;
use crate::functions::{any_field_match, wrap_nested};
use crate::schema::Schema;

/// Compiles a wildcard-pattern match, one `wildcard` clause per resolved
/// field. A pattern cannot be evaluated through a field script, so scripted
/// fields are rejected.
pub fn to_search_query(
    field_name: &Literal,
    pattern: &Literal,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    if pattern.has_leading_wildcard() {
        debug!(
            "leading wildcard in pattern '{}' is expensive to execute",
            pattern.as_text()
        );
    }

    let resolved = fields::resolve(field_name, schema, context.nested_path());

    let mut queries = Vec::with_capacity(resolved.len());
    for field in &resolved {
        if field.scripted {
            return Err(CompileError::ScriptedField {
                function: "wildcard",
                field: field.name.clone(),
            });
        }
        let clause = json!({
            "wildcard": { field.name.as_str(): { "value": pattern.to_wildcard_value() } }
        });
        queries.push(wrap_nested(clause, field, field_name, options, context));
    }

    Ok(any_field_match(queries))
}

/// `<field>: <pattern>`
pub fn to_expression(field: &Literal, pattern: &Literal) -> String {
    format!("{}: {}", field.to_expression(), pattern.to_expression())
}
