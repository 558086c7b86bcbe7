//! Equality / match: `status: active`.

use serde_json::{Value, json};

use crate::ast::Literal;
use crate::compiler::{CompileContext, CompileError, SearchOptions};
use crate::fields;
use crate::functions::{any_field_match, wrap_nested};
use crate::schema::Schema;
use crate::scripts;

/// Compiles an equality/match node.
///
/// The value shape drives the clause per resolved field: a bare `*` is a
/// presence check, a wildcard pattern becomes a `wildcard` clause, date
/// fields match with a `time_zone`-aware body, everything else is a plain
/// `match`. `*: *` short-circuits to `match_all`.
pub fn to_search_query(
    field_name: &Literal,
    value: &Literal,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    if field_name.is_match_all() && value.is_match_all() {
        return Ok(json!({ "match_all": {} }));
    }

    let value_is_exists = value.is_match_all();
    let resolved = fields::resolve(field_name, schema, context.nested_path());

    let mut queries = Vec::with_capacity(resolved.len());
    for field in &resolved {
        if field.scripted {
            queries.push(scripts::phrase_script(field, value)?);
            continue;
        }

        let clause = if value_is_exists {
            json!({ "exists": { "field": field.name.as_str() } })
        } else if value.is_wildcard() {
            json!({ "wildcard": { field.name.as_str(): { "value": value.to_wildcard_value() } } })
        } else if field.field_type == "date" {
            let mut body = json!({ "query": value.to_value() });
            if let Some(tz) = &options.date_format_tz {
                body["time_zone"] = json!(tz);
            }
            json!({ "match": { field.name.as_str(): body } })
        } else {
            json!({ "match": { field.name.as_str(): value.to_value() } })
        };
        queries.push(wrap_nested(clause, field, field_name, options, context));
    }

    Ok(any_field_match(queries))
}

/// `<field>: <value>`
pub fn to_expression(field: &Literal, value: &Literal) -> String {
    format!("{}: {}", field.to_expression(), value.to_expression())
}
