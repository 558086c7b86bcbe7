//! Range comparison: `bytes >= 1024`.

use serde_json::{Value, json};

use crate::ast::{Literal, RangeOperator};
use crate::compiler::{CompileContext, CompileError, SearchOptions};
use crate::fields;
use crate::functions::{any_field_match, wrap_nested};
use crate::schema::Schema;
use crate::scripts;

/// Compiles a range node against the schema.
///
/// The field name resolves relative to the active nested scope; each
/// resolved field contributes one clause shaped by its type (scripted,
/// date, or plain), and the clauses combine under `bool.should`.
pub fn to_search_query(
    field_name: &Literal,
    operator: RangeOperator,
    value: &Literal,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    let resolved = fields::resolve(field_name, schema, context.nested_path());

    let mut queries = Vec::with_capacity(resolved.len());
    for field in &resolved {
        if field.scripted {
            queries.push(scripts::range_script(field, operator, value)?);
            continue;
        }

        let mut params = json!({ operator.key(): value.to_value() });
        if field.field_type == "date" {
            if let Some(tz) = &options.date_format_tz {
                params["time_zone"] = json!(tz);
            }
        }
        let clause = json!({ "range": { field.name.as_str(): params } });
        queries.push(wrap_nested(clause, field, field_name, options, context));
    }

    Ok(any_field_match(queries))
}

/// `<field> <symbol> <value>`
pub fn to_expression(field: &Literal, operator: RangeOperator, value: &Literal) -> String {
    format!(
        "{} {} {}",
        field.to_expression(),
        operator.symbol(),
        value.to_expression()
    )
}
