//! Query builders for scripted fields.
//!
//! A scripted field has no stored value to range or match against, so its
//! clauses evaluate the field's script and compare the result to the query
//! value through script params.

use serde_json::{Value, json};

use crate::ast::{Literal, RangeOperator};
use crate::compiler::CompileError;
use crate::schema::Field;

const DEFAULT_LANG: &str = "painless";

/// A range comparison over a scripted field.
pub fn range_script(
    field: &Field,
    operator: RangeOperator,
    value: &Literal,
) -> Result<Value, CompileError> {
    let source = script_source(field)?;
    let lang = field.lang.as_deref().unwrap_or(DEFAULT_LANG);
    Ok(json!({
        "script": {
            "script": {
                "source": format!("({}) {} params.{}", source, operator.symbol(), operator.key()),
                "params": { operator.key(): value.to_value() },
                "lang": lang,
            }
        }
    }))
}

/// An equality comparison over a scripted field.
pub fn phrase_script(field: &Field, value: &Literal) -> Result<Value, CompileError> {
    let source = script_source(field)?;
    let lang = field.lang.as_deref().unwrap_or(DEFAULT_LANG);
    Ok(json!({
        "script": {
            "script": {
                "source": format!("({}) == params.value", source),
                "params": { "value": value.to_value() },
                "lang": lang,
            }
        }
    }))
}

fn script_source(field: &Field) -> Result<&str, CompileError> {
    field.script.as_deref().ok_or_else(|| CompileError::MissingScript {
        field: field.name.clone(),
    })
}
