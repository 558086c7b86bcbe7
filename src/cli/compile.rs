//! Compile query nodes against an optional schema file

use crate::compiler::{SearchOptions, compile};
use crate::schema::{Field, Schema};
use crate::{Node, serialize};

use super::CliError;

/// Options for a compile invocation
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Raw JSON text of the schema file, if one was supplied
    pub schema: Option<String>,
    /// Time zone for date-field clauses
    pub time_zone: Option<String>,
    /// `ignore_unmapped` for nested queries
    pub ignore_unmapped: Option<bool>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Print the source expression instead of compiling
    pub expression: bool,
}

/// Compile (or serialize) a node and render the output.
pub fn execute(node: &Node, options: &CompileOptions) -> Result<String, CliError> {
    if options.expression {
        return Ok(serialize(node));
    }

    let schema = match &options.schema {
        Some(text) => Some(schema_from_json(text)?),
        None => None,
    };
    let search = SearchOptions {
        date_format_tz: options.time_zone.clone(),
        nested_ignore_unmapped: options.ignore_unmapped,
    };

    let query = compile(node, schema.as_ref(), &search)?;
    let rendered = if options.pretty {
        serde_json::to_string_pretty(&query)?
    } else {
        serde_json::to_string(&query)?
    };
    Ok(rendered)
}

/// Parse a schema file: a JSON array of field objects.
///
/// ```json
/// [
///   { "name": "bytes", "type": "number" },
///   { "name": "@timestamp", "type": "date" },
///   { "name": "comments.author", "type": "keyword", "nested_path": "comments" },
///   { "name": "pct", "type": "number", "scripted": true,
///     "script": "doc['bytes'].value / 100", "lang": "painless" }
/// ]
/// ```
pub fn schema_from_json(text: &str) -> Result<Schema, CliError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let items = value
        .as_array()
        .ok_or_else(|| CliError::SchemaShape("expected a JSON array of fields".to_string()))?;

    let mut fields = Vec::with_capacity(items.len());
    for item in items {
        let object = item
            .as_object()
            .ok_or_else(|| CliError::SchemaShape("expected field objects".to_string()))?;
        let name = object
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| CliError::SchemaShape("field is missing 'name'".to_string()))?;
        let field_type = object.get("type").and_then(|v| v.as_str()).unwrap_or("");

        let mut field = Field::new(name, field_type);
        if object.get("scripted").and_then(|v| v.as_bool()) == Some(true) {
            let script = object.get("script").and_then(|v| v.as_str()).ok_or_else(|| {
                CliError::SchemaShape(format!("scripted field '{}' is missing 'script'", name))
            })?;
            let lang = object.get("lang").and_then(|v| v.as_str()).unwrap_or("painless");
            field = field.scripted(script, lang);
        }
        if let Some(path) = object.get("nested_path").and_then(|v| v.as_str()) {
            field = field.nested(path);
        }
        fields.push(field);
    }

    Ok(Schema::new(fields))
}
