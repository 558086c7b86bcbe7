//! Field reference resolution.
//!
//! Maps a field-name literal to the concrete schema fields it denotes,
//! honoring the active nested scope and the single-synthetic-field fallback
//! for names that resolve to nothing.

use log::debug;

use crate::ast::Literal;
use crate::schema::{Field, Schema};

/// Qualifies a field-name literal with the active nested scope.
///
/// Inside a nested scope, field names resolve relative to the scope's path:
/// `author` inside `comments` becomes `comments.author`. The wildcard
/// classification of the original literal is preserved.
///
/// # Examples
/// ```
/// use cassia::ast::Literal;
/// use cassia::fields::full_field_name;
///
/// let name = Literal::parse("author").unwrap();
/// let full = full_field_name(&name, Some("comments"));
/// assert_eq!(full.as_text(), "comments.author");
/// ```
pub fn full_field_name(field: &Literal, nested_path: Option<&str>) -> Literal {
    match nested_path {
        Some(path) => {
            let qualified = format!("{}.{}", path, field.as_text());
            if field.is_wildcard() {
                Literal::pattern(&qualified)
            } else {
                Literal::from(qualified)
            }
        }
        None => field.clone(),
    }
}

/// Resolves a field-name literal to the concrete fields it denotes.
///
/// - With no schema, returns a single synthetic field carrying the literal
///   text, so queries still compile best-effort against the raw name.
/// - With a schema, resolves the (scope-qualified) name exactly or by
///   wildcard pattern.
/// - A miss still returns exactly one synthetic field. A query spanning
///   datasets with different schemas should silently match nothing for
///   fields absent from one of them, not fail outright.
///
/// The returned list is never empty.
pub fn resolve(field: &Literal, schema: Option<&Schema>, nested_path: Option<&str>) -> Vec<Field> {
    let full_name = full_field_name(field, nested_path);

    let mut fields: Vec<Field> = match schema {
        Some(schema) => {
            if full_name.is_wildcard() {
                schema
                    .fields()
                    .iter()
                    .filter(|f| full_name.matches(&f.name))
                    .cloned()
                    .collect()
            } else {
                schema.field(&full_name.as_text()).cloned().into_iter().collect()
            }
        }
        None => Vec::new(),
    };

    if fields.is_empty() {
        let raw = match full_name.to_value() {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        debug!("field reference '{}' resolved to no schema fields", raw);
        fields.push(Field::fallback(&raw));
    }

    fields
}
