//! Dataset schema: the catalog of concrete fields a query compiles against.
//!
//! A [`Schema`] is an ordered set of [`Field`]s queried by exact name or by
//! wildcard pattern. The compiler borrows it read-only for the duration of
//! one compile call and never caches lookups across calls.

use crate::ast::Literal;

/// A concrete field in a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Fully qualified field name (`user.name`, `comments.author`)
    pub name: String,

    /// Backend type (`date`, `number`, `keyword`, ...); empty for the
    /// synthetic fields produced when resolution misses
    pub field_type: String,

    /// Whether the field value is computed by a script rather than stored
    pub scripted: bool,

    /// Script source, present for scripted fields
    pub script: Option<String>,

    /// Script language, present for scripted fields
    pub lang: Option<String>,

    /// Nested object path the field lives under, if any
    pub nested_path: Option<String>,
}

impl Field {
    pub fn new(name: &str, field_type: &str) -> Self {
        Field {
            name: name.to_string(),
            field_type: field_type.to_string(),
            scripted: false,
            script: None,
            lang: None,
            nested_path: None,
        }
    }

    /// Marks the field as scripted with the given source and language.
    pub fn scripted(mut self, script: &str, lang: &str) -> Self {
        self.scripted = true;
        self.script = Some(script.to_string());
        self.lang = Some(lang.to_string());
        self
    }

    /// Places the field under a nested object path.
    pub fn nested(mut self, path: &str) -> Self {
        self.nested_path = Some(path.to_string());
        self
    }

    /// A synthetic stand-in for a name that resolved to nothing.
    pub fn fallback(name: &str) -> Self {
        Field::new(name, "")
    }
}

/// An ordered set of fields, the external "dataset descriptor".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Schema { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Exact-name lookup.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Pattern lookup: a `*` in the pattern matches any run of characters,
    /// anything else matches exactly. May return zero, one or many fields.
    pub fn lookup(&self, pattern: &str) -> Vec<&Field> {
        if pattern.contains('*') {
            let literal = Literal::pattern(pattern);
            self.fields.iter().filter(|f| literal.matches(&f.name)).collect()
        } else {
            self.field(pattern).into_iter().collect()
        }
    }
}

#[test]
fn test_exact_lookup() {
    let schema = Schema::new(vec![
        Field::new("bytes", "number"),
        Field::new("machine.os", "keyword"),
    ]);
    assert_eq!(schema.lookup("bytes").len(), 1);
    assert!(schema.lookup("byte").is_empty());
}

#[test]
fn test_pattern_lookup() {
    let schema = Schema::new(vec![
        Field::new("machine.os", "keyword"),
        Field::new("machine.os.raw", "keyword"),
        Field::new("bytes", "number"),
    ]);
    let hits = schema.lookup("machine.os*");
    assert_eq!(hits.len(), 2);
    assert!(schema.lookup("*").len() == 3);
}
