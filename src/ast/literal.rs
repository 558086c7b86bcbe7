use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use std::str::FromStr;

/// A scalar carried by a literal node.
///
/// Numbers are held as [`Decimal`] rather than `f64` so that a value written
/// as `10.50` serializes back as `10.50`, not `10.5`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean literal (`true` / `false`)
    Bool(bool),

    /// Numeric literal, integer or decimal
    Number(Decimal),

    /// String literal
    ///
    /// For wildcard literals this holds the raw pattern text with escapes
    /// intact; for plain strings it holds the unescaped value.
    String(String),
}

/// Terminal AST node wrapping a scalar value.
///
/// A literal is either a plain value or a wildcard pattern. Patterns come
/// from unquoted source text containing an unescaped `*` and are matched
/// against schema field names during compilation.
///
/// # Examples
///
/// ```
/// use cassia::ast::Literal;
///
/// assert!(Literal::parse("machine.os*").unwrap().is_wildcard());
/// assert!(!Literal::parse("\"machine.os*\"").unwrap().is_wildcard());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Scalar,
    is_wildcard: bool,
}

/// Errors raised while parsing a literal expression or an operator tag.
///
/// All of these are fatal to the caller: a node is either fully constructed
/// or not constructed at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input was empty or whitespace-only
    EmptyExpression,

    /// A quoted string was missing its closing quote
    UnterminatedString,

    /// A backslash escape introduced an unsupported character
    InvalidEscape(char),

    /// The input ended in the middle of a backslash escape
    DanglingEscape,

    /// Extra input followed a complete quoted string
    TrailingCharacters(String),

    /// An operator tag outside the closed `gt`/`gte`/`lt`/`lte` set
    UnknownOperator(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyExpression => write!(f, "Empty literal expression"),
            ParseError::UnterminatedString => {
                write!(f, "Unterminated string: missing closing quote")
            }
            ParseError::InvalidEscape(c) => write!(f, "Invalid escape sequence: \\{}", c),
            ParseError::DanglingEscape => write!(f, "Unexpected end of input after backslash"),
            ParseError::TrailingCharacters(rest) => {
                write!(f, "Unexpected characters after quoted string: '{}'", rest)
            }
            ParseError::UnknownOperator(op) => {
                write!(f, "Unknown range operator: '{}' (expected gt, gte, lt or lte)", op)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Characters that force a plain string into quoted form when serialized.
const SPECIAL_CHARS: &[char] = &['\\', '(', ')', ':', '<', '>', '"', '*', '{', '}'];

impl Literal {
    /// Parses a literal expression into a node, classifying numeric vs
    /// string vs wildcarded-string input.
    ///
    /// - `"…"` quoted text is always a plain string, escapes resolved
    /// - `true` / `false` become booleans
    /// - anything parseable as a decimal number becomes a number
    /// - remaining text is a string; an unescaped `*` marks it as a
    ///   wildcard pattern and preserves the raw pattern text
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        if text.starts_with('"') {
            let value = read_quoted(text)?;
            return Ok(Literal {
                value: Scalar::String(value),
                is_wildcard: false,
            });
        }

        match text {
            "true" => return Ok(Literal::from(true)),
            "false" => return Ok(Literal::from(false)),
            _ => {}
        }

        if let Ok(number) = Decimal::from_str(text) {
            return Ok(Literal {
                value: Scalar::Number(number),
                is_wildcard: false,
            });
        }

        if has_unescaped_wildcard(text) {
            // Raw pattern text is kept as-is so the expression round-trips.
            check_escapes(text)?;
            Ok(Literal {
                value: Scalar::String(text.to_string()),
                is_wildcard: true,
            })
        } else {
            Ok(Literal {
                value: Scalar::String(unescape(text)?),
                is_wildcard: false,
            })
        }
    }

    /// Wraps a pre-typed scalar directly, bypassing text parsing.
    pub fn new(value: Scalar) -> Self {
        Literal {
            value,
            is_wildcard: false,
        }
    }

    /// Builds a wildcard pattern literal from raw pattern text.
    pub fn pattern(text: &str) -> Self {
        Literal {
            value: Scalar::String(text.to_string()),
            is_wildcard: true,
        }
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// True for wildcard patterns that begin with an unescaped `*`.
    pub fn has_leading_wildcard(&self) -> bool {
        self.is_wildcard && self.as_text().starts_with('*')
    }

    /// True for the bare `*` pattern that matches any field or value.
    pub fn is_match_all(&self) -> bool {
        self.is_wildcard && self.as_text() == "*"
    }

    /// The string form used for field names and schema lookups.
    ///
    /// Wildcard literals yield the raw pattern; other scalars their plain
    /// text rendering.
    pub fn as_text(&self) -> String {
        match &self.value {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::String(s) => s.clone(),
        }
    }

    /// Tests a concrete field name against this literal.
    ///
    /// Wildcard literals match via their pattern; plain literals match by
    /// string equality.
    pub fn matches(&self, name: &str) -> bool {
        if !self.is_wildcard {
            return self.as_text() == name;
        }
        match Regex::new(&self.pattern_regex()) {
            Ok(re) => re.is_match(name),
            Err(_) => false,
        }
    }

    /// Compiles the literal to its backend JSON value.
    ///
    /// Integral numbers emit JSON integers; wildcard patterns emit their
    /// text with escapes resolved (`\*` becomes a literal star).
    pub fn to_value(&self) -> Value {
        match &self.value {
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => {
                if n.is_integer() {
                    if let Some(i) = n.to_i64() {
                        return Value::from(i);
                    }
                }
                match n.to_f64() {
                    Some(f) => Value::from(f),
                    None => Value::String(n.to_string()),
                }
            }
            Scalar::String(s) => {
                if self.is_wildcard {
                    Value::String(strip_escapes(s))
                } else {
                    Value::String(s.clone())
                }
            }
        }
    }

    /// The value string for a backend `wildcard` query.
    ///
    /// Unescaped `*` stays a wildcard; escaped stars and backslashes are
    /// re-escaped the way the backend expects.
    pub fn to_wildcard_value(&self) -> String {
        let text = self.as_text();
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' if self.is_wildcard => {
                    if let Some(next) = chars.next() {
                        push_wildcard_literal(&mut out, next);
                    }
                }
                '*' if self.is_wildcard => out.push('*'),
                _ => push_wildcard_literal(&mut out, c),
            }
        }
        out
    }

    /// Renders the literal back to source text.
    ///
    /// Plain strings are quoted whenever their bare form would reparse
    /// differently (specials, whitespace, number or boolean lookalikes).
    pub fn to_expression(&self) -> String {
        match &self.value {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::String(s) => {
                if self.is_wildcard {
                    return s.clone();
                }
                if needs_quoting(s) {
                    let mut out = String::with_capacity(s.len() + 2);
                    out.push('"');
                    for c in s.chars() {
                        if c == '"' || c == '\\' {
                            out.push('\\');
                        }
                        out.push(c);
                    }
                    out.push('"');
                    out
                } else {
                    s.clone()
                }
            }
        }
    }

    /// Anchored regex source for a wildcard pattern.
    fn pattern_regex(&self) -> String {
        let text = self.as_text();
        let mut re = String::from("^");
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(next) = chars.next() {
                        re.push_str(&regex::escape(&next.to_string()));
                    }
                }
                '*' => re.push_str(".*"),
                _ => re.push_str(&regex::escape(&c.to_string())),
            }
        }
        re.push('$');
        re
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::new(Scalar::Bool(b))
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::new(Scalar::Number(Decimal::from(n)))
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::new(Scalar::Number(Decimal::from(n)))
    }
}

impl From<Decimal> for Literal {
    fn from(n: Decimal) -> Self {
        Literal::new(Scalar::Number(n))
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::new(Scalar::String(s.to_string()))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::new(Scalar::String(s))
    }
}

/// Read a quoted string body, resolving escapes.
fn read_quoted(text: &str) -> Result<String, ParseError> {
    let mut result = String::new();
    let mut chars = text.chars();
    chars.next(); // consume opening quote

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let rest: String = chars.collect();
                if !rest.trim().is_empty() {
                    return Err(ParseError::TrailingCharacters(rest));
                }
                return Ok(result);
            }
            '\\' => match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('r') => result.push('\r'),
                Some('"') => result.push('"'),
                Some('\\') => result.push('\\'),
                Some('*') => result.push('*'),
                Some(other) => return Err(ParseError::InvalidEscape(other)),
                None => return Err(ParseError::DanglingEscape),
            },
            _ => result.push(c),
        }
    }

    Err(ParseError::UnterminatedString)
}

/// Resolve backslash escapes in unquoted text.
fn unescape(text: &str) -> Result<String, ParseError> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => result.push(next),
                None => return Err(ParseError::DanglingEscape),
            }
        } else {
            result.push(c);
        }
    }
    Ok(result)
}

/// Validate escapes without resolving them (wildcard patterns keep raw text).
fn check_escapes(text: &str) -> Result<(), ParseError> {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.next().is_none() {
            return Err(ParseError::DanglingEscape);
        }
    }
    Ok(())
}

fn strip_escapes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }
    result
}

fn has_unescaped_wildcard(text: &str) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '*' => return true,
            _ => {}
        }
    }
    false
}

fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s == "true" || s == "false" || Decimal::from_str(s).is_ok() {
        return true;
    }
    s.chars()
        .any(|c| c.is_whitespace() || SPECIAL_CHARS.contains(&c))
}

/// Append a literal character to a backend wildcard query value, escaping
/// the backend's own specials (`*` and `\`).
fn push_wildcard_literal(out: &mut String, c: char) {
    if c == '*' || c == '\\' {
        out.push('\\');
    }
    out.push(c);
}
