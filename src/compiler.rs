//! Query compilation: AST to backend query DSL.
//!
//! The compiler is a pure, synchronous transform. It borrows the schema and
//! settings read-only, threads an immutable [`CompileContext`] down the
//! recursion, and either returns a complete query or fails the whole call.
//! Sibling branches cannot observe each other, so compilation is
//! deterministic and order-independent across them.

use log::trace;
use serde_json::Value;

use crate::ast::{FunctionNode, Node};
use crate::functions;
use crate::schema::Schema;

/// Per-request settings supplied by the (external) settings provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Time zone attached to range/match clauses on date fields
    pub date_format_tz: Option<String>,

    /// `ignore_unmapped` for nested queries; forwarded only when the
    /// setting is an explicit boolean
    pub nested_ignore_unmapped: Option<bool>,
}

/// The active nested scope, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedScope {
    pub path: String,
}

/// Transient per-call compilation state.
///
/// Passed by value down the recursion; descending into a nested scope
/// produces a new context rather than mutating shared state, so sibling
/// subtrees can never alias each other's scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileContext {
    pub nested: Option<NestedScope>,
}

impl CompileContext {
    pub fn nested_path(&self) -> Option<&str> {
        self.nested.as_ref().map(|scope| scope.path.as_str())
    }

    /// A new context scoped under `path`.
    pub fn descend(&self, path: &str) -> Self {
        CompileContext {
            nested: Some(NestedScope {
                path: path.to_string(),
            }),
        }
    }
}

/// Errors raised during compilation.
///
/// Resolution misses are not errors (see [`crate::fields::resolve`]); these
/// cover the cases where no well-formed query can be produced at all.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The function kind cannot operate on a scripted field
    ScriptedField {
        function: &'static str,
        field: String,
    },

    /// A scripted field was missing its script source
    MissingScript { field: String },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::ScriptedField { function, field } => {
                write!(f, "{} query does not support scripted field '{}'", function, field)
            }
            CompileError::MissingScript { field } => {
                write!(f, "Scripted field '{}' has no script source", field)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Compiles a query tree into backend query DSL.
///
/// # Arguments
///
/// * `node` - The query tree to compile
/// * `schema` - The dataset schema, if one is known; without it, field
///   references compile against their literal names
/// * `options` - Per-request settings
///
/// # Examples
///
/// ```
/// use cassia::ast::{FunctionNode, Node, RangeOperator};
/// use cassia::compiler::{compile, SearchOptions};
/// use serde_json::json;
///
/// let node = Node::from(FunctionNode::range("age", RangeOperator::Gte, 21).unwrap());
/// let query = compile(&node, None, &SearchOptions::default()).unwrap();
/// assert_eq!(
///     query,
///     json!({ "bool": { "should": [{ "range": { "age": { "gte": 21 } } }], "minimum_should_match": 1 } })
/// );
/// ```
pub fn compile(
    node: &Node,
    schema: Option<&Schema>,
    options: &SearchOptions,
) -> Result<Value, CompileError> {
    compile_in(node, schema, options, &CompileContext::default())
}

/// Recursive compile step carrying the nested-scope context.
pub(crate) fn compile_in(
    node: &Node,
    schema: Option<&Schema>,
    options: &SearchOptions,
    context: &CompileContext,
) -> Result<Value, CompileError> {
    match node {
        Node::Literal(literal) => Ok(literal.to_value()),
        Node::Function(function) => {
            trace!("compiling {} node", function.name());
            match function {
                FunctionNode::Range {
                    field,
                    operator,
                    value,
                } => functions::range::to_search_query(field, *operator, value, schema, options, context),
                FunctionNode::Is { field, value } => {
                    functions::is::to_search_query(field, value, schema, options, context)
                }
                FunctionNode::And(children) => {
                    functions::and::to_search_query(children, schema, options, context)
                }
                FunctionNode::Or(children) => {
                    functions::or::to_search_query(children, schema, options, context)
                }
                FunctionNode::Not(child) => {
                    functions::not::to_search_query(child, schema, options, context)
                }
                FunctionNode::Exists { field } => {
                    functions::exists::to_search_query(field, schema, options, context)
                }
                FunctionNode::Wildcard { field, pattern } => {
                    functions::wildcard::to_search_query(field, pattern, schema, options, context)
                }
                FunctionNode::Nested { path, child } => {
                    functions::nested::to_search_query(path, child, schema, options, context)
                }
            }
        }
    }
}
