use crate::ast::literal::{Literal, ParseError};
use crate::ast::operators::RangeOperator;

/// A node in the query tree: either a terminal literal or a function
/// composing child nodes.
///
/// The tree is a plain owned structure with no sharing and no cycles; each
/// node is owned exclusively by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    Function(FunctionNode),
}

/// The function-node family, one variant per query operation.
///
/// The enum is closed and every consumer matches it exhaustively, so adding
/// a kind forces every compile and serialize path to handle it. Variant
/// fields are typed: a malformed argument shape (wrong arity, unknown
/// operator) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionNode {
    /// Range comparison: `bytes >= 1024`
    Range {
        field: Literal,
        operator: RangeOperator,
        value: Literal,
    },

    /// Equality / match: `status: active`
    Is { field: Literal, value: Literal },

    /// Conjunction of child queries
    And(Vec<Node>),

    /// Disjunction of child queries
    Or(Vec<Node>),

    /// Negation of a child query
    Not(Box<Node>),

    /// Field presence check: `status: *`
    Exists { field: Literal },

    /// Wildcard value match: `machine.os: win*`
    Wildcard { field: Literal, pattern: Literal },

    /// Nested scope: `comments: { author: kim }`
    Nested { path: Literal, child: Box<Node> },
}

impl FunctionNode {
    /// Builds a range node from direct field/operator/value input.
    ///
    /// The field name runs through the literal-expression parser because it
    /// may contain wildcards; the value is wrapped as-is.
    pub fn range(
        field: &str,
        operator: RangeOperator,
        value: impl Into<Literal>,
    ) -> Result<Self, ParseError> {
        Ok(FunctionNode::Range {
            field: Literal::parse(field)?,
            operator,
            value: value.into(),
        })
    }

    /// Builds an equality/match node. A wildcard in the value is
    /// classified by the literal-expression parser.
    pub fn is(field: &str, value: &str) -> Result<Self, ParseError> {
        Ok(FunctionNode::Is {
            field: Literal::parse(field)?,
            value: Literal::parse(value)?,
        })
    }

    pub fn and(children: Vec<Node>) -> Self {
        FunctionNode::And(children)
    }

    pub fn or(children: Vec<Node>) -> Self {
        FunctionNode::Or(children)
    }

    pub fn not(child: Node) -> Self {
        FunctionNode::Not(Box::new(child))
    }

    pub fn exists(field: &str) -> Result<Self, ParseError> {
        Ok(FunctionNode::Exists {
            field: Literal::parse(field)?,
        })
    }

    pub fn wildcard(field: &str, pattern: &str) -> Result<Self, ParseError> {
        Ok(FunctionNode::Wildcard {
            field: Literal::parse(field)?,
            pattern: Literal::pattern(pattern),
        })
    }

    pub fn nested(path: &str, child: Node) -> Result<Self, ParseError> {
        Ok(FunctionNode::Nested {
            path: Literal::parse(path)?,
            child: Box::new(child),
        })
    }

    /// The function name, as it appears in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionNode::Range { .. } => "range",
            FunctionNode::Is { .. } => "is",
            FunctionNode::And(_) => "and",
            FunctionNode::Or(_) => "or",
            FunctionNode::Not(_) => "not",
            FunctionNode::Exists { .. } => "exists",
            FunctionNode::Wildcard { .. } => "wildcard",
            FunctionNode::Nested { .. } => "nested",
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, FunctionNode::Range { .. })
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, FunctionNode::Nested { .. })
    }
}

impl Node {
    pub fn literal(value: impl Into<Literal>) -> Self {
        Node::Literal(value.into())
    }
}

impl From<FunctionNode> for Node {
    fn from(function: FunctionNode) -> Self {
        Node::Function(function)
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}

#[test]
fn test_function_names() {
    assert_eq!(FunctionNode::exists("a").unwrap().name(), "exists");
    assert_eq!(FunctionNode::and(vec![]).name(), "and");
}

#[test]
fn test_type_guards() {
    let range = FunctionNode::range("a", RangeOperator::Gt, 1).unwrap();
    assert!(range.is_range());
    assert!(!range.is_nested());
}
