//! Source-text serialization for query trees.
//!
//! The serializer is the structural inverse of the compiler: a pure
//! recursive descent over the tree with no schema or settings dependency.
//! Serializing a node and re-parsing its pieces reconstructs an equal tree,
//! so query bars can round-trip what they display.
//!
//! # Examples
//!
//! ```
//! use cassia::ast::{FunctionNode, Node, RangeOperator};
//! use cassia::serializer::serialize;
//!
//! let node = Node::from(FunctionNode::range("a", RangeOperator::Gt, 5).unwrap());
//! assert_eq!(serialize(&node), "a > 5");
//! ```

use crate::ast::{FunctionNode, Node};
use crate::functions;

/// Renders a query tree back to source text.
pub fn serialize(node: &Node) -> String {
    match node {
        Node::Literal(literal) => literal.to_expression(),
        Node::Function(function) => match function {
            FunctionNode::Range {
                field,
                operator,
                value,
            } => functions::range::to_expression(field, *operator, value),
            FunctionNode::Is { field, value } => functions::is::to_expression(field, value),
            FunctionNode::And(children) => functions::and::to_expression(children),
            FunctionNode::Or(children) => functions::or::to_expression(children),
            FunctionNode::Not(child) => functions::not::to_expression(child),
            FunctionNode::Exists { field } => functions::exists::to_expression(field),
            FunctionNode::Wildcard { field, pattern } => {
                functions::wildcard::to_expression(field, pattern)
            }
            FunctionNode::Nested { path, child } => functions::nested::to_expression(path, child),
        },
    }
}
