//! # Cassia Query Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for Cassia, a small
//! filter-expression language compiled against a per-dataset schema into
//! search-engine query DSL.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[literal]** - Terminal scalar nodes and the literal-expression parser
//! - **[operators]** - The closed set of range operators
//! - **[node]** - The node tree: literals and the function-node family
//!
//! ## Quick Start
//!
//! ```text
//! bytes >= 1024
//! ```
//!
//! This expression is represented as a `range` function node holding a field
//! name literal, an operator tag, and a value literal.
//!
//! ## Core Concepts
//!
//! ### Two Node Kinds
//!
//! Every tree is built from exactly two kinds of node:
//!
//! - **Literal** - a scalar value (string, number, boolean) with a wildcard
//!   classification flag
//! - **Function** - a typed operation (`range`, `is`, `and`, `or`, `not`,
//!   `exists`, `wildcard`, `nested`) composing literals and other functions
//!
//! ### Construction Paths
//!
//! Nodes are built either programmatically (e.g. a range node from direct
//! field/operator/value input) or by parsing a literal expression:
//!
//! ```
//! use cassia::ast::{FunctionNode, Literal, RangeOperator};
//!
//! let node = FunctionNode::range("age", RangeOperator::Gte, 21).unwrap();
//! assert!(node.is_range());
//!
//! let lit = Literal::parse("machine.os*").unwrap();
//! assert!(lit.is_wildcard());
//! ```
//!
//! ### Wildcard Field Names
//!
//! An unquoted `*` in a field name marks the literal as a wildcard pattern.
//! Patterns resolve against the dataset schema to zero or more concrete
//! fields; quoting the text suppresses wildcard classification.
//!
//! ## Downstream Consumers
//!
//! The [compiler](crate::compiler) turns a tree into backend query DSL; the
//! [serializer](crate::serializer) renders it back to source text.
pub mod literal;
pub mod node;
pub mod operators;

pub use literal::{Literal, ParseError, Scalar};
pub use node::{FunctionNode, Node};
pub use operators::RangeOperator;
