pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compiler;
pub mod fields;
pub mod functions;
pub mod schema;
pub mod scripts;
pub mod serializer;

pub use ast::{FunctionNode, Literal, Node, ParseError, RangeOperator, Scalar};
pub use compiler::{CompileContext, CompileError, NestedScope, SearchOptions, compile};
pub use schema::{Field, Schema};
pub use serializer::serialize;
