use crate::ast::literal::ParseError;

/// Range comparison operators.
///
/// The set is closed: anything outside it is rejected at construction and
/// never reaches compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOperator {
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
}

impl RangeOperator {
    /// Source-text symbol, fixed mapping.
    pub fn symbol(&self) -> &'static str {
        match self {
            RangeOperator::Gt => ">",
            RangeOperator::Gte => ">=",
            RangeOperator::Lt => "<",
            RangeOperator::Lte => "<=",
        }
    }

    /// Key used inside backend `range` clauses and script params.
    pub fn key(&self) -> &'static str {
        match self {
            RangeOperator::Gt => "gt",
            RangeOperator::Gte => "gte",
            RangeOperator::Lt => "lt",
            RangeOperator::Lte => "lte",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, ParseError> {
        match key {
            "gt" => Ok(RangeOperator::Gt),
            "gte" => Ok(RangeOperator::Gte),
            "lt" => Ok(RangeOperator::Lt),
            "lte" => Ok(RangeOperator::Lte),
            other => Err(ParseError::UnknownOperator(other.to_string())),
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, ParseError> {
        match symbol {
            ">" => Ok(RangeOperator::Gt),
            ">=" => Ok(RangeOperator::Gte),
            "<" => Ok(RangeOperator::Lt),
            "<=" => Ok(RangeOperator::Lte),
            other => Err(ParseError::UnknownOperator(other.to_string())),
        }
    }
}
