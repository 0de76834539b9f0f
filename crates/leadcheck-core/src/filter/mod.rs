mod ast;
mod parser;

use thiserror::Error;

pub use ast::{ContactFilter, FieldSelector, FilterExpr, FilterSubject, ValiditySelector};
pub use parser::parse_filter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("empty selector value: {0}")]
    EmptySelector(String),
    #[error("invalid valid selector: {0}")]
    InvalidValiditySelector(String),
    #[error("invalid confidence selector: {0}")]
    InvalidConfidenceSelector(String),
    #[error("invalid has selector: {0}")]
    InvalidFieldSelector(String),
}
