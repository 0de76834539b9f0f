pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod phone;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{parse_filter, ContactFilter, FilterExpr, FilterParseError, FilterSubject};
pub use rules::*;
