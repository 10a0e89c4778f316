//! Update-expression parsing for comparison purposes.
//!
//! The pipeline is deliberately shallow; it recovers clause structure, not
//! meaning:
//!
//! 1. **Locating**: find the first offset of each clause keyword.
//! 2. **Extracting**: slice the expression into one substring per clause.
//! 3. **Parsing**: split each clause into path/value pairs or fragments.

pub mod ast;
pub mod locator;
pub mod parser;

pub use ast::{AddExpression, ClauseKind, ParsedUpdateExpression};
pub use locator::{Clause, LocatedClause, extract_clauses, locate_clauses};
pub use parser::{
    extract_add_pairs, parse_update_expression, parse_update_expression_with, parses_completely,
};
