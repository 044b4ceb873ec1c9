//! Query parsing.
//!
//! A small tokenizer plus clause extraction over the accepted grammar
//! subset:
//!
//! ```text
//! SELECT <cols> FROM <table> [JOIN <table> ON <cond>]* [WHERE <cond>]
//! ```
//!
//! Parsing never fails. A clause that does not match yields an absent
//! field in the resulting [`StructuredQuery`](crate::ast::StructuredQuery);
//! the validator is the place where missing clauses become diagnostics.
//!
//! # Usage
//!
//! ```
//! use relalg::parser::parse_query;
//!
//! let query = parse_query("SELECT Nome FROM Produto");
//! assert_eq!(query.from.as_deref(), Some("Produto"));
//! ```

pub mod query;
pub mod token;

pub use query::parse_query;
pub use token::{strip_terminator, tokenize, Keyword, Token};
