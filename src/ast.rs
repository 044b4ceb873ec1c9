//! Structured query descriptor.
//!
//! [`StructuredQuery`] is the parser's output: one field per clause of the
//! accepted grammar subset
//! `SELECT <cols> FROM <table> [JOIN <table> ON <cond>]* [WHERE <cond>]`.
//! A clause that failed to match is simply absent; the parser never
//! produces an error value. Missing clauses only surface later, as
//! validation messages.

/// One `JOIN <table> ON <condition>` clause, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    /// The joined table name, trimmed.
    pub table: String,
    /// The raw join condition text, trimmed.
    pub condition: String,
}

/// A parsed query.
///
/// Select entries are raw column references, either `field` (implicitly
/// qualified by `from`) or `table.field`. The where predicate and join
/// conditions are kept as text; splitting them is the validator's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredQuery {
    /// The select list, or `None` if no SELECT clause matched.
    pub select: Option<Vec<String>>,
    /// The base table, or `None` if no FROM clause matched.
    pub from: Option<String>,
    /// The where predicate, or `None` if no WHERE clause matched.
    pub where_clause: Option<String>,
    /// The join clauses, left to right.
    pub joins: Vec<JoinClause>,
}
