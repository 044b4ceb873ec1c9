//! Query validation.
//!
//! Checks a [`StructuredQuery`] against the [`SchemaRegistry`] and returns
//! every finding as a human-readable message, in rule order:
//!
//! 1. SELECT present (short-circuits)
//! 2. FROM present (short-circuits)
//! 3. FROM table exists
//! 4. every select column resolves
//! 5. join tables and both sides of each join condition resolve
//! 6. the left-hand side of every where conjunct/disjunct resolves
//!
//! Messages are never deduplicated; within a rule they follow source
//! order. Table and field matching is case-insensitive.

use crate::ast::StructuredQuery;
use crate::schema::SchemaRegistry;

/// Validates a query against the registry.
///
/// Returns an empty list when the query is valid. The result carries
/// plain strings so the caller can surface them verbatim.
///
/// # Example
///
/// ```
/// use relalg::parser::parse_query;
/// use relalg::schema::SchemaRegistry;
/// use relalg::validate::validate_query;
///
/// let registry = SchemaRegistry::demo_store();
/// let query = parse_query("SELECT Produto.Invalido FROM Produto");
/// let errors = validate_query(&query, &registry);
/// assert_eq!(errors, ["field 'Invalido' does not exist in table 'Produto'"]);
/// ```
#[must_use]
pub fn validate_query(query: &StructuredQuery, registry: &SchemaRegistry) -> Vec<String> {
    let Some(select) = &query.select else {
        return vec!["SELECT clause is required".to_string()];
    };
    let Some(from) = &query.from else {
        return vec!["FROM clause is required".to_string()];
    };

    let mut errors = Vec::new();

    if !registry.is_table(from) {
        errors.push(format!("table '{from}' does not exist"));
    }

    for reference in select {
        let (table, field) = if reference.contains('.') {
            split_dotted(reference)
        } else {
            (from.as_str(), reference.as_str())
        };
        if !registry.is_field(table, field) {
            errors.push(format!("field '{field}' does not exist in table '{table}'"));
        }
    }

    for join in &query.joins {
        if !registry.is_table(&join.table) {
            errors.push(format!("table '{}' in JOIN does not exist", join.table));
        }
        for side in join.condition.split('=') {
            let (table, field) = split_dotted(side.trim());
            if !registry.is_field(table, field) {
                errors.push(format!(
                    "field '{field}' does not exist in table '{table}' in JOIN condition"
                ));
            }
        }
    }

    if let Some(predicate) = &query.where_clause {
        for condition in split_logical(predicate) {
            let lhs = condition
                .split(|c: char| matches!(c, '=' | '>' | '<'))
                .next()
                .unwrap_or_default()
                .trim();
            let (table, field) = split_dotted(lhs);
            if !registry.is_field(table, field) {
                errors.push(format!(
                    "field '{field}' does not exist in table '{table}' in WHERE condition"
                ));
            }
        }
    }

    errors
}

/// Splits `table.field`; extra segments are ignored, a missing field
/// segment becomes the empty string (and can never resolve).
fn split_dotted(text: &str) -> (&str, &str) {
    let mut parts = text.split('.');
    let table = parts.next().unwrap_or_default();
    let field = parts.next().unwrap_or_default();
    (table, field)
}

/// Splits a predicate on AND/OR words, case-insensitively.
///
/// The parser already collapsed whitespace, so the connectives are
/// whole space-separated words here.
fn split_logical(predicate: &str) -> Vec<String> {
    let mut conditions = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in predicate.split(' ') {
        if word.eq_ignore_ascii_case("AND") || word.eq_ignore_ascii_case("OR") {
            conditions.push(current.join(" "));
            current.clear();
        } else {
            current.push(word);
        }
    }
    conditions.push(current.join(" "));
    conditions
}
