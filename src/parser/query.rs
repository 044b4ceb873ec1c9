//! Clause extraction.
//!
//! Turns a token stream into a [`StructuredQuery`]. Extraction never
//! fails: a clause whose keywords do not line up simply yields an absent
//! field, which the validator later reports as a missing clause.

use crate::ast::{JoinClause, StructuredQuery};

use super::token::{join_tokens, tokenize, Keyword, Token};

/// Parses a raw query string into a [`StructuredQuery`].
///
/// # Example
///
/// ```
/// use relalg::parser::parse_query;
///
/// let query = parse_query("SELECT Nome FROM Produto WHERE Preco > 100;");
/// assert_eq!(query.select.as_deref(), Some(&["Nome".to_string()][..]));
/// assert_eq!(query.from.as_deref(), Some("Produto"));
/// assert_eq!(query.where_clause.as_deref(), Some("Preco > 100"));
/// ```
#[must_use]
pub fn parse_query(text: &str) -> StructuredQuery {
    let tokens = tokenize(text);

    StructuredQuery {
        select: extract_select(&tokens),
        from: extract_from(&tokens),
        where_clause: extract_where(&tokens),
        joins: extract_joins(&tokens),
    }
}

fn find_keyword(tokens: &[Token], keyword: Keyword, start: usize) -> Option<usize> {
    tokens[start..].iter().position(|t| t.is_keyword(keyword)).map(|i| start + i)
}

/// End of a clause span: the next token matching `stops`, or end of input.
fn clause_end(tokens: &[Token], start: usize, stops: &[Keyword]) -> usize {
    tokens[start..]
        .iter()
        .position(|t| stops.iter().any(|&k| t.is_keyword(k)))
        .map_or(tokens.len(), |i| start + i)
}

fn span_text(tokens: &[Token], start: usize, end: usize) -> Option<String> {
    let span = &tokens[start..end];
    if span.is_empty() {
        None
    } else {
        Some(join_tokens(span))
    }
}

fn extract_select(tokens: &[Token]) -> Option<Vec<String>> {
    let select = find_keyword(tokens, Keyword::Select, 0)?;
    let from = find_keyword(tokens, Keyword::From, select + 1)?;
    let text = span_text(tokens, select + 1, from)?;
    Some(text.split(',').map(|part| part.trim().to_string()).collect())
}

fn extract_from(tokens: &[Token]) -> Option<String> {
    let from = find_keyword(tokens, Keyword::From, 0)?;
    let end = clause_end(tokens, from + 1, &[Keyword::Where, Keyword::Join]);
    span_text(tokens, from + 1, end)
}

fn extract_where(tokens: &[Token]) -> Option<String> {
    let at = find_keyword(tokens, Keyword::Where, 0)?;
    let end = clause_end(tokens, at + 1, &[Keyword::Join]);
    span_text(tokens, at + 1, end)
}

fn extract_joins(tokens: &[Token]) -> Vec<JoinClause> {
    let mut joins = Vec::new();
    let mut cursor = 0;

    while let Some(at) = find_keyword(tokens, Keyword::Join, cursor) {
        let Some(on) = find_keyword(tokens, Keyword::On, at + 1) else {
            break;
        };
        let end = clause_end(tokens, on + 1, &[Keyword::Join, Keyword::Where]);

        let table = span_text(tokens, at + 1, on);
        let condition = span_text(tokens, on + 1, end);
        match (table, condition) {
            (Some(table), Some(condition)) => {
                joins.push(JoinClause { table, condition });
                cursor = end;
            }
            // malformed pair, resume after this JOIN keyword
            _ => cursor = at + 1,
        }
    }

    joins
}
