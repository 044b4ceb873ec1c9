//! Algebra construction.
//!
//! Builds the canonical tree shape `Projection? → Selection? → Join* → Table`
//! from a validated [`StructuredQuery`].

use crate::ast::StructuredQuery;
use crate::error::{QueryError, QueryResult};

use super::node::AlgebraNode;

/// Converts a validated query into a relational-algebra tree.
///
/// Joins fold left to right over the base table, each new join taking the
/// accumulated tree as its left input, so the last listed join ends up as
/// the root join. The where predicate then wraps the joins, and the
/// select list wraps everything.
///
/// Only defined for queries that passed validation; the single guard kept
/// here is the FROM clause, without which no base relation exists.
///
/// # Errors
///
/// Returns [`QueryError::MissingClause`] when the query has no FROM clause.
///
/// # Example
///
/// ```
/// use relalg::algebra::build_algebra;
/// use relalg::parser::parse_query;
///
/// let query = parse_query("SELECT Nome FROM Produto WHERE Preco > 100");
/// let tree = build_algebra(&query).unwrap();
/// assert_eq!(tree.to_string(), "π(Nome)(σ(Preco > 100)(Produto))");
/// ```
pub fn build_algebra(query: &StructuredQuery) -> QueryResult<AlgebraNode> {
    let from =
        query.from.as_deref().ok_or_else(|| QueryError::MissingClause("FROM".to_string()))?;

    let mut relation = AlgebraNode::table(from);

    for join in &query.joins {
        relation = relation.join(AlgebraNode::table(&join.table), &join.condition);
    }

    if let Some(predicate) = &query.where_clause {
        relation = relation.select(predicate);
    }

    if let Some(attributes) = &query.select {
        relation = relation.project(attributes.clone());
    }

    Ok(relation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_query;

    #[test]
    fn canonical_shape() {
        let query =
            parse_query("SELECT Produto.Nome, Produto.Preco FROM Produto WHERE Produto.Preco > 100");
        let tree = build_algebra(&query).unwrap();

        let expected = AlgebraNode::table("Produto")
            .select("Produto.Preco > 100")
            .project(vec!["Produto.Nome".to_string(), "Produto.Preco".to_string()]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn later_joins_sit_nearer_the_root() {
        let query = parse_query(
            "SELECT Pedido.idPedido FROM Pedido \
             JOIN Cliente ON Pedido.Cliente_idCliente = Cliente.idCliente \
             JOIN Status ON Pedido.Status_idStatus = Status.idStatus",
        );
        let tree = build_algebra(&query).unwrap();

        let expected = AlgebraNode::table("Pedido")
            .join(AlgebraNode::table("Cliente"), "Pedido.Cliente_idCliente = Cliente.idCliente")
            .join(AlgebraNode::table("Status"), "Pedido.Status_idStatus = Status.idStatus")
            .project(vec!["Pedido.idPedido".to_string()]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn bare_table_without_select_or_where() {
        let query = StructuredQuery { from: Some("Produto".to_string()), ..Default::default() };
        let tree = build_algebra(&query).unwrap();
        assert_eq!(tree, AlgebraNode::table("Produto"));
    }

    #[test]
    fn missing_from_is_an_error() {
        let query = StructuredQuery::default();
        let err = build_algebra(&query).unwrap_err();
        assert_eq!(err.to_string(), "missing required clause: FROM");
    }
}
