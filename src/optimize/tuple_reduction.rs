//! Tuple reduction.
//!
//! Relocates a selection sitting directly below a join to directly above
//! that join. The pass is a single top-down recursion: a join first
//! reduces both children, then checks the left child and only if it did
//! not match the right one. At most one side is relocated per join, and
//! the relocated selection is not revisited.

use tracing::debug;

use crate::algebra::AlgebraNode;

/// Tuple reduction pass.
///
/// # Example Transformation
///
/// Before:
/// ```text
/// Join(cond)
///   Selection(pred)
///     Table(Produto)
///   Table(Categoria)
/// ```
///
/// After:
/// ```text
/// Selection(pred)
///   Join(cond)
///     Table(Produto)
///     Table(Categoria)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleReduction {}

impl TupleReduction {
    /// Creates the pass.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Applies tuple reduction to a tree.
    #[must_use]
    pub fn optimize(&self, plan: AlgebraNode) -> AlgebraNode {
        Self::reduce(plan)
    }

    fn reduce(plan: AlgebraNode) -> AlgebraNode {
        match plan {
            AlgebraNode::Join { condition, left, right } => {
                let left = Self::reduce(*left);
                let right = Self::reduce(*right);

                match left {
                    AlgebraNode::Selection { condition: selection, input } => {
                        debug!(condition = %selection, "relocating selection above join");
                        AlgebraNode::Selection {
                            condition: selection,
                            input: Box::new(AlgebraNode::Join {
                                condition,
                                left: input,
                                right: Box::new(right),
                            }),
                        }
                    }
                    left => match right {
                        AlgebraNode::Selection { condition: selection, input } => {
                            debug!(condition = %selection, "relocating selection above join");
                            AlgebraNode::Selection {
                                condition: selection,
                                input: Box::new(AlgebraNode::Join {
                                    condition,
                                    left: Box::new(left),
                                    right: input,
                                }),
                            }
                        }
                        right => AlgebraNode::Join {
                            condition,
                            left: Box::new(left),
                            right: Box::new(right),
                        },
                    },
                }
            }

            AlgebraNode::Selection { condition, input } => AlgebraNode::Selection {
                condition,
                input: Box::new(Self::reduce(*input)),
            },

            // no rewrite condition matches, return unchanged
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_under_join_moves_above_it() {
        let tree = AlgebraNode::table("Produto")
            .select("Produto.Preco > 100")
            .join(AlgebraNode::table("Categoria"), "Produto.Categoria_idCategoria = Categoria.idCategoria");

        let reduced = TupleReduction::new().optimize(tree);

        let expected = AlgebraNode::table("Produto")
            .join(AlgebraNode::table("Categoria"), "Produto.Categoria_idCategoria = Categoria.idCategoria")
            .select("Produto.Preco > 100");
        assert_eq!(reduced, expected);
    }

    #[test]
    fn right_side_moves_when_left_does_not_match() {
        let tree = AlgebraNode::table("Pedido")
            .join(AlgebraNode::table("Cliente").select("Cliente.Nome = 'Ana'"), "c");

        let reduced = TupleReduction::new().optimize(tree);

        let expected = AlgebraNode::table("Pedido")
            .join(AlgebraNode::table("Cliente"), "c")
            .select("Cliente.Nome = 'Ana'");
        assert_eq!(reduced, expected);
    }

    #[test]
    fn only_left_side_moves_when_both_match() {
        let tree = AlgebraNode::table("A")
            .select("pa")
            .join(AlgebraNode::table("B").select("pb"), "c");

        let reduced = TupleReduction::new().optimize(tree);

        // left selection relocated, right one stays in place at this call
        let expected = AlgebraNode::table("A")
            .join(AlgebraNode::table("B").select("pb"), "c")
            .select("pa");
        assert_eq!(reduced, expected);
    }

    #[test]
    fn selection_over_join_is_stable() {
        let tree = AlgebraNode::table("A").join(AlgebraNode::table("B"), "c").select("p");
        let reduced = TupleReduction::new().optimize(tree.clone());
        assert_eq!(reduced, tree);
    }

    #[test]
    fn non_matching_nodes_are_unchanged() {
        let tree = AlgebraNode::table("Produto").project(vec!["Nome".to_string()]);
        let reduced = TupleReduction::new().optimize(tree.clone());
        assert_eq!(reduced, tree);
    }
}
