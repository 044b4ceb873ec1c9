//! Heuristic optimization.
//!
//! Two rule-based rewrite passes over an algebra tree, applied in a
//! fixed order:
//!
//! - **Tuple reduction**: relocates selections relative to joins
//! - **Attribute reduction**: relocates projections relative to
//!   joins and selections
//!
//! Each pass runs exactly once per [`Optimizer::optimize`] call; the
//! passes are single recursive rewrites, not fixed-point iterations, and
//! a relocated operator is not revisited within the same run.
//!
//! # Example
//!
//! ```
//! use relalg::algebra::AlgebraNode;
//! use relalg::optimize::Optimizer;
//!
//! let tree = AlgebraNode::table("Produto")
//!     .select("Preco > 100")
//!     .join(AlgebraNode::table("Categoria"), "Produto.Categoria_idCategoria = Categoria.idCategoria");
//!
//! let optimized = Optimizer::new().optimize(tree);
//! assert_eq!(optimized.node_type(), "Selection");
//! ```

mod attribute_reduction;
mod tuple_reduction;

pub use attribute_reduction::AttributeReduction;
pub use tuple_reduction::TupleReduction;

use crate::algebra::AlgebraNode;

/// Heuristic optimizer.
///
/// Applies tuple reduction, then attribute reduction. Either pass can be
/// disabled for teaching one heuristic in isolation.
#[derive(Debug, Clone, Copy)]
pub struct Optimizer {
    tuple_reduction: bool,
    attribute_reduction: bool,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Creates an optimizer with both passes enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { tuple_reduction: true, attribute_reduction: true }
    }

    /// Disables tuple reduction.
    #[must_use]
    pub const fn without_tuple_reduction(mut self) -> Self {
        self.tuple_reduction = false;
        self
    }

    /// Disables attribute reduction.
    #[must_use]
    pub const fn without_attribute_reduction(mut self) -> Self {
        self.attribute_reduction = false;
        self
    }

    /// Optimizes an algebra tree.
    #[must_use]
    pub fn optimize(&self, plan: AlgebraNode) -> AlgebraNode {
        let mut current = plan;

        if self.tuple_reduction {
            current = TupleReduction::new().optimize(current);
        }
        if self.attribute_reduction {
            current = AttributeReduction::new().optimize(current);
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_compose_in_order() {
        // selection below a join, projection above both
        let tree = AlgebraNode::table("Produto")
            .select("Produto.Preco > 100")
            .join(AlgebraNode::table("Categoria"), "c")
            .project(vec!["Produto.Nome".to_string()]);

        let optimized = Optimizer::new().optimize(tree);

        // tuple reduction leaves the projection root alone; attribute
        // reduction then swaps the projection onto the join's left input
        let expected = AlgebraNode::table("Produto")
            .select("Produto.Preco > 100")
            .project(vec!["Produto.Nome".to_string()])
            .join(AlgebraNode::table("Categoria"), "c");
        assert_eq!(optimized, expected);
    }

    #[test]
    fn selection_lifts_above_join() {
        let tree = AlgebraNode::table("Produto")
            .select("Produto.Preco > 100")
            .join(AlgebraNode::table("Categoria"), "c");

        let optimized = Optimizer::new().optimize(tree);

        let expected = AlgebraNode::table("Produto")
            .join(AlgebraNode::table("Categoria"), "c")
            .select("Produto.Preco > 100");
        assert_eq!(optimized, expected);
    }

    #[test]
    fn disabled_passes_do_nothing() {
        let tree = AlgebraNode::table("A").select("p").join(AlgebraNode::table("B"), "c");

        let untouched = Optimizer::new()
            .without_tuple_reduction()
            .without_attribute_reduction()
            .optimize(tree.clone());
        assert_eq!(untouched, tree);
    }

    #[test]
    fn optimize_is_idempotent() {
        let selection_under_join =
            AlgebraNode::table("A").select("p").join(AlgebraNode::table("B"), "c");
        let join_under_selection =
            AlgebraNode::table("A").join(AlgebraNode::table("B"), "c").select("p");

        for tree in [selection_under_join, join_under_selection] {
            let optimizer = Optimizer::new();
            let once = optimizer.optimize(tree);
            let twice = optimizer.optimize(once.clone());
            assert_eq!(twice, once);
        }
    }
}
