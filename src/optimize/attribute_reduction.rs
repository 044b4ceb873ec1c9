//! Attribute reduction.
//!
//! Swaps a projection with the join or selection directly below it: the
//! inner operator becomes the new subtree root and the projection moves
//! onto its input. Like tuple reduction this is a single top-down
//! recursion, one swap per projection at a given position.

use tracing::debug;

use crate::algebra::AlgebraNode;

/// Attribute reduction pass.
///
/// # Example Transformation
///
/// Before:
/// ```text
/// Projection(attrs)
///   Selection(pred)
///     Table(Produto)
/// ```
///
/// After:
/// ```text
/// Selection(pred)
///   Projection(attrs)
///     Table(Produto)
/// ```
///
/// For a join the projection moves onto the join's left input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeReduction {}

impl AttributeReduction {
    /// Creates the pass.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Applies attribute reduction to a tree.
    #[must_use]
    pub fn optimize(&self, plan: AlgebraNode) -> AlgebraNode {
        Self::reduce(plan)
    }

    fn reduce(plan: AlgebraNode) -> AlgebraNode {
        match plan {
            AlgebraNode::Projection { attributes, input } => {
                let input = Self::reduce(*input);

                match input {
                    AlgebraNode::Selection { condition, input: inner } => {
                        debug!("relocating projection inside selection");
                        AlgebraNode::Selection {
                            condition,
                            input: Box::new(AlgebraNode::Projection { attributes, input: inner }),
                        }
                    }
                    AlgebraNode::Join { condition, left, right } => {
                        debug!("relocating projection inside join");
                        AlgebraNode::Join {
                            condition,
                            left: Box::new(AlgebraNode::Projection { attributes, input: left }),
                            right,
                        }
                    }
                    other => AlgebraNode::Projection { attributes, input: Box::new(other) },
                }
            }

            AlgebraNode::Join { condition, left, right } => AlgebraNode::Join {
                condition,
                left: Box::new(Self::reduce(*left)),
                right: Box::new(Self::reduce(*right)),
            },

            AlgebraNode::Selection { condition, input } => AlgebraNode::Selection {
                condition,
                input: Box::new(Self::reduce(*input)),
            },

            // no rewrite condition matches, return unchanged
            other => other,
        }
    }
}
