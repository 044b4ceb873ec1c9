//! Relational algebra.
//!
//! - [`node`] - The [`AlgebraNode`] expression tree
//! - [`builder`] - Conversion from a validated query to a tree

pub mod builder;
pub mod node;

pub use builder::build_algebra;
pub use node::AlgebraNode;
