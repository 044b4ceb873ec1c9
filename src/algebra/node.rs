//! Relational-algebra expression tree.
//!
//! [`AlgebraNode`] is a closed sum type: every consumer (optimizer,
//! emitter, stringifier) matches it exhaustively, so adding a variant
//! breaks every match site at compile time. Each node owns its children
//! outright; trees are strict hierarchies with no sharing.

use std::fmt;

/// A relational-algebra expression.
///
/// The builder only produces `Table`, `Selection`, `Projection` and
/// `Join`; `Rename`, `Union` and `Difference` belong to the algebra's
/// general vocabulary and stay representable for hand-built trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraNode {
    /// Base relation. Leaf.
    Table {
        /// The table name.
        name: String,
    },

    /// Selection (σ): filters by a predicate.
    Selection {
        /// The raw predicate text.
        condition: String,
        /// The input relation.
        input: Box<AlgebraNode>,
    },

    /// Projection (π): restricts to an attribute list.
    Projection {
        /// The projected attributes, in select-list order.
        attributes: Vec<String>,
        /// The input relation.
        input: Box<AlgebraNode>,
    },

    /// Join (⋈): combines two relations on a condition.
    Join {
        /// The raw join condition text.
        condition: String,
        /// The left input relation.
        left: Box<AlgebraNode>,
        /// The right input relation.
        right: Box<AlgebraNode>,
    },

    /// Rename (ρ): gives the input relation a new name.
    Rename {
        /// The new relation name.
        new_name: String,
        /// The input relation.
        input: Box<AlgebraNode>,
    },

    /// Union (∪) of two relations.
    Union {
        /// The left input relation.
        left: Box<AlgebraNode>,
        /// The right input relation.
        right: Box<AlgebraNode>,
    },

    /// Difference (−) of two relations.
    Difference {
        /// The left input relation.
        left: Box<AlgebraNode>,
        /// The right input relation.
        right: Box<AlgebraNode>,
    },
}

impl AlgebraNode {
    // ========== Constructors ==========

    /// Creates a base table relation.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table { name: name.into() }
    }

    // ========== Builder Methods ==========

    /// Wraps this relation in a selection.
    #[must_use]
    pub fn select(self, condition: impl Into<String>) -> Self {
        Self::Selection { condition: condition.into(), input: Box::new(self) }
    }

    /// Wraps this relation in a projection.
    #[must_use]
    pub fn project(self, attributes: Vec<String>) -> Self {
        Self::Projection { attributes, input: Box::new(self) }
    }

    /// Joins this relation with another on a condition.
    #[must_use]
    pub fn join(self, right: AlgebraNode, condition: impl Into<String>) -> Self {
        Self::Join {
            condition: condition.into(),
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Renames this relation.
    #[must_use]
    pub fn rename(self, new_name: impl Into<String>) -> Self {
        Self::Rename { new_name: new_name.into(), input: Box::new(self) }
    }

    /// Unions this relation with another.
    #[must_use]
    pub fn union(self, other: AlgebraNode) -> Self {
        Self::Union { left: Box::new(self), right: Box::new(other) }
    }

    /// Subtracts another relation from this one.
    #[must_use]
    pub fn difference(self, other: AlgebraNode) -> Self {
        Self::Difference { left: Box::new(self), right: Box::new(other) }
    }

    // ========== Utility Methods ==========

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> Vec<&AlgebraNode> {
        match self {
            Self::Table { .. } => vec![],
            Self::Selection { input, .. }
            | Self::Projection { input, .. }
            | Self::Rename { input, .. } => vec![input.as_ref()],
            Self::Join { left, right, .. }
            | Self::Union { left, right }
            | Self::Difference { left, right } => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Table { .. })
    }

    /// Returns the variant name (for display/debugging).
    #[must_use]
    pub fn node_type(&self) -> &'static str {
        match self {
            Self::Table { .. } => "Table",
            Self::Selection { .. } => "Selection",
            Self::Projection { .. } => "Projection",
            Self::Join { .. } => "Join",
            Self::Rename { .. } => "Rename",
            Self::Union { .. } => "Union",
            Self::Difference { .. } => "Difference",
        }
    }
}

/// Renders the classical algebraic notation, e.g.
/// `π(Nome, Preco)(σ(Preco > 100)(Produto))`.
impl fmt::Display for AlgebraNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { name } => write!(f, "{name}"),
            Self::Selection { condition, input } => write!(f, "σ({condition})({input})"),
            Self::Projection { attributes, input } => {
                write!(f, "π({})({input})", attributes.join(", "))
            }
            Self::Join { condition, left, right } => {
                write!(f, "({left} ⨝ {right} ON {condition})")
            }
            Self::Rename { new_name, input } => write!(f, "ρ({new_name})({input})"),
            Self::Union { left, right } => write!(f, "({left} ∪ {right})"),
            Self::Difference { left, right } => write!(f, "({left} − {right})"),
        }
    }
}
