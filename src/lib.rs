//! `relalg`
//!
//! This crate teaches relational-algebra translation of a SQL subset:
//! it parses a restricted query, validates it against a fixed schema,
//! converts it into an algebra expression tree, optionally rewrites the
//! tree with two textbook heuristics, and emits a human-readable
//! execution plan plus an operator graph for visualization.
//!
//! # Overview
//!
//! The pipeline runs in fixed stages:
//!
//! ```text
//! query string → parse → validate → build → [optimize] → emit
//! ```
//!
//! Every stage is synchronous and side-effect free; the only shared
//! state is the read-only [`SchemaRegistry`].
//!
//! # Modules
//!
//! - [`parser`] - Tokenizer and clause extraction
//! - [`ast`] - The structured query descriptor
//! - [`schema`] - Table/column registry
//! - [`validate`] - Schema validation messages
//! - [`algebra`] - The expression tree and its builder
//! - [`optimize`] - Tuple and attribute reduction passes
//! - [`emit`] - Execution steps and operator graph
//! - [`pipeline`] - Composed entry points
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! Run the stages one at a time:
//!
//! ```
//! use relalg::{build_algebra, parse_query, validate_query, SchemaRegistry};
//!
//! let registry = SchemaRegistry::demo_store();
//! let query = parse_query("SELECT Produto.Nome FROM Produto WHERE Produto.Preco > 100");
//! assert!(validate_query(&query, &registry).is_empty());
//!
//! let tree = build_algebra(&query).unwrap();
//! assert_eq!(tree.to_string(), "π(Produto.Nome)(σ(Produto.Preco > 100)(Produto))");
//! ```
//!
//! Or use the composed pipeline the way the rendering widget does:
//!
//! ```
//! use relalg::QueryPipeline;
//!
//! let pipeline = QueryPipeline::default();
//! let plan = pipeline
//!     .optimized_plan(
//!         "SELECT Produto.Nome, Categoria.Descricao FROM Produto \
//!          JOIN Categoria ON Produto.Categoria_idCategoria = Categoria.idCategoria",
//!     )
//!     .unwrap();
//! assert_eq!(plan.graph.edges.len(), plan.graph.nodes.len() - 1);
//! ```

pub mod algebra;
pub mod ast;
pub mod emit;
pub mod error;
pub mod optimize;
pub mod parser;
pub mod pipeline;
pub mod schema;
pub mod validate;

// Re-export commonly used items at the crate root
pub use algebra::{build_algebra, AlgebraNode};
pub use ast::{JoinClause, StructuredQuery};
pub use emit::{emit_plan, ExecutionPlan, GraphEdge, GraphNode, PlanGraph};
pub use error::{QueryError, QueryResult};
pub use optimize::Optimizer;
pub use parser::parse_query;
pub use pipeline::QueryPipeline;
pub use schema::{SchemaRegistry, TableSchema};
pub use validate::validate_query;
