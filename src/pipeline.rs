//! Composed pipeline entry points.
//!
//! [`QueryPipeline`] runs parse → validate → build → (optimize) → emit in
//! one call, the way the rendering front end consumes the library. A
//! non-empty validation result short-circuits into a single
//! [`QueryError::Validation`] carrying the joined messages.
//!
//! The pipeline holds only the read-only registry and the optimizer
//! configuration; calls share no other state and may run concurrently.

use tracing::trace;

use crate::algebra::build_algebra;
use crate::ast::StructuredQuery;
use crate::emit::{emit_plan, ExecutionPlan, PlanGraph};
use crate::error::{QueryError, QueryResult};
use crate::optimize::Optimizer;
use crate::parser::parse_query;
use crate::schema::SchemaRegistry;
use crate::validate::validate_query;

/// The full translation pipeline.
///
/// # Example
///
/// ```
/// use relalg::QueryPipeline;
///
/// let pipeline = QueryPipeline::default();
/// let plan = pipeline
///     .optimized_plan("SELECT Produto.Nome FROM Produto WHERE Produto.Preco > 100")
///     .unwrap();
/// assert_eq!(plan.steps.len(), plan.graph.nodes.len());
/// ```
#[derive(Debug, Clone)]
pub struct QueryPipeline {
    registry: SchemaRegistry,
    optimizer: Optimizer,
}

impl Default for QueryPipeline {
    /// A pipeline over the demo store schema.
    fn default() -> Self {
        Self::new(SchemaRegistry::demo_store())
    }
}

impl QueryPipeline {
    /// Creates a pipeline over the given registry.
    #[must_use]
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry, optimizer: Optimizer::new() }
    }

    /// Replaces the optimizer configuration.
    #[must_use]
    pub fn with_optimizer(mut self, optimizer: Optimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Returns the registry this pipeline validates against.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Parses and validates, folding findings into a single error.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Validation`] when validation finds anything.
    pub fn checked_parse(&self, sql: &str) -> QueryResult<StructuredQuery> {
        trace!(query = sql, "parsing query");
        let query = parse_query(sql);

        let errors = validate_query(&query, &self.registry);
        if errors.is_empty() {
            Ok(query)
        } else {
            Err(QueryError::from_messages(&errors))
        }
    }

    /// Translates a query into its unoptimized operator graph.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Validation`] when validation finds anything.
    pub fn graph(&self, sql: &str) -> QueryResult<PlanGraph> {
        self.plan(sql).map(|plan| plan.graph)
    }

    /// Translates a query into its unoptimized execution plan.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Validation`] when validation finds anything.
    pub fn plan(&self, sql: &str) -> QueryResult<ExecutionPlan> {
        let query = self.checked_parse(sql)?;
        let tree = build_algebra(&query)?;
        Ok(emit_plan(&tree))
    }

    /// Translates a query into its heuristically optimized execution plan.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Validation`] when validation finds anything.
    pub fn optimized_plan(&self, sql: &str) -> QueryResult<ExecutionPlan> {
        let query = self.checked_parse(sql)?;
        let tree = self.optimizer.optimize(build_algebra(&query)?);
        Ok(emit_plan(&tree))
    }
}
