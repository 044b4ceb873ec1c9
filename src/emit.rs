//! Execution plan and operator graph emission.
//!
//! Walks an algebra tree in pre-order and produces two parallel views of
//! it: an ordered list of human-readable execution steps, and a node/edge
//! graph for the rendering widget to lay out top-down. Node ids are
//! assigned sequentially (`Node0`, `Node1`, ...) in visit order, so a
//! join's own node always precedes both of its children's.

use serde::{Deserialize, Serialize};

use crate::algebra::AlgebraNode;

/// A labeled graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Sequential id in traversal order (`Node0`, `Node1`, ...).
    pub id: String,
    /// Display label, after glyph substitution.
    pub label: String,
}

/// A directed edge from parent operator to child operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// The parent node id.
    pub from: String,
    /// The child node id.
    pub to: String,
}

/// The operator graph of an algebra tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanGraph {
    /// Nodes in traversal order.
    pub nodes: Vec<GraphNode>,
    /// One edge per non-root node, parent to child.
    pub edges: Vec<GraphEdge>,
}

/// An execution plan: ordered step descriptions plus the operator graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// One step per visited node, in traversal order.
    pub steps: Vec<String>,
    /// The operator graph over the same traversal.
    pub graph: PlanGraph,
}

/// Emits the execution plan and operator graph for a tree.
///
/// # Example
///
/// ```
/// use relalg::algebra::AlgebraNode;
/// use relalg::emit::emit_plan;
///
/// let plan = emit_plan(&AlgebraNode::table("Produto"));
/// assert_eq!(plan.graph.nodes[0].label, "Tabela: Produto");
/// assert_eq!(plan.steps, ["Tabela lida: Produto"]);
/// ```
#[must_use]
pub fn emit_plan(plan: &AlgebraNode) -> ExecutionPlan {
    let mut emitter = PlanEmitter::default();
    emitter.traverse(plan, None);
    ExecutionPlan { steps: emitter.steps, graph: PlanGraph { nodes: emitter.nodes, edges: emitter.edges } }
}

/// Substitutes operator glyphs for the literal label prefixes.
fn format_label(label: &str) -> String {
    const GLYPHS: [(&str, &str); 4] =
        [("Select: ", "σ "), ("Projeção: ", "π "), ("Join: ", "⋈ "), ("Tabela: ", "Tabela: ")];
    for (prefix, glyph) in GLYPHS {
        if let Some(rest) = label.strip_prefix(prefix) {
            return format!("{glyph}{rest}");
        }
    }
    label.to_string()
}

#[derive(Default)]
struct PlanEmitter {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    steps: Vec<String>,
    next_id: usize,
}

impl PlanEmitter {
    fn push_node(&mut self, label: &str, parent: Option<&str>) -> String {
        let id = format!("Node{}", self.next_id);
        self.next_id += 1;

        self.nodes.push(GraphNode { id: id.clone(), label: format_label(label) });
        if let Some(parent) = parent {
            self.edges.push(GraphEdge { from: parent.to_string(), to: id.clone() });
        }
        id
    }

    fn traverse(&mut self, plan: &AlgebraNode, parent: Option<&str>) {
        match plan {
            AlgebraNode::Table { name } => {
                self.push_node(&format!("Tabela: {name}"), parent);
                self.steps.push(format!("Tabela lida: {name}"));
            }
            AlgebraNode::Selection { condition, input } => {
                let id = self.push_node(&format!("Select: {condition}"), parent);
                self.steps.push(format!("Select feito: {condition}"));
                self.traverse(input, Some(&id));
            }
            AlgebraNode::Projection { attributes, input } => {
                let attributes = attributes.join(", ");
                let id = self.push_node(&format!("Projeção: {attributes}"), parent);
                self.steps.push(format!("Projeção feita: {attributes}"));
                self.traverse(input, Some(&id));
            }
            AlgebraNode::Join { condition, left, right } => {
                let id = self.push_node(&format!("Join: {condition}"), parent);
                self.steps.push(format!("Join feito: {condition}"));
                self.traverse(left, Some(&id));
                self.traverse(right, Some(&id));
            }
            AlgebraNode::Rename { new_name, input } => {
                let id = self.push_node(&format!("ρ {new_name}"), parent);
                self.steps.push(format!("Renomeação feita: {new_name}"));
                self.traverse(input, Some(&id));
            }
            AlgebraNode::Union { left, right } => {
                let id = self.push_node("∪", parent);
                self.steps.push("União feita".to_string());
                self.traverse(left, Some(&id));
                self.traverse(right, Some(&id));
            }
            AlgebraNode::Difference { left, right } => {
                let id = self.push_node("−", parent);
                self.steps.push("Diferença feita".to_string());
                self.traverse(left, Some(&id));
                self.traverse(right, Some(&id));
            }
        }
    }
}
