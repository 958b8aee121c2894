//! Per-node attributes derived from visible tuples and builtin facts.

use crate::visibility::VisibilityPolicy;
use indexmap::IndexMap;
use partial_dot_semantics::{SemanticModel, TruthValue};

/// Count label of nodes without a `count` fact.
pub const DEFAULT_COUNT: &str = "[0]";

/// Derived attributes of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// No visible tuple mentions the node
    pub isolated: bool,
    pub exists: TruthValue,
    pub equals_self: TruthValue,
    /// Unary relation name to value, in the order first seen
    pub unary_predicates: IndexMap<String, TruthValue>,
    pub count: String,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            isolated: true,
            exists: TruthValue::False,
            equals_self: TruthValue::False,
            unary_predicates: IndexMap::new(),
            count: DEFAULT_COUNT.to_string(),
        }
    }
}

impl NodeData {
    /// Whether the node gets drawn at all.
    pub fn is_rendered(&self, policy: &VisibilityPolicy) -> bool {
        !self.isolated && (policy.show_non_existent || self.exists != TruthValue::False)
    }
}

/// Compute [`NodeData`] for every node of the model, indexed like
/// [`SemanticModel::nodes`].
pub fn compute_node_data(model: &SemanticModel, policy: &VisibilityPolicy) -> Vec<NodeData> {
    let mut node_data = vec![NodeData::default(); model.node_count()];

    for relation in model.relations() {
        let visibility = policy.visibility_of(relation);
        if !visibility.is_visible() {
            continue;
        }
        for tuple in model.tuples(&relation.name) {
            let value = tuple.value();
            if !visibility.shows(value) {
                continue;
            }
            for &index in tuple.args() {
                let Some(data) = node_data.get_mut(index) else {
                    tracing::trace!(relation = %relation.name, index, "tuple refers to a missing node");
                    continue;
                };
                data.isolated = false;
                if relation.arity == 1 {
                    data.unary_predicates.insert(relation.name.clone(), value);
                }
            }
        }
    }

    for (index, value) in model.exists_facts() {
        if let Some(data) = node_data.get_mut(index) {
            data.exists = value;
        }
    }
    for (index, value) in model.equals_self_facts() {
        if let Some(data) = node_data.get_mut(index) {
            data.equals_self = value;
        }
    }
    for (index, label) in model.counts() {
        if let Some(data) = node_data.get_mut(*index) {
            data.count.clone_from(label);
        }
    }

    node_data
}
