//! Nodes, relations, tuples and the immutable model snapshot.

use crate::builtin;
use crate::error::ContractViolation;
use crate::truth::TruthValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Names
// ============================================================================

/// Something with a fully qualified name and a short display name.
pub trait Named {
    /// Fully qualified name, used for identifiers.
    fn name(&self) -> &str;

    /// Short name, shown when abbreviation is on.
    fn simple_name(&self) -> &str;
}

/// Last `::`-separated segment of a qualified name.
pub fn simple_name_of(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

// ============================================================================
// Nodes
// ============================================================================

/// How a node came to be in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// Created by the solver without a name in the source
    Implicit,
    /// Declared as an individual in the source
    Individual,
    /// A `new` node standing for possibly many objects
    New,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Implicit => "IMPLICIT",
            NodeKind::Individual => "INDIVIDUAL",
            NodeKind::New => "NEW",
        }
    }
}

/// A node of the model. Its identity is its position in [`SemanticModel::nodes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub simple_name: String,
    pub kind: NodeKind,
    /// Opaque key shared by structurally equivalent nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hash: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let name = name.into();
        Self {
            simple_name: simple_name_of(&name).to_string(),
            name,
            kind,
            type_hash: None,
        }
    }

    pub fn with_type_hash(mut self, type_hash: impl Into<String>) -> Self {
        self.type_hash = Some(type_hash.into());
        self
    }
}

impl Named for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

// ============================================================================
// Relations
// ============================================================================

/// What kind of symbol a relation was declared as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RelationDetail {
    /// A class (unary)
    #[serde(rename_all = "camelCase")]
    Class { abstract_class: bool },

    /// A reference between classes
    Reference { containment: bool },

    /// The reverse direction of the reference named by `opposite`
    Opposite { container: bool, opposite: String },

    /// A predicate; error predicates have no may-matches
    Predicate { error: bool },

    /// A builtin symbol such as `exists` or `equals`
    Builtin,
}

/// A relation symbol of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub name: String,
    #[serde(default)]
    pub simple_name: String,
    pub arity: usize,
    pub detail: RelationDetail,
}

impl Relation {
    pub fn new(name: impl Into<String>, arity: usize, detail: RelationDetail) -> Self {
        let name = name.into();
        Self {
            simple_name: simple_name_of(&name).to_string(),
            name,
            arity,
            detail,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.detail, RelationDetail::Builtin)
    }
}

impl Named for Relation {
    fn name(&self) -> &str {
        &self.name
    }

    fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

// ============================================================================
// Tuples
// ============================================================================

/// A fact: node indices for each argument position, then its truth value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuple {
    args: Vec<usize>,
    value: TruthValue,
}

impl Tuple {
    pub fn new(args: impl Into<Vec<usize>>, value: TruthValue) -> Self {
        Self {
            args: args.into(),
            value,
        }
    }

    pub fn unary(node: usize, value: TruthValue) -> Self {
        Self::new(vec![node], value)
    }

    pub fn binary(from: usize, to: usize, value: TruthValue) -> Self {
        Self::new(vec![from, to], value)
    }

    /// Argument node indices; the sort key of the tuple.
    pub fn args(&self) -> &[usize] {
        &self.args
    }

    pub fn value(&self) -> TruthValue {
        self.value
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// An immutable snapshot of a partial interpretation.
///
/// Construction goes through [`SemanticModelBuilder`] (or JSON ingestion,
/// which uses it), so every stored tuple has exactly `arity` arguments and
/// each relation's tuples are strictly ascending by argument indices.
#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    nodes: Vec<Node>,
    relations: IndexMap<String, Relation>,
    interpretation: IndexMap<String, Vec<Tuple>>,
    counts: Vec<(usize, String)>,
}

impl SemanticModel {
    pub fn builder() -> SemanticModelBuilder {
        SemanticModelBuilder::new()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Relations in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Sorted tuples of a relation (empty if it has none).
    pub fn tuples(&self, relation: &str) -> &[Tuple] {
        self.interpretation
            .get(relation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(node, value)` facts of the `exists` builtin.
    pub fn exists_facts(&self) -> impl Iterator<Item = (usize, TruthValue)> + '_ {
        self.tuples(builtin::EXISTS)
            .iter()
            .filter_map(|tuple| match *tuple.args() {
                [node] => Some((node, tuple.value)),
                _ => None,
            })
    }

    /// `(node, value)` facts of the `equals` builtin restricted to self pairs.
    pub fn equals_self_facts(&self) -> impl Iterator<Item = (usize, TruthValue)> + '_ {
        self.tuples(builtin::EQUALS)
            .iter()
            .filter_map(|tuple| match *tuple.args() {
                [from, to] if from == to => Some((from, tuple.value)),
                _ => None,
            })
    }

    /// `(node, label)` facts of the `count` builtin.
    pub fn counts(&self) -> &[(usize, String)] {
        &self.counts
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

/// Builder that validates the tuple contract while assembling a snapshot.
#[derive(Debug, Default)]
pub struct SemanticModelBuilder {
    nodes: Vec<Node>,
    relations: Vec<Relation>,
    interpretation: IndexMap<String, Vec<Tuple>>,
    counts: Vec<(usize, String)>,
}

impl SemanticModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn relations(mut self, relations: impl IntoIterator<Item = Relation>) -> Self {
        self.relations.extend(relations);
        self
    }

    /// Append tuples of the named relation. Order is checked in [`build`](Self::build).
    pub fn tuples(mut self, relation: impl Into<String>, tuples: impl IntoIterator<Item = Tuple>) -> Self {
        self.interpretation
            .entry(relation.into())
            .or_default()
            .extend(tuples);
        self
    }

    pub fn tuple(self, relation: impl Into<String>, tuple: Tuple) -> Self {
        self.tuples(relation, [tuple])
    }

    pub fn exists(self, node: usize, value: TruthValue) -> Self {
        self.tuple(builtin::EXISTS, Tuple::unary(node, value))
    }

    pub fn count(mut self, node: usize, label: impl Into<String>) -> Self {
        self.counts.push((node, label.into()));
        self
    }

    /// Validate and freeze the snapshot.
    pub fn build(self) -> Result<SemanticModel, ContractViolation> {
        let mut relations = IndexMap::with_capacity(self.relations.len());
        for relation in self.relations {
            if relations.contains_key(&relation.name) {
                return Err(ContractViolation::DuplicateRelation {
                    name: relation.name,
                });
            }
            check_builtin_arity(&relation)?;
            relations.insert(relation.name.clone(), relation);
        }

        let mut interpretation = IndexMap::with_capacity(self.interpretation.len());
        for (name, tuples) in self.interpretation {
            let Some(arity) = arity_of(&relations, &name) else {
                tracing::trace!(relation = %name, "dropping tuples of unknown relation");
                continue;
            };
            check_tuples(&name, arity, &tuples)?;
            interpretation.insert(name, tuples);
        }

        Ok(SemanticModel {
            nodes: self.nodes,
            relations,
            interpretation,
            counts: self.counts,
        })
    }
}

/// Reject a declaration of a builtin relation whose arity is not the builtin's.
pub(crate) fn check_builtin_arity(relation: &Relation) -> Result<(), ContractViolation> {
    match builtin::arity(&relation.name) {
        Some(expected) if expected != relation.arity => Err(ContractViolation::BuiltinArity {
            name: relation.name.clone(),
            expected,
            found: relation.arity,
        }),
        _ => Ok(()),
    }
}

fn arity_of(relations: &IndexMap<String, Relation>, name: &str) -> Option<usize> {
    relations
        .get(name)
        .map(|relation| relation.arity)
        .or_else(|| builtin::arity(name))
}

fn check_tuples(relation: &str, arity: usize, tuples: &[Tuple]) -> Result<(), ContractViolation> {
    for (index, tuple) in tuples.iter().enumerate() {
        if tuple.args.len() != arity {
            return Err(ContractViolation::ArityMismatch {
                relation: relation.to_string(),
                tuple: index,
                expected: arity + 1,
                found: tuple.args.len() + 1,
            });
        }
    }
    for (index, pair) in tuples.windows(2).enumerate() {
        if pair[0].args >= pair[1].args {
            return Err(ContractViolation::Unsorted {
                relation: relation.to_string(),
                tuple: index + 1,
            });
        }
    }
    Ok(())
}
