//! JSON ingestion of semantics snapshots.
//!
//! The solver ships a snapshot as
//!
//! ```json
//! {
//!   "nodes": [{ "name": "alice", "kind": "INDIVIDUAL", "typeHash": "3a" }],
//!   "relations": [{ "name": "friend", "arity": 2,
//!                   "detail": { "type": "reference", "containment": false } }],
//!   "partialInterpretation": {
//!     "friend": [[0, 0, "UNKNOWN"]],
//!     "builtin::exists": [[0, "TRUE"]],
//!     "builtin::count": [[0, "[1]"]]
//!   }
//! }
//! ```
//!
//! Tuples arrive as untyped JSON arrays, so every slot is checked here and any
//! mismatch is reported as a [`ContractViolation`].

use crate::builtin;
use crate::error::ContractViolation;
use crate::model::{
    check_builtin_arity, simple_name_of, Node, Relation, SemanticModel, SemanticModelBuilder, Tuple,
};
use crate::truth::TruthValue;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// A snapshot exactly as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSemantics {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub partial_interpretation: IndexMap<String, Vec<Vec<Value>>>,
}

impl SemanticModel {
    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, ContractViolation> {
        let raw: RawSemantics = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Validate an already deserialized JSON value.
    pub fn from_value(value: Value) -> Result<Self, ContractViolation> {
        let raw: RawSemantics = serde_json::from_value(value)?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawSemantics> for SemanticModel {
    type Error = ContractViolation;

    fn try_from(raw: RawSemantics) -> Result<Self, Self::Error> {
        for relation in &raw.relations {
            check_builtin_arity(relation)?;
        }
        let arities: IndexMap<&str, usize> = raw
            .relations
            .iter()
            .map(|relation| (relation.name.as_str(), relation.arity))
            .collect();

        let mut builder = SemanticModelBuilder::new();
        for (name, raw_tuples) in &raw.partial_interpretation {
            if name == builtin::COUNT {
                builder = parse_counts(builder, name, raw_tuples)?;
                continue;
            }
            let Some(arity) = arities
                .get(name.as_str())
                .copied()
                .or_else(|| builtin::arity(name))
            else {
                tracing::trace!(relation = %name, "skipping interpretation of unknown relation");
                continue;
            };
            let tuples = raw_tuples
                .iter()
                .enumerate()
                .map(|(index, raw_tuple)| parse_tuple(name, arity, index, raw_tuple))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.tuples(name.clone(), tuples);
        }

        builder
            .nodes(raw.nodes.into_iter().map(fill_node_simple_name))
            .relations(raw.relations.into_iter().map(fill_relation_simple_name))
            .build()
    }
}

fn fill_node_simple_name(mut node: Node) -> Node {
    if node.simple_name.is_empty() {
        node.simple_name = simple_name_of(&node.name).to_string();
    }
    node
}

fn fill_relation_simple_name(mut relation: Relation) -> Relation {
    if relation.simple_name.is_empty() {
        relation.simple_name = simple_name_of(&relation.name).to_string();
    }
    relation
}

fn parse_tuple(
    relation: &str,
    arity: usize,
    index: usize,
    raw: &[Value],
) -> Result<Tuple, ContractViolation> {
    check_length(relation, arity, index, raw)?;
    let args = raw[..arity]
        .iter()
        .enumerate()
        .map(|(position, slot)| parse_index(relation, index, position, slot))
        .collect::<Result<Vec<_>, _>>()?;
    let value = raw[arity]
        .as_str()
        .and_then(|s| s.parse::<TruthValue>().ok())
        .ok_or_else(|| ContractViolation::InvalidValue {
            relation: relation.to_string(),
            tuple: index,
            found: raw[arity].to_string(),
        })?;
    Ok(Tuple::new(args, value))
}

fn parse_counts(
    mut builder: SemanticModelBuilder,
    relation: &str,
    raw_tuples: &[Vec<Value>],
) -> Result<SemanticModelBuilder, ContractViolation> {
    for (index, raw) in raw_tuples.iter().enumerate() {
        check_length(relation, 1, index, raw)?;
        let node = parse_index(relation, index, 0, &raw[0])?;
        let label = raw[1].as_str().ok_or_else(|| ContractViolation::InvalidValue {
            relation: relation.to_string(),
            tuple: index,
            found: raw[1].to_string(),
        })?;
        builder = builder.count(node, label);
    }
    Ok(builder)
}

fn check_length(
    relation: &str,
    arity: usize,
    index: usize,
    raw: &[Value],
) -> Result<(), ContractViolation> {
    if raw.len() == arity + 1 {
        Ok(())
    } else {
        Err(ContractViolation::ArityMismatch {
            relation: relation.to_string(),
            tuple: index,
            expected: arity + 1,
            found: raw.len(),
        })
    }
}

fn parse_index(
    relation: &str,
    tuple: usize,
    position: usize,
    slot: &Value,
) -> Result<usize, ContractViolation> {
    slot.as_u64()
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| ContractViolation::InvalidArgument {
            relation: relation.to_string(),
            tuple,
            position,
            found: slot.to_string(),
        })
}
