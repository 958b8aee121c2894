//! Per-edge attributes: opposite-pair deduplication and layout weights.
//!
//! Graphviz ranks nodes by the direction of constrained edges, so two arrows
//! between the same pair of nodes pointing opposite ways would pull the
//! layout apart. For every binary tuple the reverse tuple is looked up in the
//! same relation, and at most one direction drives the ranking.

use crate::lookup::find_value;
use crate::node_data::NodeData;
use crate::visibility::{Visibility, VisibilityPolicy};
use partial_dot_semantics::{Relation, RelationDetail, SemanticModel, TruthValue};
use std::cmp::Ordering;

/// Layout weight of ordinary edges
pub const EDGE_WEIGHT: f64 = 1.0;

/// Layout weight of containment edges
pub const CONTAINMENT_WEIGHT: f64 = 5.0;

/// Weight multiplier for `UNKNOWN` edges
pub const UNKNOWN_WEIGHT_FACTOR: f64 = 0.5;

/// Arrow head scale used with the thicker containment pen.
const THICK_ARROW_SIZE: f64 = 0.875;

/// Edge parameters shared by every tuple of a relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationEdgeStyle {
    pub weight: f64,
    pub constraint: bool,
    pub penwidth: u32,
    pub containment: bool,
}

impl RelationEdgeStyle {
    pub fn for_relation(relation: &Relation, model: &SemanticModel, policy: &VisibilityPolicy) -> Self {
        let plain = Self {
            weight: EDGE_WEIGHT,
            constraint: true,
            penwidth: 1,
            containment: false,
        };
        match &relation.detail {
            RelationDetail::Reference { containment: true } => Self {
                weight: CONTAINMENT_WEIGHT,
                constraint: true,
                penwidth: 2,
                containment: true,
            },
            // The visible reference drives the layout instead.
            RelationDetail::Opposite { opposite, .. }
                if policy.visibility(model, opposite).is_visible() =>
            {
                Self {
                    weight: 0.0,
                    constraint: false,
                    ..plain
                }
            }
            RelationDetail::Reference { containment: false }
            | RelationDetail::Opposite { .. }
            | RelationDetail::Class { .. }
            | RelationDetail::Predicate { .. }
            | RelationDetail::Builtin => plain,
        }
    }
}

/// Arrow direction of an edge statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Forward,
    /// The relation holds with the same value both ways
    Both,
}

impl EdgeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeDirection::Forward => "forward",
            EdgeDirection::Both => "both",
        }
    }
}

/// A single edge to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData<'a> {
    pub relation: &'a Relation,
    pub from: usize,
    pub to: usize,
    pub value: TruthValue,
    pub dir: EdgeDirection,
    pub constraint: bool,
    pub weight: f64,
    pub penwidth: u32,
    pub containment: bool,
}

impl EdgeData<'_> {
    pub fn arrowsize(&self) -> f64 {
        if self.penwidth >= 2 {
            THICK_ARROW_SIZE
        } else {
            1.0
        }
    }

    pub fn style(&self) -> &'static str {
        if self.value.is_unknown() {
            "dashed"
        } else {
            "solid"
        }
    }
}

/// Edges of every visible binary relation, in relation order then tuple order.
pub fn compute_edges<'a>(
    model: &'a SemanticModel,
    node_data: &[NodeData],
    policy: &VisibilityPolicy,
) -> Vec<EdgeData<'a>> {
    let mut edges = Vec::new();
    for relation in model.relations() {
        if relation.arity != 2 {
            continue;
        }
        let visibility = policy.visibility_of(relation);
        if visibility.is_visible() {
            compute_relation_edges(model, node_data, relation, visibility, policy, &mut edges);
        }
    }
    edges
}

fn compute_relation_edges<'a>(
    model: &'a SemanticModel,
    node_data: &[NodeData],
    relation: &'a Relation,
    visibility: Visibility,
    policy: &VisibilityPolicy,
    edges: &mut Vec<EdgeData<'a>>,
) {
    let style = RelationEdgeStyle::for_relation(relation, model, policy);
    let tuples = model.tuples(&relation.name);

    for tuple in tuples {
        let value = tuple.value();
        if !visibility.shows(value) {
            continue;
        }
        let &[from, to] = tuple.args() else {
            continue;
        };
        if model.node(from).is_none() || model.node(to).is_none() {
            tracing::trace!(relation = %relation.name, from, to, "edge refers to a missing node");
            continue;
        }
        let rendered = |index: usize| {
            node_data
                .get(index)
                .is_some_and(|data| data.is_rendered(policy))
        };
        if !rendered(from) || !rendered(to) {
            continue;
        }

        let mut dir = EdgeDirection::Forward;
        let mut constraint = style.constraint;
        let mut weight = style.weight;
        let opposite = find_value(tuples, &[to, from]);
        match opposite {
            Some(opposite) if opposite == value => match to.cmp(&from) {
                // Already drawn as a two-headed edge from the other side.
                Ordering::Less => continue,
                Ordering::Greater => dir = EdgeDirection::Both,
                Ordering::Equal => {}
            },
            Some(opposite) if visibility.shows(opposite) && to < from => {
                // Let the opposite edge drive the layout.
                constraint = false;
                weight = 0.0;
            }
            _ if value.is_unknown() && opposite.map_or(true, TruthValue::is_unknown) => {
                weight *= UNKNOWN_WEIGHT_FACTOR;
            }
            _ => {}
        }

        edges.push(EdgeData {
            relation,
            from,
            to,
            value,
            dir,
            constraint,
            weight,
            penwidth: style.penwidth,
            containment: style.containment,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_data::compute_node_data;
    use partial_dot_semantics::{Node, NodeKind, SemanticModelBuilder, Tuple};

    fn nodes(count: usize) -> Vec<Node> {
        (0..count)
            .map(|i| Node::new(format!("n{i}"), NodeKind::Individual))
            .collect()
    }

    fn plain(name: &str) -> Relation {
        Relation::new(name, 2, RelationDetail::Reference { containment: false })
    }

    fn edges_of(
        model: &SemanticModel,
        policy: &VisibilityPolicy,
    ) -> Vec<(usize, usize, EdgeDirection, bool, f64)> {
        let data = compute_node_data(model, policy);
        compute_edges(model, &data, policy)
            .into_iter()
            .map(|e| (e.from, e.to, e.dir, e.constraint, e.weight))
            .collect()
    }

    fn existing(builder: SemanticModelBuilder, count: usize) -> SemanticModelBuilder {
        (0..count).fold(builder.nodes(nodes(count)), |b, i| b.exists(i, TruthValue::True))
    }

    #[test]
    fn test_symmetric_pair_collapses() {
        let model = existing(SemanticModel::builder(), 2)
            .relation(plain("r"))
            .tuples(
                "r",
                [
                    Tuple::binary(0, 1, TruthValue::True),
                    Tuple::binary(1, 0, TruthValue::True),
                ],
            )
            .build()
            .unwrap();

        assert_eq!(
            edges_of(&model, &VisibilityPolicy::default()),
            vec![(0, 1, EdgeDirection::Both, true, EDGE_WEIGHT)]
        );
    }

    #[test]
    fn test_self_loop_is_forward() {
        let model = existing(SemanticModel::builder(), 1)
            .relation(plain("r"))
            .tuple("r", Tuple::binary(0, 0, TruthValue::Error))
            .build()
            .unwrap();

        assert_eq!(
            edges_of(&model, &VisibilityPolicy::default()),
            vec![(0, 0, EdgeDirection::Forward, true, EDGE_WEIGHT)]
        );
    }

    #[test]
    fn test_asymmetric_pair_yields_layout_to_lower_source() {
        let model = existing(SemanticModel::builder(), 2)
            .relation(plain("r"))
            .tuples(
                "r",
                [
                    Tuple::binary(0, 1, TruthValue::True),
                    Tuple::binary(1, 0, TruthValue::Error),
                ],
            )
            .build()
            .unwrap();

        assert_eq!(
            edges_of(&model, &VisibilityPolicy::default()),
            vec![
                (0, 1, EdgeDirection::Forward, true, EDGE_WEIGHT),
                (1, 0, EdgeDirection::Forward, false, 0.0),
            ]
        );
    }

    #[test]
    fn test_hidden_unknown_opposite_does_not_take_over() {
        let model = existing(SemanticModel::builder(), 2)
            .relation(plain("r"))
            .tuples(
                "r",
                [
                    Tuple::binary(0, 1, TruthValue::Unknown),
                    Tuple::binary(1, 0, TruthValue::True),
                ],
            )
            .build()
            .unwrap();
        let policy = VisibilityPolicy::default().with_visibility("r", Visibility::Must);

        assert_eq!(
            edges_of(&model, &policy),
            vec![(1, 0, EdgeDirection::Forward, true, EDGE_WEIGHT)]
        );
    }

    #[test]
    fn test_unknown_edge_weight_is_halved() {
        let model = existing(SemanticModel::builder(), 2)
            .relation(plain("r"))
            .tuple("r", Tuple::binary(0, 1, TruthValue::Unknown))
            .build()
            .unwrap();

        assert_eq!(
            edges_of(&model, &VisibilityPolicy::default()),
            vec![(0, 1, EdgeDirection::Forward, true, 0.5)]
        );
    }

    #[test]
    fn test_unknown_edge_against_known_opposite_keeps_weight() {
        let model = existing(SemanticModel::builder(), 2)
            .relation(plain("r"))
            .tuples(
                "r",
                [
                    Tuple::binary(0, 1, TruthValue::Unknown),
                    Tuple::binary(1, 0, TruthValue::True),
                ],
            )
            .build()
            .unwrap();

        assert_eq!(
            edges_of(&model, &VisibilityPolicy::default()),
            vec![
                (0, 1, EdgeDirection::Forward, true, EDGE_WEIGHT),
                (1, 0, EdgeDirection::Forward, false, 0.0),
            ]
        );
    }

    #[test]
    fn test_containment_and_opposite_styles() {
        let model = existing(SemanticModel::builder(), 2)
            .relation(Relation::new(
                "children",
                2,
                RelationDetail::Reference { containment: true },
            ))
            .relation(Relation::new(
                "parent",
                2,
                RelationDetail::Opposite {
                    container: true,
                    opposite: "children".to_string(),
                },
            ))
            .tuple("children", Tuple::binary(0, 1, TruthValue::True))
            .tuple("parent", Tuple::binary(1, 0, TruthValue::True))
            .build()
            .unwrap();
        let policy = VisibilityPolicy::default();
        let data = compute_node_data(&model, &policy);
        let edges = compute_edges(&model, &data, &policy);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].relation.name, "children");
        assert_eq!(edges[0].weight, CONTAINMENT_WEIGHT);
        assert_eq!(edges[0].penwidth, 2);
        assert_eq!(edges[0].arrowsize(), THICK_ARROW_SIZE);
        assert_eq!(edges[1].relation.name, "parent");
        assert!(!edges[1].constraint);
        assert_eq!(edges[1].weight, 0.0);

        // With the containment hidden, the opposite drives the layout itself.
        let policy = VisibilityPolicy::default().with_visibility("children", Visibility::None);
        let parent = model.relation("parent").unwrap();
        let style = RelationEdgeStyle::for_relation(parent, &model, &policy);
        assert!(style.constraint);
        assert_eq!(style.weight, EDGE_WEIGHT);
    }

    #[test]
    fn test_edges_to_hidden_or_missing_nodes_are_skipped() {
        let model = SemanticModel::builder()
            .nodes(nodes(2))
            .exists(0, TruthValue::True)
            .relation(plain("r"))
            .tuples(
                "r",
                [
                    Tuple::binary(0, 1, TruthValue::True),
                    Tuple::binary(0, 5, TruthValue::True),
                ],
            )
            .build()
            .unwrap();

        // Node 1 does not exist, node 5 is not in the snapshot.
        assert!(edges_of(&model, &VisibilityPolicy::default()).is_empty());
        assert_eq!(
            edges_of(&model, &VisibilityPolicy::default().with_show_non_existent(true)),
            vec![(0, 1, EdgeDirection::Forward, true, EDGE_WEIGHT)]
        );
    }
}
