//! # partial-dot-graph
//!
//! Graphviz DOT rendering of four-valued partial interpretations.
//!
//! Given a [`SemanticModel`] snapshot and a [`VisibilityPolicy`], this crate
//! produces a directed-graph description in which nodes carry their unary
//! predicates as HTML-like table rows and binary relations become edges.
//!
//! ## Features
//!
//! - **Visibility gating**: each relation is hidden (`none`), limited to
//!   definite facts (`must`) or shown with unknowns too (`all`)
//! - **Opposite-pair handling**: identical reverse tuples collapse into one
//!   two-headed edge, and only one direction of a pair drives the layout
//! - **Layout weights**: containment edges pull harder, unknown edges less
//! - **Stable identifiers**: node and edge ids are derived from qualified names
//!   so a host can keep its own state across re-renders
//!
//! ## Example
//!
//! ```rust
//! use partial_dot_graph::{render, VisibilityPolicy};
//! use partial_dot_semantics::{
//!     Node, NodeKind, Relation, RelationDetail, SemanticModel, TruthValue, Tuple,
//! };
//!
//! let model = SemanticModel::builder()
//!     .node(Node::new("alice", NodeKind::Individual))
//!     .node(Node::new("bob", NodeKind::Individual))
//!     .relation(Relation::new(
//!         "friend",
//!         2,
//!         RelationDetail::Reference { containment: false },
//!     ))
//!     .tuples(
//!         "friend",
//!         [
//!             Tuple::binary(0, 1, TruthValue::True),
//!             Tuple::binary(1, 0, TruthValue::True),
//!         ],
//!     )
//!     .exists(0, TruthValue::True)
//!     .exists(1, TruthValue::True)
//!     .build()
//!     .unwrap();
//!
//! let source = render(&model, &VisibilityPolicy::default());
//! assert!(source.text().contains(r#"n0 -> n1 [id="alice,bob,friend", dir="both""#));
//! assert!(!source.text().contains("n1 -> n0"));
//! ```

mod color;
mod dot;
pub mod edges;
mod error;
pub mod escape;
mod lookup;
pub mod node_data;
pub mod visibility;
mod writer;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::obfuscate_type_hash;
pub use dot::{render, render_graph, render_json};
pub use edges::{compute_edges, EdgeData, EdgeDirection, RelationEdgeStyle};
pub use error::RenderError;
pub use escape::{encode_name, escape_html};
pub use lookup::find_value;
pub use node_data::{compute_node_data, NodeData};
pub use visibility::{default_visibility, is_visibility_allowed, Visibility, VisibilityPolicy};
pub use writer::{DotSource, DotWriter};

pub use partial_dot_semantics::SemanticModel;
