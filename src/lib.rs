//! # partial-dot
//!
//! Graphviz DOT rendering of four-valued partial model interpretations.
//!
//! ## Features
//!
//! | Feature | Crate | Description |
//! |---------|-------|-------------|
//! | `semantics` | [`partial-dot-semantics`] | Snapshot types, truth values, JSON ingestion |
//! | `graph`     | [`partial-dot-graph`]     | Visibility policy, node and edge attributes, DOT assembly |
//! | `wasm`      | [`partial-dot-graph`]     | `wasm-bindgen` entry points |
//!
//! `default = ["full"]` enables `semantics` and `graph`.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! partial-dot = "0.1"
//! ```
//!
//! ```rust
//! use partial_dot::{render, SemanticModel, VisibilityPolicy};
//!
//! let snapshot = r#"{
//!     "nodes": [{"name": "a", "kind": "INDIVIDUAL"}, {"name": "b", "kind": "NEW"}],
//!     "relations": [{"name": "r", "arity": 2,
//!                    "detail": {"type": "reference", "containment": true}}],
//!     "partialInterpretation": {
//!         "r": [[0, 1, "TRUE"]],
//!         "builtin::exists": [[0, "TRUE"], [1, "UNKNOWN"]]
//!     }
//! }"#;
//!
//! let model = SemanticModel::from_json(snapshot).unwrap();
//! let source = render(&model, &VisibilityPolicy::default());
//! assert!(source.text().contains("weight=5"));
//! ```
//!
//! [`partial-dot-semantics`]: partial_dot_semantics
//! [`partial-dot-graph`]: partial_dot_graph

#[cfg(feature = "semantics")]
pub use partial_dot_semantics as semantics;

#[cfg(feature = "semantics")]
pub use partial_dot_semantics::{
    ContractViolation, Node, NodeKind, Relation, RelationDetail, SemanticModel, TruthValue, Tuple,
};

#[cfg(feature = "graph")]
pub use partial_dot_graph as graph;

#[cfg(feature = "graph")]
pub use partial_dot_graph::{
    render, render_graph, render_json, DotSource, RenderError, Visibility, VisibilityPolicy,
};
