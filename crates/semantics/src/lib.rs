//! # partial-dot-semantics
//!
//! Snapshot types for four-valued partial interpretations of graph models.
//!
//! A [`SemanticModel`] holds an ordered list of [`Node`]s, an ordered list of
//! [`Relation`]s and, for every relation, its [`Tuple`]s sorted by argument
//! indices. Each tuple carries a [`TruthValue`]: `TRUE`, `FALSE`, `UNKNOWN`
//! or `ERROR`.
//!
//! Snapshots are immutable once built. They are either assembled in code with
//! [`SemanticModelBuilder`] or ingested from the solver's JSON format with
//! [`SemanticModel::from_json`]; both routes check the tuple contract and
//! report a [`ContractViolation`] on malformed data.
//!
//! ## Example
//!
//! ```rust
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
//!     .tuple("friend", Tuple::binary(0, 1, TruthValue::True))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(model.tuples("friend").len(), 1);
//! ```

pub mod builtin;
mod error;
mod model;
mod truth;
pub mod wire;

pub use error::ContractViolation;
pub use model::{
    simple_name_of, Named, Node, NodeKind, Relation, RelationDetail, SemanticModel,
    SemanticModelBuilder, Tuple,
};
pub use truth::{TruthValue, UnknownTruthValue};
pub use wire::RawSemantics;
