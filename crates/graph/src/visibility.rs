//! Per-relation visibility and global display flags.

use indexmap::IndexMap;
use partial_dot_semantics::{Named, Relation, RelationDetail, SemanticModel, TruthValue};
use serde::{Deserialize, Deserializer, Serialize};

/// How much of a relation is drawn.
///
/// The levels form a chain: `None` hides the relation, `Must` hides only its
/// `UNKNOWN` tuples, `All` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    None,
    Must,
    All,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::None => "none",
            Visibility::Must => "must",
            Visibility::All => "all",
        }
    }

    /// Parse a visibility name. Anything unrecognized hides the relation.
    pub fn from_name(name: &str) -> Self {
        match name {
            "none" => Visibility::None,
            "must" => Visibility::Must,
            "all" => Visibility::All,
            other => {
                tracing::warn!(visibility = other, "unknown visibility, hiding relation");
                Visibility::None
            }
        }
    }

    pub fn is_visible(self) -> bool {
        self != Visibility::None
    }

    /// Whether a tuple with `value` is drawn at this level.
    pub fn shows(self, value: TruthValue) -> bool {
        match self {
            Visibility::None => false,
            Visibility::Must => !value.is_unknown(),
            Visibility::All => true,
        }
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(Visibility::from_name(&name)),
            other => {
                tracing::warn!(visibility = %other, "unknown visibility, hiding relation");
                Ok(Visibility::None)
            }
        }
    }
}

/// Visibility a relation gets when the user has not chosen one.
pub fn default_visibility(relation: &Relation) -> Visibility {
    if relation.arity == 0 || relation.arity > 2 {
        return Visibility::None;
    }
    match relation.detail {
        RelationDetail::Class { .. }
        | RelationDetail::Reference { .. }
        | RelationDetail::Opposite { .. } => Visibility::All,
        RelationDetail::Predicate { error: true } => Visibility::Must,
        RelationDetail::Predicate { error: false } | RelationDetail::Builtin => Visibility::None,
    }
}

/// Whether `visibility` can be chosen for `relation` at all.
pub fn is_visibility_allowed(relation: &Relation, visibility: Visibility) -> bool {
    if visibility == Visibility::None {
        return true;
    }
    if relation.arity == 0 || relation.arity > 2 {
        return false;
    }
    match relation.detail {
        // Error predicates have no may-matches to show.
        RelationDetail::Predicate { error: true } => visibility != Visibility::All,
        RelationDetail::Predicate { error: false }
        | RelationDetail::Class { .. }
        | RelationDetail::Reference { .. }
        | RelationDetail::Opposite { .. }
        | RelationDetail::Builtin => true,
    }
}

/// User-controlled display settings for one rendering.
///
/// Only relations whose visibility differs from [`default_visibility`] are
/// stored, so an empty policy means "nothing filtered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilityPolicy {
    visibility: IndexMap<String, Visibility>,
    /// Draw nodes whose `exists` fact is `FALSE`
    pub show_non_existent: bool,
    /// Append the `count` label to node names
    pub scopes: bool,
    /// Show simple names instead of qualified ones
    pub abbreviate: bool,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            visibility: IndexMap::new(),
            show_non_existent: false,
            scopes: false,
            abbreviate: true,
        }
    }
}

impl VisibilityPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder-style override, stored even when it equals the default.
    pub fn with_visibility(mut self, relation: impl Into<String>, visibility: Visibility) -> Self {
        self.visibility.insert(relation.into(), visibility);
        self
    }

    pub fn with_show_non_existent(mut self, show_non_existent: bool) -> Self {
        self.show_non_existent = show_non_existent;
        self
    }

    pub fn with_scopes(mut self, scopes: bool) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn with_abbreviate(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        self
    }

    /// Effective visibility of a relation.
    pub fn visibility_of(&self, relation: &Relation) -> Visibility {
        self.visibility
            .get(&relation.name)
            .copied()
            .unwrap_or_else(|| default_visibility(relation))
    }

    /// Effective visibility of a relation looked up by name; unknown
    /// relations are hidden.
    pub fn visibility(&self, model: &SemanticModel, name: &str) -> Visibility {
        match model.relation(name) {
            Some(relation) => self.visibility_of(relation),
            None => Visibility::None,
        }
    }

    /// Explicitly chosen levels, in the order they were chosen.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, Visibility)> {
        self.visibility
            .iter()
            .map(|(name, visibility)| (name.as_str(), *visibility))
    }

    pub fn has_overrides(&self) -> bool {
        !self.visibility.is_empty()
    }

    /// Choose a level for a relation. Returns `false` (and changes nothing)
    /// for unknown relations and levels the relation does not allow.
    pub fn set_visibility(&mut self, model: &SemanticModel, name: &str, visibility: Visibility) -> bool {
        let Some(relation) = model.relation(name) else {
            return false;
        };
        if !is_visibility_allowed(relation, visibility) {
            return false;
        }
        if default_visibility(relation) == visibility {
            self.visibility.shift_remove(name);
        } else {
            self.visibility.insert(name.to_string(), visibility);
        }
        true
    }

    /// Step `none -> must -> all -> none`, skipping levels that are not allowed.
    pub fn cycle_visibility(&mut self, model: &SemanticModel, name: &str) {
        let Some(relation) = model.relation(name) else {
            return;
        };
        let next = match self.visibility_of(relation) {
            Visibility::None => Visibility::Must,
            Visibility::Must if is_visibility_allowed(relation, Visibility::All) => Visibility::All,
            Visibility::Must | Visibility::All => Visibility::None,
        };
        self.set_visibility(model, name, next);
    }

    /// Hide every relation of the model.
    pub fn hide_all(&mut self, model: &SemanticModel) {
        for relation in model.relations() {
            self.set_visibility(model, &relation.name, Visibility::None);
        }
    }

    /// Forget all explicit choices.
    pub fn reset_filter(&mut self) {
        self.visibility.clear();
    }

    pub fn toggle_show_non_existent(&mut self) {
        self.show_non_existent = !self.show_non_existent;
    }

    pub fn toggle_scopes(&mut self) {
        self.scopes = !self.scopes;
    }

    pub fn toggle_abbreviate(&mut self) {
        self.abbreviate = !self.abbreviate;
    }

    /// Name shown for a node or relation, before any escaping.
    pub fn display_name<'a, T: Named>(&self, item: &'a T) -> &'a str {
        if self.abbreviate {
            item.simple_name()
        } else {
            item.name()
        }
    }
}
