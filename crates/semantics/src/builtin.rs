//! Names of the builtin relations read outside the visibility system.

/// `exists(node)`: whether the node stands for at least one object
pub const EXISTS: &str = "builtin::exists";

/// `equals(node, node)`: whether two nodes denote the same object
pub const EQUALS: &str = "builtin::equals";

/// `count(node)`: multiplicity label such as `[0]` or `[1..*]`
pub const COUNT: &str = "builtin::count";

/// Arity of a builtin relation, `None` for other names.
pub fn arity(name: &str) -> Option<usize> {
    match name {
        EXISTS | COUNT => Some(1),
        EQUALS => Some(2),
        _ => None,
    }
}
