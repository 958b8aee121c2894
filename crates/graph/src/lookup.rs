//! Value lookup in a relation's sorted tuple array.

use partial_dot_semantics::{TruthValue, Tuple};

/// Find the value of the tuple whose arguments equal `key`.
///
/// `tuples` must be strictly ascending by argument indices, which snapshot
/// ingestion guarantees.
pub fn find_value(tuples: &[Tuple], key: &[usize]) -> Option<TruthValue> {
    tuples
        .binary_search_by(|tuple| tuple.args().cmp(key))
        .ok()
        .map(|index| tuples[index].value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value() {
        let tuples = vec![
            Tuple::binary(0, 1, TruthValue::True),
            Tuple::binary(0, 3, TruthValue::Unknown),
            Tuple::binary(1, 0, TruthValue::Error),
            Tuple::binary(2, 2, TruthValue::False),
        ];

        assert_eq!(find_value(&tuples, &[0, 1]), Some(TruthValue::True));
        assert_eq!(find_value(&tuples, &[1, 0]), Some(TruthValue::Error));
        assert_eq!(find_value(&tuples, &[2, 2]), Some(TruthValue::False));
        assert_eq!(find_value(&tuples, &[1, 1]), None);
        assert_eq!(find_value(&tuples, &[3, 0]), None);
        assert_eq!(find_value(&[], &[0, 0]), None);
    }
}
