//! Reorder a record list to match a caller-supplied key sequence.

/// Return a copy of `records` ordered by the position of each record's key
/// in `ordered_keys`.
///
/// Records whose key does not appear in `ordered_keys` all map to the same
/// "not found" rank, so they sort after every present record with no
/// guaranteed relative order among themselves. Callers must not rely on a
/// particular tie-break for absent keys.
///
/// An empty `records` or empty `ordered_keys` yields an empty vec. This is
/// a fail-empty policy, not an error.
pub fn map_order<T, K, F>(records: &[T], ordered_keys: &[K], key_of: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    if records.is_empty() || ordered_keys.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<T> = records.to_vec();
    ordered.sort_by_key(|record| {
        let key = key_of(record);
        ordered_keys
            .iter()
            .position(|k| *k == key)
            .unwrap_or(ordered_keys.len())
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: i64,
        label: &'static str,
    }

    fn record(id: i64, label: &'static str) -> Record {
        Record { id, label }
    }

    #[test]
    fn full_permutation_follows_keys_exactly() {
        let records = vec![record(1, "a"), record(2, "b"), record(3, "c")];
        let ordered = map_order(&records, &[3, 1, 2], |r| r.id);
        let ids: Vec<i64> = ordered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn idempotent_for_a_fixed_order() {
        let records = vec![record(1, "a"), record(2, "b"), record(3, "c")];
        let keys = [2, 3, 1];
        let once = map_order(&records, &keys, |r| r.id);
        let twice = map_order(&once, &keys, |r| r.id);
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_keys_sort_after_present_ones() {
        let records = vec![record(1, "a"), record(2, "b"), record(3, "c"), record(4, "d")];
        let ordered = map_order(&records, &[4, 2], |r| r.id);

        let ids: Vec<i64> = ordered.iter().map(|r| r.id).collect();
        assert_eq!(&ids[..2], &[4, 2]);
        // 1 and 3 come last; their relative order is unspecified.
        let mut tail: Vec<i64> = ids[2..].to_vec();
        tail.sort_unstable();
        assert_eq!(tail, vec![1, 3]);
    }

    #[test]
    fn does_not_mutate_the_input() {
        let records = vec![record(1, "a"), record(2, "b")];
        let _ = map_order(&records, &[2, 1], |r| r.id);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
    }

    #[test]
    fn empty_inputs_fail_empty() {
        let records = vec![record(1, "a")];
        let none: Vec<Record> = Vec::new();
        assert!(map_order(&none, &[1], |r: &Record| r.id).is_empty());
        assert!(map_order(&records, &[] as &[i64], |r| r.id).is_empty());
    }
}
