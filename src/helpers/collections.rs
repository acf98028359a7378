//! Collection helpers.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use super::value::{Callback, Value, arg};

/// Applies `f` to every element.
///
/// Returns the mapped copy, or `None` after rewriting `collection` in place
/// when `mutate` is set.
pub fn map_collection<T>(
    collection: &mut [T],
    mut f: impl FnMut(&T) -> T,
    mutate: bool,
) -> Option<Vec<T>> {
    if !mutate {
        return Some(collection.iter().map(f).collect());
    }

    for item in collection.iter_mut() {
        *item = f(item);
    }
    None
}

/// Distinct values in first-seen order.
pub fn unique_values<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    unique_values_by(items, T::clone)
}

/// Distinct values by `key`, keeping the first item of every key.
pub fn unique_values_by<T: Clone, K: Eq + Hash>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|&item| seen.insert(key(item)))
        .cloned()
        .collect()
}

/// Parses `k=v&k=v`; the last occurrence of a key wins.
pub fn hash_to_object(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.split('=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            (key.to_string(), value.to_string())
        })
        .collect()
}

pub mod invoke {
    use super::*;

    pub fn map_collection(args: &mut [Value]) -> Value {
        let callback = match arg(args, 1) {
            Value::Func(callback) => callback.clone(),
            _ => Callback::new(Value::clone),
        };
        let mutate = arg(args, 2).truthy();

        let Some(Value::List(items)) = args.first_mut() else {
            return if mutate { Value::Null } else { Value::List(Vec::new()) };
        };
        super::map_collection(items, |item| callback.call(item), mutate)
            .map(Value::List)
            .unwrap_or_default()
    }

    /// Values are keyed by their string form, so `1` and `"1"` collapse.
    pub fn unique_values(args: &mut [Value]) -> Value {
        let items = arg(args, 0).as_list().unwrap_or_default();
        Value::List(super::unique_values_by(items, |item| item.to_string()))
    }

    pub fn hash_to_object(args: &mut [Value]) -> Value {
        Value::from(super::hash_to_object(&arg(args, 0).str_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_collection_returns_new_sequence() {
        let mut initial = vec![1, 2, 3, 4, 5];
        let mapped = map_collection(&mut initial, |el| el + 1, false);
        assert_eq!(mapped, Some(vec![2, 3, 4, 5, 6]));
        assert_eq!(initial, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn map_collection_mutates_in_place() {
        let mut initial = vec![1, 2, 3, 4, 5];
        assert_eq!(map_collection(&mut initial, |el| el + 1, true), None);
        assert_eq!(initial, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn map_collection_adapter_mutates_argument() {
        let add_one = Callback::new(|v| Value::Int(v.int_or(0) + 1));
        let mut args = [
            Value::from(vec![1i64, 2]),
            Value::Func(add_one),
            Value::Bool(true),
        ];
        assert_eq!(invoke::map_collection(&mut args), Value::Null);
        assert_eq!(args[0], Value::from(vec![2i64, 3]));
    }

    #[test]
    fn unique_values_keep_first_seen_order() {
        assert_eq!(unique_values(&[1, 1, 2, 2, 3]), vec![1, 2, 3]);
        assert_eq!(
            unique_values(&["1", "1", "hi", "2", "2", "3", "hi"]),
            vec!["1", "hi", "2", "3"]
        );
    }

    #[test]
    fn unique_values_adapter_keys_by_string_form() {
        let mut args = [Value::List(vec![
            Value::Int(1),
            Value::from("1"),
            Value::from("la"),
            Value::Int(2),
        ])];
        assert_eq!(invoke::unique_values(&mut args).to_string(), "1,la,2");
    }

    #[test]
    fn hash_to_object_last_wins() {
        let map = hash_to_object("Lang=NL&min=10&max=89&min=11");
        assert_eq!(map["Lang"], "NL");
        assert_eq!(map["min"], "11");
        assert_eq!(map["max"], "89");
    }

    #[test]
    fn hash_to_object_tolerates_missing_values() {
        let map = hash_to_object("flag&&a=1");
        assert_eq!(map.len(), 2);
        assert_eq!(map["flag"], "");
    }
}
