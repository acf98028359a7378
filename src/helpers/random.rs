//! Pseudo-random helpers.

use rand::Rng;

use super::error::HelperError;
use super::value::{Value, arg};

pub const DEFAULT_RANDOM_MIN: u64 = 10_000;
pub const DEFAULT_RANDOM_MAX: u64 = 10_000_000;

/// `prefix` followed by the lowercase hex digits of a random number in `[min, max)`.
///
/// When `max <= min` the number is `min`; a zero number is replaced by 1.
pub fn random_string(prefix: &str, min: u64, max: u64) -> String {
    let number = if max > min {
        rand::rng().random_range(min..max)
    } else {
        min
    };
    format!("{prefix}{:x}", number.max(1))
}

/// `count` pairwise distinct random integers from `1..=max`.
pub fn unique_random_values(count: usize, max: usize) -> Result<Vec<usize>, HelperError> {
    if count > max {
        return Err(HelperError::SampleTooLarge { count, max });
    }

    let mut rng = rand::rng();
    Ok(rand::seq::index::sample(&mut rng, max, count)
        .into_iter()
        .map(|idx| idx + 1)
        .collect())
}

pub mod invoke {
    use super::*;

    pub fn random_string(args: &mut [Value]) -> Value {
        let min = arg(args, 1).as_int().map_or(DEFAULT_RANDOM_MIN, |n| n.max(0) as u64);
        let max = arg(args, 2).as_int().map_or(DEFAULT_RANDOM_MAX, |n| n.max(0) as u64);
        Value::Str(super::random_string(&arg(args, 0).str_or(""), min, max))
    }

    pub fn unique_random_values(args: &mut [Value]) -> Value {
        let count = arg(args, 0).int_or(0).max(0) as usize;
        let max = arg(args, 1).int_or(0).max(0) as usize;
        match super::unique_random_values(count, max) {
            Ok(values) => Value::List(values.into_iter().map(|v| Value::Int(v as i64)).collect()),
            Err(_) => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn random_string_keeps_prefix_and_is_hex() {
        let value = random_string("HELLO", DEFAULT_RANDOM_MIN, DEFAULT_RANDOM_MAX);
        let digits = value.strip_prefix("HELLO").expect("prefix");
        let number = u64::from_str_radix(digits, 16).expect("hex digits");
        assert!((DEFAULT_RANDOM_MIN..DEFAULT_RANDOM_MAX).contains(&number));
    }

    #[test]
    fn random_string_with_empty_range_uses_min() {
        assert_eq!(random_string("", 255, 255), "ff");
        assert_eq!(random_string("x", 0, 0), "x1");
    }

    #[test]
    fn unique_values_are_distinct_and_in_range() {
        for (count, max) in [(10, 1000), (5, 100_000), (3, 25), (25, 25)] {
            let values = unique_random_values(count, max).expect("count <= max");
            assert_eq!(values.len(), count);
            assert_eq!(values.iter().collect::<HashSet<_>>().len(), count);
            assert!(values.iter().all(|v| (1..=max).contains(v)));
        }
    }

    #[test]
    fn too_many_unique_values_is_an_error() {
        assert!(matches!(
            unique_random_values(4, 3),
            Err(HelperError::SampleTooLarge { count: 4, max: 3 })
        ));
    }
}
