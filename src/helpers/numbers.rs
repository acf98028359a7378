//! Numeric helpers.

use super::value::{Value, arg};

/// Trial division up to the square root of `n`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut divisor = 2u64;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Whether `n` lies strictly between `min` and `max`.
pub fn number_between<T: PartialOrd>(n: T, min: T, max: T) -> bool {
    n > min && n < max
}

/// Left-pads the numeral of `n` with `fill` up to the digit width of `base`.
///
/// ```
/// use pure_helpers::helpers::numbers::pad_left;
///
/// assert_eq!(pad_left(15, 1000, "-"), "--15");
/// assert_eq!(pad_left(15, 1000, "0"), "0015");
/// ```
pub fn pad_left(n: i64, base: i64, fill: &str) -> String {
    let numeral = n.to_string();
    let width = base.to_string().len();
    match width.checked_sub(numeral.len()) {
        Some(missing) => format!("{}{numeral}", fill.repeat(missing)),
        None => numeral,
    }
}

pub mod invoke {
    use super::*;

    pub fn is_prime(args: &mut [Value]) -> Value {
        let n = arg(args, 0).int_or(0);
        Value::Bool(n > 0 && super::is_prime(n as u64))
    }

    pub fn number_between(args: &mut [Value]) -> Value {
        match (
            arg(args, 0).as_int(),
            arg(args, 1).as_int(),
            arg(args, 2).as_int(),
        ) {
            (Some(n), Some(min), Some(max)) => Value::Bool(super::number_between(n, min, max)),
            _ => Value::Bool(false),
        }
    }

    pub fn pad_left(args: &mut [Value]) -> Value {
        let n = arg(args, 0);
        let Some(number) = n.as_int() else {
            return Value::Str(n.str_or(""));
        };
        Value::Str(super::pad_left(
            number,
            arg(args, 1).int_or(10),
            &arg(args, 2).str_or("0"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(7919));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(222));
        assert!(!is_prime(49));
    }

    #[test]
    fn number_between_is_exclusive() {
        assert!(!number_between(10212, 10, 100));
        assert!(number_between(10212, 10, 20000));
        assert!(!number_between(10, 10, 20));
        assert!(number_between(0.5, 0.0, 1.0));
    }

    #[test]
    fn pad_left_widths() {
        assert_eq!(pad_left(3, 100, "0"), "003");
        assert_eq!(pad_left(3, 100, "-"), "--3");
        assert_eq!(pad_left(3, 10, "0"), "03");
        assert_eq!(pad_left(23000, 10_000_000, "0"), "00023000");
        assert_eq!(pad_left(50, 10, "0"), "50");
        assert_eq!(pad_left(12345, 10, "0"), "12345");
    }

    #[test]
    fn pad_left_adapter_defaults() {
        assert_eq!(invoke::pad_left(&mut [Value::Int(3)]), Value::from("03"));
    }
}
