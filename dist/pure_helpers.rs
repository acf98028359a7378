// @generated by pure-helpers. Do not edit by hand; regenerate with
// `pure-helpers module` (or `pure-helpers all`).
//
// Requires the `chrono`, `rand`, `regex` and `thiserror` crates.

pub mod value {
//! Dynamic values exchanged through the name-based import surface.
//!
//! The typed functions are the primary API. `Value` only exists so that every
//! helper can sit behind the same `fn(&mut [Value]) -> Value` entry point.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use regex::Regex;

static NULL: Value = Value::Null;

/// A callback passed to helpers that take a function argument.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&Value) -> Value + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &Value) -> Value {
        (self.0)(value)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Date(NaiveDateTime),
    Pattern(Regex),
    Func(Callback),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Loose truthiness: null, false, zero and the empty string are falsy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// The string form of the value, or `default` when it is null.
    pub fn str_or(&self, default: &str) -> String {
        match self {
            Value::Null => default.to_string(),
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn int_or(&self, default: i64) -> i64 {
        self.as_int().unwrap_or(default)
    }
}

/// Positional argument lookup; missing arguments read as null.
pub fn arg(args: &[Value], idx: usize) -> &Value {
    args.get(idx).unwrap_or(&NULL)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a.as_str() == b.as_str(),
            (Value::Func(a), Value::Func(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Date(date) => write!(f, "{}", date.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Value::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Value::Func(_) => f.write_str("[function]"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(date: NaiveDateTime) -> Self {
        Value::Date(date)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::Pattern(re)
    }
}

impl From<Callback> for Value {
    fn from(callback: Callback) -> Self {
        Value::Func(callback)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(map: BTreeMap<String, V>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

}

pub mod error {
use thiserror::Error;

/// Failures of the few helpers that cannot degrade to a fallback value.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("cannot draw {count} unique values from 1..={max}")]
    SampleTooLarge { count: usize, max: usize },

    #[error("unknown pattern flag: {0}")]
    UnknownFlag(char),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
}

pub mod namespace {
//! Name-based import of helper functions into a [`Namespace`].
//!
//! A requested name either resolves to a helper entry point or, under the
//! lenient policy, to a stub that answers with a "not a known method" string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::value::Value;

/// Uniform entry point shared by every helper.
pub type Invoke = fn(&mut [Value]) -> Value;

/// What to do with requested names that do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPolicy {
    /// Bind a stub returning a descriptive string.
    #[default]
    Lenient,
    /// Fail the whole import.
    Strict,
}

impl FromStr for ImportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" | "stub" => Ok(Self::Lenient),
            "strict" | "fail" => Ok(Self::Strict),
            other => Err(format!("unknown import policy: {other}")),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("[{0}] is not a known method in this namespace")]
    UnknownMethod(String),
}

pub fn unknown_method_message(name: &str) -> String {
    format!("[{name}] is not a known method in this namespace, sorry")
}

#[derive(Clone)]
pub enum Binding {
    Resolved(Invoke),
    Stub(String),
}

impl Binding {
    pub fn call(&self, args: &mut [Value]) -> Value {
        match self {
            Binding::Resolved(invoke) => invoke(args),
            Binding::Stub(name) => Value::Str(unknown_method_message(name)),
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, Binding::Stub(_))
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Resolved(_) => f.write_str("Resolved"),
            Binding::Stub(name) => f.debug_tuple("Stub").field(name).finish(),
        }
    }
}

/// The target of an import: bound names and their entry points.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    bindings: BTreeMap<String, Binding>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>, binding: Binding) {
        self.bindings.insert(name.into(), binding);
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Calls a bound name; `None` when the name was never imported.
    pub fn call(&self, name: &str, args: &mut [Value]) -> Option<Value> {
        self.get(name).map(|binding| binding.call(args))
    }
}

/// Names to import: a list of names, or a map whose keys are the names.
#[derive(Debug, Clone)]
pub enum ImportRequest {
    Names(Vec<String>),
    Keys(BTreeMap<String, Value>),
}

impl ImportRequest {
    pub fn names(&self) -> Vec<&str> {
        match self {
            ImportRequest::Names(names) => names.iter().map(String::as_str).collect(),
            ImportRequest::Keys(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// A comma separated list, e.g. `"randomString, numberBetween"`.
impl From<&str> for ImportRequest {
    fn from(list: &str) -> Self {
        ImportRequest::Names(
            list.split(',')
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl From<&[&str]> for ImportRequest {
    fn from(names: &[&str]) -> Self {
        ImportRequest::Names(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ImportRequest {
    fn from(names: [&str; N]) -> Self {
        ImportRequest::from(&names[..])
    }
}

impl From<Vec<String>> for ImportRequest {
    fn from(names: Vec<String>) -> Self {
        ImportRequest::Names(names)
    }
}

impl From<BTreeMap<String, Value>> for ImportRequest {
    fn from(map: BTreeMap<String, Value>) -> Self {
        ImportRequest::Keys(map)
    }
}

/// Resolves every requested name with `lookup` and binds it into `target`.
///
/// Under [`ImportPolicy::Strict`] an unknown name fails the import before
/// anything is bound.
pub fn import_with<F>(
    lookup: F,
    request: impl Into<ImportRequest>,
    target: Namespace,
    policy: ImportPolicy,
) -> Result<Namespace, ImportError>
where
    F: Fn(&str) -> Option<Invoke>,
{
    let request = request.into();
    if policy == ImportPolicy::Strict {
        if let Some(unknown) = request
            .names()
            .into_iter()
            .map(str::trim)
            .find(|&name| lookup(name).is_none())
        {
            return Err(ImportError::UnknownMethod(unknown.to_string()));
        }
    }
    Ok(import_lenient(lookup, request, target))
}

/// Like [`import_with`] under the lenient policy, which cannot fail.
pub fn import_lenient<F>(lookup: F, request: impl Into<ImportRequest>, mut target: Namespace) -> Namespace
where
    F: Fn(&str) -> Option<Invoke>,
{
    for name in request.into().names() {
        let name = name.trim();
        let binding = match lookup(name) {
            Some(invoke) => Binding::Resolved(invoke),
            None => Binding::Stub(name.to_string()),
        };
        target.bind(name, binding);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(args: &mut [Value]) -> Value {
        Value::List(args.to_vec())
    }

    fn lookup(name: &str) -> Option<Invoke> {
        (name == "echo").then_some(echo as Invoke)
    }

    #[test]
    fn lenient_import_binds_stub_for_unknown_names() {
        let ns = import_with(lookup, "echo, nope", Namespace::new(), ImportPolicy::Lenient)
            .expect("lenient import never fails");

        assert!(!ns.get("echo").expect("echo bound").is_stub());
        assert_eq!(
            ns.call("nope", &mut []),
            Some(Value::from("[nope] is not a known method in this namespace, sorry"))
        );
    }

    #[test]
    fn strict_import_rejects_unknown_names() {
        let err = import_with(lookup, ["echo", "nope"], Namespace::new(), ImportPolicy::Strict)
            .expect_err("unknown name");
        assert_eq!(err, ImportError::UnknownMethod("nope".to_string()));
    }

    #[test]
    fn map_keys_are_import_names() {
        let request = BTreeMap::from([("echo".to_string(), Value::Int(1))]);
        let ns = import_with(lookup, request, Namespace::new(), ImportPolicy::Strict)
            .expect("known name");
        assert_eq!(
            ns.call("echo", &mut [Value::Int(7)]),
            Some(Value::List(vec![Value::Int(7)]))
        );
    }

    #[test]
    fn existing_target_bindings_are_kept() {
        let mut target = Namespace::new();
        target.bind("mine", Binding::Stub("mine".to_string()));
        let ns = import_with(lookup, ["echo"], target, ImportPolicy::Lenient).expect("import");
        assert_eq!(ns.names().collect::<Vec<_>>(), vec!["echo", "mine"]);
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Strict".parse::<ImportPolicy>(), Ok(ImportPolicy::Strict));
        assert!("loose".parse::<ImportPolicy>().is_err());
    }
}
}

pub mod random {
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
}

pub mod collections {
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
}

pub mod validation {
//! Pattern based validation helpers.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::error::HelperError;
use super::value::{Value, arg};

/// Dutch postal code: four digits, two letters.
pub const DEFAULT_POSTAL_FORMAT: &str = "nnnnaa";

const DIACRITICALS: &str = concat!(
    r"[.\-a-z\s]",
    r"|[\x{C0}-\x{C6}\x{E0}-\x{E6}]",
    r"|[\x{C8}-\x{CB}\x{E8}-\x{EB}]",
    r"|[\x{CC}-\x{CF}\x{EC}-\x{EF}]",
    r"|[\x{D2}-\x{D6}\x{D8}\x{F2}-\x{F6}\x{F8}]",
    r"|[\x{D9}-\x{DC}\x{F9}-\x{FC}]",
    r"|[\x{D1}\x{F1}]",
    r"|[\x{C7}\x{E7}]",
);

// Non-ASCII code points allowed in addresses, minus surrogates and specials.
const UCS: &str = r"\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

const EMAIL: &str = concat!(
    r"(?i)^(?:",
    // dot-atom local part
    r"[a-z0-9!#$%&'*+/=?^_`{|}~\-UCS]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~\-UCS]+)*",
    // quoted local part with folding whitespace
    r"|\x22(?:(?:(?:[\x20\x09]*\r\n)?[\x20\x09]+)?",
    r"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7eUCS]|\\[\x01-\x09\x0b\x0c\x0d-\x7fUCS]))*",
    r"(?:(?:[\x20\x09]*\r\n)?[\x20\x09]+)?\x22",
    r")@",
    r"(?:(?:[a-z0-9UCS]|[a-z0-9UCS][a-z0-9\-._~UCS]*[a-z0-9UCS])\.)+",
    r"(?:[a-zUCS]|[a-zUCS][a-z0-9\-._~UCS]*[a-zUCS])\.?$",
);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&EMAIL.replace("UCS", UCS)).expect("valid email regex")
});
static POSTAL_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|-+").expect("valid postal separator regex"));

/// A pattern matching latin letters, whitespace, `-`, `.` and the accented
/// A, E, I, O, U, N and C of Latin-1.
///
/// `flags` uses the letters `i`, `m`, `s` and `x`; `g`, `u` and `y` are accepted
/// and have no effect.
pub fn regex_for_diacriticals(flags: &str) -> Result<Regex, HelperError> {
    let mut builder = RegexBuilder::new(DIACRITICALS);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'g' | 'u' | 'y' => &mut builder,
            other => return Err(HelperError::UnknownFlag(other)),
        };
    }
    Ok(builder.build()?)
}

/// Checks `candidate` against `format`, where `n` is a digit and any other
/// character a letter. Whitespace and hyphens in the candidate are ignored.
pub fn check_postal_code(candidate: &str, format: &str) -> bool {
    let cleaned = POSTAL_SEPARATOR_RE.replace_all(candidate, "");
    cleaned.chars().count() == format.chars().count()
        && cleaned.chars().zip(format.chars()).all(|(c, slot)| {
            if slot.eq_ignore_ascii_case(&'n') {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphabetic()
            }
        })
}

/// Syntactic check only; it says nothing about deliverability.
pub fn check_email_validity(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate.trim())
}

pub mod invoke {
    use super::*;

    pub fn regex_for_diacriticals(args: &mut [Value]) -> Value {
        super::regex_for_diacriticals(&arg(args, 0).str_or(""))
            .map(Value::Pattern)
            .unwrap_or_default()
    }

    pub fn check_postal_code(args: &mut [Value]) -> Value {
        Value::Bool(super::check_postal_code(
            &arg(args, 0).str_or(""),
            &arg(args, 1).str_or(DEFAULT_POSTAL_FORMAT),
        ))
    }

    pub fn check_email_validity(args: &mut [Value]) -> Value {
        Value::Bool(super::check_email_validity(&arg(args, 0).str_or("")))
    }
}

}

pub mod strings {
//! String manipulation helpers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::value::{Value, arg};

pub const ELLIPSIS: char = '\u{2026}';

/// Largest result, in bytes, the dynamic `repeat_string` adapter will build.
pub const MAX_REPEAT_LEN: usize = 1 << 26;

/// Token set for [`interpolate`]: placeholder name to replacement.
pub type TokenMap = BTreeMap<String, String>;

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break regex"));
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace run regex"));
static BETWEEN_TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("valid between tags regex"));
static BEFORE_TAG_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+>").expect("valid tag end regex"));
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_0-9]+)\}").expect("valid placeholder regex"));

pub fn repeat_string(s: &str, times: usize) -> String {
    s.repeat(times)
}

/// Removes line breaks (unless `keep_line_breaks`), collapses whitespace runs
/// to a single space, drops whitespace around tag brackets and trims.
pub fn cleanup_whitespace(s: &str, keep_line_breaks: bool) -> String {
    if keep_line_breaks {
        LINE_BREAK_RE
            .split(s)
            .map(collapse_whitespace)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    } else {
        collapse_whitespace(&LINE_BREAK_RE.replace_all(s, ""))
            .trim()
            .to_string()
    }
}

fn collapse_whitespace(line: &str) -> String {
    let collapsed = WHITESPACE_RUN_RE.replace_all(line, " ");
    let collapsed = BETWEEN_TAGS_RE.replace_all(&collapsed, "><");
    BEFORE_TAG_END_RE.replace_all(&collapsed, ">").into_owned()
}

fn char_at(s: &str, pos: usize) -> Option<char> {
    s.chars().nth(pos)
}

/// ASCII letters and letters from Latin-1 Supplement through Latin Extended-B.
fn is_recognized_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{80}'..='\u{24F}').contains(&c) && c.is_alphabetic())
}

/// Whether the character at (zero based, char) position `pos` is an upper case letter.
pub fn char_at_is_upper_case(s: &str, pos: usize) -> bool {
    char_at(s, pos).is_some_and(|c| is_recognized_letter(c) && c.is_uppercase())
}

/// Whether the character at (zero based, char) position `pos` is a lower case letter.
pub fn char_at_is_lower_case(s: &str, pos: usize) -> bool {
    char_at(s, pos).is_some_and(|c| is_recognized_letter(c) && c.is_lowercase())
}

/// Cuts `s` after `pos` characters and appends an ellipsis.
///
/// With `whole_words_only` a cut inside a word backs up to the last space.
pub fn truncate_string(s: &str, pos: usize, whole_words_only: bool) -> String {
    if pos >= s.chars().count() {
        return s.to_string();
    }

    let raw: String = s.chars().take(pos).collect();
    let mid_word = char_at(s, pos).is_some_and(|c| c.is_ascii_alphabetic());
    let cut = match raw.rfind(' ') {
        Some(idx) if whole_words_only && mid_word => &raw[..idx],
        _ => raw.as_str(),
    };
    format!("{cut}{ELLIPSIS}")
}

#[derive(Debug, Clone)]
pub enum Splitter {
    /// Split on a literal; the empty literal splits into characters.
    Literal(String),
    Pattern(Regex),
}

impl From<&str> for Splitter {
    fn from(s: &str) -> Self {
        Splitter::Literal(s.to_string())
    }
}

impl From<Regex> for Splitter {
    fn from(re: Regex) -> Self {
        Splitter::Pattern(re)
    }
}

/// Splits `s` and drops empty or whitespace-only segments.
pub fn split_and_clean(s: &str, splitter: &Splitter) -> Vec<String> {
    let segments: Vec<String> = match splitter {
        Splitter::Literal(lit) if lit.is_empty() => s.chars().map(String::from).collect(),
        Splitter::Literal(lit) => s.split(lit.as_str()).map(str::to_string).collect(),
        Splitter::Pattern(re) => re.split(s).map(str::to_string).collect(),
    };

    segments
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Expands `{name}` placeholders once per token map and concatenates the results.
///
/// Unknown names keep their placeholder; empty values substitute as empty.
pub fn interpolate<'a>(template: &str, tokens: impl IntoIterator<Item = &'a TokenMap>) -> String {
    tokens
        .into_iter()
        .map(|token| {
            PLACEHOLDER_RE
                .replace_all(template, |caps: &Captures| {
                    token
                        .get(&caps[1])
                        .cloned()
                        .unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned()
        })
        .collect()
}

pub mod invoke {
    use super::*;

    /// Null when the result would exceed [`MAX_REPEAT_LEN`] bytes.
    pub fn repeat_string(args: &mut [Value]) -> Value {
        let s = arg(args, 0).str_or("");
        let times = usize::try_from(arg(args, 1).int_or(0).max(0)).unwrap_or(usize::MAX);
        match s.len().checked_mul(times) {
            Some(len) if len <= MAX_REPEAT_LEN => Value::Str(super::repeat_string(&s, times)),
            _ => Value::Null,
        }
    }

    pub fn cleanup_whitespace(args: &mut [Value]) -> Value {
        Value::Str(super::cleanup_whitespace(
            &arg(args, 0).str_or(""),
            arg(args, 1).truthy(),
        ))
    }

    pub fn char_at_is_upper_case(args: &mut [Value]) -> Value {
        let pos = arg(args, 1).int_or(-1);
        Value::Bool(pos >= 0 && super::char_at_is_upper_case(&arg(args, 0).str_or(""), pos as usize))
    }

    pub fn char_at_is_lower_case(args: &mut [Value]) -> Value {
        let pos = arg(args, 1).int_or(-1);
        Value::Bool(pos >= 0 && super::char_at_is_lower_case(&arg(args, 0).str_or(""), pos as usize))
    }

    pub fn truncate_string(args: &mut [Value]) -> Value {
        let s = arg(args, 0).str_or("");
        match arg(args, 1).as_int() {
            Some(pos) if pos >= 0 => {
                Value::Str(super::truncate_string(&s, pos as usize, arg(args, 2).truthy()))
            }
            _ => Value::Str(s),
        }
    }

    pub fn split_and_clean(args: &mut [Value]) -> Value {
        let s = arg(args, 0).str_or("");
        let splitter = match arg(args, 1) {
            Value::Pattern(re) => Splitter::Pattern(re.clone()),
            Value::Null => {
                let whole = if s.trim().is_empty() { Vec::new() } else { vec![s] };
                return Value::from(whole);
            }
            other => Splitter::Literal(other.str_or("")),
        };
        Value::from(super::split_and_clean(&s, &splitter))
    }

    pub fn interpolate(args: &mut [Value]) -> Value {
        let template = arg(args, 0).str_or("");
        let tokens: Vec<TokenMap> = match arg(args, 1) {
            Value::Map(map) => vec![token_map(map)],
            Value::List(items) => items
                .iter()
                .map(|item| item.as_map().map(token_map).unwrap_or_default())
                .collect(),
            _ => return Value::Str(template),
        };
        Value::Str(super::interpolate(&template, &tokens))
    }

    fn token_map(map: &BTreeMap<String, Value>) -> TokenMap {
        map.iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value.str_or("")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeat_string_concatenates() {
        assert_eq!(repeat_string("-", 5), "-----");
        assert_eq!(repeat_string("anyway", 2), "anywayanyway");
        assert_eq!(repeat_string("x", 0), "");
    }

    #[test]
    fn repeat_string_adapter_refuses_oversized_results() {
        assert_eq!(
            invoke::repeat_string(&mut [Value::from("ab"), Value::Int(i64::MAX)]),
            Value::Null
        );
        assert_eq!(
            invoke::repeat_string(&mut [Value::from("x"), Value::Int(MAX_REPEAT_LEN as i64 + 1)]),
            Value::Null
        );
        assert_eq!(
            invoke::repeat_string(&mut [Value::from("0"), Value::Int(3)]),
            Value::from("000")
        );
    }

    #[test]
    fn cleanup_whitespace_collapses_and_trims() {
        assert_eq!(cleanup_whitespace("   9822     \nAA   \t ", false), "9822 AA");
        assert_eq!(cleanup_whitespace("  a   b  \n c ", false), "a b c");
    }

    #[test]
    fn cleanup_whitespace_can_keep_line_breaks() {
        assert_eq!(cleanup_whitespace("   9822     \nAA", true), "9822 \nAA");
        assert_eq!(cleanup_whitespace("a  b\r\nc", true), "a b\nc");
    }

    #[test]
    fn cleanup_whitespace_tightens_tags() {
        assert_eq!(cleanup_whitespace("<b  >x</b>   <i>", false), "<b>x</b><i>");
    }

    #[test]
    fn char_case_checks() {
        assert!(char_at_is_upper_case("someChar", 4));
        assert!(!char_at_is_upper_case("someChar", 2));
        assert!(char_at_is_lower_case("someChar", 2));
        assert!(!char_at_is_lower_case("someChar", 4));
        assert!(char_at_is_upper_case("École", 0));
        assert!(char_at_is_lower_case("Namibië", 6));
        assert!(!char_at_is_upper_case("A1", 1));
        assert!(!char_at_is_lower_case("abc", 10));
    }

    #[test]
    fn truncate_string_appends_ellipsis() {
        assert_eq!(truncate_string("this is too long", 10, false), "this is to\u{2026}");
        assert_eq!(truncate_string("this is too long", 10, true), "this is\u{2026}");
        assert_eq!(truncate_string("short", 10, true), "short");
    }

    #[test]
    fn truncate_on_word_boundary_keeps_raw_cut() {
        assert_eq!(truncate_string("this is", 4, true), "this\u{2026}");
        assert_eq!(truncate_string("abcdef", 3, true), "abc\u{2026}");
    }

    #[test]
    fn split_and_clean_drops_blank_segments() {
        let re = Regex::new(r"\n").expect("regex");
        assert_eq!(
            split_and_clean("some\n\n\nstring", &Splitter::from(re)),
            vec!["some", "string"]
        );
        assert_eq!(
            split_and_clean("some string   some", &Splitter::from("")).concat(),
            "somestringsome"
        );
        assert_eq!(split_and_clean("a, ,b", &Splitter::from(",")), vec!["a", "b"]);
    }

    #[test]
    fn interpolate_single_token_map() {
        let world = tokens(&[("world", "folks")]);
        assert_eq!(interpolate("Hello {world}", [&world]), "Hello folks");
    }

    #[test]
    fn interpolate_token_list_concatenates() {
        let list = vec![
            tokens(&[("val", "1")]),
            tokens(&[("val", "")]),
            tokens(&[("val", "empty values too")]),
        ];
        assert_eq!(
            interpolate("<td>{val}</td>", &list),
            "<td>1</td><td></td><td>empty values too</td>"
        );
    }

    #[test]
    fn interpolate_keeps_unknown_placeholders() {
        let world = tokens(&[("world", "folks")]);
        assert_eq!(interpolate("{greeting} {world}", [&world]), "{greeting} folks");
    }

    #[test]
    fn interpolate_adapter_accepts_numbers_and_rejects_scalars() {
        let row = |v: Value| Value::Map(BTreeMap::from([("val".to_string(), v)]));
        let mut args = [
            Value::from("<td>{val}</td>"),
            Value::List(vec![row(Value::Int(1)), row(Value::Int(2))]),
        ];
        assert_eq!(invoke::interpolate(&mut args), Value::from("<td>1</td><td>2</td>"));

        let mut args = [Value::from("Hello {world}"), Value::Int(3)];
        assert_eq!(invoke::interpolate(&mut args), Value::from("Hello {world}"));
    }
}
}

pub mod numbers {
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
/// ```text
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

}

pub mod dates {
//! Date parsing.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::value::{Value, arg};

pub const DEFAULT_DATE_FORMAT: &str = "dmy";

static DATE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ :\-/]").expect("valid date separator regex"));

/// Parses a delimited date with optional time, e.g. `"15/04/2001 13:45"`.
///
/// `format` gives the order of the first three fields with `d`, `m` and `y`.
/// Fields after the third are hour, minute, second and millisecond; an empty
/// time field reads as zero. Returns
/// `None` unless year, month and day form that exact calendar date; years
/// below 100 are rejected.
pub fn try_parse_date(candidate: &str, format: &str) -> Option<NaiveDateTime> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let fields: Vec<&str> = DATE_SEPARATOR_RE.split(candidate).collect();
    let (date_fields, time_fields) = fields.split_at(fields.len().min(3));

    let field = |part: char| -> Option<i64> {
        let idx = format.chars().enumerate().filter(|(_, c)| *c == part).last()?.0;
        date_fields.get(idx)?.parse().ok()
    };
    let (year, month, day) = (field('y')?, field('m')?, field('d')?);
    if year < 100 {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;

    if time_fields.len() > 4 {
        return None;
    }
    let time: Vec<u32> = time_fields
        .iter()
        .map(|t| if t.is_empty() { Some(0) } else { t.parse().ok() })
        .collect::<Option<_>>()?;
    let at = |i: usize| time.get(i).copied().unwrap_or(0);

    date.and_hms_milli_opt(at(0), at(1), at(2), at(3))
}

pub mod invoke {
    use super::*;

    pub fn try_parse_date(args: &mut [Value]) -> Value {
        let candidate = arg(args, 0);
        if !candidate.truthy() {
            return Value::Null;
        }
        Value::from(super::try_parse_date(
            &candidate.str_or(""),
            &arg(args, 1).str_or(DEFAULT_DATE_FORMAT),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = try_parse_date("15/04/2001", "dmy").expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (2001, 4, 15));
    }

    #[test]
    fn parses_time_fields() {
        let date = try_parse_date("04/03/1945 01:43", "mdy").expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (1945, 4, 3));
        assert_eq!((date.hour(), date.minute(), date.second()), (1, 43, 0));
    }

    #[test]
    fn empty_time_fields_read_as_zero() {
        let date = try_parse_date("15/04/2001 10:", "dmy").expect("valid date");
        assert_eq!((date.day(), date.hour(), date.minute()), (15, 10, 0));
        let date = try_parse_date("15/04/2001 10::30", "dmy").expect("valid date");
        assert_eq!((date.hour(), date.minute(), date.second()), (10, 0, 30));
    }

    #[test]
    fn parses_iso_order() {
        let date = try_parse_date("2015-07-02", "ymd").expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (2015, 7, 2));
    }

    #[test]
    fn rejects_fields_that_do_not_round_trip() {
        assert_eq!(try_parse_date("04/03/1945", "ymd"), None);
        assert_eq!(try_parse_date("31/02/2001", "dmy"), None);
        assert_eq!(try_parse_date("15/13/2001", "dmy"), None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(try_parse_date("", "dmy"), None);
        assert_eq!(try_parse_date("15/april/2001", "dmy"), None);
        assert_eq!(try_parse_date("15/04/2001", "dm"), None);
        assert_eq!(try_parse_date("15/04/2001 25:00", "dmy"), None);
    }
}
}

pub use namespace::{ImportError, ImportPolicy, ImportRequest, Namespace};
pub use value::Value;

/// Entry point registered under `name`.
pub fn lookup(name: &str) -> Option<namespace::Invoke> {
    let invoke: namespace::Invoke = match name {
        "randomString" => random::invoke::random_string,
        "getUniqueRandomValues" => random::invoke::unique_random_values,
        "mapCollection" => collections::invoke::map_collection,
        "hash2Object" => collections::invoke::hash_to_object,
        "uniqueValuesFromArray" => collections::invoke::unique_values,
        "regExForDiacriticals" => validation::invoke::regex_for_diacriticals,
        "checkPostalCode" => validation::invoke::check_postal_code,
        "checkEmailValidity" => validation::invoke::check_email_validity,
        "repeatString" => strings::invoke::repeat_string,
        "cleanupWhitespace" => strings::invoke::cleanup_whitespace,
        "charAtIsUpperCase" => strings::invoke::char_at_is_upper_case,
        "charAtIsLowerCase" => strings::invoke::char_at_is_lower_case,
        "truncateString" => strings::invoke::truncate_string,
        "splitAndClean" => strings::invoke::split_and_clean,
        "interpolate" => strings::invoke::interpolate,
        "isPrime" => numbers::invoke::is_prime,
        "numberBetween" => numbers::invoke::number_between,
        "padLeft" => numbers::invoke::pad_left,
        "tryParseDate" => dates::invoke::try_parse_date,
        _ => return None,
    };
    Some(invoke)
}

/// Imports helpers by name into `target`; unknown names are bound to a stub.
pub fn import(request: impl Into<ImportRequest>, target: Namespace) -> Namespace {
    namespace::import_lenient(lookup, request, target)
}

/// Imports helpers by name into `target` under an explicit policy.
pub fn import_with(
    request: impl Into<ImportRequest>,
    target: Namespace,
    policy: ImportPolicy,
) -> Result<Namespace, ImportError> {
    namespace::import_with(lookup, request, target, policy)
}
