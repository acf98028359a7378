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
