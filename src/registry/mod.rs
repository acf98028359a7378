//! The helper registry: one [`Descriptor`] per importable helper.

mod catalog;

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::doc::{Block, Doc};
use crate::harness::TestCase;
use crate::helpers::namespace::{self, ImportError, ImportPolicy, ImportRequest, Invoke, Namespace};

pub use catalog::{SUPPORT_GROUPS, SourceGroup};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry::new(catalog::descriptors()));

/// A registered helper: entry point, documentation, source and tests.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Import name, unique within a registry.
    pub name: &'static str,
    /// Signature of the typed Rust function.
    pub signature: &'static str,
    pub group: &'static SourceGroup,
    /// Name of the entry point inside the group's `invoke` module.
    pub entry: &'static str,
    pub invoke: Invoke,
    pub description: &'static str,
    pub tests: Vec<TestCase>,
}

impl Descriptor {
    pub fn doc(&self) -> Doc {
        Doc::parse(self.description)
    }

    /// Path of the entry point relative to the helpers root.
    pub fn entry_path(&self) -> String {
        format!("{}::invoke::{}", self.group.module, self.entry)
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<Descriptor>,
}

impl Registry {
    /// Later descriptors with an already registered name are dropped.
    pub fn new(descriptors: Vec<Descriptor>) -> Self {
        let mut seen = HashSet::new();
        let descriptors = descriptors
            .into_iter()
            .filter(|descriptor| {
                let fresh = seen.insert(descriptor.name);
                if !fresh {
                    tracing::warn!("duplicate helper name ignored: {}", descriptor.name);
                }
                fresh
            })
            .collect();
        Self { descriptors }
    }

    /// The registry of all helpers in this crate, built on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn lookup(&self, name: &str) -> Option<Invoke> {
        self.get(name).map(|d| d.invoke)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|d| d.name)
    }

    pub fn import(
        &self,
        request: impl Into<ImportRequest>,
        target: Namespace,
        policy: ImportPolicy,
    ) -> Result<Namespace, ImportError> {
        namespace::import_with(|name| self.lookup(name), request, target, policy)
    }

    /// Support groups first, then every helper group once, in registry order.
    pub fn source_groups(&self) -> Vec<&'static SourceGroup> {
        let mut groups: Vec<&'static SourceGroup> = SUPPORT_GROUPS.to_vec();
        for descriptor in &self.descriptors {
            if !groups.iter().any(|g| g.module == descriptor.group.module) {
                groups.push(descriptor.group);
            }
        }
        groups
    }

    /// Plain text listing of every importable helper.
    pub fn api_listing(&self) -> String {
        let mut out = String::from("\nImportable methods. Note: all methods are pure.\n");
        out.push_str(&"-".repeat(80));

        for descriptor in &self.descriptors {
            let doc = descriptor.doc();
            out.push_str(&format!(
                "\n-- {} {}\n=> {}",
                descriptor.name, descriptor.signature, doc.summary
            ));
            for block in &doc.blocks {
                match block {
                    Block::Text(text) => out.push_str(&format!("\n   {text}")),
                    Block::Example(code) => {
                        for line in code.lines() {
                            out.push_str(&format!("\n    > {line}"));
                        }
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Imports from the builtin registry, binding stubs for unknown names.
pub fn import(request: impl Into<ImportRequest>, target: Namespace) -> Namespace {
    let registry = Registry::builtin();
    namespace::import_lenient(|name| registry.lookup(name), request, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Value;

    #[test]
    fn builtin_registry_has_unique_names() {
        let registry = Registry::builtin();
        let names: HashSet<_> = registry.names().collect();
        assert_eq!(names.len(), registry.descriptors().len());
        assert_eq!(registry.descriptors().len(), 19);
    }

    #[test]
    fn every_entry_point_exists_in_its_source_group() {
        for descriptor in Registry::builtin().descriptors() {
            let needle = format!("pub fn {}(args: &mut [Value]) -> Value", descriptor.entry);
            assert!(
                descriptor.group.source.contains(&needle),
                "{} not found in {}",
                descriptor.entry_path(),
                descriptor.group.module
            );
        }
    }

    #[test]
    fn every_helper_is_documented_and_tested() {
        for descriptor in Registry::builtin().descriptors() {
            assert_ne!(descriptor.doc().summary, crate::doc::UNDOCUMENTED, "{}", descriptor.name);
            assert!(!descriptor.tests.is_empty(), "{} has no tests", descriptor.name);
        }
    }

    #[test]
    fn source_groups_are_distinct_and_support_first() {
        let groups = Registry::builtin().source_groups();
        let modules: Vec<_> = groups.iter().map(|g| g.module).collect();
        assert_eq!(&modules[..3], &["value", "error", "namespace"]);
        assert_eq!(modules.iter().collect::<HashSet<_>>().len(), modules.len());
        assert_eq!(modules.len(), 9);
    }

    #[test]
    fn import_resolves_known_and_stubs_unknown() {
        let ns = import("numberBetween, truncateString ,nope", Namespace::new());
        assert_eq!(
            ns.call("numberBetween", &mut [Value::Int(15), Value::Int(5), Value::Int(20)]),
            Some(Value::Bool(true))
        );
        assert!(ns.contains("truncateString"));
        assert_eq!(
            ns.call("nope", &mut []),
            Some(Value::from("[nope] is not a known method in this namespace, sorry"))
        );
    }

    #[test]
    fn strict_import_through_registry() {
        let err = Registry::builtin()
            .import(["isPrime", "isEven"], Namespace::new(), ImportPolicy::Strict)
            .expect_err("isEven is unknown");
        assert_eq!(err, ImportError::UnknownMethod("isEven".to_string()));
    }

    #[test]
    fn duplicate_names_keep_first_registration() {
        let first = Registry::builtin().get("isPrime").cloned().expect("isPrime");
        let mut second = first.clone();
        second.signature = "shadow";
        let registry = Registry::new(vec![first, second]);
        assert_eq!(registry.descriptors().len(), 1);
        assert_ne!(registry.descriptors()[0].signature, "shadow");
    }

    #[test]
    fn api_listing_mentions_every_helper() {
        let listing = Registry::builtin().api_listing();
        for name in Registry::builtin().names() {
            assert!(listing.contains(&format!("-- {name} ")), "{name} missing");
        }
    }
}
