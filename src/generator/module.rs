//! Renders the distributable module: every source group inlined as a
//! `pub mod`, followed by a name lookup table and the import entry points.

use std::fmt::Write;

use crate::registry::Registry;

const HEADER: &str = "\
// @generated by pure-helpers. Do not edit by hand; regenerate with
// `pure-helpers module` (or `pure-helpers all`).
//
// Requires the `chrono`, `rand`, `regex` and `thiserror` crates.
";

/// Renders the module source. The same registry always renders the same bytes.
pub fn render(registry: &Registry) -> String {
    let mut out = String::from(HEADER);

    for group in registry.source_groups() {
        let _ = write!(out, "\npub mod {} {{\n", group.module);
        out.push_str(disable_doc_examples(group.source).trim_end());
        out.push_str("\n}\n");
    }

    out.push_str(
        "\npub use namespace::{ImportError, ImportPolicy, ImportRequest, Namespace};\n\
         pub use value::Value;\n",
    );

    out.push_str("\n/// Entry point registered under `name`.\n");
    out.push_str("pub fn lookup(name: &str) -> Option<namespace::Invoke> {\n");
    out.push_str("    let invoke: namespace::Invoke = match name {\n");
    for descriptor in registry.descriptors() {
        let _ = writeln!(
            out,
            "        {:?} => {},",
            descriptor.name,
            descriptor.entry_path()
        );
    }
    out.push_str("        _ => return None,\n    };\n    Some(invoke)\n}\n");

    out.push_str(
        "
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
",
    );

    out
}

/// Turns doc-comment code fences into `text` blocks. The examples use this
/// crate's paths, which do not resolve where the module is embedded.
fn disable_doc_examples(source: &str) -> String {
    let mut in_fence = false;
    source
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let Some(doc) = trimmed
                .strip_prefix("///")
                .or_else(|| trimmed.strip_prefix("//!"))
            else {
                return line.to_string();
            };
            if !doc.trim_start().starts_with("```") {
                return line.to_string();
            }
            in_fence = !in_fence;
            if !in_fence {
                return line.to_string();
            }
            let indent = &line[..line.len() - trimmed.len()];
            format!("{indent}{} ```text", &trimmed[..3])
        })
        .collect::<Vec<_>>()
        .join("\n")
}
