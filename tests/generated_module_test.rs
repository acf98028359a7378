//! Integration tests for the checked-in distributable module
//!
//! `dist/pure_helpers.rs` is compiled into this test crate as a plain module,
//! so its `import` and `lookup` surface is exercised the way a consumer
//! would use it.

#[path = "../dist/pure_helpers.rs"]
#[allow(dead_code)]
mod generated;

use generated::{ImportError, ImportPolicy, Namespace, Value};
use pure_helpers::generator::module;
use pure_helpers::registry::Registry;

#[test]
fn test_checked_in_module_is_current() {
    let on_disk = include_str!("../dist/pure_helpers.rs");
    assert!(
        on_disk == module::render(Registry::builtin()),
        "dist/pure_helpers.rs is stale; regenerate it with `pure-helpers module`"
    );
}

#[test]
fn test_generated_import_resolves_and_stubs() {
    let ns = generated::import("isPrime, nope", Namespace::new());

    assert_eq!(ns.call("isPrime", &mut [Value::Int(7919)]), Some(Value::Bool(true)));
    assert_eq!(
        ns.call("nope", &mut []),
        Some(Value::from("[nope] is not a known method in this namespace, sorry"))
    );
}

#[test]
fn test_generated_strict_import_rejects_unknown_names() {
    let err = generated::import_with(["padLeft", "isEven"], Namespace::new(), ImportPolicy::Strict)
        .expect_err("isEven is unknown");
    assert_eq!(err, ImportError::UnknownMethod("isEven".to_string()));
}

#[test]
fn test_generated_lookup_covers_every_helper() {
    for name in Registry::builtin().names() {
        assert!(generated::lookup(name).is_some(), "{name} missing from lookup");
    }
    assert!(generated::lookup("isEven").is_none());

    let pad_left = generated::lookup("padLeft").expect("padLeft");
    assert_eq!(
        pad_left(&mut [Value::Int(3), Value::Int(100), Value::from("-")]),
        Value::from("--3")
    );
}

#[test]
fn test_generated_helpers_behave_like_the_library() {
    let ns = generated::import(
        ["truncateString", "checkPostalCode"],
        Namespace::new(),
    );
    assert_eq!(
        ns.call("truncateString", &mut [Value::from("this is too long"), Value::Int(10), Value::Bool(true)]),
        Some(Value::from("this is\u{2026}"))
    );
    assert_eq!(
        ns.call("checkPostalCode", &mut [Value::from("9822 AA")]),
        Some(Value::Bool(true))
    );
}
