//! Integration tests for the helper functions and the by-name import surface

use std::collections::HashSet;

use pure_helpers::helpers::{
    self, ImportError, ImportPolicy, Namespace, Splitter, TokenMap, Value,
};
use pure_helpers::registry::{Registry, import};

#[test]
fn test_unique_random_values_are_distinct_and_in_range() {
    for max in [1usize, 2, 7, 25, 1000] {
        for count in 0..=max.min(12) {
            let values = helpers::unique_random_values(count, max).expect("count <= max");
            assert_eq!(values.len(), count);
            assert_eq!(values.iter().collect::<HashSet<_>>().len(), count);
            assert!(values.iter().all(|v| (1..=max).contains(v)), "{values:?} outside 1..={max}");
        }
    }
}

#[test]
fn test_postal_codes() {
    assert!(helpers::check_postal_code("9822 AA", "nnnnaa"));
    assert!(!helpers::check_postal_code("982234 N", "nnnnaa"));
    assert!(helpers::check_postal_code("982234-N", "nnnnnna"));
}

#[test]
fn test_cleanup_whitespace_collapses_and_trims() {
    assert_eq!(helpers::cleanup_whitespace("  a   b  \n c ", false), "a b c");
    assert_eq!(helpers::cleanup_whitespace("<p>  a </p>  <p >b</p>", false), "<p> a </p><p>b</p>");
}

#[test]
fn test_truncate_string() {
    assert_eq!(helpers::truncate_string("this is too long", 10, false), "this is to\u{2026}");
    assert_eq!(helpers::truncate_string("this is too long", 10, true), "this is\u{2026}");
    assert_eq!(helpers::truncate_string("short", 10, true), "short");
}

#[test]
fn test_interpolate_over_several_token_maps() {
    let rows: Vec<TokenMap> = ["1", "", "empty values too"]
        .into_iter()
        .map(|val| TokenMap::from([("val".to_string(), val.to_string())]))
        .collect();
    assert_eq!(
        helpers::interpolate("<td>{val}</td>", &rows),
        "<td>1</td><td></td><td>empty values too</td>"
    );
    assert_eq!(helpers::interpolate("{missing}", &rows[..1]), "{missing}");
}

#[test]
fn test_split_and_clean_with_pattern() {
    let newline = regex::Regex::new(r"\n+").expect("valid regex");
    assert_eq!(
        helpers::split_and_clean("some\n\n\nstring", &Splitter::from(newline)),
        vec!["some", "string"]
    );
}

#[test]
fn test_lenient_import_binds_stub() {
    let ns = import("isPrime, isEven", Namespace::new());
    assert_eq!(ns.call("isPrime", &mut [Value::Int(7919)]), Some(Value::Bool(true)));
    assert_eq!(
        ns.call("isEven", &mut [Value::Int(2)]),
        Some(Value::from("[isEven] is not a known method in this namespace, sorry"))
    );
}

#[test]
fn test_strict_import_rejects_unknown_names() {
    let result = Registry::builtin().import("padLeft,isEven", Namespace::new(), ImportPolicy::Strict);
    assert_eq!(result.expect_err("isEven"), ImportError::UnknownMethod("isEven".to_string()));
}

#[test]
fn test_imported_helpers_use_their_defaults() {
    let ns = import(["padLeft", "checkPostalCode", "tryParseDate"], Namespace::new());
    assert_eq!(ns.call("padLeft", &mut [Value::Int(3)]), Some(Value::from("03")));
    assert_eq!(ns.call("checkPostalCode", &mut [Value::from("1234 ab")]), Some(Value::Bool(true)));
    assert_eq!(
        ns.call("tryParseDate", &mut [Value::from("15/04/2001")])
            .map(|date| date.to_string()),
        Some("2001-04-15T00:00:00.000".to_string())
    );
}
