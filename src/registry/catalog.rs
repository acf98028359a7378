//! The builtin helper descriptors.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;

use super::Descriptor;
use crate::harness::TestCase;
use crate::helpers::{Callback, Invoke, Value, collections, dates, numbers, random, strings, validation};

/// One helper source file, embedded verbatim into the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceGroup {
    pub module: &'static str,
    pub source: &'static str,
}

pub static VALUE: SourceGroup = SourceGroup {
    module: "value",
    source: include_str!("../helpers/value.rs"),
};
pub static ERROR: SourceGroup = SourceGroup {
    module: "error",
    source: include_str!("../helpers/error.rs"),
};
pub static NAMESPACE: SourceGroup = SourceGroup {
    module: "namespace",
    source: include_str!("../helpers/namespace.rs"),
};
pub static RANDOM: SourceGroup = SourceGroup {
    module: "random",
    source: include_str!("../helpers/random.rs"),
};
pub static COLLECTIONS: SourceGroup = SourceGroup {
    module: "collections",
    source: include_str!("../helpers/collections.rs"),
};
pub static VALIDATION: SourceGroup = SourceGroup {
    module: "validation",
    source: include_str!("../helpers/validation.rs"),
};
pub static STRINGS: SourceGroup = SourceGroup {
    module: "strings",
    source: include_str!("../helpers/strings.rs"),
};
pub static NUMBERS: SourceGroup = SourceGroup {
    module: "numbers",
    source: include_str!("../helpers/numbers.rs"),
};
pub static DATES: SourceGroup = SourceGroup {
    module: "dates",
    source: include_str!("../helpers/dates.rs"),
};

/// Groups every generated module needs regardless of the helpers it carries.
pub static SUPPORT_GROUPS: [&SourceGroup; 3] = [&VALUE, &ERROR, &NAMESPACE];

pub fn descriptors() -> Vec<Descriptor> {
    let mut all = Vec::new();
    all.extend(random_helpers());
    all.extend(collection_helpers());
    all.extend(validation_helpers());
    all.extend(string_helpers());
    all.extend(number_helpers());
    all.extend(date_helpers());
    all
}

fn s(text: &str) -> Value {
    Value::from(text)
}

fn distinct_ints<const N: usize>(value: &Value) -> bool {
    value.as_list().is_some_and(|items| {
        items.len() == N && items.iter().map(ToString::to_string).collect::<HashSet<_>>().len() == N
    })
}

fn pattern_test(f: Invoke, flags: &str, subject: &str) -> Value {
    match f(&mut [s(flags)]) {
        Value::Pattern(re) => Value::Bool(re.is_match(subject)),
        other => other,
    }
}

fn map_field(value: Value, key: &str) -> Value {
    value
        .as_map()
        .and_then(|map| map.get(key))
        .cloned()
        .unwrap_or_default()
}

fn add_one() -> Value {
    Value::Func(Callback::new(|v| Value::Int(v.int_or(0) + 1)))
}

fn row(val: Value) -> Value {
    Value::Map(BTreeMap::from([("val".to_string(), val)]))
}

fn random_helpers() -> Vec<Descriptor> {
    vec![
        Descriptor {
            name: "randomString",
            signature: "random_string(prefix: &str, min: u64, max: u64) -> String",
            group: &RANDOM,
            entry: "random_string",
            invoke: random::invoke::random_string,
            description: "
                creates a random (hex) number string, possibly preceded with a prefix
                The number is drawn from [`min`, `max`) (defaults 10000 and 10000000).
                <ex>random_string(\"id\", 10_000, 10_000_000); // => \"id2f1a9c\"</ex>
                Returns `String`",
            tests: vec![
                TestCase::satisfies(
                    r#"randomString("HELLO")"#,
                    |f| f(&mut [s("HELLO")]),
                    |v| v.as_str().is_some_and(|s| s.starts_with("HELLO")),
                )
                .with_comment("Should start with HELLO"),
            ],
        },
        Descriptor {
            name: "getUniqueRandomValues",
            signature: "unique_random_values(count: usize, max: usize) -> Result<Vec<usize>, HelperError>",
            group: &RANDOM,
            entry: "unique_random_values",
            invoke: random::invoke::unique_random_values,
            description: "
                retrieves [`count`] unique (pseudo) random values from 1 to [`max`]
                **Note**: `count` may not exceed `max`, which is reported as `HelperError::SampleTooLarge`.
                <ex>unique_random_values(3, 25)?; // => [17, 3, 22]</ex>
                Returns `Vec<usize>`",
            tests: vec![
                TestCase::satisfies(
                    "getUniqueRandomValues(10, 1000)",
                    |f| f(&mut [Value::Int(10), Value::Int(1000)]),
                    distinct_ints::<10>,
                ),
                TestCase::satisfies(
                    "getUniqueRandomValues(5, 100000)",
                    |f| f(&mut [Value::Int(5), Value::Int(100_000)]),
                    distinct_ints::<5>,
                ),
                TestCase::satisfies(
                    "getUniqueRandomValues(3, 25)",
                    |f| f(&mut [Value::Int(3), Value::Int(25)]),
                    distinct_ints::<3>,
                ),
                TestCase::equals(
                    "getUniqueRandomValues(4, 3)",
                    |f| f(&mut [Value::Int(4), Value::Int(3)]),
                    Value::Null,
                )
                .with_comment("more values than the range holds"),
            ],
        },
    ]
}

fn collection_helpers() -> Vec<Descriptor> {
    vec![
        Descriptor {
            name: "mapCollection",
            signature: "map_collection<T>(collection: &mut [T], f: impl FnMut(&T) -> T, mutate: bool) -> Option<Vec<T>>",
            group: &COLLECTIONS,
            entry: "map_collection",
            invoke: collections::invoke::map_collection,
            description: "
                loops a collection and applies [`f`] to each element.
                By default the collection is left untouched and a mapped copy is returned.
                [`collection`]: the collection to loop
                [`f`]: the function to apply to each element
                [`mutate`]: rewrite the original collection in place instead
                <ex>let mut numbers = vec![1, 2, 3];
                map_collection(&mut numbers, |n| n + 1, false); // => Some([2, 3, 4])
                map_collection(&mut numbers, |n| n * 2, true);  // => None, numbers == [2, 4, 6]</ex>
                Returns `Some(Vec<T>)` (`mutate` = false) or `None` (`mutate` = true)",
            tests: vec![
                TestCase::equals(
                    "mapCollection([1, 2, 3, 4, 5], el => el + 1)",
                    |f| f(&mut [Value::from(vec![1i64, 2, 3, 4, 5]), add_one()]),
                    vec![2i64, 3, 4, 5, 6],
                ),
                TestCase::equals(
                    "mapCollection([1, 2, 3, 4, 5], el => el + 1, true)",
                    |f| {
                        let mut args = [Value::from(vec![1i64, 2, 3, 4, 5]), add_one(), Value::Bool(true)];
                        f(&mut args);
                        args[0].clone()
                    },
                    vec![2i64, 3, 4, 5, 6],
                )
                .with_comment("observed value is the mutated collection"),
            ],
        },
        Descriptor {
            name: "hash2Object",
            signature: "hash_to_object(query: &str) -> BTreeMap<String, String>",
            group: &COLLECTIONS,
            entry: "hash_to_object",
            invoke: collections::invoke::hash_to_object,
            description: "
                deserializes a (url) hash string [`query`] to a key-value collection
                When a key occurs more than once, the last value wins.
                <ex>
                    hash_to_object(\"Country=Netherlands&Lang=NL&min=10&max=89\");
                    |x4|// => {\"Country\": \"Netherlands\", \"Lang\": \"NL\", \"max\": \"89\", \"min\": \"10\"}
                </ex>
                Returns `BTreeMap<String, String>`",
            tests: vec![
                TestCase::equals(
                    r#"hash2Object("Lang=NL&min=10&max=89").max"#,
                    |f| Value::from(map_field(f(&mut [s("Lang=NL&min=10&max=89")]), "max").as_int()),
                    89i64,
                ),
                TestCase::equals(
                    r#"hash2Object("Lang=NL&min=10&max=89").min"#,
                    |f| Value::from(map_field(f(&mut [s("Lang=NL&min=10&max=89")]), "min").as_int()),
                    10i64,
                ),
                TestCase::equals(
                    r#"hash2Object("Lang=NL&min=10&max=89").Lang"#,
                    |f| map_field(f(&mut [s("Lang=NL&min=10&max=89")]), "Lang"),
                    "NL",
                ),
            ],
        },
        Descriptor {
            name: "uniqueValuesFromArray",
            signature: "unique_values<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T>",
            group: &COLLECTIONS,
            entry: "unique_values",
            invoke: collections::invoke::unique_values,
            description: "
                retrieves unique values from [`items`], in order of first appearance
                <ex>
                unique_values(&[1, 2, 2, 3, 2, 3, 23, 5, 6, 5]); // => [1, 2, 3, 23, 5, 6]
                unique_values(&[1, 2, 1, 2, 1, 2]);              // => [1, 2]</ex>
                Returns `Vec<T>`",
            tests: vec![
                TestCase::equals(
                    "uniqueValuesFromArray([1, 1, 2, 2, 3])",
                    |f| f(&mut [Value::from(vec![1i64, 1, 2, 2, 3])]),
                    vec![1i64, 2, 3],
                ),
                TestCase::satisfies(
                    "uniqueValuesFromArray([1, 1, 'hi', 2, 2, 3, 'hi'])",
                    |f| {
                        f(&mut [Value::List(vec![
                            Value::Int(1),
                            Value::Int(1),
                            s("hi"),
                            Value::Int(2),
                            Value::Int(2),
                            Value::Int(3),
                            s("hi"),
                        ])])
                    },
                    |v| v.to_string() == "1,hi,2,3",
                ),
            ],
        },
    ]
}

fn validation_helpers() -> Vec<Descriptor> {
    vec![
        Descriptor {
            name: "regExForDiacriticals",
            signature: "regex_for_diacriticals(flags: &str) -> Result<Regex, HelperError>",
            group: &VALIDATION,
            entry: "regex_for_diacriticals",
            invoke: validation::invoke::regex_for_diacriticals,
            description: "
                returns a regular expression for latin and diacritical characters.
                [`flags`]: regex flags if applicable (`i`, `m`, `s`, `x`; `g` is accepted and ignored)
                The pattern matches `a-z`, whitespace, `.`, `-` and the accented A, E, I, O, U, N and C of Latin-1.
                <ex>regex_for_diacriticals(\"i\")?.is_match(\"Namibië\"); // => true</ex>
                Returns `Regex`",
            tests: vec![
                TestCase::equals(
                    r#"regExForDiacriticals("i").test("Namibië")"#,
                    |f| pattern_test(f, "i", "Namibië"),
                    true,
                )
                .with_comment("should be true"),
                TestCase::equals(
                    r#"regExForDiacriticals("i").test("Netherlands")"#,
                    |f| pattern_test(f, "i", "Netherlands"),
                    true,
                )
                .with_comment("should be true"),
                TestCase::equals(
                    r#"!regExForDiacriticals("i").test("I^Am~Ëmáil@isok.eu")"#,
                    |f| Value::Bool(!pattern_test(f, "i", "I^Am~Ëmáil@isok.eu").truthy()),
                    false,
                )
                .with_comment("should be false"),
            ],
        },
        Descriptor {
            name: "checkPostalCode",
            signature: "check_postal_code(candidate: &str, format: &str) -> bool",
            group: &VALIDATION,
            entry: "check_postal_code",
            invoke: validation::invoke::check_postal_code,
            description: "
                checks a postal (aka zip-) code [`candidate`] to be valid vis a vis [`format`]
                Postal code should consist of numbers and/or letters (like `\"123 ZX\"`)
                [`candidate`] can contain spaces or hyphens.
                [`format`] is a string where `n` signifies a number, and any other character a letter.
                The import surface defaults to `\"nnnnaa\"` (dutch postal code format).
                Examples
                <ex>check_postal_code(\"9822 AA\", \"nnnnaa\");  // => true
                check_postal_code(\"982234 N\", \"nnnnaa\"); // => false
                check_postal_code(\"982234-N\", \"nnnnnna\"); // => true
                check_postal_code(\"98 Z-12B\", \"nnanna\");  // => true</ex>
                Returns `bool`",
            tests: vec![
                TestCase::equals("checkPostalCode('9822 AA')", |f| f(&mut [s("9822 AA")]), true)
                    .with_comment("should be ok"),
                TestCase::equals("checkPostalCode('982234 N')", |f| f(&mut [s("982234 N")]), false)
                    .with_comment("should be false"),
                TestCase::equals(
                    "checkPostalCode('982234-N', 'nnnnnna')",
                    |f| f(&mut [s("982234-N"), s("nnnnnna")]),
                    true,
                )
                .with_comment("should be true"),
                TestCase::equals(
                    "checkPostalCode('982234-N', 'nannnna')",
                    |f| f(&mut [s("982234-N"), s("nannnna")]),
                    false,
                )
                .with_comment("should be false"),
                TestCase::equals(
                    "checkPostalCode('98 Z-12B', 'nnanna')",
                    |f| f(&mut [s("98 Z-12B"), s("nnanna")]),
                    true,
                )
                .with_comment("should be true"),
            ],
        },
        Descriptor {
            name: "checkEmailValidity",
            signature: "check_email_validity(candidate: &str) -> bool",
            group: &VALIDATION,
            entry: "check_email_validity",
            invoke: validation::invoke::check_email_validity,
            description: "
                checks *syntactic* validity of email address [`candidate`].
                **Note**: this will not absolutely guarantee the address validity. It's a sloppy first check.
                The only 100% guaranteed verification of an e-mail address is to send a mail to it.
                Examples
                <ex>check_email_validity(\"I.Am.Email@somewhere.com\"); // => true
                check_email_validity(\"I-Am-Ëmáil@isok.eu\");       // => true
                check_email_validity(\"IAmNotEmail@@notok.nl\");    // => false
                </ex>
                Returns `bool`",
            tests: vec![
                TestCase::equals(
                    "checkEmailValidity('I.Am.Email@somewhere.com')",
                    |f| f(&mut [s("I.Am.Email@somewhere.com")]),
                    true,
                )
                .with_comment("should be ok"),
                TestCase::equals(
                    "checkEmailValidity('I.Am.NotEmail@somewhere')",
                    |f| f(&mut [s("I.Am.NotEmail@somewhere")]),
                    false,
                )
                .with_comment("should not be ok"),
                TestCase::equals("checkEmailValidity('IAmNotEmail')", |f| f(&mut [s("IAmNotEmail")]), false)
                    .with_comment("should not be ok"),
                TestCase::equals(
                    "checkEmailValidity('IAmNotEmail@@notok.nl')",
                    |f| f(&mut [s("IAmNotEmail@@notok.nl")]),
                    false,
                )
                .with_comment("should not be ok"),
                TestCase::equals(
                    "checkEmailValidity('I-Am-Ëmáil@isok.eu')",
                    |f| f(&mut [s("I-Am-Ëmáil@isok.eu")]),
                    true,
                )
                .with_comment("should be ok"),
                TestCase::equals(
                    "checkEmailValidity('I^Am~Ëmáil@isok.eu')",
                    |f| f(&mut [s("I^Am~Ëmáil@isok.eu")]),
                    true,
                )
                .with_comment("should be ok"),
            ],
        },
    ]
}

fn string_helpers() -> Vec<Descriptor> {
    vec![
        Descriptor {
            name: "repeatString",
            signature: "repeat_string(s: &str, times: usize) -> String",
            group: &STRINGS,
            entry: "repeat_string",
            invoke: strings::invoke::repeat_string,
            description: "
                returns a `String` where [`s`] is repeated [`times`] times.
                Note: this is `str::repeat` behind an importable name.",
            tests: vec![
                TestCase::equals(r#"repeatString("-", 5)"#, |f| f(&mut [s("-"), Value::Int(5)]), "-----"),
                TestCase::equals(r#"repeatString("0", 3)"#, |f| f(&mut [s("0"), Value::Int(3)]), "000"),
                TestCase::equals(
                    r#"repeatString("anyway", 2)"#,
                    |f| f(&mut [s("anyway"), Value::Int(2)]),
                    "anywayanyway",
                ),
            ],
        },
        Descriptor {
            name: "cleanupWhitespace",
            signature: "cleanup_whitespace(s: &str, keep_line_breaks: bool) -> String",
            group: &STRINGS,
            entry: "cleanup_whitespace",
            invoke: strings::invoke::cleanup_whitespace,
            description: "
                removes extra whitespace from [`s`], or extra whitespace except line breaks with [`keep_line_breaks`]
                **NOTE** also cleans whitespace within html-tags
                Examples
                <ex>cleanup_whitespace(\"
                |x5| free me of all      that
                |x5| whitespace here
                |x12|    \", false); // => \"free me of all that whitespace here\"</ex>
                <ex>cleanup_whitespace(\"
                |x5| free me of all      that
                |x5| whitespace here\", true); // => \"free me of all that\\n whitespace here\"</ex>
                Returns `String`
            ",
            tests: vec![
                TestCase::equals(
                    r#"cleanupWhitespace("   9822     \nAA   \t ")"#,
                    |f| f(&mut [s("   9822     \nAA   \t ")]),
                    "9822 AA",
                ),
                TestCase::equals(
                    r#"cleanupWhitespace("   9822     \nAA", true)"#,
                    |f| f(&mut [s("   9822     \nAA"), Value::Bool(true)]),
                    "9822 \nAA",
                ),
            ],
        },
        Descriptor {
            name: "charAtIsUpperCase",
            signature: "char_at_is_upper_case(s: &str, pos: usize) -> bool",
            group: &STRINGS,
            entry: "char_at_is_upper_case",
            invoke: strings::invoke::char_at_is_upper_case,
            description: "
                determines if the character at [`pos`] (zero based) within [`s`] is upper case
                Only ASCII letters and letters up to Latin Extended-B count as letters.
                Returns `bool`
            ",
            tests: vec![
                TestCase::equals(
                    r#"charAtIsUpperCase("someChar", 4)"#,
                    |f| f(&mut [s("someChar"), Value::Int(4)]),
                    true,
                ),
                TestCase::equals(
                    r#"charAtIsUpperCase("someChar", 2)"#,
                    |f| f(&mut [s("someChar"), Value::Int(2)]),
                    false,
                ),
            ],
        },
        Descriptor {
            name: "charAtIsLowerCase",
            signature: "char_at_is_lower_case(s: &str, pos: usize) -> bool",
            group: &STRINGS,
            entry: "char_at_is_lower_case",
            invoke: strings::invoke::char_at_is_lower_case,
            description: "
                determines if the character at [`pos`] (zero based) within [`s`] is lower case
                Returns `bool`
            ",
            tests: vec![
                TestCase::equals(
                    r#"charAtIsLowerCase("someChar", 4)"#,
                    |f| f(&mut [s("someChar"), Value::Int(4)]),
                    false,
                ),
                TestCase::equals(
                    r#"charAtIsLowerCase("someChar", 2)"#,
                    |f| f(&mut [s("someChar"), Value::Int(2)]),
                    true,
                ),
            ],
        },
        Descriptor {
            name: "truncateString",
            signature: "truncate_string(s: &str, pos: usize, whole_words_only: bool) -> String",
            group: &STRINGS,
            entry: "truncate_string",
            invoke: strings::invoke::truncate_string,
            description: "
                truncates [`s`] @ position [`pos`] and appends an ellipsis
                if [`whole_words_only`] is true, `s` will be truncated right after the last word in the truncated string
                Examples
                <ex>truncate_string(\"this is too long\", 10, false); // => \"this is to…\"
                truncate_string(\"this is too long\", 10, true);  // => \"this is…\"</ex>
                Returns `String`",
            tests: vec![
                TestCase::equals(
                    r#"truncateString("this is too long", 10)"#,
                    |f| f(&mut [s("this is too long"), Value::Int(10)]),
                    "this is to\u{2026}",
                ),
                TestCase::equals(
                    r#"truncateString("this is too long", 10, true)"#,
                    |f| f(&mut [s("this is too long"), Value::Int(10), Value::Bool(true)]),
                    "this is\u{2026}",
                ),
            ],
        },
        Descriptor {
            name: "splitAndClean",
            signature: "split_and_clean(s: &str, splitter: &Splitter) -> Vec<String>",
            group: &STRINGS,
            entry: "split_and_clean",
            invoke: strings::invoke::split_and_clean,
            description: "
                splits [`s`] using [`splitter`] and removes empty values from the resulting `Vec`
                `splitter` can be a literal (`Splitter::from(\",\")`) or a regular expression (`Splitter::from(regex)`)
                Example
                <ex>\"some\\n\\n\\nstring\".split('\\n').collect::<Vec<_>>();              // => [\"some\", \"\", \"\", \"string\"]
                split_and_clean(\"some\\n\\n\\nstring\", &Splitter::from(\"\\n\")); // => [\"some\", \"string\"]</ex>
                Returns `Vec<String>`",
            tests: vec![
                TestCase::satisfies(
                    r#"splitAndClean("some\n\n\nstring", /\n/)"#,
                    |f| {
                        let newline = Regex::new(r"\n").expect("valid newline regex");
                        f(&mut [s("some\n\n\nstring"), Value::Pattern(newline)])
                    },
                    |v| v.to_string() == "some,string",
                ),
                TestCase::equals(
                    r#"splitAndClean("some string   some", "").join("")"#,
                    |f| Value::from(f(&mut [s("some string   some"), s("")]).to_string().replace(',', "")),
                    "somestringsome",
                ),
            ],
        },
        Descriptor {
            name: "interpolate",
            signature: "interpolate<'a>(template: &str, tokens: impl IntoIterator<Item = &'a TokenMap>) -> String",
            group: &STRINGS,
            entry: "interpolate",
            invoke: strings::invoke::interpolate,
            description: "
                is a string templating method, using {[someproperty]} in a string and one or more token maps to replace [someproperty]
                Every token map produces one expansion of the template; the expansions are concatenated.
                Placeholders without a token are left alone, empty values are substituted as empty.
                Example:
                <ex>interpolate(\"Hello {world}\", [&tokens]); // => \"Hello folks\"
                interpolate(\"# Hello {world} \", &[folks, pete]); // => \"# Hello folks # Hello Pete \"</ex>
                Returns `String`",
            tests: vec![
                TestCase::equals(
                    r#"interpolate("Hello {world}", {world: "folks"})"#,
                    |f| {
                        let tokens = Value::Map(BTreeMap::from([("world".to_string(), s("folks"))]));
                        f(&mut [s("Hello {world}"), tokens])
                    },
                    "Hello folks",
                ),
                TestCase::equals(
                    r#"interpolate("<td>{val}</td>", [{val: 1}, {val: 2}])"#,
                    |f| {
                        f(&mut [
                            s("<td>{val}</td>"),
                            Value::List(vec![row(Value::Int(1)), row(Value::Int(2))]),
                        ])
                    },
                    "<td>1</td><td>2</td>",
                ),
                TestCase::equals(
                    r#"interpolate("<td>{val}</td>", [{val: 1}, {val: ""}, {val: "empty values too"}])"#,
                    |f| {
                        f(&mut [
                            s("<td>{val}</td>"),
                            Value::List(vec![row(Value::Int(1)), row(s("")), row(s("empty values too"))]),
                        ])
                    },
                    "<td>1</td><td></td><td>empty values too</td>",
                ),
            ],
        },
    ]
}

fn number_helpers() -> Vec<Descriptor> {
    vec![
        Descriptor {
            name: "isPrime",
            signature: "is_prime(n: u64) -> bool",
            group: &NUMBERS,
            entry: "is_prime",
            invoke: numbers::invoke::is_prime,
            description: "
                determines (fast) if [`n`] is a prime number
                Trial division up to the square root of `n`.
                Returns `bool`",
            tests: vec![
                TestCase::equals("isPrime(3)", |f| f(&mut [Value::Int(3)]), true),
                TestCase::equals("isPrime(222)", |f| f(&mut [Value::Int(222)]), false),
            ],
        },
        Descriptor {
            name: "numberBetween",
            signature: "number_between<T: PartialOrd>(n: T, min: T, max: T) -> bool",
            group: &NUMBERS,
            entry: "number_between",
            invoke: numbers::invoke::number_between,
            description: "
                determines if [`n`] falls between [`min`] and [`max`] (both exclusive)
                Example
                <ex>let num = 15;
                number_between(num, 12, 16); // => true
                number_between(num, 16, 20); // => false</ex>
                Returns `bool`",
            tests: vec![
                TestCase::equals(
                    "numberBetween(10212, 10, 100)",
                    |f| f(&mut [Value::Int(10212), Value::Int(10), Value::Int(100)]),
                    false,
                ),
                TestCase::equals(
                    "numberBetween(10212, 10, 20000)",
                    |f| f(&mut [Value::Int(10212), Value::Int(10), Value::Int(20000)]),
                    true,
                ),
            ],
        },
        Descriptor {
            name: "padLeft",
            signature: "pad_left(n: i64, base: i64, fill: &str) -> String",
            group: &NUMBERS,
            entry: "pad_left",
            invoke: numbers::invoke::pad_left,
            description: "
                left-pads a [`n`] with [`base`] - [`n`].length [`fill`]
                The import surface defaults `base` to 10 and `fill` to `\"0\"`.
                Examples:
                <ex>pad_left(15, 1000, \"-\"); // => \"--15\"
                pad_left(15, 1000, \"0\"); // => \"0015\"</ex>
                Returns `String`
            ",
            tests: vec![
                TestCase::equals("padLeft(3, 100)", |f| f(&mut [Value::Int(3), Value::Int(100)]), "003"),
                TestCase::equals(
                    r#"padLeft(3, 100, "-")"#,
                    |f| f(&mut [Value::Int(3), Value::Int(100), s("-")]),
                    "--3",
                ),
                TestCase::equals("padLeft(3)", |f| f(&mut [Value::Int(3)]), "03"),
                TestCase::equals(
                    "padLeft(23000, 10000000)",
                    |f| f(&mut [Value::Int(23000), Value::Int(10_000_000)]),
                    "00023000",
                ),
                TestCase::equals("padLeft(50)", |f| f(&mut [Value::Int(50)]), "50"),
            ],
        },
    ]
}

fn date_helpers() -> Vec<Descriptor> {
    vec![Descriptor {
        name: "tryParseDate",
        signature: "try_parse_date(candidate: &str, format: &str) -> Option<NaiveDateTime>",
        group: &DATES,
        entry: "try_parse_date",
        invoke: dates::invoke::try_parse_date,
        description: "
            tries to parse string [`candidate`] into a date-time using [`format`]
            [`format`] \"dmy\" = [d]ate, [m]onth, [y]ear; fields after the date are hours, minutes, seconds and milliseconds
            The date is only returned when year, month and day survive the round trip unchanged.
            Example:
            <ex>try_parse_date(\"07/02/2015\", \"mdy\");       // => Some(2015-07-02T00:00:00)
            try_parse_date(\"04/03/1945 01:43\", \"mdy\"); // => Some(1945-04-03T01:43:00)
            try_parse_date(\"31/02/2015\", \"dmy\");       // => None</ex>
            Returns `Option<NaiveDateTime>`",
        tests: vec![
            TestCase::equals(
                r#"tryParseDate("15/04/2001", "dmy")"#,
                |f| Value::from(f(&mut [s("15/04/2001"), s("dmy")]).as_date().map(|d| d.format("%Y-%m-%d").to_string())),
                "2001-04-15",
            ),
            TestCase::equals(
                r#"tryParseDate("04/03/1945 01:43", "mdy")"#,
                |f| {
                    Value::from(
                        f(&mut [s("04/03/1945 01:43"), s("mdy")])
                            .as_date()
                            .map(|d| d.format("%Y-%m-%d %H:%M").to_string()),
                    )
                },
                "1945-04-03 01:43",
            ),
            TestCase::equals(
                r#"tryParseDate("04/03/1945", "ymd")"#,
                |f| f(&mut [s("04/03/1945"), s("ymd")]),
                Value::Null,
            ),
        ],
    }]
}
