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
