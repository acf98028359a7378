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
