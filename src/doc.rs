//! Parsing of helper descriptions.
//!
//! A description is free text: the first non-blank line is the summary, later
//! lines are paragraphs, `<ex>…</ex>` marks an example block and `|xN|` is
//! replaced by N spaces once lines have been left-trimmed.

use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const UNDOCUMENTED: &str = "Not (yet) documented";

static EXAMPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<ex>(.*?)</ex>").expect("valid example block regex"));
static INDENT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\|x(\d+)\|").expect("valid indent token regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(String),
    Example(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    pub summary: String,
    pub blocks: Vec<Block>,
}

impl Doc {
    pub fn parse(description: &str) -> Self {
        let lines: Vec<&str> = description
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.trim().is_empty())
            .collect();

        let Some((first, rest)) = lines.split_first() else {
            return Self {
                summary: UNDOCUMENTED.to_string(),
                blocks: Vec::new(),
            };
        };

        Self {
            summary: expand_indent_tokens(first.trim_end()),
            blocks: split_blocks(&rest.join("\n")),
        }
    }
}

/// Replaces every `|xN|` token with N spaces.
pub fn expand_indent_tokens(text: &str) -> String {
    INDENT_TOKEN_RE
        .replace_all(text, |caps: &Captures| {
            " ".repeat(caps[1].parse().unwrap_or(0))
        })
        .into_owned()
}

fn split_blocks(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut last = 0;

    for caps in EXAMPLE_RE.captures_iter(body) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text_lines(&mut blocks, &body[last..whole.start()]);
        let code = expand_indent_tokens(code.as_str().trim_matches('\n'));
        if !code.trim().is_empty() {
            blocks.push(Block::Example(code.trim_end().to_string()));
        }
        last = whole.end();
    }
    push_text_lines(&mut blocks, &body[last..]);

    blocks
}

fn push_text_lines(blocks: &mut Vec<Block>, text: &str) {
    blocks.extend(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Block::Text(expand_indent_tokens(line))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_is_summary() {
        let doc = Doc::parse(
            "
            checks something
            Returns `bool`",
        );
        assert_eq!(doc.summary, "checks something");
        assert_eq!(doc.blocks, vec![Block::Text("Returns `bool`".to_string())]);
    }

    #[test]
    fn empty_description_is_undocumented() {
        assert_eq!(Doc::parse("  \n ").summary, UNDOCUMENTED);
    }

    #[test]
    fn example_blocks_are_separated_from_text() {
        let doc = Doc::parse(
            "summary
             Examples
             <ex>a();  // => 1
             b();  // => 2</ex>
             Returns `i64`",
        );
        assert_eq!(
            doc.blocks,
            vec![
                Block::Text("Examples".to_string()),
                Block::Example("a();  // => 1\nb();  // => 2".to_string()),
                Block::Text("Returns `i64`".to_string()),
            ]
        );
    }

    #[test]
    fn indent_tokens_survive_trimming() {
        let doc = Doc::parse(
            "summary
             <ex>
                 call(
                 |x4|arg);
             </ex>",
        );
        assert_eq!(
            doc.blocks,
            vec![Block::Example("call(\n    arg);".to_string())]
        );
    }

    #[test]
    fn expands_tokens_case_insensitively() {
        assert_eq!(expand_indent_tokens("|x2|a|X3|b"), "  a   b");
    }
}
