//! Renders and checks the generated README.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};

use super::GenerateError;
use crate::doc::Block;
use crate::registry::Registry;

const HEADER: &str = "\
# pure-helpers

A collection of small pure helper functions, importable by name.

Every helper is a plain typed Rust function. The generated module
(`dist/pure_helpers.rs` by default) additionally exposes each helper under
its import name:

```rust
let ns = import(\"isPrime, padLeft\", Namespace::new());
let padded = ns.call(\"padLeft\", &mut [Value::Int(3), Value::Int(100)]);
```

Unknown names are bound to a stub answering
`[name] is not a known method in this namespace, sorry`; use `import_with`
and `ImportPolicy::Strict` to reject them instead.

The build tool runs the declared tests and regenerates the module and this file:

```text
pure-helpers test      run the declared tests
pure-helpers module    run the tests, then write the module (alias: createjs)
pure-helpers readme    write this README
pure-helpers all       tests, module and README
pure-helpers --api     list every importable method
```

# Methods
";

/// Renders the README for every descriptor, in registry order.
pub fn render(registry: &Registry) -> String {
    let mut out = String::from(HEADER);

    for descriptor in registry.descriptors() {
        let doc = descriptor.doc();
        out.push_str(&format!("\n## {}\n", descriptor.name));
        out.push_str(&format!("**Parameters** `{}`\n\n", descriptor.signature));
        out.push_str(&format!("**It** {}\n", doc.summary));

        for block in &doc.blocks {
            match block {
                Block::Text(text) => out.push_str(&format!("\n{text}\n")),
                Block::Example(code) => out.push_str(&format!("\n```rust\n{code}\n```\n")),
            }
        }
    }

    out
}

/// Requires one level-2 heading per descriptor, in registry order, and a
/// closing fence for every fenced code block.
pub fn lint(markdown: &str, registry: &Registry) -> Result<(), GenerateError> {
    let mut headings: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => current = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => headings.extend(current.take()),
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => {
                if !is_closed_fence(&markdown[range.clone()]) {
                    return Err(GenerateError::MalformedReadme(format!(
                        "unclosed code block at byte {}",
                        range.start
                    )));
                }
            }
            _ => {}
        }
    }

    let expected: Vec<&str> = registry.names().collect();
    if headings.iter().map(String::as_str).ne(expected.iter().copied()) {
        return Err(GenerateError::MalformedReadme(format!(
            "expected {} method headings, found {}",
            expected.len(),
            headings.len()
        )));
    }
    Ok(())
}

fn is_closed_fence(block: &str) -> bool {
    let mut lines = block.trim_end().lines();
    let Some(open) = lines.next() else {
        return false;
    };
    let fence: String = open
        .trim_start()
        .chars()
        .take_while(|&c| c == '`' || c == '~')
        .collect();
    lines.last().is_some_and(|close| {
        let close = close.trim();
        close.starts_with(&fence) && close.chars().all(|c| c == '`' || c == '~')
    })
}
