//! Dump command: print a decoded KeyValue tree.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use statschema::KeyValue;

pub fn run(path: &Path, max_depth: Option<usize>) -> Result<()> {
    let root = KeyValue::load_binary(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let mut out = String::new();
    for child in root.children() {
        render(&mut out, child, 0, max_depth);
    }
    print!("{}", out);
    Ok(())
}

fn render(out: &mut String, node: &KeyValue, depth: usize, max_depth: Option<usize>) {
    let indent = "  ".repeat(depth);

    if node.is_container() {
        let _ = writeln!(
            out,
            "{}{} {}",
            indent,
            node.name().cyan().bold(),
            format!("({} entries)", node.children().len()).dimmed()
        );
        if max_depth.is_some_and(|max| depth >= max) {
            if node.children().next().is_some() {
                let _ = writeln!(out, "{}  {}", indent, "...".dimmed());
            }
            return;
        }
        for child in node.children() {
            render(out, child, depth + 1, max_depth);
        }
        return;
    }

    let value = node.value().map(ToString::to_string).unwrap_or_default();
    let _ = writeln!(
        out,
        "{}{} {} {}",
        indent,
        node.name(),
        format!("[{}]", node.kind().short_name()).dimmed(),
        value.green()
    );
}
