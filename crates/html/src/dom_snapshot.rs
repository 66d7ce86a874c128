use crate::Node;
use std::fmt;

/// Deterministic, indented DOM outline for structural assertions in tests.
/// Not a stable format.
///
/// - One line per node, two spaces of indent per depth level.
/// - Elements print as `<name attr="value" ...>` in attribute order.
/// - Text prints quoted; whitespace-only text is skipped.
/// - Ids are printed only when `ignore_ids` is off.
#[derive(Clone, Copy, Debug)]
pub struct DomSnapshotOptions {
    pub ignore_ids: bool,
}

impl Default for DomSnapshotOptions {
    fn default() -> Self {
        Self { ignore_ids: true }
    }
}

#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node, options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Panics with both outlines when the snapshot of `actual` differs from
/// `expected` (lines joined by `\n`).
pub fn assert_snapshot(actual: &Node, expected: &str) {
    let snapshot = DomSnapshot::new(actual, DomSnapshotOptions::default()).render();
    let expected = expected.trim_matches('\n');
    if snapshot != expected {
        panic!("DOM snapshot mismatch\nexpected:\n{expected}\nactual:\n{snapshot}");
    }
}

fn walk_snapshot(node: &Node, options: &DomSnapshotOptions, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let id_suffix = if options.ignore_ids {
        String::new()
    } else {
        format!(" #{}", node.id().0)
    };
    match node {
        Node::Document { children, .. } => {
            out.push(format!("{indent}#document{id_suffix}"));
            for c in children {
                walk_snapshot(c, options, depth + 1, out);
            }
        }
        Node::Element {
            name,
            attributes,
            children,
            ..
        } => {
            let mut line = format!("{indent}<{name}");
            for (k, v) in attributes {
                match v {
                    Some(v) => line.push_str(&format!(" {k}=\"{v}\"")),
                    None => line.push_str(&format!(" {k}")),
                }
            }
            line.push('>');
            line.push_str(&id_suffix);
            out.push(line);
            for c in children {
                walk_snapshot(c, options, depth + 1, out);
            }
        }
        Node::Text { text, .. } => {
            if !text.trim().is_empty() {
                out.push(format!("{indent}\"{text}\"{id_suffix}"));
            }
        }
        Node::Comment { text, .. } => {
            out.push(format!("{indent}<!-- {text} -->{id_suffix}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::assign_node_ids;

    #[test]
    fn snapshot_indents_by_depth_and_skips_blank_text() {
        let ul = Node::element("ul").with_child(
            Node::element("li")
                .with_attr("data-hash", "/")
                .with_child(Node::text("  "))
                .with_child(Node::text("Home")),
        );
        assert_snapshot(
            &ul,
            r#"
<ul>
  <li data-hash="/">
    "Home""#,
        );
    }

    #[test]
    fn ids_are_printed_on_request() {
        let mut ul = Node::element("ul").with_child(Node::element("li"));
        assign_node_ids(&mut ul);
        let snap = DomSnapshot::new(&ul, DomSnapshotOptions { ignore_ids: false });
        assert_eq!(snap.as_lines(), ["<ul> #1", "  <li> #2"]);
    }
}
