use serde::Deserialize;

use crate::error::ParseError;

/// One menu entry. `url` doubles as the route key matched against the
/// location fragment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavNode {
    pub label: String,
    pub url: String,
    #[serde(rename = "items", default)]
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavTree {
    pub items: Vec<NavNode>,
}

impl NavTree {
    /// Longest root-to-leaf chain; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[NavNode]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + depth_of(&n.children))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.items)
    }

    pub fn node_count(&self) -> usize {
        fn count(nodes: &[NavNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.items)
    }

    /// Route keys in pre-order.
    pub fn routes(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a str>) {
            for n in nodes {
                out.push(&n.url);
                walk(&n.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }
}

/// Deserializes nav data and rejects empty route keys, which would match
/// every fragment.
pub fn parse(raw: &str) -> Result<NavTree, ParseError> {
    let tree: NavTree = serde_json::from_str(raw)?;
    check_routes(&tree.items, "items")?;
    log::debug!(
        target: "sidenav.parse",
        "parsed {} nodes, depth {}",
        tree.node_count(),
        tree.depth()
    );
    Ok(tree)
}

fn check_routes(nodes: &[NavNode], prefix: &str) -> Result<(), ParseError> {
    for (i, node) in nodes.iter().enumerate() {
        let path = format!("{prefix}[{i}]");
        if node.url.is_empty() {
            return Err(ParseError::EmptyRoute { path });
        }
        check_routes(&node.children, &format!("{path}.items"))?;
    }
    Ok(())
}
