use crate::{Id, Node};

/// Highest id currently used in the subtree (`Id(0)` if none is assigned).
pub fn max_node_id(root: &Node) -> Id {
    let mut max = root.id();
    for c in root.children() {
        max = max.max(max_node_id(c));
    }
    max
}

/// Gives every node with an unset id a fresh one, continuing after the
/// highest id already present so existing ids stay unique.
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        if node.id().is_unset() {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = max_node_id(root).0.wrapping_add(1).max(1);
    walk(root, &mut next);
}

/// First element (document order) whose `id` attribute equals `key`.
pub fn get_element_by_id<'a>(node: &'a Node, key: &str) -> Option<&'a Node> {
    if matches!(node, Node::Element { .. }) && node.attr("id") == Some(key) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| get_element_by_id(c, key))
}

pub fn get_element_by_id_mut<'a>(node: &'a mut Node, key: &str) -> Option<&'a mut Node> {
    if matches!(node, Node::Element { .. }) && node.attr("id") == Some(key) {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| get_element_by_id_mut(c, key))
}

/// First element (document order) with the given tag name.
pub fn first_element_by_name_mut<'a>(node: &'a mut Node, tag: &str) -> Option<&'a mut Node> {
    if node.is_element(tag) {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| first_element_by_name_mut(c, tag))
}

/// The top-level element of a document (`<html>`), or the node itself when
/// it is already an element.
pub fn document_element_mut(root: &mut Node) -> Option<&mut Node> {
    if matches!(root, Node::Element { .. }) {
        return Some(root);
    }
    match root {
        Node::Document { children, .. } => children
            .iter_mut()
            .find(|c| matches!(c, Node::Element { .. })),
        _ => None,
    }
}

/// Ids from `root` down to and including `target`, or `None` if `target`
/// is not in the tree.
pub fn ancestor_path(root: &Node, target: Id) -> Option<Vec<Id>> {
    fn walk(node: &Node, target: Id, path: &mut Vec<Id>) -> bool {
        path.push(node.id());
        if node.id() == target {
            return true;
        }
        for c in node.children() {
            if walk(c, target, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, target, &mut path).then_some(path)
}

/// Visits every element in document order.
pub fn for_each_element_mut(node: &mut Node, f: &mut impl FnMut(&mut Node)) {
    if matches!(node, Node::Element { .. }) {
        f(node);
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            for_each_element_mut(c, f);
        }
    }
}

/// Collects every element carrying `attr`, in document order.
pub fn elements_with_attr<'a>(node: &'a Node, attr: &str, out: &mut Vec<&'a Node>) {
    if node.has_attr(attr) {
        out.push(node);
    }
    for c in node.children() {
        elements_with_attr(c, attr, out);
    }
}
