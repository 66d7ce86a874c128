use html::Node;
use html::traverse::get_element_by_id_mut;

use crate::config::NavConfig;
use crate::error::DomError;
use crate::page::Page;
use crate::tree::{NavNode, NavTree};

/// Builds one `<ul>` for `nodes`:
///
/// ```text
/// <ul>
///   <li data-hash="{url}" [class="has-child-nav"]>
///     <a href="{url}">{label}<span class="glyph-span"></span></a>
///     [<ul>…children…</ul>]
///   </li>
/// </ul>
/// ```
///
/// Leaves get no nested list. Sibling order follows the input.
pub fn build_list(nodes: &[NavNode], config: &NavConfig) -> Node {
    let mut list = Node::element("ul");
    for item in nodes {
        list.append_child(build_item(item, config));
    }
    list
}

fn build_item(item: &NavNode, config: &NavConfig) -> Node {
    let link = Node::element("a")
        .with_attr("href", &item.url)
        .with_child(Node::text(item.label.as_str()))
        .with_child(Node::element("span").with_attr("class", &config.glyph_class));

    let mut list_item = Node::element("li")
        .with_attr(&config.route_attr, &item.url)
        .with_child(link);

    if item.has_children() {
        list_item.add_class(&config.has_child_class);
        log::trace!(
            target: "sidenav.render",
            "{} has {} children",
            item.url,
            item.children.len()
        );
        list_item.append_child(build_list(&item.children, config));
    }
    list_item
}

/// Appends the rendered tree to `container` as exactly one `<ul>`, even when
/// the tree has no items.
pub fn render(tree: &NavTree, container: &mut Node, config: &NavConfig) {
    container.append_child(build_list(&tree.items, config));
}

/// Renders into the page's configured container and gives the new nodes ids.
pub fn render_into(page: &mut Page, tree: &NavTree, config: &NavConfig) -> Result<(), DomError> {
    let container = get_element_by_id_mut(page.document_mut(), &config.container_id).ok_or_else(
        || DomError::MissingElement {
            id: config.container_id.clone(),
        },
    )?;
    render(tree, container, config);
    page.assign_ids();
    log::debug!(
        target: "sidenav.render",
        "rendered {} top-level items into #{}",
        tree.items.len(),
        config.container_id
    );
    Ok(())
}
