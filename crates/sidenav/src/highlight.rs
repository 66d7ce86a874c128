use html::Node;
use html::traverse::for_each_element_mut;

use crate::config::NavConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightReport {
    /// Elements carrying a route key.
    pub visited: usize,
    /// Of those, how many are now marked active.
    pub active: usize,
}

/// Marks every route-keyed element active iff `fragment` contains its route
/// key as a substring, and clears the marker everywhere else. Walks the
/// whole document on every call, so repeated calls with the same fragment
/// leave the same state.
pub fn highlight(document: &mut Node, fragment: &str, config: &NavConfig) -> HighlightReport {
    let mut report = HighlightReport::default();
    for_each_element_mut(document, &mut |el: &mut Node| {
        let Some(route) = el.attr(&config.route_attr) else {
            return;
        };
        let on = fragment.contains(route);
        el.set_class_flag(&config.active_class, on);
        report.visited += 1;
        if on {
            report.active += 1;
        }
    });
    log::debug!(
        target: "sidenav.highlight",
        "fragment {fragment:?}: {} of {} routes active",
        report.active,
        report.visited
    );
    report
}
