use std::rc::Rc;

use core_types::EventKind;
use html::Node;
use html::traverse::{document_element_mut, first_element_by_name_mut};

use crate::app::SideNav;
use crate::error::DomError;
use crate::page::{EventTarget, Page};

/// Flips the open marker on the configured target (`<body>` by default,
/// the document element when there is none). Returns the new state.
pub fn toggle_nav_state(document: &mut Node, open_target: &str, open_class: &str) -> bool {
    let target = if first_element_by_name_mut(document, open_target).is_some() {
        first_element_by_name_mut(document, open_target)
    } else {
        document_element_mut(document)
    };
    match target {
        Some(el) => {
            let open = el.toggle_class(open_class);
            log::debug!(target: "sidenav.wiring", "nav open: {open}");
            open
        }
        None => false,
    }
}

/// Registers the two page listeners: toggle-control click and window
/// hash change. Registers nothing if the toggle control is missing.
pub fn wire(nav: &Rc<SideNav>, page: &mut Page) -> Result<(), DomError> {
    let config = nav.config();
    let toggle = page
        .element_id(&config.toggle_id)
        .ok_or_else(|| DomError::MissingElement {
            id: config.toggle_id.clone(),
        })?;

    let on_click = Rc::clone(nav);
    page.add_event_listener(EventTarget::Element(toggle), EventKind::Click, move |doc, _| {
        on_click.toggle_nav_state(doc);
    });

    let on_hash = Rc::clone(nav);
    page.add_event_listener(EventTarget::Window, EventKind::HashChange, move |doc, evt| {
        if let Some(hash) = evt.new_hash() {
            on_hash.highlight(doc, hash);
        }
    });

    log::debug!(target: "sidenav.wiring", "listeners attached (toggle #{})", config.toggle_id);
    Ok(())
}
