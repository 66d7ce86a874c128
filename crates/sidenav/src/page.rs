use std::sync::mpsc::Sender;

use bus::{Bus, PageEvent};
use core_types::{EventKind, ListenerId};
use html::traverse::{ancestor_path, assign_node_ids, get_element_by_id};
use html::{Id, Node};

use crate::config::NavConfig;
use crate::error::DomError;

pub type Handler = Box<dyn FnMut(&mut Node, &PageEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTarget {
    Window,
    Element(Id),
}

struct Listener {
    id: ListenerId,
    target: EventTarget,
    kind: EventKind,
    handler: Handler,
}

/// The page URL. Only the fragment changes after load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    url: url::Url,
}

impl Location {
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: url::Url::parse(href)?,
        })
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// `""` or `"#..."`, like `window.location.hash`.
    pub fn hash(&self) -> &str {
        bus::hash_of(self.url.as_str())
    }

    /// Replaces the fragment; a leading `#` on `hash` is optional.
    /// Returns whether the URL changed.
    fn set_hash(&mut self, hash: &str) -> bool {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let before = self.url.clone();
        self.url
            .set_fragment(if fragment.is_empty() { None } else { Some(fragment) });
        self.url != before
    }
}

/// A live document plus the window-level state the nav script touches:
/// location, the event queue and registered listeners.
pub struct Page {
    document: Node,
    location: Location,
    bus: Bus,
    listeners: Vec<Listener>,
    next_listener: ListenerId,
}

impl Page {
    pub fn new(mut document: Node, location: Location) -> Self {
        assign_node_ids(&mut document);
        Self {
            document,
            location,
            bus: Bus::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Minimal document with the hooks the side nav expects:
    /// a toggle button and an empty nav container inside `<body>`.
    pub fn shell(href: &str, config: &NavConfig) -> Result<Self, url::ParseError> {
        let location = Location::parse(href)?;
        let document = Node::document(vec![
            Node::element("html")
                .with_child(
                    Node::element("head").with_child(
                        Node::element("title").with_child(Node::text("Navigation")),
                    ),
                )
                .with_child(
                    Node::element("body")
                        .with_child(
                            Node::element("button")
                                .with_attr("id", &config.toggle_id)
                                .with_attr("type", "button")
                                .with_child(Node::text("Menu")),
                        )
                        .with_child(Node::element("nav").with_attr("id", &config.container_id)),
                ),
        ]);
        Ok(Self::new(document, location))
    }

    pub fn document(&self) -> &Node {
        &self.document
    }

    /// Mutable access for DOM steps. Callers that append nodes must call
    /// [`Page::assign_ids`] before dispatching events at them.
    pub fn document_mut(&mut self) -> &mut Node {
        &mut self.document
    }

    pub fn assign_ids(&mut self) {
        assign_node_ids(&mut self.document);
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Id of the element whose `id` attribute is `key`.
    pub fn element_id(&self, key: &str) -> Option<Id> {
        get_element_by_id(&self.document, key).map(Node::id)
    }

    pub fn sender(&self) -> Sender<PageEvent> {
        self.bus.sender()
    }

    pub fn add_event_listener(
        &mut self,
        target: EventTarget,
        kind: EventKind,
        handler: impl FnMut(&mut Node, &PageEvent) + 'static,
    ) -> ListenerId {
        self.next_listener += 1;
        let id = self.next_listener;
        log::debug!(target: "page.bus", "listener #{id}: {kind:?} on {target:?}");
        self.listeners.push(Listener {
            id,
            target,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Navigates to a fragment. Queues a hash-change event when the URL
    /// actually changed.
    pub fn set_hash(&mut self, hash: &str) {
        let old_url = self.location.href().to_string();
        if self.location.set_hash(hash) {
            self.bus.post(PageEvent::HashChange {
                old_url,
                new_url: self.location.href().to_string(),
            });
        }
    }

    pub fn click(&self, target: Id) {
        self.bus.post(PageEvent::Click { target });
    }

    pub fn click_element(&self, key: &str) -> Result<(), DomError> {
        let target = self.element_id(key).ok_or_else(|| DomError::MissingElement {
            id: key.to_string(),
        })?;
        self.click(target);
        Ok(())
    }

    /// Delivers every queued event. Returns how many handler invocations ran.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        for event in self.bus.drain() {
            delivered += self.dispatch(&event);
        }
        delivered
    }

    fn dispatch(&mut self, event: &PageEvent) -> usize {
        match event {
            PageEvent::Click { target } => {
                // Bubble from the target up to the root.
                let Some(mut path) = ancestor_path(&self.document, *target) else {
                    log::trace!(target: "page.bus", "click on detached node {target:?}");
                    return 0;
                };
                path.reverse();
                let mut delivered = 0;
                for id in path {
                    delivered += self.deliver(EventTarget::Element(id), event);
                }
                delivered
            }
            PageEvent::HashChange { new_url, .. } => {
                if self.location.href() != new_url.as_str()
                    && let Ok(location) = Location::parse(new_url)
                {
                    self.location = location;
                }
                self.deliver(EventTarget::Window, event)
            }
        }
    }

    fn deliver(&mut self, target: EventTarget, event: &PageEvent) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for listener in self
            .listeners
            .iter_mut()
            .filter(|l| l.target == target && l.kind == kind)
        {
            log::trace!(target: "page.bus", "dispatch {kind:?} to listener #{}", listener.id);
            (listener.handler)(&mut self.document, event);
            delivered += 1;
        }
        delivered
    }
}
