use core_types::EventKind;
use html::Id;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    // Pointer -> element
    Click {
        target: Id,
    },
    // Location -> window
    HashChange {
        old_url: String,
        new_url: String,
    },
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click { .. } => EventKind::Click,
            PageEvent::HashChange { .. } => EventKind::HashChange,
        }
    }

    /// Fragment of the new URL including the leading `#`, or `""` when the
    /// URL has none (or an empty one), matching `location.hash`.
    pub fn new_hash(&self) -> Option<&str> {
        match self {
            PageEvent::HashChange { new_url, .. } => Some(hash_of(new_url)),
            _ => None,
        }
    }
}

/// `location.hash` semantics for a serialized URL.
pub fn hash_of(url: &str) -> &str {
    match url.find('#') {
        Some(pos) if pos + 1 < url.len() => &url[pos..],
        _ => "",
    }
}

/// Page event queue. Producers post through `evt_tx` (cloneable); the page
/// drains `evt_rx` on its own thread and dispatches to listeners.
pub struct Bus {
    pub evt_tx: Sender<PageEvent>,
    pub evt_rx: Receiver<PageEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (evt_tx, evt_rx) = mpsc::channel();
        Self { evt_tx, evt_rx }
    }

    pub fn sender(&self) -> Sender<PageEvent> {
        self.evt_tx.clone()
    }

    pub fn post(&self, event: PageEvent) {
        // The receiver lives as long as `self`, so this cannot fail.
        let _ = self.evt_tx.send(event);
    }

    /// Takes every event queued so far, in posting order.
    pub fn drain(&self) -> Vec<PageEvent> {
        let mut out = Vec::new();
        loop {
            match self.evt_rx.try_recv() {
                Ok(evt) => out.push(evt),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
