pub type ListenerId = u64;
pub type RequestId = u64;

/// Kinds of page events a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    HashChange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    NavData,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::NavData => "nav-data",
        }
    }
}
