use serde::Deserialize;

/// Where the nav data lives and which DOM hooks the menu binds to.
///
/// Every field has a default, so a partial JSON object only overrides the
/// keys it names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Location of the nav tree; relative values resolve against the page URL.
    pub json_uri: String,
    /// `id` of the element that receives the rendered list.
    pub container_id: String,
    /// `id` of the mobile open/close control.
    pub toggle_id: String,
    /// Tag of the element carrying the open marker.
    pub open_target: String,
    pub open_class: String,
    pub active_class: String,
    pub has_child_class: String,
    /// Attribute holding each item's route key.
    pub route_attr: String,
    pub glyph_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            json_uri: "/data/nav.json".to_string(),
            container_id: "nav".to_string(),
            toggle_id: "mobile-open-close-btn".to_string(),
            open_target: "body".to_string(),
            open_class: "nav-open".to_string(),
            active_class: "active".to_string(),
            has_child_class: "has-child-nav".to_string(),
            route_attr: "data-hash".to_string(),
            glyph_class: "glyph-span".to_string(),
        }
    }
}

impl NavConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_json_uri(mut self, uri: impl Into<String>) -> Self {
        self.json_uri = uri.into();
        self
    }
}
