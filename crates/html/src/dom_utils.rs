use crate::Node;

/// Attribute and class-list accessors. Attribute names compare ASCII
/// case-insensitively; values are case-sensitive.
impl Node {
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Sets or replaces an attribute. Returns `false` for non-elements.
    pub fn set_attr(&mut self, name: &str, value: &str) -> bool {
        let Node::Element { attributes, .. } = self else {
            return false;
        };
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = Some(value.to_string()),
            None => attributes.push((name.to_ascii_lowercase(), Some(value.to_string()))),
        }
        true
    }

    pub fn remove_attr(&mut self, name: &str) -> bool {
        let Node::Element { attributes, .. } = self else {
            return false;
        };
        let before = attributes.len();
        attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        attributes.len() != before
    }

    /// Whitespace-separated token lookup, e.g. `rel="icon stylesheet"`.
    pub fn attr_has_token(&self, name: &str, token: &str) -> bool {
        self.attr(name)
            .is_some_and(|v| v.split_ascii_whitespace().any(|t| t == token))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_has_token("class", class)
    }

    /// Adds `class` to the class list. Returns `true` if it was not present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if !matches!(self, Node::Element { .. }) || self.has_class(class) {
            return false;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {class}", existing.trim_end())
            }
            _ => class.to_string(),
        };
        self.set_attr("class", &joined)
    }

    /// Removes every occurrence of `class`. Drops the attribute when the list
    /// becomes empty. Returns `true` if anything was removed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        if !self.has_class(class) {
            return false;
        }
        let rest = self
            .attr("class")
            .unwrap_or("")
            .split_ascii_whitespace()
            .filter(|t| *t != class)
            .collect::<Vec<_>>()
            .join(" ");
        if rest.is_empty() {
            self.remove_attr("class")
        } else {
            self.set_attr("class", &rest)
        }
    }

    /// Flips `class` and returns whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class)
        }
    }

    /// Sets or clears `class` depending on `on`.
    pub fn set_class_flag(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}
