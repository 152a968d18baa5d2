//! String-keyed attribute passthrough for wrapper components.
//!
//! Components declare the native attributes they use as typed props. Anything
//! else (`aria-*`, `data-*`, `id`, `name`, ...) travels in [`ExtraAttrs`] and
//! is written onto the root element after mount.

use std::collections::BTreeMap;

/// Why an attribute name was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrRejection {
    /// Name was blank after trimming.
    Empty,
    /// Name contained characters outside the HTML attribute grammar.
    Malformed,
    /// `class` is merged through the dedicated prop.
    ClassName,
    /// Inline `on*` handlers must be wired through callbacks.
    EventHandler,
}

/// Ordered bag of extra attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraAttrs {
    entries: BTreeMap<String, String>,
}

/// Changes needed to move an element from one attribute set to another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrDiff {
    /// Attributes to write, in name order.
    pub set: Vec<(String, String)>,
    /// Attribute names to remove, in name order.
    pub remove: Vec<String>,
}

impl AttrDiff {
    /// True when applying the diff would not touch the element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.remove.is_empty()
    }
}

/// Normalise and validate an attribute name.
///
/// # Errors
///
/// Returns the [`AttrRejection`] explaining why the name is not accepted.
pub fn check_name(name: &str) -> Result<String, AttrRejection> {
    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Err(AttrRejection::Empty);
    }
    if name
        .chars()
        .any(|ch| ch.is_whitespace() || matches!(ch, '"' | '\'' | '>' | '/' | '=' | '<'))
    {
        return Err(AttrRejection::Malformed);
    }
    if name == "class" {
        return Err(AttrRejection::ClassName);
    }
    if name.starts_with("on") {
        return Err(AttrRejection::EventHandler);
    }
    Ok(name)
}

impl ExtraAttrs {
    /// Empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::insert`]; rejected names are dropped.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        let _ = self.insert(name, value);
        self
    }

    /// Insert or replace an attribute.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the name is refused; the set is left
    /// unchanged.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Result<(), AttrRejection> {
        match check_name(name) {
            Ok(name) => {
                self.entries.insert(name, value.into());
                Ok(())
            }
            Err(reason) => {
                tracing::warn!(attribute = name, ?reason, "extra attribute refused");
                Err(reason)
            }
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&name.trim().to_ascii_lowercase())
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.trim().to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Number of attributes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no attributes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Entries of `self` with `over` written on top; `over` wins on shared
    /// names.
    #[must_use]
    pub fn overlay(&self, over: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(over.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }

    /// Compute the writes and removals that turn `self` into `next`.
    #[must_use]
    pub fn diff(&self, next: &Self) -> AttrDiff {
        let set = next
            .entries
            .iter()
            .filter(|(name, value)| self.entries.get(*name) != Some(*value))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        let remove = self
            .entries
            .keys()
            .filter(|name| !next.entries.contains_key(*name))
            .cloned()
            .collect();
        AttrDiff { set, remove }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ExtraAttrs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            let _ = attrs.insert(name.as_ref(), value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_normalised() {
        let attrs = ExtraAttrs::new().with("  Data-Testid ", "row");
        assert_eq!(attrs.get("data-testid"), Some("row"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn class_and_handlers_are_refused() {
        let mut attrs = ExtraAttrs::new();
        assert_eq!(attrs.insert("class", "p-2"), Err(AttrRejection::ClassName));
        assert_eq!(
            attrs.insert("onclick", "alert(1)"),
            Err(AttrRejection::EventHandler)
        );
        assert_eq!(attrs.insert("a b", "x"), Err(AttrRejection::Malformed));
        assert_eq!(attrs.insert(" ", "x"), Err(AttrRejection::Empty));
        assert!(attrs.is_empty());
    }

    #[test]
    fn overlay_keeps_both_sets_and_prefers_the_top() {
        let caller: ExtraAttrs = [("data-testid", "menu"), ("data-state", "bogus")]
            .into_iter()
            .collect();
        let own = ExtraAttrs::new().with("data-state", "open");
        let merged = caller.overlay(&own);
        assert_eq!(merged.get("data-testid"), Some("menu"));
        assert_eq!(merged.get("data-state"), Some("open"));
        assert_eq!(merged.len(), 2);
        assert_eq!(caller.get("data-state"), Some("bogus"));
    }

    #[test]
    fn diff_reports_changed_added_and_removed() {
        let before: ExtraAttrs = [("id", "a"), ("aria-label", "old"), ("title", "same")]
            .into_iter()
            .collect();
        let after: ExtraAttrs = [("aria-label", "new"), ("title", "same"), ("name", "n")]
            .into_iter()
            .collect();
        let diff = before.diff(&after);
        assert_eq!(
            diff.set,
            vec![
                ("aria-label".to_string(), "new".to_string()),
                ("name".to_string(), "n".to_string()),
            ]
        );
        assert_eq!(diff.remove, vec!["id".to_string()]);
        assert!(after.diff(&after).is_empty());
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut attrs = ExtraAttrs::new().with("id", "x");
        assert_eq!(attrs.remove("ID"), Some("x".to_string()));
        assert!(attrs.is_empty());
    }
}
