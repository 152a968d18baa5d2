//! State machines for the accessible primitives the components wrap.
//!
//! These mirror the data attributes (`data-state`, `aria-checked`, ...) the
//! Tailwind classes key off, so the wasm layer only maps them onto markup.

use std::collections::BTreeSet;

/// Resolve a controlled/uncontrolled pair: the controlled prop wins when set.
#[must_use]
pub fn resolve_controlled<T: Clone>(controlled: Option<&T>, local: &T) -> T {
    controlled.cloned().unwrap_or_else(|| local.clone())
}

/// Tri-state checkbox value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckedState {
    /// Not checked.
    #[default]
    Unchecked,
    /// Checked.
    Checked,
    /// Some but not all of a group is checked.
    Indeterminate,
}

impl CheckedState {
    /// Build from a boolean.
    #[must_use]
    pub const fn from_bool(checked: bool) -> Self {
        if checked { Self::Checked } else { Self::Unchecked }
    }

    /// `aria-checked` value.
    #[must_use]
    pub const fn aria_checked(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Indeterminate => "mixed",
        }
    }

    /// `data-state` value.
    #[must_use]
    pub const fn data_state(self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Checked => "checked",
            Self::Indeterminate => "indeterminate",
        }
    }

    /// True only for [`Self::Checked`].
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// State after user activation. Indeterminate resolves to checked.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Checked => Self::Unchecked,
            Self::Unchecked | Self::Indeterminate => Self::Checked,
        }
    }
}

/// Open/closed state for disclosures, dialogs, menus and drawers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpenState {
    /// Content visible.
    Open,
    /// Content hidden.
    #[default]
    Closed,
}

impl OpenState {
    /// Build from a boolean.
    #[must_use]
    pub const fn from_bool(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// True when open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// `data-state` value.
    #[must_use]
    pub const fn data_state(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Flip the state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Pressed state of a toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressedState {
    /// Pressed.
    On,
    /// Released.
    #[default]
    Off,
}

impl PressedState {
    /// Build from a boolean.
    #[must_use]
    pub const fn from_bool(pressed: bool) -> Self {
        if pressed { Self::On } else { Self::Off }
    }

    /// True when pressed.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// `data-state` value.
    #[must_use]
    pub const fn data_state(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// `aria-pressed` value.
    #[must_use]
    pub const fn aria_pressed(self) -> &'static str {
        match self {
            Self::On => "true",
            Self::Off => "false",
        }
    }
}

/// How many accordion items may be open at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one item; `collapsible` allows closing the open one.
    Single {
        /// Whether the open item can be closed by activating it again.
        collapsible: bool,
    },
    /// Any number of items.
    Multiple,
}

impl Default for AccordionMode {
    fn default() -> Self {
        Self::Single { collapsible: false }
    }
}

/// Set of open accordion item values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    mode: AccordionMode,
    open: BTreeSet<String>,
}

impl AccordionState {
    /// Start with the given items open. Single mode keeps only the first.
    #[must_use]
    pub fn new<I, S>(mode: AccordionMode, open: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = open.into_iter().map(Into::into);
        let open = match mode {
            AccordionMode::Single { .. } => values.next().into_iter().collect(),
            AccordionMode::Multiple => values.collect(),
        };
        Self { mode, open }
    }

    /// Mode this accordion runs in.
    #[must_use]
    pub const fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Whether the item is open.
    #[must_use]
    pub fn is_open(&self, value: &str) -> bool {
        self.open.contains(value)
    }

    /// Open item values in sorted order.
    pub fn open_values(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    /// Activate an item trigger. Returns whether anything changed.
    pub fn toggle(&mut self, value: &str) -> bool {
        let was_open = self.open.contains(value);
        match self.mode {
            AccordionMode::Multiple => {
                if was_open {
                    self.open.remove(value);
                } else {
                    self.open.insert(value.to_string());
                }
                true
            }
            AccordionMode::Single { collapsible } => {
                if was_open {
                    if !collapsible {
                        return false;
                    }
                    self.open.clear();
                } else {
                    self.open.clear();
                    self.open.insert(value.to_string());
                }
                true
            }
        }
    }
}

/// Focus movement requested by a key press inside a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuNav {
    /// Next enabled item.
    Next,
    /// Previous enabled item.
    Prev,
    /// First enabled item.
    First,
    /// Last enabled item.
    Last,
}

impl MenuNav {
    /// Map a `KeyboardEvent.key` value onto a focus move.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Prev),
            "Home" | "PageUp" => Some(Self::First),
            "End" | "PageDown" => Some(Self::Last),
            _ => None,
        }
    }
}

/// True for keys that dismiss overlays.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Compute the next focused menu index, skipping disabled items.
///
/// Focus does not wrap. With nothing focused, `Next` lands on the first
/// enabled item and `Prev` on the last.
#[must_use]
pub fn rove_focus(disabled: &[bool], current: Option<usize>, nav: MenuNav) -> Option<usize> {
    let enabled = |idx: &usize| !disabled.get(*idx).copied().unwrap_or(true);
    let first = (0..disabled.len()).find(enabled);
    let last = (0..disabled.len()).rev().find(enabled);
    match (nav, current) {
        (MenuNav::First, _) | (MenuNav::Next, None) => first,
        (MenuNav::Last, _) | (MenuNav::Prev, None) => last,
        (MenuNav::Next, Some(idx)) => ((idx + 1)..disabled.len())
            .find(enabled)
            .or_else(|| Some(idx).filter(enabled).or(last)),
        (MenuNav::Prev, Some(idx)) => (0..idx.min(disabled.len()))
            .rev()
            .find(enabled)
            .or_else(|| Some(idx).filter(enabled).or(first)),
    }
}

/// Loading lifecycle of an avatar image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoadingStatus {
    /// No source set.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Image decoded.
    Loaded,
    /// Request failed.
    Error,
}

impl ImageLoadingStatus {
    /// Status to start from for a given source.
    #[must_use]
    pub fn for_source(src: Option<&str>) -> Self {
        match src {
            Some(src) if !src.trim().is_empty() => Self::Loading,
            _ => Self::Error,
        }
    }

    /// The fallback shows until the image has loaded.
    #[must_use]
    pub const fn show_fallback(self) -> bool {
        !matches!(self, Self::Loaded)
    }

    /// The image element is mounted while loading or loaded so the browser
    /// can report completion.
    #[must_use]
    pub const fn mount_image(self) -> bool {
        matches!(self, Self::Loading | Self::Loaded)
    }
}

/// Fraction of the drawer height a downward drag must cover to dismiss it.
pub const DRAWER_CLOSE_THRESHOLD: f64 = 0.25;

/// Whether a vertical drag of `delta_px` dismisses a drawer `height_px` tall.
#[must_use]
pub fn drag_dismisses(delta_px: f64, height_px: f64) -> bool {
    if !delta_px.is_finite() || !height_px.is_finite() || height_px <= 0.0 {
        return false;
    }
    delta_px >= height_px * DRAWER_CLOSE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_tri_state_attributes() {
        assert_eq!(CheckedState::Indeterminate.aria_checked(), "mixed");
        assert_eq!(CheckedState::Checked.aria_checked(), "true");
        assert_eq!(CheckedState::Unchecked.data_state(), "unchecked");
        assert_eq!(CheckedState::Indeterminate.toggled(), CheckedState::Checked);
        assert_eq!(CheckedState::Checked.toggled(), CheckedState::Unchecked);
    }

    #[test]
    fn controlled_value_wins() {
        assert!(resolve_controlled(Some(&true), &false));
        assert!(!resolve_controlled(None, &false));
    }

    #[test]
    fn open_and_pressed_states() {
        assert_eq!(OpenState::from_bool(true).data_state(), "open");
        assert_eq!(OpenState::Open.toggled(), OpenState::Closed);
        assert_eq!(PressedState::On.aria_pressed(), "true");
        assert_eq!(PressedState::from_bool(false).data_state(), "off");
    }

    #[test]
    fn single_accordion_replaces_open_item() {
        let mut state = AccordionState::new(AccordionMode::Single { collapsible: false }, ["a"]);
        assert!(state.toggle("b"));
        assert!(!state.is_open("a"));
        assert!(state.is_open("b"));
        assert!(!state.toggle("b"));
        assert!(state.is_open("b"));
    }

    #[test]
    fn collapsible_single_accordion_closes() {
        let mut state =
            AccordionState::new(AccordionMode::Single { collapsible: true }, ["a", "b"]);
        assert_eq!(state.open_values().collect::<Vec<_>>(), vec!["a"]);
        assert!(state.toggle("a"));
        assert_eq!(state.open_values().count(), 0);
    }

    #[test]
    fn multiple_accordion_keeps_many_open() {
        let mut state = AccordionState::new(AccordionMode::Multiple, Vec::<String>::new());
        state.toggle("a");
        state.toggle("b");
        assert_eq!(state.open_values().collect::<Vec<_>>(), vec!["a", "b"]);
        state.toggle("a");
        assert_eq!(state.open_values().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn menu_focus_skips_disabled_items() {
        let disabled = [false, true, false, true];
        assert_eq!(rove_focus(&disabled, None, MenuNav::Next), Some(0));
        assert_eq!(rove_focus(&disabled, Some(0), MenuNav::Next), Some(2));
        assert_eq!(rove_focus(&disabled, Some(2), MenuNav::Next), Some(2));
        assert_eq!(rove_focus(&disabled, Some(2), MenuNav::Prev), Some(0));
        assert_eq!(rove_focus(&disabled, Some(0), MenuNav::Prev), Some(0));
        assert_eq!(rove_focus(&disabled, None, MenuNav::Prev), Some(2));
        assert_eq!(rove_focus(&disabled, Some(0), MenuNav::Last), Some(2));
    }

    #[test]
    fn menu_focus_with_everything_disabled() {
        assert_eq!(rove_focus(&[true, true], None, MenuNav::Next), None);
        assert_eq!(rove_focus(&[], Some(3), MenuNav::Prev), None);
    }

    #[test]
    fn menu_keys() {
        assert_eq!(MenuNav::from_key("ArrowDown"), Some(MenuNav::Next));
        assert_eq!(MenuNav::from_key("End"), Some(MenuNav::Last));
        assert_eq!(MenuNav::from_key("a"), None);
        assert!(is_dismiss_key("Escape"));
    }

    #[test]
    fn avatar_fallback_until_loaded() {
        let status = ImageLoadingStatus::for_source(Some("/me.png"));
        assert_eq!(status, ImageLoadingStatus::Loading);
        assert!(status.show_fallback());
        assert!(status.mount_image());
        assert!(!ImageLoadingStatus::Loaded.show_fallback());
        assert_eq!(
            ImageLoadingStatus::for_source(Some("  ")),
            ImageLoadingStatus::Error
        );
        assert!(!ImageLoadingStatus::Error.mount_image());
    }

    #[test]
    fn drawer_drag_threshold() {
        assert!(drag_dismisses(40.0, 144.0));
        assert!(!drag_dismisses(20.0, 144.0));
        assert!(!drag_dismisses(40.0, 0.0));
    }
}
