//! Variant lookup tables for components with named style configurations.
//!
//! Each component exposes a base class string plus one enum per variant axis.
//! Resolution is a table lookup followed by [`cn`], so caller overrides win
//! over any conflicting variant utility.

use crate::core::classes::cn;

/// Base utilities shared by every button.
pub const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-1 h-36 text-sm font-medium font-inter squircle disabled:pointer-events-none disabled:opacity-50";

/// Visual style of a [`button_classes`] button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Solid brand fill.
    #[default]
    Default,
    /// Neutral fill.
    Secondary,
    /// Red fill for dangerous actions.
    Destructive,
    /// White fill with a neutral border.
    Outline,
    /// Transparent until hovered.
    Ghost,
}

impl ButtonVariant {
    /// All variants in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Default,
            Self::Secondary,
            Self::Destructive,
            Self::Outline,
            Self::Ghost,
        ]
    }

    /// Utilities for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => {
                "bg-blue-800 text-white hover:bg-blue-700 focus:outline-none focus:ring focus:ring-blue-800-16 active:bg-blue-900 disabled:bg-blue-800"
            }
            Self::Secondary => {
                "bg-neutral-100 text-neutral-950 hover:bg-neutral-50 focus:ring focus:ring-blue-800-24 active:bg-neutral-100 disabled:bg-neutral-100 squircle-secondary"
            }
            Self::Destructive => {
                "bg-red-800 text-white hover:bg-red-700 focus:outline-none focus:ring focus:ring-red-800-16 active:bg-red-900 disabled:bg-red-800 squircle-destructive-btn"
            }
            Self::Outline => {
                "bg-white border-neutral-200 text-neutral-950 hover:bg-neutral-50 focus:outline-none focus:ring focus:ring-blue-800-16 active:bg-neutral-100"
            }
            Self::Ghost => "hover:bg-neutral-50 hover:text-accent-foreground active:bg-neutral-0",
        }
    }
}

/// Height/padding preset of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Base sizing from [`BUTTON_BASE`].
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
    /// Square icon button.
    Icon,
}

impl ButtonSize {
    /// Utilities for the size.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Resolve the full class list for a button.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn([BUTTON_BASE, variant.as_class(), size.as_class(), extra])
}

/// Base utilities shared by every badge.
pub const BADGE_BASE: &str = "inline-flex items-center justify-center rounded-lg px-2 py-0.5 w-53 h-5 text-xs font-medium font-inter";

/// Visual style of a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    /// Brand fill.
    #[default]
    Default,
    /// Neutral fill.
    Secondary,
    /// Red fill.
    Destructive,
    /// White fill, dark text.
    Outline,
}

impl BadgeVariant {
    /// Utilities for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "bg-blue-800 text-white squircle-default",
            Self::Secondary => "bg-neutral-100 text-neutral-950 squircle-secondary",
            Self::Destructive => "bg-red-800 text-white squircle-destructive-badge",
            Self::Outline => "bg-white text-neutral-950 squircle-outline",
        }
    }
}

/// Resolve the full class list for a badge.
#[must_use]
pub fn badge_classes(variant: BadgeVariant, extra: &str) -> String {
    cn([BADGE_BASE, variant.as_class(), extra])
}

/// Base utilities shared by every alert callout.
pub const ALERT_BASE: &str = "relative flex flex-col justify-center w-full w-532 h-88 rounded-lg pl-11.5 py-3 squircle [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground";

/// Visual style of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlertVariant {
    /// Neutral callout.
    #[default]
    Default,
    /// Error callout.
    Destructive,
}

impl AlertVariant {
    /// Utilities for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "bg-white text-neutral-950",
            Self::Destructive => "bg-red-50 text-red-800 border-red-100 squircle-destructive",
        }
    }
}

/// Resolve the full class list for an alert.
#[must_use]
pub fn alert_classes(variant: AlertVariant, extra: &str) -> String {
    cn([ALERT_BASE, variant.as_class(), extra])
}

/// Base utilities shared by every toggle button.
pub const TOGGLE_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium data-[state=on]:bg-neutral-100 data-[state=on]:text-accent-foreground";

/// Visual style of a toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleVariant {
    /// No background until pressed.
    #[default]
    Default,
    /// Transparent with hover fill.
    Ghost,
}

impl ToggleVariant {
    /// Utilities for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "bg-none",
            Self::Ghost => {
                "border-input bg-transparent hover:bg-neutral-100 hover:text-accent-foreground"
            }
        }
    }
}

/// Size preset of a toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleSize {
    /// Square 36px.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
}

impl ToggleSize {
    /// Utilities for the size.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "size-9 px-2.5 py-2.5",
            Self::Sm => "h-9 px-2.5",
            Self::Lg => "h-11 px-5",
        }
    }
}

/// Resolve the full class list for a toggle.
#[must_use]
pub fn toggle_classes(variant: ToggleVariant, size: ToggleSize, extra: &str) -> String {
    cn([TOGGLE_BASE, variant.as_class(), size.as_class(), extra])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(classes: &str, class: &str) -> bool {
        classes.split(' ').any(|candidate| candidate == class)
    }

    #[test]
    fn every_button_variant_keeps_the_base() {
        for variant in ButtonVariant::all() {
            let classes = button_classes(variant, ButtonSize::Default, "");
            assert!(has(&classes, "inline-flex"), "{variant:?}");
            assert!(has(&classes, "disabled:opacity-50"), "{variant:?}");
        }
    }

    #[test]
    fn size_overrides_base_padding_and_height() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Sm, "");
        assert!(has(&classes, "px-3"));
        assert!(!has(&classes, "px-4"));
        assert!(has(&classes, "h-9"));
        assert!(!has(&classes, "h-36"));
        assert!(has(&classes, "rounded-md"));
        assert!(!has(&classes, "rounded-lg"));
    }

    #[test]
    fn icon_size_sets_both_dimensions() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Icon, "size-10 rounded-lg");
        assert!(has(&classes, "size-10"));
        assert!(!has(&classes, "h-10"));
        assert!(!has(&classes, "w-10"));
    }

    #[test]
    fn badge_override_replaces_variant_fill() {
        let classes = badge_classes(BadgeVariant::Destructive, "bg-amber-500");
        assert!(has(&classes, "bg-amber-500"));
        assert!(!has(&classes, "bg-red-800"));
        assert!(has(&classes, "text-white"));
    }

    #[test]
    fn alert_variants_differ_in_palette() {
        let plain = alert_classes(AlertVariant::Default, "");
        let danger = alert_classes(AlertVariant::Destructive, "");
        assert!(has(&plain, "bg-white"));
        assert!(has(&danger, "bg-red-50"));
        assert!(has(&danger, "text-red-800"));
    }

    #[test]
    fn toggle_size_lookup() {
        assert!(has(
            &toggle_classes(ToggleVariant::Default, ToggleSize::Lg, ""),
            "px-5"
        ));
        assert!(has(
            &toggle_classes(ToggleVariant::Ghost, ToggleSize::Default, ""),
            "size-9"
        ));
    }
}
