#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    dead_code,
    unused,
    unused_imports,
    unreachable_pub,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! TF-UI: accessible Yew components styled with Tailwind utility classes.
//!
//! The crate is split the same way everywhere:
//! - [`core`] holds DOM-free models (class merging, variants, the data-table
//!   row model, the carousel scroll engine, primitive state machines) and is
//!   tested natively.
//! - `components` holds the Yew wrappers and is compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::core::classes::cn;
pub use crate::core::error::{ConfigError, UiError};

#[cfg(test)]
mod tests {
    use crate::core::classes::cn;
    use crate::core::variants::{ButtonSize, ButtonVariant, button_classes};

    #[test]
    fn caller_override_beats_variant_background() {
        let classes = button_classes(ButtonVariant::Default, ButtonSize::Default, "bg-red-500");
        assert!(classes.contains("bg-red-500"));
        assert!(!classes.split(' ').any(|class| class == "bg-blue-800"));
    }

    #[test]
    fn cn_is_reexported_at_the_root() {
        assert_eq!(crate::cn(["p-2", "p-4"]), cn(["p-4"]));
    }

    /// Component sources; compiled for wasm only, scanned here as text.
    const COMPONENT_SOURCES: [&str; 24] = [
        include_str!("components/foundations.rs"),
        include_str!("components/atoms/avatar.rs"),
        include_str!("components/atoms/badge.rs"),
        include_str!("components/atoms/button.rs"),
        include_str!("components/atoms/checkbox.rs"),
        include_str!("components/atoms/icons.rs"),
        include_str!("components/atoms/input.rs"),
        include_str!("components/atoms/skeleton.rs"),
        include_str!("components/atoms/slider.rs"),
        include_str!("components/atoms/switch.rs"),
        include_str!("components/atoms/toggle.rs"),
        include_str!("components/atoms/tooltip.rs"),
        include_str!("components/molecules/accordion.rs"),
        include_str!("components/molecules/alert.rs"),
        include_str!("components/molecules/breadcrumb.rs"),
        include_str!("components/molecules/card.rs"),
        include_str!("components/molecules/dropdown.rs"),
        include_str!("components/molecules/pagination.rs"),
        include_str!("components/molecules/table.rs"),
        include_str!("components/organisms/alert_dialog.rs"),
        include_str!("components/organisms/calendar.rs"),
        include_str!("components/organisms/carousel.rs"),
        include_str!("components/organisms/data_table.rs"),
        include_str!("components/organisms/drawer.rs"),
    ];

    #[test]
    fn wrapper_props_forward_ref_and_attributes() {
        let mut checked = 0;
        for source in COMPONENT_SOURCES {
            for block in source.split("pub struct ").skip(1) {
                let name = block.split_whitespace().next().unwrap_or_default();
                // Icons are decorative leaves.
                if !name.ends_with("Props") || name == "IconProps" {
                    continue;
                }
                let body = block.split("\n}").next().unwrap_or_default();
                assert!(body.contains("pub node_ref: NodeRef"), "{name} lacks node_ref");
                assert!(body.contains("pub attrs: ExtraAttrs"), "{name} lacks attrs");
                checked += 1;
            }
        }
        assert!(checked > 20, "only {checked} props structs found");
    }
}
