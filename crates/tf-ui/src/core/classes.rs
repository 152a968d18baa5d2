//! Utility-class merging with Tailwind conflict resolution.
//!
//! # Design
//! - Classes are merged left to right; when two utilities set the same CSS
//!   property under the same modifiers, the later one wins.
//! - Shorthands cover their longhands (`p-4` removes an earlier `px-2`), but a
//!   later longhand refines an earlier shorthand instead of removing it.
//! - Unknown classes are never dropped, only de-duplicated.
//! - Survivors keep their relative order.

use std::collections::HashSet;

/// Merge class lists; later conflicting utilities override earlier ones.
#[must_use]
pub fn cn<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = parts.into_iter().collect();
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
    let mut taken: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev().copied() {
        if !seen.insert(token) {
            continue;
        }
        let Some(key) = ConflictKey::parse(token) else {
            kept.push(token);
            continue;
        };
        let id = key.id(key.group);
        if taken.contains(&id) {
            continue;
        }
        for covered in covered_groups(key.group) {
            taken.insert(key.id(covered));
        }
        taken.insert(id);
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Merge a component's base classes with a caller override.
#[must_use]
pub fn merge(base: &str, extra: &str) -> String {
    cn([base, extra])
}

/// Conflict identity of a single utility: its modifier scope plus the CSS
/// property group it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConflictKey {
    scope: String,
    group: &'static str,
}

impl ConflictKey {
    fn parse(token: &str) -> Option<Self> {
        let (modifiers, utility) = split_modifiers(token);
        let (important, utility) = utility
            .strip_prefix('!')
            .map_or((false, utility), |rest| (true, rest));
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        let group = utility_group(utility)?;

        let mut modifiers = modifiers;
        modifiers.sort_unstable();
        let mut scope = modifiers.join(":");
        if important {
            scope.push('!');
        }
        Some(Self { scope, group })
    }

    fn id(&self, group: &str) -> String {
        format!("{}|{group}", self.scope)
    }
}

/// Split `hover:data-[state=open]:bg-x` into its modifiers and utility,
/// ignoring colons inside arbitrary-value brackets.
fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0_usize;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    (modifiers, &token[start..])
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];
const TEXT_TRANSFORM: &[&str] = &["uppercase", "lowercase", "capitalize", "normal-case"];
const TEXT_DECORATION: &[&str] = &["underline", "overline", "line-through", "no-underline"];
const FONT_STYLE: &[&str] = &["italic", "not-italic"];
const SCREEN_READER: &[&str] = &["sr-only", "not-sr-only"];
const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];
const FLEX_WRAP: &[&str] = &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"];
const FLEX: &[&str] = &["flex-1", "flex-auto", "flex-initial", "flex-none"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const RADIUS_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const RADIUS_SIDES: &[&str] = &[
    "tl", "tr", "br", "bl", "ss", "se", "es", "ee", "t", "r", "b", "l", "s", "e",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];

/// Plain prefixes that map one-to-one onto a property group. Longer prefixes
/// come first so `inset-x-0` is not read as `inset`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("pointer-events", "pointer-events"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("whitespace", "whitespace"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("overflow", "overflow"),
    ("duration", "duration"),
    ("tracking", "tracking"),
    ("opacity", "opacity"),
    ("justify", "justify"),
    ("leading", "leading"),
    ("animate", "animate"),
    ("content", "content"),
    ("rotate", "rotate"),
    ("cursor", "cursor"),
    ("select", "select"),
    ("bottom", "bottom"),
    ("aspect", "aspect"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("items", "items"),
    ("inset", "inset"),
    ("right", "right"),
    ("scale", "scale"),
    ("basis", "basis"),
    ("order", "order"),
    ("shrink", "shrink"),
    ("grow", "grow"),
    ("self", "self"),
    ("size", "size"),
    ("left", "left"),
    ("ease", "ease"),
    ("top", "top"),
    ("gap", "gap"),
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("ms", "ms"),
    ("me", "me"),
    ("p", "p"),
    ("m", "m"),
    ("w", "w"),
    ("h", "h"),
    ("z", "z"),
];

fn one_of(list: &[&str], value: &str) -> bool {
    list.contains(&value)
}

fn is_arbitrary_length(value: &str) -> bool {
    value.starts_with('[')
        && ["px]", "rem]", "em]", "%]"]
            .iter()
            .any(|suffix| value.ends_with(suffix))
}

fn starts_with_digit(value: &str) -> bool {
    value.chars().next().is_some_and(|ch| ch.is_ascii_digit())
}

fn utility_group(utility: &str) -> Option<&'static str> {
    const KEYWORD_TABLES: &[(&[&str], &str)] = &[
        (DISPLAY, "display"),
        (POSITION, "position"),
        (VISIBILITY, "visibility"),
        (TEXT_TRANSFORM, "text-transform"),
        (TEXT_DECORATION, "text-decoration"),
        (FONT_STYLE, "font-style"),
        (SCREEN_READER, "sr"),
        (FLEX_DIRECTION, "flex-direction"),
        (FLEX_WRAP, "flex-wrap"),
        (FLEX, "flex"),
    ];
    for (table, group) in KEYWORD_TABLES {
        if one_of(table, utility) {
            return Some(*group);
        }
    }

    match utility {
        "border" => return Some("border-w"),
        "rounded" => return Some("rounded"),
        "shadow" => return Some("shadow"),
        "ring" => return Some("ring-w"),
        "transition" => return Some("transition"),
        "truncate" => return Some("text-overflow"),
        _ => {}
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if one_of(TEXT_SIZES, value) || is_arbitrary_length(value) {
            "font-size"
        } else if one_of(TEXT_ALIGN, value) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if one_of(FONT_WEIGHTS, value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if utility.starts_with("bg-") {
        return Some("bg-color");
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(if let Some(offset) = value.strip_prefix("offset-") {
            if starts_with_digit(offset) {
                "ring-offset-w"
            } else {
                "ring-offset-color"
            }
        } else if starts_with_digit(value) || value == "inset" {
            "ring-w"
        } else {
            "ring-color"
        });
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if one_of(SHADOW_SIZES, value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        return Some(if one_of(&["none", "dashed", "dotted", "double"], value) {
            "outline-style"
        } else if value.starts_with("offset-") {
            "outline-offset"
        } else if starts_with_digit(value) {
            "outline-w"
        } else {
            "outline-color"
        });
    }

    PREFIX_GROUPS.iter().find_map(|(prefix, group)| {
        let rest = utility.strip_prefix(prefix)?;
        (rest.is_empty() || rest.starts_with('-')).then_some(*group)
    })
}

fn border_group(value: &str) -> &'static str {
    if starts_with_digit(value) || is_arbitrary_length(value) {
        return "border-w";
    }
    if one_of(BORDER_STYLES, value) {
        return "border-style";
    }
    for side in BORDER_SIDES {
        let Some(rest) = value.strip_prefix(side) else {
            continue;
        };
        if rest.is_empty() || rest.strip_prefix('-').is_some_and(starts_with_digit) {
            return match *side {
                "x" => "border-w-x",
                "y" => "border-w-y",
                "t" => "border-w-t",
                "r" => "border-w-r",
                "b" => "border-w-b",
                "l" => "border-w-l",
                "s" => "border-w-s",
                _ => "border-w-e",
            };
        }
    }
    "border-color"
}

fn rounded_group(value: &str) -> &'static str {
    if one_of(RADIUS_SIZES, value) || value.starts_with('[') {
        return "rounded";
    }
    for side in RADIUS_SIDES {
        let Some(rest) = value.strip_prefix(side) else {
            continue;
        };
        if rest.is_empty() || rest.starts_with('-') {
            return match *side {
                "tl" => "rounded-tl",
                "tr" => "rounded-tr",
                "br" => "rounded-br",
                "bl" => "rounded-bl",
                "ss" => "rounded-ss",
                "se" => "rounded-se",
                "es" => "rounded-es",
                "ee" => "rounded-ee",
                "t" => "rounded-t",
                "r" => "rounded-r",
                "b" => "rounded-b",
                "l" => "rounded-l",
                "s" => "rounded-s",
                _ => "rounded-e",
            };
        }
    }
    "rounded"
}

/// Longhand groups a shorthand group overrides.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pl", "pr", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["ml", "mr", "ms", "me"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["left", "right"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-l", "border-w-r"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_background_wins() {
        assert_eq!(
            cn(["bg-blue-800 text-white", "bg-red-500"]),
            "text-white bg-red-500"
        );
    }

    #[test]
    fn shorthand_padding_removes_earlier_longhands() {
        assert_eq!(cn(["px-2 py-1", "p-3"]), "p-3");
        assert_eq!(cn(["p-3", "px-2"]), "p-3 px-2");
    }

    #[test]
    fn text_size_and_color_do_not_conflict() {
        assert_eq!(
            cn(["text-sm text-neutral-950", "text-lg"]),
            "text-neutral-950 text-lg"
        );
        assert_eq!(cn(["text-left", "text-right text-xs"]), "text-right text-xs");
    }

    #[test]
    fn font_weight_and_family_are_separate() {
        assert_eq!(
            cn(["font-medium font-inter", "font-bold"]),
            "font-inter font-bold"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            cn(["hover:bg-neutral-50 bg-white", "bg-black"]),
            "hover:bg-neutral-50 bg-black"
        );
        assert_eq!(cn(["hover:focus:bg-a", "focus:hover:bg-b"]), "focus:hover:bg-b");
        assert_eq!(
            cn(["data-[state=open]:bg-a", "data-[state=open]:bg-b"]),
            "data-[state=open]:bg-b"
        );
    }

    #[test]
    fn negative_values_share_the_group() {
        assert_eq!(cn(["-ml-4", "ml-2"]), "ml-2");
        assert_eq!(cn(["top-1/2 -translate-y-1/2", "-top-12"]), "-translate-y-1/2 -top-12");
    }

    #[test]
    fn unknown_classes_are_deduplicated_not_dropped() {
        assert_eq!(cn(["squircle font-inter", "squircle"]), "font-inter squircle");
        assert_eq!(cn(["peer", "group"]), "peer group");
    }

    #[test]
    fn border_width_style_and_color_are_independent() {
        assert_eq!(
            cn(["border border-neutral-200", "border-2 border-dashed"]),
            "border-neutral-200 border-2 border-dashed"
        );
        assert_eq!(cn(["border-b", "border-red-100"]), "border-b border-red-100");
    }

    #[test]
    fn size_covers_width_and_height() {
        assert_eq!(cn(["h-10 w-10", "size-8"]), "size-8");
        assert_eq!(cn(["size-8", "w-12"]), "size-8 w-12");
    }

    #[test]
    fn display_and_position_keywords_conflict() {
        assert_eq!(cn(["flex relative", "hidden absolute"]), "hidden absolute");
    }

    #[test]
    fn empty_parts_are_ignored() {
        assert_eq!(cn(["", "  rounded-lg  ", ""]), "rounded-lg");
        assert_eq!(merge("rounded-md", ""), "rounded-md");
        assert_eq!(merge("rounded-md px-3", "rounded-full"), "px-3 rounded-full");
    }

    #[test]
    fn important_utilities_form_their_own_scope() {
        assert_eq!(cn(["!p-2", "p-4"]), "!p-2 p-4");
        assert_eq!(cn(["!p-2", "!p-4"]), "!p-4");
    }
}
