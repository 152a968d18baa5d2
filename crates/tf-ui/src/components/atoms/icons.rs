//! Stroke icons used by the components (24px grid, `currentColor`).

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    /// Accessible title; icons without one are hidden from assistive tech.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconCheck)]
pub fn icon_check(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12l5 5l10 -10" /> })
}

#[function_component(IconMinus)]
pub fn icon_minus(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12l14 0" /> })
}

#[function_component(IconCircle)]
pub fn icon_circle(props: &IconProps) -> Html {
    icon_svg(props, html! { <circle cx="12" cy="12" r="4" fill="currentColor" /> })
}

#[function_component(IconChevronDown)]
pub fn icon_chevron_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M6 9l6 6l6 -6" /> })
}

#[function_component(IconChevronLeft)]
pub fn icon_chevron_left(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M15 6l-6 6l6 6" /> })
}

#[function_component(IconChevronRight)]
pub fn icon_chevron_right(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M9 6l6 6l-6 6" /> })
}

/// Up/down chevrons shown on sortable headers.
#[function_component(IconSelector)]
pub fn icon_selector(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M8 9l4 -4l4 4m0 6l-4 4l-4 -4" /> })
}

#[function_component(IconArrowLeft)]
pub fn icon_arrow_left(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12l14 0m-14 0l6 6m-6 -6l6 -6" /> })
}

#[function_component(IconArrowRight)]
pub fn icon_arrow_right(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12l14 0m-6 6l6 -6m-6 -6l6 6" /> })
}

#[function_component(IconDots)]
pub fn icon_dots(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="5" cy="12" r="1" />
            <circle cx="12" cy="12" r="1" />
            <circle cx="19" cy="12" r="1" />
        </> },
    )
}

/// Three bars; rotated on the slider thumb to read as a grip.
#[function_component(IconMenu)]
pub fn icon_menu(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M4 6l16 0m-16 6l16 0m-16 6l16 0" /> })
}

#[function_component(IconAlertCircle)]
pub fn icon_alert_circle(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="9" />
            <path d="M12 8v4m0 4h.01" />
        </> },
    )
}
