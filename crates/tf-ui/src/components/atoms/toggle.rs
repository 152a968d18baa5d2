use yew::prelude::*;

use crate::components::foundations::use_extra_attrs;
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{PressedState, resolve_controlled};
use crate::core::variants::{ToggleSize, ToggleVariant, toggle_classes};

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    #[prop_or_default]
    pub pressed: Option<bool>,
    #[prop_or_default]
    pub default_pressed: bool,
    #[prop_or_default]
    pub on_pressed_change: Callback<bool>,
    #[prop_or_default]
    pub variant: ToggleVariant,
    #[prop_or_default]
    pub size: ToggleSize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Two-state button exposing `aria-pressed` and `data-state="on|off"`.
#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| props.default_pressed);
    let pressed = PressedState::from_bool(resolve_controlled(props.pressed.as_ref(), &*local));

    let onclick = {
        let local = local.clone();
        let on_pressed_change = props.on_pressed_change.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !pressed.is_on();
            local.set(next);
            on_pressed_change.emit(next);
        })
    };

    html! {
        <button
            ref={props.node_ref.clone()}
            r#type="button"
            class={toggle_classes(props.variant, props.size, &props.class.to_string())}
            aria-pressed={pressed.aria_pressed()}
            aria-label={props.aria_label.clone()}
            data-state={pressed.data_state()}
            disabled={props.disabled}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
