use yew::prelude::*;

use crate::components::foundations::{merge_classes, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{CheckedState, resolve_controlled};

const SWITCH_BASE: &str = "peer inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-800-16 disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-blue-800 data-[state=unchecked]:bg-neutral-200";
const THUMB_BASE: &str = "pointer-events-none block h-5 w-5 rounded-full bg-white shadow-lg ring-0 transition-transform data-[state=checked]:translate-x-5 data-[state=unchecked]:translate-x-0";

#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    #[prop_or_default]
    pub checked: Option<bool>,
    #[prop_or_default]
    pub default_checked: bool,
    #[prop_or_default]
    pub on_checked_change: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(Switch)]
pub fn switch(props: &SwitchProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| props.default_checked);
    let checked = resolve_controlled(props.checked.as_ref(), &*local);
    let state = CheckedState::from_bool(checked);

    let onclick = {
        let local = local.clone();
        let on_checked_change = props.on_checked_change.clone();
        Callback::from(move |_: MouseEvent| {
            local.set(!checked);
            on_checked_change.emit(!checked);
        })
    };

    html! {
        <button
            ref={props.node_ref.clone()}
            r#type="button"
            role="switch"
            id={props.id.clone()}
            aria-checked={state.aria_checked()}
            aria-label={props.aria_label.clone()}
            data-state={state.data_state()}
            disabled={props.disabled}
            class={merge_classes(SWITCH_BASE, &props.class)}
            {onclick}
        >
            <span data-state={state.data_state()} class={THUMB_BASE} />
        </button>
    }
}
