use yew::prelude::*;

use crate::components::atoms::icons::{IconCheck, IconMinus};
use crate::components::foundations::{merge_classes, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{CheckedState, resolve_controlled};

const CHECKBOX_BASE: &str = "peer size-4 shrink-0 rounded-sm border-neutral-200 ring-offset-background squircle text-white focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-blue-800 data-[state=checked]:border-none data-[state=indeterminate]:bg-blue-800";

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    /// Controlled value; leave `None` to let the checkbox manage itself.
    #[prop_or_default]
    pub checked: Option<CheckedState>,
    /// Initial value when uncontrolled.
    #[prop_or_default]
    pub default_checked: CheckedState,
    #[prop_or_default]
    pub on_checked_change: Callback<CheckedState>,
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

/// Tri-state checkbox rendered as `role="checkbox"` with `aria-checked`.
#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| props.default_checked);
    let state = resolve_controlled(props.checked.as_ref(), &*local);

    let onclick = {
        let local = local.clone();
        let on_checked_change = props.on_checked_change.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state.toggled();
            local.set(next);
            on_checked_change.emit(next);
        })
    };

    let indicator = match state {
        CheckedState::Checked => html! {
            <span data-state={state.data_state()} class="flex items-center justify-center text-current">
                <IconCheck class="size-2" />
            </span>
        },
        CheckedState::Indeterminate => html! {
            <span data-state={state.data_state()} class="flex items-center justify-center text-current">
                <IconMinus class="size-2" />
            </span>
        },
        CheckedState::Unchecked => Html::default(),
    };

    html! {
        <button
            ref={props.node_ref.clone()}
            r#type="button"
            role="checkbox"
            id={props.id.clone()}
            aria-checked={state.aria_checked()}
            aria-label={props.aria_label.clone()}
            data-state={state.data_state()}
            disabled={props.disabled}
            class={merge_classes(CHECKBOX_BASE, &props.class)}
            {onclick}
        >
            {indicator}
        </button>
    }
}
