use yew::prelude::*;

use crate::components::foundations::{merge_classes, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;

const INPUT_BASE: &str = "flex h-9 w-full rounded-md border border-neutral-200 bg-white px-3 py-1 text-sm font-inter placeholder:text-neutral-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-800-16 disabled:cursor-not-allowed disabled:opacity-50";

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or(AttrValue::Static("text"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Fires with the current text on every edit.
    #[prop_or_default]
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <input
            ref={props.node_ref.clone()}
            r#type={props.r#type.clone()}
            class={merge_classes(INPUT_BASE, &props.class)}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            id={props.id.clone()}
            name={props.name.clone()}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            {oninput}
        />
    }
}
