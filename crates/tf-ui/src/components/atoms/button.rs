use yew::prelude::*;

use crate::components::foundations::use_extra_attrs;
use crate::core::attrs::ExtraAttrs;
use crate::core::variants::{ButtonSize, ButtonVariant, button_classes};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_controls: Option<AttrValue>,
    #[prop_or_default]
    pub aria_expanded: Option<bool>,
    #[prop_or_default]
    pub aria_haspopup: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub onkeydown: Callback<KeyboardEvent>,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let classes = button_classes(props.variant, props.size, &props.class.to_string());
    let expanded = props
        .aria_expanded
        .map(|expanded| AttrValue::from(expanded.to_string()));

    html! {
        <button
            ref={props.node_ref.clone()}
            class={classes}
            id={props.id.clone()}
            title={props.title.clone()}
            disabled={props.disabled}
            r#type={props.r#type.clone()}
            aria-label={props.aria_label.clone()}
            aria-controls={props.aria_controls.clone()}
            aria-expanded={expanded}
            aria-haspopup={props.aria_haspopup.clone()}
            onclick={props.onclick.clone()}
            onkeydown={props.onkeydown.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
