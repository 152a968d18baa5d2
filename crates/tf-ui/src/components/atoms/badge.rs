use yew::prelude::*;

use crate::components::foundations::use_extra_attrs;
use crate::core::attrs::ExtraAttrs;
use crate::core::variants::{BadgeVariant, badge_classes};

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <div
            ref={props.node_ref.clone()}
            class={badge_classes(props.variant, &props.class.to_string())}
        >
            { for props.children.iter() }
        </div>
    }
}
