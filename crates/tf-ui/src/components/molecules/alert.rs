use yew::prelude::*;

use crate::components::foundations::{BasicProps, render_container, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::variants::{AlertVariant, alert_classes};

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    #[prop_or_default]
    pub variant: AlertVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Callout with `role="alert"`. A leading `<svg>` child is positioned as
/// the icon.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <div
            ref={props.node_ref.clone()}
            role="alert"
            class={alert_classes(props.variant, &props.class.to_string())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[function_component(AlertTitle)]
pub fn alert_title(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("h5", "font-medium pb-1 w-470 leading-none", props)
}

#[function_component(AlertDescription)]
pub fn alert_description(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "div",
        "flex items-center w-470 text-sm font-inter [&_p]:leading-relaxed",
        props,
    )
}
