use yew::prelude::*;

use crate::components::foundations::{BasicProps, render_container, use_extra_attrs};

#[function_component(Card)]
pub fn card(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "div",
        "rounded-lg border-neutral-200 bg-card px-4 py-4 shadow-sm space-y-4 font-inter squircle",
        props,
    )
}

#[function_component(CardHeader)]
pub fn card_header(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("div", "flex flex-col h-12 space-y-1", props)
}

#[function_component(CardTitle)]
pub fn card_title(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "h3",
        "h-6 text-base text-neutral-950 font-medium leading-none tracking-tight",
        props,
    )
}

#[function_component(CardDescription)]
pub fn card_description(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("p", "text-sm text-neutral-500", props)
}

#[function_component(CardContent)]
pub fn card_content(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("div", "", props)
}

#[function_component(CardFooter)]
pub fn card_footer(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("div", "flex items-center", props)
}
