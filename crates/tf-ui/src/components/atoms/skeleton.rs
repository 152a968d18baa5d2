use yew::prelude::*;

use crate::components::foundations::{BasicProps, render_container, use_extra_attrs};

/// Pulsing placeholder block; size it with `class`.
#[function_component(Skeleton)]
pub fn skeleton(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("div", "animate-pulse rounded-md bg-neutral-100", props)
}
