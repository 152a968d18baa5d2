use yew::prelude::*;

use crate::components::atoms::icons::{IconChevronRight, IconDots};
use crate::components::foundations::{BasicProps, merge_classes, render_container, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <nav ref={props.node_ref.clone()} aria-label="breadcrumb" class={props.class.clone()}>
            { for props.children.iter() }
        </nav>
    }
}

#[function_component(BreadcrumbList)]
pub fn breadcrumb_list(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "ol",
        "flex items-center gap-2 w-290 h-5 text-sm font-normal font-inter text-muted-foreground",
        props,
    )
}

#[function_component(BreadcrumbItem)]
pub fn breadcrumb_item(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("li", "inline-flex items-center", props)
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbLinkProps {
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BreadcrumbLink)]
pub fn breadcrumb_link(props: &BreadcrumbLinkProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <a
            ref={props.node_ref.clone()}
            href={props.href.clone()}
            class={merge_classes("text-neutral-400 transition-colors hover:text-neutral-950", &props.class)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}

/// The current page: not a link, announced with `aria-current="page"`.
#[function_component(BreadcrumbPage)]
pub fn breadcrumb_page(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <span
            ref={props.node_ref.clone()}
            role="link"
            aria-disabled="true"
            aria-current="page"
            class={merge_classes("font-normal text-neutral-950", &props.class)}
        >
            { for props.children.iter() }
        </span>
    }
}

/// Separator; renders a chevron unless children are supplied.
#[function_component(BreadcrumbSeparator)]
pub fn breadcrumb_separator(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <li
            ref={props.node_ref.clone()}
            role="presentation"
            aria-hidden="true"
            class={merge_classes("[&>svg]:size-4", &props.class)}
        >
            if props.children.is_empty() {
                <IconChevronRight class="text-neutral-400" />
            } else {
                { for props.children.iter() }
            }
        </li>
    }
}

#[function_component(BreadcrumbEllipsis)]
pub fn breadcrumb_ellipsis(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <span
            ref={props.node_ref.clone()}
            role="presentation"
            aria-hidden="true"
            class={merge_classes("flex size-4 items-center justify-center text-neutral-400", &props.class)}
        >
            <IconDots class="size-4" />
            <span class="sr-only">{"More"}</span>
        </span>
    }
}
