use yew::prelude::*;

use crate::components::atoms::icons::{IconChevronLeft, IconChevronRight, IconDots};
use crate::components::foundations::{BasicProps, merge_classes, render_container, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::pagination::{PageItem, link_variant, page_window};
use crate::core::variants::{ButtonSize, button_classes};

#[function_component(Pagination)]
pub fn pagination(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <nav
            ref={props.node_ref.clone()}
            role="navigation"
            aria-label="pagination"
            class={merge_classes("mx-auto flex w-full justify-center", &props.class)}
        >
            { for props.children.iter() }
        </nav>
    }
}

#[function_component(PaginationContent)]
pub fn pagination_content(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "ul",
        "flex flex-row items-center gap-1 font-inter font-medium",
        props,
    )
}

#[function_component(PaginationItem)]
pub fn pagination_item(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("li", "", props)
}

#[derive(Properties, PartialEq)]
pub struct PaginationLinkProps {
    #[prop_or_default]
    pub is_active: bool,
    #[prop_or(ButtonSize::Icon)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
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

/// Page link styled as a button: outlined when active, ghost otherwise.
#[function_component(PaginationLink)]
pub fn pagination_link(props: &PaginationLinkProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let classes = button_classes(
        link_variant(props.is_active),
        props.size,
        &props.class.to_string(),
    );
    html! {
        <a
            ref={props.node_ref.clone()}
            href={props.href.clone()}
            aria-current={props.is_active.then_some("page")}
            aria-label={props.aria_label.clone()}
            class={classes}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationStepProps {
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
}

#[function_component(PaginationPrevious)]
pub fn pagination_previous(props: &PaginationStepProps) -> Html {
    let mut class = classes!("gap-1 pl-2.5 w-[102px]");
    class.push(props.class.clone());
    html! {
        <PaginationLink
            aria_label="Go to previous page"
            size={ButtonSize::Default}
            href={props.href.clone()}
            onclick={props.onclick.clone()}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
            {class}
        >
            <IconChevronLeft class="size-4 text-neutral-500" />
            <span>{"Previous"}</span>
        </PaginationLink>
    }
}

#[function_component(PaginationNext)]
pub fn pagination_next(props: &PaginationStepProps) -> Html {
    let mut class = classes!("gap-1 pr-2.5 w-[76px]");
    class.push(props.class.clone());
    html! {
        <PaginationLink
            aria_label="Go to next page"
            size={ButtonSize::Default}
            href={props.href.clone()}
            onclick={props.onclick.clone()}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
            {class}
        >
            <span>{"Next"}</span>
            <IconChevronRight class="size-4 text-neutral-500" />
        </PaginationLink>
    }
}

#[function_component(PaginationEllipsis)]
pub fn pagination_ellipsis(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <span
            ref={props.node_ref.clone()}
            aria-hidden="true"
            class={merge_classes("flex w-[19px] h-5 items-center justify-center", &props.class)}
        >
            <IconDots class="size-4" />
            <span class="sr-only">{"More pages"}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    /// Zero-based current page.
    pub current: usize,
    pub total: usize,
    #[prop_or(1)]
    pub siblings: usize,
    pub on_page_change: Callback<usize>,
    #[prop_or_default]
    pub class: Classes,
    /// Forwarded to the `nav` root.
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

/// Complete pagination control driven by a page count.
#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let go = |page: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_page_change.emit(page);
        })
    };
    let last = props.total.saturating_sub(1);
    let items = page_window(props.current, props.total, props.siblings)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(page) => html! {
                <PaginationItem>
                    <PaginationLink href="#" is_active={page == props.current} onclick={go(page)}>
                        {(page + 1).to_string()}
                    </PaginationLink>
                </PaginationItem>
            },
            PageItem::Ellipsis => html! {
                <PaginationItem>
                    <PaginationEllipsis />
                </PaginationItem>
            },
        });

    html! {
        <Pagination
            class={props.class.clone()}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
        >
            <PaginationContent>
                if props.current > 0 {
                    <PaginationItem>
                        <PaginationPrevious href="#" onclick={go(props.current - 1)} />
                    </PaginationItem>
                }
                { for items }
                if props.current < last {
                    <PaginationItem>
                        <PaginationNext href="#" onclick={go(props.current + 1)} />
                    </PaginationItem>
                }
            </PaginationContent>
        </Pagination>
    }
}
