//! Bottom sheet. Clicking the overlay, pressing Escape or dragging the sheet
//! down far enough closes it.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::atoms::button::Button;
use crate::components::foundations::{
    BasicProps, merge_classes, render_container, require_context, use_element_id,
    use_extra_attrs,
};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{OpenState, drag_dismisses, is_dismiss_key, resolve_controlled};
use crate::core::variants::ButtonVariant;

#[derive(Clone, PartialEq)]
struct DrawerContext {
    open: OpenState,
    set_open: Callback<bool>,
    title_id: Rc<String>,
    description_id: Rc<String>,
}

#[derive(Properties, PartialEq)]
pub struct DrawerProps {
    #[prop_or_default]
    pub open: Option<bool>,
    #[prop_or_default]
    pub default_open: bool,
    #[prop_or_default]
    pub on_open_change: Callback<bool>,
    /// Classes for the `display: contents` wrapper around the parts.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| props.default_open);
    let open = OpenState::from_bool(resolve_controlled(props.open.as_ref(), &*local));
    let title_id = use_element_id("drawer-title");
    let description_id = use_element_id("drawer-description");
    let set_open = {
        let local = local.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |next: bool| {
            local.set(next);
            on_open_change.emit(next);
        })
    };

    {
        let set_open = set_open.clone();
        use_effect_with_deps(
            move |open: &OpenState| {
                let listener = open.is_open().then(|| {
                    EventListener::new(&document(), "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<web_sys::KeyboardEvent>()
                            .is_some_and(|event| is_dismiss_key(&event.key()));
                        if is_escape {
                            set_open.emit(false);
                        }
                    })
                });
                move || drop(listener)
            },
            open,
        );
    }

    html! {
        <ContextProvider<DrawerContext> context={DrawerContext { open, set_open, title_id, description_id }}>
            <div
                ref={props.node_ref.clone()}
                data-state={open.data_state()}
                class={merge_classes("contents", &props.class)}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<DrawerContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DrawerButtonProps {
    #[prop_or(ButtonVariant::Outline)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

fn drawer_button(
    component: &'static str,
    ctx: Option<DrawerContext>,
    props: &DrawerButtonProps,
    open_on_click: bool,
) -> Html {
    let Ok(ctx) = require_context(ctx, component) else {
        return Html::default();
    };
    let onclick = ctx.set_open.reform(move |_: MouseEvent| open_on_click);
    html! {
        <Button
            variant={props.variant}
            class={props.class.clone()}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
            aria_haspopup={open_on_click.then_some(AttrValue::Static("dialog"))}
            aria_expanded={open_on_click.then_some(ctx.open.is_open())}
            {onclick}
        >
            { for props.children.iter() }
        </Button>
    }
}

#[function_component(DrawerTrigger)]
pub fn drawer_trigger(props: &DrawerButtonProps) -> Html {
    let ctx = use_context::<DrawerContext>();
    drawer_button("DrawerTrigger", ctx, props, true)
}

#[function_component(DrawerClose)]
pub fn drawer_close(props: &DrawerButtonProps) -> Html {
    let ctx = use_context::<DrawerContext>();
    drawer_button("DrawerClose", ctx, props, false)
}

/// Sheet content with a drag handle. A downward drag longer than a quarter
/// of the sheet height dismisses it; shorter drags snap back.
#[function_component(DrawerContent)]
pub fn drawer_content(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = require_context(use_context::<DrawerContext>(), "DrawerContent").ok();
    let drag_start = use_mut_ref(|| None::<f64>);
    let offset = use_state_eq(|| 0.0_f64);

    let Some(ctx) = ctx else {
        return Html::default();
    };
    if !ctx.open.is_open() {
        return Html::default();
    }

    let on_overlay_click = ctx.set_open.reform(|_: MouseEvent| false);
    let onpointerdown = {
        let drag_start = drag_start.clone();
        Callback::from(move |event: PointerEvent| {
            *drag_start.borrow_mut() = Some(f64::from(event.client_y()));
            if let Some(target) = event.target_dyn_into::<web_sys::Element>() {
                if let Err(err) = target.set_pointer_capture(event.pointer_id()) {
                    gloo::console::error!("drawer pointer capture failed", err);
                }
            }
        })
    };
    let onpointermove = {
        let drag_start = drag_start.clone();
        let offset = offset.clone();
        Callback::from(move |event: PointerEvent| {
            if let Some(start) = *drag_start.borrow() {
                offset.set((f64::from(event.client_y()) - start).max(0.0));
            }
        })
    };
    let onpointerup = {
        let content_ref = props.node_ref.clone();
        let set_open = ctx.set_open.clone();
        let offset = offset.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(start) = drag_start.borrow_mut().take() else {
                return;
            };
            let height = content_ref
                .cast::<web_sys::Element>()
                .map_or(0.0, |content| content.get_bounding_client_rect().height());
            offset.set(0.0);
            if drag_dismisses(f64::from(event.client_y()) - start, height) {
                set_open.emit(false);
            }
        })
    };
    let style = (*offset > 0.0).then(|| format!("transform: translateY({}px)", *offset));

    html! {
        <>
            <div
                class="fixed inset-0 z-50 bg-black/80"
                data-state={ctx.open.data_state()}
                onclick={on_overlay_click}
            />
            <div
                ref={props.node_ref.clone()}
                role="dialog"
                aria-modal="true"
                aria-labelledby={(*ctx.title_id).clone()}
                aria-describedby={(*ctx.description_id).clone()}
                data-state={ctx.open.data_state()}
                style={style}
                class={merge_classes(
                    "fixed inset-x-0 bottom-0 z-50 mt-24 flex h-auto flex-col rounded-t-[10px] border-neutral-200 bg-white touch-none",
                    &props.class,
                )}
                {onpointerdown}
                {onpointermove}
                {onpointerup}
            >
                <div class="mx-auto mt-4 h-2 w-[100px] rounded-full bg-neutral-100" />
                { for props.children.iter() }
            </div>
        </>
    }
}

#[function_component(DrawerHeader)]
pub fn drawer_header(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("div", "grid gap-1.5 p-4 text-center sm:text-left", props)
}

#[function_component(DrawerFooter)]
pub fn drawer_footer(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("div", "mt-auto flex flex-col gap-2 p-4", props)
}

#[function_component(DrawerTitle)]
pub fn drawer_title(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = use_context::<DrawerContext>();
    html! {
        <h2
            ref={props.node_ref.clone()}
            id={ctx.map(|ctx| (*ctx.title_id).clone())}
            class={merge_classes("text-lg font-semibold leading-none tracking-tight", &props.class)}
        >
            { for props.children.iter() }
        </h2>
    }
}

#[function_component(DrawerDescription)]
pub fn drawer_description(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = use_context::<DrawerContext>();
    html! {
        <p
            ref={props.node_ref.clone()}
            id={ctx.map(|ctx| (*ctx.description_id).clone())}
            class={merge_classes("text-sm text-neutral-500", &props.class)}
        >
            { for props.children.iter() }
        </p>
    }
}
