//! Modal confirmation dialog. Escape closes it; the overlay does not.

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
use crate::core::primitives::{OpenState, is_dismiss_key, resolve_controlled};
use crate::core::variants::ButtonVariant;

#[derive(Clone, PartialEq)]
struct DialogContext {
    open: OpenState,
    set_open: Callback<bool>,
    title_id: Rc<String>,
    description_id: Rc<String>,
}

#[derive(Properties, PartialEq)]
pub struct AlertDialogProps {
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

#[function_component(AlertDialog)]
pub fn alert_dialog(props: &AlertDialogProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| props.default_open);
    let open = OpenState::from_bool(resolve_controlled(props.open.as_ref(), &*local));
    let title_id = use_element_id("alert-dialog-title");
    let description_id = use_element_id("alert-dialog-description");
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

    let ctx = DialogContext {
        open,
        set_open,
        title_id,
        description_id,
    };
    html! {
        <ContextProvider<DialogContext> context={ctx}>
            <div
                ref={props.node_ref.clone()}
                data-state={open.data_state()}
                class={merge_classes("contents", &props.class)}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<DialogContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertDialogButtonProps {
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

#[function_component(AlertDialogTrigger)]
pub fn alert_dialog_trigger(props: &AlertDialogButtonProps) -> Html {
    let Ok(ctx) = require_context(use_context::<DialogContext>(), "AlertDialogTrigger") else {
        return Html::default();
    };
    let onclick = {
        let set_open = ctx.set_open.clone();
        let forward = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            forward.emit(event);
            set_open.emit(true);
        })
    };
    html! {
        <Button
            variant={ButtonVariant::Outline}
            class={props.class.clone()}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
            aria_haspopup="dialog"
            aria_expanded={Some(ctx.open.is_open())}
            {onclick}
        >
            { for props.children.iter() }
        </Button>
    }
}

#[function_component(AlertDialogContent)]
pub fn alert_dialog_content(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let Ok(ctx) = require_context(use_context::<DialogContext>(), "AlertDialogContent") else {
        return Html::default();
    };
    if !ctx.open.is_open() {
        return Html::default();
    }
    html! {
        <>
            <div class="fixed inset-0 z-50 bg-neutral-300" data-state={ctx.open.data_state()} />
            <div
                ref={props.node_ref.clone()}
                role="alertdialog"
                aria-modal="true"
                aria-labelledby={(*ctx.title_id).clone()}
                aria-describedby={(*ctx.description_id).clone()}
                data-state={ctx.open.data_state()}
                class={merge_classes(
                    "fixed left-1/2 top-1/2 z-50 flex flex-col h-180 w-full max-w-lg -translate-x-1/2 -translate-y-1/2 space-y-6 rounded-lg bg-white px-6 py-6 shadow-md squircle",
                    &props.class,
                )}
            >
                { for props.children.iter() }
            </div>
        </>
    }
}

#[function_component(AlertDialogHeader)]
pub fn alert_dialog_header(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "div",
        "flex flex-col h-72 w-432 text-center sm:text-left",
        props,
    )
}

#[function_component(AlertDialogFooter)]
pub fn alert_dialog_footer(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "div",
        "flex flex-col-reverse gap-2 h-36 sm:flex-row sm:justify-end",
        props,
    )
}

#[function_component(AlertDialogTitle)]
pub fn alert_dialog_title(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = use_context::<DialogContext>();
    html! {
        <h2
            ref={props.node_ref.clone()}
            id={ctx.map(|ctx| (*ctx.title_id).clone())}
            class={merge_classes("w-432 text-xl font-medium text-neutral-950 font-inter", &props.class)}
        >
            { for props.children.iter() }
        </h2>
    }
}

#[function_component(AlertDialogDescription)]
pub fn alert_dialog_description(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = use_context::<DialogContext>();
    html! {
        <p
            ref={props.node_ref.clone()}
            id={ctx.map(|ctx| (*ctx.description_id).clone())}
            class={merge_classes("h-10 w-432 pt-1 text-sm text-neutral-500 font-inter", &props.class)}
        >
            { for props.children.iter() }
        </p>
    }
}

fn closing_button(
    component: &'static str,
    variant: ButtonVariant,
    props: &AlertDialogButtonProps,
    ctx: Option<DialogContext>,
) -> Html {
    let Ok(ctx) = require_context(ctx, component) else {
        return Html::default();
    };
    let onclick = {
        let set_open = ctx.set_open;
        let forward = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            forward.emit(event);
            set_open.emit(false);
        })
    };
    html! {
        <Button
            {variant}
            class={props.class.clone()}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </Button>
    }
}

/// Confirms and closes.
#[function_component(AlertDialogAction)]
pub fn alert_dialog_action(props: &AlertDialogButtonProps) -> Html {
    let ctx = use_context::<DialogContext>();
    closing_button("AlertDialogAction", ButtonVariant::Default, props, ctx)
}

/// Dismisses and closes.
#[function_component(AlertDialogCancel)]
pub fn alert_dialog_cancel(props: &AlertDialogButtonProps) -> Html {
    let ctx = use_context::<DialogContext>();
    closing_button("AlertDialogCancel", ButtonVariant::Outline, props, ctx)
}
