use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::foundations::{BasicProps, merge_classes, require_context, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::ImageLoadingStatus;

#[derive(Clone, PartialEq)]
struct AvatarContext {
    status: ImageLoadingStatus,
    on_status: Callback<ImageLoadingStatus>,
}

#[function_component(Avatar)]
pub fn avatar(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let status = use_state_eq(|| ImageLoadingStatus::Idle);
    let ctx = AvatarContext {
        status: *status,
        on_status: {
            let status = status.clone();
            Callback::from(move |next| status.set(next))
        },
    };

    html! {
        <ContextProvider<AvatarContext> context={ctx}>
            <span
                ref={props.node_ref.clone()}
                class={merge_classes("relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full", &props.class)}
            >
                { for props.children.iter() }
            </span>
        </ContextProvider<AvatarContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarImageProps {
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

/// Image that stays hidden until it has loaded.
#[function_component(AvatarImage)]
pub fn avatar_image(props: &AvatarImageProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = require_context(use_context::<AvatarContext>(), "AvatarImage").ok();

    {
        let on_status = ctx.as_ref().map(|ctx| ctx.on_status.clone());
        use_effect_with_deps(
            move |src: &Option<AttrValue>| {
                if let Some(on_status) = on_status {
                    on_status.emit(ImageLoadingStatus::for_source(src.as_deref()));
                }
                || ()
            },
            props.src.clone(),
        );
    }

    let Some(ctx) = ctx else {
        return Html::default();
    };
    if !ctx.status.mount_image() {
        return Html::default();
    }
    let onload = {
        let on_status = ctx.on_status.clone();
        Callback::from(move |_: Event| on_status.emit(ImageLoadingStatus::Loaded))
    };
    let onerror = {
        let on_status = ctx.on_status.clone();
        Callback::from(move |_: Event| on_status.emit(ImageLoadingStatus::Error))
    };

    html! {
        <img
            ref={props.node_ref.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            hidden={ctx.status != ImageLoadingStatus::Loaded}
            class={merge_classes("aspect-square h-full w-full", &props.class)}
            {onload}
            {onerror}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarFallbackProps {
    /// Wait this long before showing the fallback, to avoid a flash on fast
    /// loads.
    #[prop_or_default]
    pub delay_ms: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AvatarFallback)]
pub fn avatar_fallback(props: &AvatarFallbackProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = require_context(use_context::<AvatarContext>(), "AvatarFallback").ok();
    let can_render = use_state_eq(|| props.delay_ms.is_none());

    {
        let can_render = can_render.clone();
        use_effect_with_deps(
            move |delay: &Option<u32>| {
                let timeout = delay.map(|delay| Timeout::new(delay, move || can_render.set(true)));
                move || drop(timeout)
            },
            props.delay_ms,
        );
    }

    let visible = ctx.is_some_and(|ctx| ctx.status.show_fallback()) && *can_render;
    if !visible {
        return Html::default();
    }
    html! {
        <span
            ref={props.node_ref.clone()}
            class={merge_classes("flex h-full w-full items-center justify-center rounded-full bg-none text-neutral-400", &props.class)}
        >
            { for props.children.iter() }
        </span>
    }
}
