//! Carousel organism over [`ScrollEngine`].
//!
//! `Carousel` owns the engine and publishes a [`CarouselContext`]; the
//! content, item and navigation components read it through
//! [`use_carousel`]. Control flags are refreshed from the engine's `Select`
//! and `ReInit` events, so buttons disable themselves at the edges.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::atoms::button::Button;
use crate::components::atoms::icons::{IconArrowLeft, IconArrowRight};
use crate::components::foundations::{
    merge_classes, merge_layers, require_context, use_extra_attrs,
};
use crate::core::attrs::ExtraAttrs;
use crate::core::carousel::{
    CarouselEvent, CarouselOptions, EngineSnapshot, ListenerId, Orientation, ScrollEngine,
    ScrollIntent, key_intent, swipe_intent,
};
use crate::core::classes::cn;
use crate::core::error::UiError;
use crate::core::variants::{ButtonSize, ButtonVariant};

/// Shared handle to a mounted carousel's engine.
///
/// Calls made while the engine is dispatching an event (from inside an
/// [`CarouselApi::on`] listener) are dropped and logged.
#[derive(Clone, Debug)]
pub struct CarouselApi(Rc<RefCell<ScrollEngine>>);

impl PartialEq for CarouselApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl CarouselApi {
    fn with_engine<T>(&self, f: impl FnOnce(&mut ScrollEngine) -> T) -> Option<T> {
        match self.0.try_borrow_mut() {
            Ok(mut engine) => Some(f(&mut engine)),
            Err(err) => {
                console::error!("carousel engine is busy", err.to_string());
                None
            }
        }
    }

    /// Current engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        self.0
            .try_borrow()
            .map(|engine| engine.snapshot())
            .unwrap_or_default()
    }

    /// Move one snap back. Returns whether the selection changed.
    pub fn scroll_prev(&self) -> bool {
        self.with_engine(ScrollEngine::scroll_prev).unwrap_or(false)
    }

    /// Move one snap forward. Returns whether the selection changed.
    pub fn scroll_next(&self) -> bool {
        self.with_engine(ScrollEngine::scroll_next).unwrap_or(false)
    }

    /// Jump to a snap, clamped to the valid range.
    pub fn scroll_to(&self, index: usize) -> bool {
        self.with_engine(|engine| engine.scroll_to(index))
            .unwrap_or(false)
    }

    /// Apply a keyboard or swipe intent.
    pub fn scroll(&self, intent: ScrollIntent) -> bool {
        self.with_engine(|engine| engine.scroll(intent))
            .unwrap_or(false)
    }

    /// Subscribe to engine events. Keep the id to unsubscribe with
    /// [`CarouselApi::off`].
    pub fn on(
        &self,
        event: CarouselEvent,
        listener: impl FnMut(&EngineSnapshot) + 'static,
    ) -> Option<ListenerId> {
        self.with_engine(|engine| engine.on(event, listener))
    }

    /// Subscribe to `Select` and `ReInit` and receive the current state
    /// immediately.
    pub fn watch(
        &self,
        listener: impl FnMut(&EngineSnapshot) + Clone + 'static,
    ) -> Option<[ListenerId; 2]> {
        self.with_engine(|engine| engine.watch(listener))
    }

    /// Drop a subscription. Returns whether it existed.
    pub fn off(&self, id: ListenerId) -> bool {
        self.with_engine(|engine| engine.off(id)).unwrap_or(false)
    }

    fn reinit(&self, slide_count: usize, slides_in_view: usize) {
        self.with_engine(|engine| engine.reinit(slide_count, slides_in_view));
    }

    fn offset_percent(&self) -> f64 {
        self.0
            .try_borrow()
            .map(|engine| engine.offset_percent())
            .unwrap_or_default()
    }
}

/// What carousel parts share.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselContext {
    pub api: CarouselApi,
    pub orientation: Orientation,
    pub snapshot: EngineSnapshot,
    pub scroll_prev: Callback<()>,
    pub scroll_next: Callback<()>,
}

impl CarouselContext {
    #[must_use]
    pub const fn can_scroll_prev(&self) -> bool {
        self.snapshot.can_scroll_prev
    }

    #[must_use]
    pub const fn can_scroll_next(&self) -> bool {
        self.snapshot.can_scroll_next
    }
}

/// Read the enclosing carousel's context.
///
/// # Errors
///
/// [`UiError::OutsideProvider`] when rendered outside a [`Carousel`].
#[hook]
pub fn use_carousel(component: &'static str) -> Result<CarouselContext, UiError> {
    require_context(use_context::<CarouselContext>(), component)
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Read once on mount.
    #[prop_or_default]
    pub options: CarouselOptions,
    #[prop_or_default]
    pub orientation: Orientation,
    /// Receives the engine handle after mount.
    #[prop_or_default]
    pub on_api: Callback<CarouselApi>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let engine = {
        let options = props.options.clone();
        use_mut_ref(move || ScrollEngine::new(options, 0))
    };
    let api = CarouselApi(engine);
    let snapshot = use_state_eq(|| api.snapshot());
    let swipe_start = use_mut_ref(|| None::<f64>);

    {
        let api = api.clone();
        let on_api = props.on_api.clone();
        let setter = snapshot.setter();
        use_effect_with_deps(
            move |_| {
                // Content effects run first and may already have re-initialised
                // the engine; `watch` replays that state into the controls.
                let ids = api.watch(move |snapshot| setter.set(*snapshot));
                on_api.emit(api.clone());
                move || {
                    for id in ids.into_iter().flatten() {
                        api.off(id);
                    }
                }
            },
            (),
        );
    }

    {
        let api = api.clone();
        use_effect_with_deps(
            move |autoplay_ms: &Option<u32>| {
                let interval = autoplay_ms.map(|ms| {
                    Interval::new(ms, move || {
                        api.with_engine(ScrollEngine::autoplay_tick);
                    })
                });
                move || drop(interval)
            },
            props.options.autoplay_ms,
        );
    }

    let scroll_prev = {
        let api = api.clone();
        Callback::from(move |()| {
            api.scroll_prev();
        })
    };
    let scroll_next = {
        let api = api.clone();
        Callback::from(move |()| {
            api.scroll_next();
        })
    };
    let onkeydown = {
        let api = api.clone();
        Callback::from(move |event: KeyboardEvent| {
            if let Some(intent) = key_intent(&event.key()) {
                event.prevent_default();
                api.scroll(intent);
            }
        })
    };

    let orientation = props.orientation;
    let axis = move |event: &PointerEvent| match orientation {
        Orientation::Horizontal => f64::from(event.client_x()),
        Orientation::Vertical => f64::from(event.client_y()),
    };
    let onpointerdown = {
        let swipe_start = swipe_start.clone();
        Callback::from(move |event: PointerEvent| {
            *swipe_start.borrow_mut() = Some(axis(&event));
        })
    };
    let onpointerup = {
        let api = api.clone();
        let threshold = props.options.drag_threshold_px;
        Callback::from(move |event: PointerEvent| {
            let Some(start) = swipe_start.borrow_mut().take() else {
                return;
            };
            if let Some(intent) = swipe_intent(start, axis(&event), threshold) {
                api.scroll(intent);
            }
        })
    };

    let ctx = CarouselContext {
        api,
        orientation,
        snapshot: *snapshot,
        scroll_prev,
        scroll_next,
    };

    html! {
        <ContextProvider<CarouselContext> context={ctx}>
            <div
                ref={props.node_ref.clone()}
                role="region"
                aria-roledescription="carousel"
                data-orientation={orientation.as_str()}
                tabindex="0"
                class={merge_classes("relative focus-visible:outline-none", &props.class)}
                {onkeydown}
                {onpointerdown}
                {onpointerup}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<CarouselContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselContentProps {
    /// Slides visible at once.
    #[prop_or(1)]
    pub slides_in_view: usize,
    /// Merged onto the slide track.
    #[prop_or_default]
    pub class: Classes,
    /// Written onto the viewport.
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    /// Bound to the viewport.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Viewport and slide track. Re-initialises the engine whenever the number
/// of slides changes.
#[function_component(CarouselContent)]
pub fn carousel_content(props: &CarouselContentProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = use_carousel("CarouselContent").ok();
    let slide_count = props.children.len();
    {
        let api = ctx.as_ref().map(|ctx| ctx.api.clone());
        use_effect_with_deps(
            move |(slide_count, slides_in_view): &(usize, usize)| {
                if let Some(api) = api {
                    api.reinit(*slide_count, *slides_in_view);
                }
                || ()
            },
            (slide_count, props.slides_in_view),
        );
    }
    let Some(ctx) = ctx else {
        return Html::default();
    };

    let offset = ctx.api.offset_percent();
    let (track, transform) = match ctx.orientation {
        Orientation::Horizontal => ("-ml-4", format!("translate3d({offset}%, 0, 0)")),
        Orientation::Vertical => ("-mt-4 flex-col", format!("translate3d(0, {offset}%, 0)")),
    };
    #[allow(clippy::cast_precision_loss)]
    let basis = 100.0 / props.slides_in_view.max(1) as f64;

    html! {
        <div ref={props.node_ref.clone()} class="overflow-hidden">
            <div
                class={merge_layers(&["flex transition-transform duration-300", track], &props.class)}
                style={format!("transform: {transform}; --slide-basis: {basis}%")}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselItemProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CarouselItem)]
pub fn carousel_item(props: &CarouselItemProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let Ok(ctx) = use_carousel("CarouselItem") else {
        return Html::default();
    };
    let gutter = match ctx.orientation {
        Orientation::Horizontal => "pl-4",
        Orientation::Vertical => "pt-4",
    };
    html! {
        <div
            ref={props.node_ref.clone()}
            role="group"
            aria-roledescription="slide"
            class={merge_layers(&["min-w-0 shrink-0 grow-0 basis-[var(--slide-basis)]", gutter], &props.class)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselNavProps {
    #[prop_or(ButtonVariant::Outline)]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Icon)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

fn nav_button(ctx: &CarouselContext, props: &CarouselNavProps, intent: ScrollIntent) -> Html {
    let (placement, enabled, callback, label, icon) = match (intent, ctx.orientation) {
        (ScrollIntent::Prev, Orientation::Horizontal) => (
            "-left-12 top-1/2 -translate-y-1/2",
            ctx.can_scroll_prev(),
            ctx.scroll_prev.clone(),
            "Previous slide",
            html! { <IconArrowLeft class="size-4" /> },
        ),
        (ScrollIntent::Prev, Orientation::Vertical) => (
            "-top-12 left-1/2 -translate-x-1/2 rotate-90",
            ctx.can_scroll_prev(),
            ctx.scroll_prev.clone(),
            "Previous slide",
            html! { <IconArrowLeft class="size-4" /> },
        ),
        (ScrollIntent::Next, Orientation::Horizontal) => (
            "-right-12 top-1/2 -translate-y-1/2",
            ctx.can_scroll_next(),
            ctx.scroll_next.clone(),
            "Next slide",
            html! { <IconArrowRight class="size-4" /> },
        ),
        (ScrollIntent::Next, Orientation::Vertical) => (
            "-bottom-12 left-1/2 -translate-x-1/2 rotate-90",
            ctx.can_scroll_next(),
            ctx.scroll_next.clone(),
            "Next slide",
            html! { <IconArrowRight class="size-4" /> },
        ),
    };
    let class = Classes::from(cn([
        "absolute size-8 rounded-full",
        placement,
        props.class.to_string().as_str(),
    ]));

    html! {
        <Button
            variant={props.variant}
            size={props.size}
            {class}
            attrs={props.attrs.clone()}
            node_ref={props.node_ref.clone()}
            disabled={!enabled}
            aria_label={AttrValue::Static(label)}
            onclick={callback.reform(|_: MouseEvent| ())}
        >
            {icon}
            <span class="sr-only">{label}</span>
        </Button>
    }
}

#[function_component(CarouselPrevious)]
pub fn carousel_previous(props: &CarouselNavProps) -> Html {
    let Ok(ctx) = use_carousel("CarouselPrevious") else {
        return Html::default();
    };
    nav_button(&ctx, props, ScrollIntent::Prev)
}

#[function_component(CarouselNext)]
pub fn carousel_next(props: &CarouselNavProps) -> Html {
    let Ok(ctx) = use_carousel("CarouselNext") else {
        return Html::default();
    };
    nav_button(&ctx, props, ScrollIntent::Next)
}
