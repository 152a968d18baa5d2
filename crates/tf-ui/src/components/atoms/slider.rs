use yew::prelude::*;

use crate::components::atoms::icons::IconMenu;
use crate::components::foundations::{merge_classes, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::resolve_controlled;
use crate::core::range::{RangeKey, RangeModel};

const THUMB: &str = "absolute top-1/2 -translate-x-1/2 -translate-y-1/2 h-6 w-6 rounded-full border border-neutral-200 bg-background ring-offset-background transition-colors flex items-center justify-center focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-800-16";

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    #[prop_or(0.0)]
    pub min: f64,
    #[prop_or(100.0)]
    pub max: f64,
    #[prop_or(1.0)]
    pub step: f64,
    /// Controlled value.
    #[prop_or_default]
    pub value: Option<f64>,
    #[prop_or_default]
    pub default_value: f64,
    #[prop_or_default]
    pub on_value_change: Callback<f64>,
    /// Fires once when a drag or key press settles.
    #[prop_or_default]
    pub on_value_commit: Callback<f64>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

fn track_fraction(track: &NodeRef, client_x: i32) -> Option<f64> {
    let element = track.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    Some((f64::from(client_x) - rect.left()) / rect.width())
}

/// Single-thumb slider with pointer dragging and keyboard stepping.
#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let model = RangeModel::new(props.min, props.max, props.step);
    let local = use_state_eq(|| model.normalize(props.default_value));
    let dragging = use_state_eq(|| false);
    let track = use_node_ref();
    let value = model.normalize(resolve_controlled(props.value.as_ref(), &*local));
    let percent = model.percent(value);

    let commit = {
        let local = local.clone();
        let on_value_change = props.on_value_change.clone();
        Callback::from(move |next: f64| {
            if (next - value).abs() > f64::EPSILON {
                local.set(next);
                on_value_change.emit(next);
            }
        })
    };

    let onkeydown = {
        let commit = commit.clone();
        let on_value_commit = props.on_value_commit.clone();
        let disabled = props.disabled;
        Callback::from(move |event: KeyboardEvent| {
            if disabled {
                return;
            }
            if let Some(key) = RangeKey::from_key(&event.key()) {
                event.prevent_default();
                let next = model.step_key(value, key);
                commit.emit(next);
                on_value_commit.emit(next);
            }
        })
    };

    let onpointerdown = {
        let commit = commit.clone();
        let dragging = dragging.clone();
        let track = track.clone();
        let disabled = props.disabled;
        Callback::from(move |event: PointerEvent| {
            if disabled {
                return;
            }
            if let Some(target) = event.target_dyn_into::<web_sys::Element>() {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            dragging.set(true);
            if let Some(fraction) = track_fraction(&track, event.client_x()) {
                commit.emit(model.value_at(fraction));
            }
        })
    };

    let onpointermove = {
        let commit = commit.clone();
        let track = track.clone();
        let is_dragging = *dragging;
        Callback::from(move |event: PointerEvent| {
            if !is_dragging {
                return;
            }
            if let Some(fraction) = track_fraction(&track, event.client_x()) {
                commit.emit(model.value_at(fraction));
            }
        })
    };

    let onpointerup = {
        let dragging = dragging.clone();
        let on_value_commit = props.on_value_commit.clone();
        Callback::from(move |event: PointerEvent| {
            if let Some(target) = event.target_dyn_into::<web_sys::Element>() {
                let _ = target.release_pointer_capture(event.pointer_id());
            }
            if *dragging {
                dragging.set(false);
                on_value_commit.emit(value);
            }
        })
    };

    html! {
        <span
            ref={props.node_ref.clone()}
            class={merge_classes("relative flex w-full touch-none select-none items-center", &props.class)}
            data-disabled={props.disabled.then_some("")}
            aria-disabled={props.disabled.then_some("true")}
            {onpointerdown}
            {onpointermove}
            {onpointerup}
        >
            <span ref={track} class="relative h-2 w-full grow overflow-hidden rounded-full bg-neutral-100">
                <span class="absolute h-full bg-blue-800" style={format!("left: 0%; right: {}%", 100.0 - percent)} />
            </span>
            <span
                role="slider"
                tabindex={if props.disabled { "-1" } else { "0" }}
                aria-label={props.aria_label.clone()}
                aria-valuemin={model.min.to_string()}
                aria-valuemax={model.max.to_string()}
                aria-valuenow={value.to_string()}
                aria-orientation="horizontal"
                class={THUMB}
                style={format!("left: {percent}%")}
                {onkeydown}
            >
                <IconMenu class="w-3 text-neutral-200 transform rotate-90" />
            </span>
        </span>
    }
}
