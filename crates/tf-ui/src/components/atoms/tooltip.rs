use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::foundations::{merge_classes, use_element_id, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{OpenState, is_dismiss_key};

const CONTENT_BASE: &str = "absolute bottom-full left-1/2 z-50 mb-2 -translate-x-1/2 overflow-hidden whitespace-nowrap rounded-md bg-neutral-950 px-3 py-1.5 text-xs text-white font-inter shadow-md";

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    /// Text shown in the bubble.
    pub content: AttrValue,
    /// Hover or focus time before opening.
    #[prop_or(700)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// The trigger.
    #[prop_or_default]
    pub children: Children,
}

/// Opens after a delay on hover or focus; closes on leave, blur or Escape.
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let open = use_state_eq(|| OpenState::Closed);
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let id = use_element_id("tooltip");

    let schedule_open = {
        let open = open.clone();
        let pending = pending.clone();
        let delay = props.delay_ms;
        Callback::from(move |()| {
            let open = open.clone();
            *pending.borrow_mut() = Some(Timeout::new(delay, move || open.set(OpenState::Open)));
        })
    };
    let close = {
        let open = open.clone();
        let pending = pending.clone();
        Callback::from(move |()| {
            pending.borrow_mut().take();
            open.set(OpenState::Closed);
        })
    };

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| move || drop(pending.borrow_mut().take()),
            (),
        );
    }

    let onmouseenter = schedule_open.reform(|_: MouseEvent| ());
    let onfocusin = schedule_open.reform(|_: FocusEvent| ());
    let onmouseleave = close.reform(|_: MouseEvent| ());
    let onfocusout = close.reform(|_: FocusEvent| ());
    let onkeydown = {
        let close = close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_dismiss_key(&event.key()) {
                close.emit(());
            }
        })
    };

    let is_open = open.is_open();
    html! {
        <span
            ref={props.node_ref.clone()}
            class="relative inline-flex"
            data-state={open.data_state()}
            aria-describedby={is_open.then(|| AttrValue::from((*id).clone()))}
            {onmouseenter}
            {onmouseleave}
            {onfocusin}
            {onfocusout}
            {onkeydown}
        >
            { for props.children.iter() }
            if is_open {
                <span id={(*id).clone()} role="tooltip" class={merge_classes(CONTENT_BASE, &props.class)}>
                    {props.content.clone()}
                </span>
            }
        </span>
    }
}
