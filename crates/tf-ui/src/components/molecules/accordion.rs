use std::rc::Rc;

use yew::prelude::*;

use crate::components::atoms::icons::IconChevronDown;
use crate::components::foundations::{
    merge_classes, require_context, use_element_id, use_extra_attrs,
};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{AccordionMode, AccordionState, OpenState};

#[derive(Clone, PartialEq)]
struct AccordionContext {
    state: AccordionState,
    on_toggle: Callback<String>,
}

#[derive(Clone, PartialEq)]
struct ItemContext {
    value: AttrValue,
    open: OpenState,
    disabled: bool,
    trigger_id: Rc<String>,
    content_id: Rc<String>,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    #[prop_or_default]
    pub mode: AccordionMode,
    /// Controlled open item values.
    #[prop_or_default]
    pub value: Option<Vec<String>>,
    #[prop_or_default]
    pub default_value: Vec<String>,
    #[prop_or_default]
    pub on_value_change: Callback<Vec<String>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| AccordionState::new(props.mode, props.default_value.clone()));
    let state = props.value.as_ref().map_or_else(
        || (*local).clone(),
        |value| AccordionState::new(props.mode, value.clone()),
    );

    let on_toggle = {
        let local = local.clone();
        let on_value_change = props.on_value_change.clone();
        let current = state.clone();
        Callback::from(move |value: String| {
            let mut next = current.clone();
            if next.toggle(&value) {
                on_value_change.emit(next.open_values().map(str::to_string).collect());
                local.set(next);
            }
        })
    };

    html! {
        <ContextProvider<AccordionContext> context={AccordionContext { state, on_toggle }}>
            <div ref={props.node_ref.clone()} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        </ContextProvider<AccordionContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let trigger_id = use_element_id("accordion-trigger");
    let content_id = use_element_id("accordion-content");
    let Ok(ctx) = require_context(use_context::<AccordionContext>(), "AccordionItem") else {
        return Html::default();
    };
    let open = OpenState::from_bool(ctx.state.is_open(&props.value));
    let item = ItemContext {
        value: props.value.clone(),
        open,
        disabled: props.disabled,
        trigger_id,
        content_id,
    };

    html! {
        <ContextProvider<ItemContext> context={item}>
            <div
                ref={props.node_ref.clone()}
                data-state={open.data_state()}
                class={merge_classes("squircle rounded-lg border-neutral-200", &props.class)}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<ItemContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionPartProps {
    #[prop_or_default]
    pub class: Classes,
    /// Written onto the trigger button or the content region.
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionTrigger)]
pub fn accordion_trigger(props: &AccordionPartProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let root = require_context(use_context::<AccordionContext>(), "AccordionTrigger");
    let item = require_context(use_context::<ItemContext>(), "AccordionTrigger");
    let (Ok(root), Ok(item)) = (root, item) else {
        return Html::default();
    };
    let onclick = {
        let on_toggle = root.on_toggle.clone();
        let value = item.value.to_string();
        Callback::from(move |_: MouseEvent| on_toggle.emit(value.clone()))
    };

    html! {
        <h3 class="flex">
            <button
                ref={props.node_ref.clone()}
                r#type="button"
                id={(*item.trigger_id).clone()}
                aria-controls={(*item.content_id).clone()}
                aria-expanded={item.open.is_open().to_string()}
                data-state={item.open.data_state()}
                disabled={item.disabled}
                class={merge_classes(
                    "flex flex-1 items-center justify-between h-11 px-4 pt-3 pb-3 font-medium text-sm transition-all text-neutral-950 font-inter [&[data-state=open]>svg]:rotate-180",
                    &props.class,
                )}
                {onclick}
            >
                { for props.children.iter() }
                <IconChevronDown class="size-5 text-neutral-950 shrink-0 transition-transform duration-200" />
            </button>
        </h3>
    }
}

#[function_component(AccordionContent)]
pub fn accordion_content(props: &AccordionPartProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let Ok(item) = require_context(use_context::<ItemContext>(), "AccordionContent") else {
        return Html::default();
    };
    html! {
        <div
            ref={props.node_ref.clone()}
            role="region"
            id={(*item.content_id).clone()}
            aria-labelledby={(*item.trigger_id).clone()}
            data-state={item.open.data_state()}
            hidden={!item.open.is_open()}
            class="rounded-lg font-normal overflow-hidden text-sm font-inter transition-all data-[state=closed]:animate-accordion-up data-[state=open]:animate-accordion-down"
        >
            <div class={merge_classes("px-4 pb-3 pt-1", &props.class)}>
                <div class="w-292 text-neutral-500 font-normal">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
