//! Dropdown menu: trigger, content and the menu item family.
//!
//! Escape closes the menu and returns focus to the trigger, arrow keys rove
//! focus across enabled items, and a pointer press outside closes it.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::atoms::button::Button;
use crate::components::atoms::icons::{IconCheck, IconCircle};
use crate::components::foundations::{
    BasicProps, merge_classes, merge_layers, render_container, require_context, use_element_id,
    use_extra_attrs,
};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::{MenuNav, OpenState, is_dismiss_key, resolve_controlled, rove_focus};
use crate::core::variants::{ButtonSize, ButtonVariant};

const ITEM_SELECTOR: &str = "[role=menuitem],[role=menuitemcheckbox],[role=menuitemradio]";

#[derive(Clone, PartialEq)]
struct MenuContext {
    open: OpenState,
    set_open: Callback<bool>,
    trigger_id: Rc<String>,
    content_id: Rc<String>,
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuProps {
    #[prop_or_default]
    pub open: Option<bool>,
    #[prop_or_default]
    pub default_open: bool,
    #[prop_or_default]
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    /// Bound to the root; outside presses are measured against it.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DropdownMenu)]
pub fn dropdown_menu(props: &DropdownMenuProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let local = use_state_eq(|| props.default_open);
    let open = OpenState::from_bool(resolve_controlled(props.open.as_ref(), &*local));
    let root_ref = props.node_ref.clone();
    let trigger_id = use_element_id("menu-trigger");
    let content_id = use_element_id("menu-content");

    let set_open = {
        let local = local.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |next: bool| {
            local.set(next);
            on_open_change.emit(next);
        })
    };

    {
        let root_ref = root_ref.clone();
        let set_open = set_open.clone();
        use_effect_with_deps(
            move |open: &OpenState| {
                let listener = open.is_open().then(|| {
                    EventListener::new(&document(), "pointerdown", move |event| {
                        let inside = event
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                            .zip(root_ref.cast::<web_sys::Node>())
                            .is_some_and(|(target, root)| root.contains(Some(&target)));
                        if !inside {
                            set_open.emit(false);
                        }
                    })
                });
                move || drop(listener)
            },
            open,
        );
    }

    let ctx = MenuContext {
        open,
        set_open,
        trigger_id,
        content_id,
    };

    html! {
        <ContextProvider<MenuContext> context={ctx}>
            <div ref={root_ref} class={merge_classes("relative inline-block text-left", &props.class)}>
                { for props.children.iter() }
            </div>
        </ContextProvider<MenuContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuTriggerProps {
    #[prop_or(ButtonVariant::Outline)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Merged under the menu's own `data-state`.
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Button that toggles the menu; ArrowDown also opens it.
#[function_component(DropdownMenuTrigger)]
pub fn dropdown_menu_trigger(props: &DropdownMenuTriggerProps) -> Html {
    let Ok(ctx) = require_context(use_context::<MenuContext>(), "DropdownMenuTrigger") else {
        return Html::default();
    };
    let onclick = {
        let set_open = ctx.set_open.clone();
        let open = ctx.open;
        Callback::from(move |_: MouseEvent| set_open.emit(!open.is_open()))
    };
    let onkeydown = {
        let set_open = ctx.set_open.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "ArrowDown" {
                event.prevent_default();
                set_open.emit(true);
            }
        })
    };

    html! {
        <Button
            node_ref={props.node_ref.clone()}
            id={AttrValue::from((*ctx.trigger_id).clone())}
            variant={props.variant}
            size={props.size}
            class={props.class.clone()}
            aria_label={props.aria_label.clone()}
            aria_haspopup="menu"
            aria_expanded={Some(ctx.open.is_open())}
            aria_controls={AttrValue::from((*ctx.content_id).clone())}
            attrs={props.attrs.overlay(&ExtraAttrs::new().with("data-state", ctx.open.data_state()))}
            {onclick}
            {onkeydown}
        >
            { for props.children.iter() }
        </Button>
    }
}

/// Horizontal anchoring of the content against the trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuAlign {
    #[default]
    Start,
    End,
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuContentProps {
    #[prop_or_default]
    pub align: MenuAlign,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

fn menu_items(content: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = content.query_selector_all(ITEM_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

fn move_focus(content: &web_sys::Element, nav: MenuNav) {
    let items = menu_items(content);
    let disabled: Vec<bool> = items
        .iter()
        .map(|item| item.has_attribute("data-disabled"))
        .collect();
    let active = document().active_element();
    let current = active.and_then(|active| {
        items
            .iter()
            .position(|item| AsRef::<web_sys::Element>::as_ref(item) == &active)
    });
    if let Some(target) = rove_focus(&disabled, current, nav).and_then(|idx| items.get(idx)) {
        let _ = target.focus();
    }
}

#[function_component(DropdownMenuContent)]
pub fn dropdown_menu_content(props: &DropdownMenuContentProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = require_context(use_context::<MenuContext>(), "DropdownMenuContent").ok();

    {
        let content_ref = props.node_ref.clone();
        let open = ctx.as_ref().is_some_and(|ctx| ctx.open.is_open());
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    if let Some(content) = content_ref.cast::<web_sys::HtmlElement>() {
                        let _ = content.focus();
                    }
                }
                || ()
            },
            open,
        );
    }

    let Some(ctx) = ctx else {
        return Html::default();
    };
    if !ctx.open.is_open() {
        return Html::default();
    }

    let onkeydown = {
        let content_ref = props.node_ref.clone();
        let set_open = ctx.set_open.clone();
        let trigger_id = ctx.trigger_id.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key = event.key();
            if is_dismiss_key(&key) {
                event.prevent_default();
                set_open.emit(false);
                // Looked up by id so the trigger's ref stays with the caller.
                if let Some(trigger) = document()
                    .get_element_by_id(&trigger_id)
                    .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                {
                    let _ = trigger.focus();
                }
            } else if let Some(nav) = MenuNav::from_key(&key) {
                event.prevent_default();
                if let Some(content) = content_ref.cast::<web_sys::Element>() {
                    move_focus(&content, nav);
                }
            }
        })
    };
    let align = match props.align {
        MenuAlign::Start => "left-0",
        MenuAlign::End => "right-0",
    };

    html! {
        <div
            ref={props.node_ref.clone()}
            id={(*ctx.content_id).clone()}
            role="menu"
            tabindex="-1"
            aria-labelledby={(*ctx.trigger_id).clone()}
            data-state={ctx.open.data_state()}
            class={merge_layers(
                &[
                    "absolute top-full z-50 mt-1 min-w-[8rem] overflow-hidden rounded-lg border-neutral-200 bg-white p-1 text-popover-foreground shadow-md squircle outline-none data-[state=open]:animate-in data-[state=open]:fade-in-0 data-[state=open]:zoom-in-95",
                    align,
                ],
                &props.class,
            )}
            {onkeydown}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Shared activation wiring: click, Enter and Space select the item.
fn select_handlers(
    disabled: bool,
    on_select: Callback<()>,
    set_open: Callback<bool>,
) -> (Callback<MouseEvent>, Callback<KeyboardEvent>) {
    let activate = Callback::from(move |()| {
        if disabled {
            return;
        }
        on_select.emit(());
        set_open.emit(false);
    });
    let onclick = activate.reform(|_: MouseEvent| ());
    let onkeydown = Callback::from(move |event: KeyboardEvent| {
        let key = event.key();
        if key == "Enter" || key == " " {
            event.prevent_default();
            activate.emit(());
        }
    });
    (onclick, onkeydown)
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuItemProps {
    #[prop_or_default]
    pub on_select: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
    /// Indent to line up with checkbox and radio items.
    #[prop_or_default]
    pub inset: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DropdownMenuItem)]
pub fn dropdown_menu_item(props: &DropdownMenuItemProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let Ok(ctx) = require_context(use_context::<MenuContext>(), "DropdownMenuItem") else {
        return Html::default();
    };
    let (onclick, onkeydown) =
        select_handlers(props.disabled, props.on_select.clone(), ctx.set_open.clone());
    html! {
        <div
            ref={props.node_ref.clone()}
            role="menuitem"
            tabindex="-1"
            aria-disabled={props.disabled.then_some("true")}
            data-disabled={props.disabled.then_some("")}
            class={merge_layers(
                &[
                    "relative flex h-9 cursor-default select-none items-center rounded-sm px-3 py-1.5 text-sm text-neutral-950 font-inter outline-none transition-colors focus:bg-neutral-50 data-[disabled]:pointer-events-none data-[disabled]:text-neutral-400",
                    if props.inset { "pl-8" } else { "" },
                ],
                &props.class,
            )}
            {onclick}
            {onkeydown}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuCheckboxItemProps {
    pub checked: bool,
    #[prop_or_default]
    pub on_checked_change: Callback<bool>,
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

#[function_component(DropdownMenuCheckboxItem)]
pub fn dropdown_menu_checkbox_item(props: &DropdownMenuCheckboxItemProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let Ok(ctx) = require_context(use_context::<MenuContext>(), "DropdownMenuCheckboxItem") else {
        return Html::default();
    };
    let on_select = {
        let on_checked_change = props.on_checked_change.clone();
        let checked = props.checked;
        Callback::from(move |()| on_checked_change.emit(!checked))
    };
    let (onclick, onkeydown) = select_handlers(props.disabled, on_select, ctx.set_open.clone());
    html! {
        <div
            ref={props.node_ref.clone()}
            role="menuitemcheckbox"
            tabindex="-1"
            aria-checked={props.checked.to_string()}
            data-state={if props.checked { "checked" } else { "unchecked" }}
            data-disabled={props.disabled.then_some("")}
            class={merge_classes(
                "relative flex h-9 cursor-pointer select-none items-center rounded-sm py-1.5 pl-8 pr-2 text-sm text-neutral-950 outline-none transition-colors focus:bg-neutral-50 data-[disabled]:pointer-events-none data-[disabled]:opacity-50",
                &props.class,
            )}
            {onclick}
            {onkeydown}
        >
            <span class="absolute left-2 flex h-3.5 w-3.5 items-center justify-center">
                if props.checked {
                    <IconCheck class="size-4" />
                }
            </span>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct RadioGroupContext {
    value: Option<AttrValue>,
    on_value_change: Callback<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuRadioGroupProps {
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub on_value_change: Callback<AttrValue>,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DropdownMenuRadioGroup)]
pub fn dropdown_menu_radio_group(props: &DropdownMenuRadioGroupProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let ctx = RadioGroupContext {
        value: props.value.clone(),
        on_value_change: props.on_value_change.clone(),
    };
    html! {
        <ContextProvider<RadioGroupContext> context={ctx}>
            <div ref={props.node_ref.clone()} role="group">
                { for props.children.iter() }
            </div>
        </ContextProvider<RadioGroupContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuRadioItemProps {
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

#[function_component(DropdownMenuRadioItem)]
pub fn dropdown_menu_radio_item(props: &DropdownMenuRadioItemProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let menu = require_context(use_context::<MenuContext>(), "DropdownMenuRadioItem");
    let group = require_context(use_context::<RadioGroupContext>(), "DropdownMenuRadioItem");
    let (Ok(menu), Ok(group)) = (menu, group) else {
        return Html::default();
    };
    let checked = group.value.as_ref() == Some(&props.value);
    let on_select = {
        let on_value_change = group.on_value_change.clone();
        let value = props.value.clone();
        Callback::from(move |()| on_value_change.emit(value.clone()))
    };
    let (onclick, onkeydown) = select_handlers(props.disabled, on_select, menu.set_open.clone());
    html! {
        <div
            ref={props.node_ref.clone()}
            role="menuitemradio"
            tabindex="-1"
            aria-checked={checked.to_string()}
            data-state={if checked { "checked" } else { "unchecked" }}
            data-disabled={props.disabled.then_some("")}
            class={merge_classes(
                "relative flex h-9 cursor-default select-none items-center rounded-sm py-1.5 pl-8 pr-2 text-sm outline-none transition-colors focus:bg-neutral-50 focus:text-accent-foreground data-[disabled]:pointer-events-none data-[disabled]:opacity-50",
                &props.class,
            )}
            {onclick}
            {onkeydown}
        >
            <span class="absolute left-2 flex h-3.5 w-3.5 items-center justify-center">
                if checked {
                    <IconCircle class="h-2 w-2" />
                }
            </span>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(DropdownMenuLabel)]
pub fn dropdown_menu_label(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "div",
        "flex items-center px-3 py-1.5 text-sm font-medium font-inter text-neutral-950",
        props,
    )
}

#[function_component(DropdownMenuSeparator)]
pub fn dropdown_menu_separator(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <div
            ref={props.node_ref.clone()}
            role="separator"
            aria-orientation="horizontal"
            class={merge_classes("-mx-1 my-1 h-px bg-neutral-200", &props.class)}
        />
    }
}

#[function_component(DropdownMenuShortcut)]
pub fn dropdown_menu_shortcut(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "span",
        "ml-auto text-sm font-inter tracking-widest text-neutral-500",
        props,
    )
}

#[function_component(DropdownMenuGroup)]
pub fn dropdown_menu_group(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <div ref={props.node_ref.clone()} role="group" class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}
