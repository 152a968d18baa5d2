use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo::console;
use yew::prelude::*;

use crate::core::attrs::ExtraAttrs;
use crate::core::classes::cn;
use crate::core::error::UiError;

/// Merge fixed base utilities with consumer classes; the consumer wins on
/// conflicting utilities.
#[must_use]
pub fn merge_classes(base: &str, extra: &Classes) -> Classes {
    if extra.is_empty() {
        Classes::from(base.to_string())
    } else {
        Classes::from(cn([base, extra.to_string().as_str()]))
    }
}

/// Like [`merge_classes`] with an intermediate variant layer.
#[must_use]
pub fn merge_layers(layers: &[&str], extra: &Classes) -> Classes {
    let extra = extra.to_string();
    Classes::from(cn(layers.iter().copied().chain([extra.as_str()])))
}

/// Common props for stateless containers rendering one element.
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    /// Consumer classes merged over the base utilities.
    #[prop_or_default]
    pub class: Classes,
    /// Extra attributes written onto the root element.
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    /// Bound to the root element.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Keep the element behind `node_ref` in sync with `attrs`.
///
/// Attributes written on a previous render but absent now are removed.
#[hook]
pub fn use_extra_attrs(node_ref: &NodeRef, attrs: &ExtraAttrs) {
    let applied = use_mut_ref(ExtraAttrs::default);
    use_effect_with_deps(
        move |(node_ref, attrs): &(NodeRef, ExtraAttrs)| {
            if let Some(element) = node_ref.cast::<web_sys::Element>() {
                let diff = applied.borrow().diff(attrs);
                for name in &diff.remove {
                    if let Err(err) = element.remove_attribute(name) {
                        console::error!("extra attribute remove failed", name.as_str(), err);
                    }
                }
                for (name, value) in &diff.set {
                    if let Err(err) = element.set_attribute(name, value) {
                        console::error!("extra attribute set failed", name.as_str(), err);
                    }
                }
                *applied.borrow_mut() = attrs.clone();
            }
            || ()
        },
        (node_ref.clone(), attrs.clone()),
    );
}

/// Render `tag` with merged classes and the forwarded ref. Callers run
/// [`use_extra_attrs`] themselves.
#[must_use]
pub fn render_container(tag: &'static str, base: &'static str, props: &BasicProps) -> Html {
    html! {
        <@{tag} ref={props.node_ref.clone()} class={merge_classes(base, &props.class)}>
            { for props.children.iter() }
        </@>
    }
}

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(0);

/// Stable per-instance element id such as `tf-tooltip-3`, for ARIA wiring.
#[hook]
pub fn use_element_id(prefix: &'static str) -> Rc<String> {
    use_memo(
        |prefix: &&'static str| {
            let id = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
            format!("tf-{prefix}-{id}")
        },
        prefix,
    )
}

/// Turn a missing context into [`UiError::OutsideProvider`], logging it to
/// the browser console.
///
/// # Errors
///
/// Returns the error when `ctx` is `None`.
pub fn require_context<T>(ctx: Option<T>, component: &'static str) -> Result<T, UiError> {
    ctx.ok_or_else(|| {
        let err = UiError::OutsideProvider { component };
        console::error!(err.to_string());
        err
    })
}
