use yew::prelude::*;

use crate::components::foundations::{BasicProps, merge_classes, render_container, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;

/// Scroll wrapper plus `<table>`; `class` lands on the table.
#[function_component(Table)]
pub fn table(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <div class="relative w-full overflow-auto">
            <table
                ref={props.node_ref.clone()}
                class={merge_classes("w-full caption-bottom text-sm", &props.class)}
            >
                { for props.children.iter() }
            </table>
        </div>
    }
}

#[function_component(TableHeader)]
pub fn table_header(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("thead", "[&_tr]:border-b", props)
}

#[function_component(TableBody)]
pub fn table_body(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("tbody", "[&_tr:last-child]:border-0", props)
}

#[function_component(TableFooter)]
pub fn table_footer(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container(
        "tfoot",
        "border-t bg-neutral-50 font-medium [&>tr]:last:border-b-0",
        props,
    )
}

#[derive(Properties, PartialEq)]
pub struct TableRowProps {
    /// `"selected"` highlights the row.
    #[prop_or_default]
    pub data_state: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TableRow)]
pub fn table_row(props: &TableRowProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <tr
            ref={props.node_ref.clone()}
            data-state={props.data_state.clone()}
            class={merge_classes(
                "border-b border-neutral-200 transition-colors hover:bg-neutral-50 data-[state=selected]:bg-neutral-100",
                &props.class,
            )}
        >
            { for props.children.iter() }
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct TableCellProps {
    #[prop_or_default]
    pub colspan: Option<AttrValue>,
    #[prop_or_default]
    pub aria_sort: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TableHead)]
pub fn table_head(props: &TableCellProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <th
            ref={props.node_ref.clone()}
            colspan={props.colspan.clone()}
            aria-sort={props.aria_sort.clone()}
            class={merge_classes(
                "h-10 px-2 text-left align-middle font-medium text-neutral-500 [&:has([role=checkbox])]:pr-0",
                &props.class,
            )}
        >
            { for props.children.iter() }
        </th>
    }
}

#[function_component(TableCell)]
pub fn table_cell(props: &TableCellProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    html! {
        <td
            ref={props.node_ref.clone()}
            colspan={props.colspan.clone()}
            class={merge_classes("p-2 align-middle [&:has([role=checkbox])]:pr-0", &props.class)}
        >
            { for props.children.iter() }
        </td>
    }
}

#[function_component(TableCaption)]
pub fn table_caption(props: &BasicProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    render_container("caption", "mt-4 text-sm text-neutral-500", props)
}
