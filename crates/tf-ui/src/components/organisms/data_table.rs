//! Payments data table: email filter, column picker, sortable email header,
//! page selection, per-row actions and previous/next paging.
//!
//! All derivation happens in [`crate::core::table`]; this component keeps a
//! [`TableState`] and feeds [`TableAction`]s through [`DataTable::apply`].

use std::rc::Rc;

use yew::prelude::*;

use crate::components::atoms::button::Button;
use crate::components::atoms::checkbox::Checkbox;
use crate::components::atoms::icons::{IconChevronDown, IconDots, IconSelector};
use crate::components::atoms::input::Input;
use crate::components::foundations::{merge_classes, use_extra_attrs};
use crate::components::molecules::dropdown::{
    DropdownMenu, DropdownMenuCheckboxItem, DropdownMenuContent, DropdownMenuItem,
    DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, MenuAlign,
};
use crate::components::molecules::table::{
    Table, TableBody, TableCell, TableHead, TableHeader, TableRow,
};
use crate::core::attrs::ExtraAttrs;
use crate::core::primitives::CheckedState;
use crate::core::table::payments::{EMAIL_COLUMN, Payment, RowAction, demo_payments, payment_columns};
use crate::core::table::{
    Align, CellKind, ColumnDef, DEFAULT_PAGE_SIZE, DataTable, HeaderKind, NextPagePolicy,
    TableAction, TableRecord, TableState,
};
use crate::core::variants::{ButtonSize, ButtonVariant};

#[derive(Properties, PartialEq)]
pub struct PaymentsTableProps {
    #[prop_or_else(|| Rc::new(demo_payments()))]
    pub rows: Rc<Vec<Payment>>,
    #[prop_or(DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[prop_or_default]
    pub next_page_policy: NextPagePolicy,
    /// Fires with the chosen action and the row id.
    #[prop_or_default]
    pub on_row_action: Callback<(RowAction, String)>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(PaymentsTable)]
pub fn payments_table(props: &PaymentsTableProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let columns = use_memo(|_| payment_columns(), ());
    let state = {
        let page_size = props.page_size;
        use_state_eq(move || TableState::with_page_size(page_size))
    };

    let dispatch = {
        let state = state.clone();
        let columns = columns.clone();
        let rows = props.rows.clone();
        let policy = props.next_page_policy;
        Callback::from(move |action: TableAction| {
            let table = DataTable::new(&columns, &rows).with_policy(policy);
            let mut next = (*state).clone();
            if table.apply(&mut next, action) {
                state.set(next);
            }
        })
    };

    let table = DataTable::new(&columns, &props.rows).with_policy(props.next_page_policy);
    let model = table.row_model(&state);
    let visible = table.visible_columns(&state);
    let page_selection = table.page_selection_state(&state);

    let filter = html! {
        <Input
            placeholder="Filter emails"
            aria_label="Filter emails"
            value={state.filter_value(EMAIL_COLUMN).to_string()}
            oninput={dispatch.reform(|value: String| TableAction::SetFilter {
                column: EMAIL_COLUMN.to_string(),
                value,
            })}
            class="w-92 h-9 placeholder:text-neutral-400 border border-neutral-200 font-inter"
        />
    };

    let column_picker = html! {
        <DropdownMenu class="ml-auto">
            <DropdownMenuTrigger class="w-93 font-inter text-neutral-950">
                { "Columns" }
                <IconChevronDown class="size-4 text-neutral-500" />
            </DropdownMenuTrigger>
            <DropdownMenuContent align={MenuAlign::End}>
                { for table.hideable_columns().into_iter().map(|column| {
                    let id = column.id.clone();
                    html! {
                        <DropdownMenuCheckboxItem
                            key={column.id.clone()}
                            class="capitalize"
                            checked={state.is_visible(&column.id)}
                            on_checked_change={dispatch.reform(move |visible: bool| {
                                TableAction::SetColumnVisible { column: id.clone(), visible }
                            })}
                        >
                            { column.id.clone() }
                        </DropdownMenuCheckboxItem>
                    }
                }) }
            </DropdownMenuContent>
        </DropdownMenu>
    };

    let header_row = html! {
        <TableRow class="bg-neutral-50">
            { for visible.iter().map(|column| header_cell(column, &state, page_selection, &dispatch)) }
        </TableRow>
    };

    let body = if model.page_is_empty() {
        html! {
            <TableRow>
                <TableCell colspan={visible.len().to_string()} class="h-24 text-center">
                    { "No results." }
                </TableCell>
            </TableRow>
        }
    } else {
        html! {
            <>{ for model.page_rows().map(|row| {
                let selected = state.is_selected(row.row_id());
                html! {
                    <TableRow
                        key={row.row_id().to_string()}
                        data_state={selected.then_some(AttrValue::Static("selected"))}
                        class="font-inter"
                    >
                        { for visible.iter().map(|column| {
                            body_cell(column, row, selected, &dispatch, &props.on_row_action)
                        }) }
                    </TableRow>
                }
            }) }</>
        }
    };

    html! {
        <div ref={props.node_ref.clone()} class={merge_classes("w-91", &props.class)}>
            <div class="flex items-center py-4">
                {filter}
                {column_picker}
            </div>
            <div class="rounded-lg squircle">
                <Table>
                    <TableHeader>{header_row}</TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
            <div class="flex items-center font-inter h-8 justify-between mt-4">
                <div class="w-94 text-sm text-neutral-400">
                    { table.selection_summary(&state) }
                </div>
                <div class="space-x-2">
                    <Button
                        variant={ButtonVariant::Outline}
                        size={ButtonSize::Sm}
                        class="w-95 text-xs"
                        disabled={!table.can_previous_page(&state)}
                        onclick={dispatch.reform(|_: MouseEvent| TableAction::PreviousPage)}
                    >
                        { "Previous" }
                    </Button>
                    <Button
                        variant={ButtonVariant::Outline}
                        size={ButtonSize::Sm}
                        class="w-43 text-xs text-neutral-950"
                        disabled={!table.can_next_page(&state)}
                        onclick={dispatch.reform(|_: MouseEvent| TableAction::NextPage)}
                    >
                        { "Next" }
                    </Button>
                </div>
            </div>
        </div>
    }
}

fn header_cell(
    column: &ColumnDef<Payment>,
    state: &TableState,
    page_selection: CheckedState,
    dispatch: &Callback<TableAction>,
) -> Html {
    let aria_sort = column
        .can_sort()
        .then(|| {
            state
                .sort_direction(&column.id)
                .map_or("none", |direction| direction.aria_sort())
        })
        .map(AttrValue::Static);
    let content = match &column.header {
        HeaderKind::SelectAll => html! {
            <div class="w-12 h-10 pl-4 py-3">
                <Checkbox
                    checked={Some(page_selection)}
                    aria_label="Select all"
                    on_checked_change={dispatch.reform(|_: CheckedState| TableAction::TogglePageSelection)}
                />
            </div>
        },
        HeaderKind::SortButton(label) => {
            let id = column.id.clone();
            let class = match column.align {
                Align::Start => "w-89 h-10 text-neutral-950 justify-start",
                Align::End => "ml-auto h-10 text-neutral-950 justify-end",
            };
            html! {
                <Button
                    variant={ButtonVariant::Ghost}
                    {class}
                    onclick={dispatch.reform(move |_: MouseEvent| TableAction::ToggleSort { column: id.clone() })}
                >
                    { label.clone() }
                    <IconSelector class="size-4 text-neutral-950" />
                </Button>
            }
        }
        HeaderKind::Label(label) => match column.align {
            Align::End => html! { <div class="pr-4 text-right text-neutral-950">{ label.clone() }</div> },
            Align::Start => html! { <>{ label.clone() }</> },
        },
        HeaderKind::Empty => Html::default(),
    };
    html! {
        <TableHead key={column.id.clone()} class="text-neutral-950 font-inter" {aria_sort}>
            {content}
        </TableHead>
    }
}

fn body_cell(
    column: &ColumnDef<Payment>,
    row: &Payment,
    selected: bool,
    dispatch: &Callback<TableAction>,
    on_row_action: &Callback<(RowAction, String)>,
) -> Html {
    let content = match column.cell {
        CellKind::SelectRow => {
            let row_id = row.id.clone();
            html! {
                <div class="w-12 h-10 pl-4 py-3">
                    <Checkbox
                        checked={Some(CheckedState::from_bool(selected))}
                        aria_label="Select row"
                        on_checked_change={dispatch.reform(move |next: CheckedState| {
                            TableAction::SetRowSelected {
                                row_id: row_id.clone(),
                                selected: next.is_checked(),
                            }
                        })}
                    />
                </div>
            }
        }
        CellKind::Text(_) => {
            let width = if column.id == EMAIL_COLUMN {
                "lowercase w-89 h-10 py-2.5 font-normal font-inter"
            } else {
                "capitalize w-[128px] h-10 py-2.5"
            };
            html! { <div class={width}>{ column.display_text(row).unwrap_or_default() }</div> }
        }
        CellKind::Currency => html! {
            <div class="text-right font-medium py-2.5 font-inter pr-4 w-90 h-10">
                { column.display_text(row).unwrap_or_default() }
            </div>
        },
        CellKind::Actions => row_actions(row, on_row_action),
    };
    html! {
        <TableCell key={column.id.clone()}>{content}</TableCell>
    }
}

fn row_actions(row: &Payment, on_row_action: &Callback<(RowAction, String)>) -> Html {
    html! {
        <DropdownMenu>
            <DropdownMenuTrigger variant={ButtonVariant::Ghost} class="w-12 h-10" aria_label="Open menu">
                <span class="sr-only">{ "Open menu" }</span>
                <IconDots class="size-4" />
            </DropdownMenuTrigger>
            <DropdownMenuContent align={MenuAlign::End}>
                <DropdownMenuLabel>{ "Actions" }</DropdownMenuLabel>
                { for RowAction::ALL.into_iter().map(|action| {
                    let row_id = row.id.clone();
                    let on_select = on_row_action.reform(move |()| (action, row_id.clone()));
                    html! {
                        <>
                            <DropdownMenuItem {on_select}>{ action.label() }</DropdownMenuItem>
                            if action == RowAction::CopyId {
                                <DropdownMenuSeparator />
                            }
                        </>
                    }
                }) }
            </DropdownMenuContent>
        </DropdownMenu>
    }
}
