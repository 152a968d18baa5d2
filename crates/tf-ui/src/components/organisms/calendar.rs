//! Single-date calendar over [`crate::core::calendar::month_grid`].

use chrono::{Local, NaiveDate, Weekday};
use yew::prelude::*;

use crate::components::atoms::icons::{IconChevronLeft, IconChevronRight};
use crate::components::foundations::{merge_classes, use_extra_attrs};
use crate::core::attrs::ExtraAttrs;
use crate::core::calendar::{
    CalendarDay, caption, day_key, day_label, first_of_month, month_grid, shift_month,
    weekday_labels,
};
use crate::core::classes::cn;
use crate::core::primitives::resolve_controlled;
use crate::core::variants::{ButtonSize, ButtonVariant, button_classes};

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// Controlled selection.
    #[prop_or_default]
    pub selected: Option<Option<NaiveDate>>,
    #[prop_or_default]
    pub default_selected: Option<NaiveDate>,
    #[prop_or_default]
    pub on_select: Callback<NaiveDate>,
    /// Month shown first; defaults to the selection, then today.
    #[prop_or_default]
    pub default_month: Option<NaiveDate>,
    /// Overrides the local date used for the today marker.
    #[prop_or_default]
    pub today: Option<NaiveDate>,
    #[prop_or(true)]
    pub show_outside_days: bool,
    #[prop_or(Weekday::Sun)]
    pub week_start: Weekday,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: ExtraAttrs,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    use_extra_attrs(&props.node_ref, &props.attrs);
    let today = props.today.unwrap_or_else(|| Local::now().date_naive());
    let local_selected = use_state_eq(|| props.default_selected);
    let selected = resolve_controlled(props.selected.as_ref(), &*local_selected);
    let month = {
        let start = props.default_month.or(selected).unwrap_or(today);
        use_state_eq(move || first_of_month(start))
    };
    let grid = month_grid(*month, today, selected, props.week_start);

    let nav_class = button_classes(
        ButtonVariant::Outline,
        ButtonSize::Default,
        "h-7 w-7 bg-transparent p-0 opacity-50 hover:opacity-100 absolute",
    );
    let step = |delta: i32| {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(shift_month(*month, delta)))
    };

    let day_cell = |day: CalendarDay| {
        if day.outside && !props.show_outside_days {
            return html! { <td key={day_key(day.date)} class="size-8 p-0" role="presentation" /> };
        }
        let onclick = {
            let local_selected = local_selected.clone();
            let on_select = props.on_select.clone();
            let date = day.date;
            Callback::from(move |_: MouseEvent| {
                local_selected.set(Some(date));
                on_select.emit(date);
            })
        };
        let class = cn([
            button_classes(ButtonVariant::Ghost, ButtonSize::Default, "size-8 p-0 font-normal")
                .as_str(),
            if day.today { "bg-neutral-100 text-neutral-950" } else { "" },
            if day.outside { "text-neutral-400 opacity-50" } else { "" },
            if day.selected {
                "bg-blue-800 text-white hover:bg-blue-800 hover:text-white focus:bg-blue-800"
            } else {
                ""
            },
        ]);
        html! {
            <td key={day_key(day.date)} class="size-8 text-center text-sm p-0 relative focus-within:z-20" role="gridcell">
                <button
                    r#type="button"
                    {class}
                    data-day={day_key(day.date)}
                    aria-label={day_label(day.date)}
                    aria-selected={day.selected.then_some("true")}
                    aria-current={day.today.then_some("date")}
                    {onclick}
                >
                    { day.date.format("%-d").to_string() }
                </button>
            </td>
        }
    };

    html! {
        <div
            ref={props.node_ref.clone()}
            class={merge_classes("border rounded-lg w-[256px] h-[328px] px-4 py-4", &props.class)}
        >
            <div class="space-y-4">
                <div class="flex justify-center relative items-center w-[224px] h-[32px]">
                    <div class="text-sm font-medium" aria-live="polite" role="presentation">
                        { caption(grid.month) }
                    </div>
                    <div class="space-x-1 flex items-center">
                        <button
                            r#type="button"
                            class={cn([nav_class.as_str(), "left-1"])}
                            aria-label="Go to previous month"
                            onclick={step(-1)}
                        >
                            <IconChevronLeft class="h-4 w-4" />
                        </button>
                        <button
                            r#type="button"
                            class={cn([nav_class.as_str(), "right-1"])}
                            aria-label="Go to next month"
                            onclick={step(1)}
                        >
                            <IconChevronRight class="h-4 w-4" />
                        </button>
                    </div>
                </div>
                <table class="w-[224px]" role="grid" aria-label={caption(grid.month)}>
                    <thead>
                        <tr class="flex border-b w-[224px] h-5">
                            { for weekday_labels(props.week_start).into_iter().map(|label| html! {
                                <th scope="col" class="text-neutral-500 rounded-md w-9 h-5 font-normal text-xs">
                                    { label }
                                </th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for grid.weeks.into_iter().map(|week| html! {
                            <tr class="flex w-full mt-1">
                                { for week.into_iter().map(&day_cell) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
