use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use thaw::*;

use crate::booking::calendar::WEEKDAY_HEADERS;
use crate::booking::{CalendarCell, WizardState};
use crate::components::loading::LoadingView;

/// Month view for the scheduling step. Nothing is drawn until the availability snapshot
/// for this visit to the step has arrived.
#[component]
pub fn BookingCalendar(
    wizard: RwSignal<WizardState>,
    today: NaiveDate,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let grid = Memo::new(move |_| wizard.with(|w| w.calendar(today)));
    let selected = Memo::new(move |_| wizard.with(|w| w.draft.date));

    view! {
        <div class="available-date-picker">
            <div class="date-picker-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| wizard.update(|w| w.show_previous_month())
                >
                    "←"
                </Button>

                <div class="month-label">{move || grid.with(|g| g.label())}</div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| wizard.update(|w| w.show_next_month())
                >
                    "→"
                </Button>
            </div>

            {move || {
                if loading.get() {
                    view! { <LoadingView message="Checking availability..."/> }.into_any()
                } else {
                    view! {
                        <div class="date-picker-calendar">
                            <div class="weekday-headers">
                                {WEEKDAY_HEADERS
                                    .iter()
                                    .map(|day| view! { <div class="weekday-header">{*day}</div> })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="calendar-days">
                                {grid
                                    .get()
                                    .cells
                                    .into_iter()
                                    .map(|cell| match cell {
                                        CalendarCell::Blank => {
                                            view! { <div class="calendar-day empty"></div> }.into_any()
                                        }
                                        CalendarCell::Day { date, status } => {
                                            let selectable = status.is_selectable();
                                            view! {
                                                <button
                                                    class=status.css_class()
                                                    class:selected=move || selected.get() == Some(date)
                                                    disabled=!selectable
                                                    on:click=move |_| {
                                                        if selectable {
                                                            wizard.update(|w| {
                                                                w.select_date(date, today);
                                                            });
                                                        }
                                                    }
                                                >
                                                    {date.day()}
                                                </button>
                                            }
                                                .into_any()
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="date-picker-footer">
                {move || match selected.get() {
                    None => view! { <p class="no-selection">"Please select an available date"</p> }.into_any(),
                    Some(date) => {
                        view! {
                            <p class="selected-info">
                                "Selected: " {crate::booking::summary::long_date(date)}
                            </p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
