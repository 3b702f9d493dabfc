use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::booking::catalog::VISA_TYPES;
use crate::booking::{DraftAction, WizardState};
use crate::components::{BookingCalendar, TimeSlotPicker};

#[component]
pub fn ScheduleStep(
    wizard: RwSignal<WizardState>,
    today: NaiveDate,
    loading: RwSignal<bool>,
    on_next: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    let shows_visa_type = Memo::new(move |_| wizard.with(|w| w.draft.shows_visa_type()));
    let visa_type = Memo::new(move |_| wizard.with(|w| w.draft.visa_type.clone().unwrap_or_default()));

    let on_visa_type = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wizard.update(|w| w.dispatch(DraftAction::SelectVisaType(Some(value))));
    };

    view! {
        <section class="form-section active">
            <h2>"Choose Date & Time"</h2>

            <Show when=move || shows_visa_type.get()>
                <div class="form-group">
                    <label class="form-label">"Visa Type"</label>
                    <select class="form-select" prop:value=visa_type on:change=on_visa_type>
                        <option value="">"-- Select visa type --"</option>
                        {VISA_TYPES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </Show>

            <BookingCalendar wizard=wizard today=today loading=loading/>

            <Show when=move || !loading.get()>
                <TimeSlotPicker wizard=wizard/>
            </Show>

            <div class="form-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_back.run(())>
                    "Previous"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_next.run(())>
                    "Next"
                </Button>
            </div>
        </section>
    }
}
