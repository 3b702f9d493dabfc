use leptos::prelude::*;
use thaw::*;

use crate::booking::slots::time_slots;
use crate::booking::WizardState;

/// The fixed half-hour slots. Every slot is offered regardless of the chosen date.
#[component]
pub fn TimeSlotPicker(wizard: RwSignal<WizardState>) -> impl IntoView {
    let selected_time = Memo::new(move |_| wizard.with(|w| w.draft.time.clone()));

    view! {
        <div class="time-slot-picker">
            <div class="time-slot-picker-header">
                <h4>"Available Time Slots"</h4>
            </div>

            <div class="time-slot-picker-grid">
                {time_slots()
                    .map(|label| {
                        let is_selected = {
                            let label = label.clone();
                            move || selected_time.get().as_deref() == Some(label.as_str())
                        };
                        let slot = label.clone();

                        view! {
                            <Button
                                class="time-slot-button"
                                appearance=Signal::derive(move || {
                                    if is_selected() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                })
                                on_click=move |_| {
                                    wizard.update(|w| {
                                        w.select_time(&slot);
                                    });
                                }
                            >
                                <span class="time-slot-time">{label}</span>
                            </Button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
