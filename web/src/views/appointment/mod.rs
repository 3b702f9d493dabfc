mod applicant_step;
mod confirmation_step;
mod schedule_step;
mod service_step;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::booking::remote::ServerStores;
use crate::booking::submission::load_availability;
use crate::booking::{StepEffect, WizardState, WizardStep};
use crate::components::{ErrorView, WizardProgress};
use crate::utils::clock::local_today;

use applicant_step::ApplicantStep;
use confirmation_step::ConfirmationStep;
use schedule_step::ScheduleStep;
use service_step::ServiceStep;

/// The four-step booking wizard. Every visit starts from an empty draft.
#[component]
pub fn AppointmentPage() -> impl IntoView {
    let today = local_today();
    let wizard = RwSignal::new(WizardState::new(today));
    let error = RwSignal::new(None::<String>);
    let availability_loading = RwSignal::new(false);

    let step = Memo::new(move |_| wizard.with(WizardState::step));

    let run_effect = move |effect: StepEffect| match effect {
        StepEffect::RefreshAvailability => {
            let Some(ticket) = wizard.try_update(WizardState::begin_availability_refresh) else {
                return;
            };
            availability_loading.set(true);
            spawn_local(async move {
                let snapshot = load_availability(&ServerStores, today).await;
                let applied = wizard
                    .try_update(|w| w.complete_availability_refresh(ticket, snapshot))
                    .unwrap_or(false);
                if applied {
                    availability_loading.set(false);
                }
            });
        }
        StepEffect::RenderSummary => {
            tracing::debug!(
                tracking_number = ?wizard.with_untracked(|w| w.draft.tracking_number().map(str::to_string)),
                "showing confirmation"
            );
        }
        StepEffect::None => {}
    };

    let on_next = Callback::new(move |_: ()| {
        match wizard.try_update(|w| w.advance()) {
            Some(Ok(effect)) => {
                error.set(None);
                run_effect(effect);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    });

    let on_back = Callback::new(move |_: ()| {
        error.set(None);
        if let Some(effect) = wizard.try_update(|w| w.back()) {
            run_effect(effect);
        }
    });

    view! {
        <div class="appointment-page">
            <header class="appointment-header">
                <h1>"Book Your Appointment"</h1>
                <p>"Complete the steps below to schedule your visit."</p>
            </header>

            <WizardProgress step=step/>
            <ErrorView error=error/>

            {move || match step.get() {
                WizardStep::ServiceSelection => {
                    view! { <ServiceStep wizard=wizard on_next=on_next/> }.into_any()
                }
                WizardStep::DateTime => {
                    view! {
                        <ScheduleStep
                            wizard=wizard
                            today=today
                            loading=availability_loading
                            on_next=on_next
                            on_back=on_back
                        />
                    }
                        .into_any()
                }
                WizardStep::ApplicantDetails => {
                    view! { <ApplicantStep wizard=wizard on_next=on_next on_back=on_back/> }.into_any()
                }
                WizardStep::Confirmation => {
                    view! { <ConfirmationStep wizard=wizard error=error on_back=on_back/> }.into_any()
                }
            }}

            <div class="appointment-help">
                <p>"Need help? Email support@govservices.gov or call (123) 456-7890"</p>
            </div>
        </div>
    }
}
