use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::booking::export::{slip_fields, DocumentExport};
use crate::booking::remote::{BrowserSlipExport, ServerStores};
use crate::booking::{submit_booking, BookingStatus, ConfirmationSummary, WizardState};
use crate::components::SuccessNotification;

#[component]
fn SummaryRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn ConfirmationStep(
    wizard: RwSignal<WizardState>,
    error: RwSignal<Option<String>>,
    on_back: Callback<()>,
) -> impl IntoView {
    let summary = Memo::new(move |_| wizard.with(|w| ConfirmationSummary::from_draft(&w.draft)));
    let submitted = Memo::new(move |_| wizard.with(|w| w.draft.status() == BookingStatus::Submitted));
    let is_saving = RwSignal::new(false);
    let is_exporting = RwSignal::new(false);
    let show_success = RwSignal::new(false);

    let field = move |pick: fn(&ConfirmationSummary) -> String| Signal::derive(move || summary.with(pick));

    let save = move |_: leptos::ev::MouseEvent| {
        if is_saving.get_untracked() {
            return;
        }
        is_saving.set(true);
        error.set(None);

        // Submission runs on a copy so the wizard stays readable while uploads are in flight.
        let mut draft = wizard.with_untracked(|w| w.draft.clone());
        spawn_local(async move {
            let result = submit_booking(&mut draft, &ServerStores, &ServerStores).await;
            wizard.update(|w| w.draft.adopt_outcome(&draft));
            match result {
                Ok(tracking_number) => {
                    tracing::info!(%tracking_number, "appointment submitted");
                    show_success.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            is_saving.set(false);
        });
    };

    let download = move |_: leptos::ev::MouseEvent| {
        if is_exporting.get_untracked() {
            return;
        }
        is_exporting.set(true);
        let fields = wizard.with_untracked(|w| slip_fields(&w.draft));
        spawn_local(async move {
            if let Err(e) = BrowserSlipExport.render_and_download(&fields).await {
                tracing::warn!(error = %e, "slip export failed");
                error.set(Some(e.to_string()));
            }
            is_exporting.set(false);
        });
    };

    view! {
        <section class="form-section active">
            <h2>"Confirmation"</h2>

            <div class="confirmation-layout">
                <div class="info-card">
                    <SummaryRow label="Name" value=field(|s| s.name.clone())/>
                    <SummaryRow label="Email" value=field(|s| s.email.clone())/>
                    <SummaryRow label="Phone" value=field(|s| s.phone.clone())/>
                    <SummaryRow label="Service" value=field(|s| s.service.clone())/>
                    <SummaryRow label="Status" value=field(|s| s.status.clone())/>
                    <SummaryRow label="Appointment Time" value=field(|s| s.time.clone())/>
                    <SummaryRow label="Tracking Number" value=field(|s| s.tracking_number.clone())/>
                    <SummaryRow label="Appointment Date" value=field(|s| s.date.clone())/>
                    <SummaryRow label="Center" value=field(|s| s.center.clone())/>
                </div>

                <div class="confirmation-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=is_exporting
                        on_click=download
                    >
                        {move || if is_exporting.get() { "Preparing slip..." } else { "Download Appointment Slip" }}
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_saving.get() || submitted.get())
                        on_click=save
                    >
                        {move || {
                            if is_saving.get() {
                                "Saving..."
                            } else if submitted.get() {
                                "Appointment Saved"
                            } else {
                                "Save Appointment"
                            }
                        }}
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || is_saving.get())
                        on_click=move |_| on_back.run(())
                    >
                        "Previous"
                    </Button>

                    <p class="confirmation-note">"A confirmation email has been sent to your email address."</p>
                </div>
            </div>

            <SuccessNotification show=show_success/>
        </section>
    }
}
