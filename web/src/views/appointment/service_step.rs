use leptos::prelude::*;
use thaw::*;

use crate::booking::catalog::{find_service, CENTERS, SERVICES};
use crate::booking::{DraftAction, WizardState};

#[component]
pub fn ServiceStep(wizard: RwSignal<WizardState>, on_next: Callback<()>) -> impl IntoView {
    let service_id = Memo::new(move |_| {
        wizard.with(|w| w.draft.service.as_ref().map(|s| s.id.to_string()).unwrap_or_default())
    });
    let center = Memo::new(move |_| wizard.with(|w| w.draft.center.clone().unwrap_or_default()));
    let ready = Memo::new(move |_| wizard.with(|w| w.can_advance().is_ok()));

    let on_service = move |ev: leptos::ev::Event| {
        let service = event_target_value(&ev).parse().ok().and_then(find_service);
        wizard.update(|w| w.dispatch(DraftAction::SelectService(service)));
    };

    let on_center = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wizard.update(|w| w.dispatch(DraftAction::SelectCenter(Some(value))));
    };

    view! {
        <section class="form-section active">
            <h2>"Select a Service"</h2>

            <div class="form-group">
                <label class="form-label">"Service Type"</label>
                <select class="form-select" prop:value=service_id on:change=on_service>
                    <option value="">"-- Select a service --"</option>
                    {SERVICES
                        .iter()
                        .map(|s| view! { <option value=s.id.to_string()>{s.name}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="form-group">
                <label class="form-label">"Center"</label>
                <select class="form-select" prop:value=center on:change=on_center>
                    <option value="">"-- Select a center --"</option>
                    {CENTERS
                        .iter()
                        .map(|c| view! { <option value=c.id>{c.label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !ready.get())
                    on_click=move |_| on_next.run(())
                >
                    "Next"
                </Button>
            </div>
        </section>
    }
}
