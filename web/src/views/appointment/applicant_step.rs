use leptos::prelude::*;
use thaw::*;

use crate::booking::{AddressField, ApplicantField, DocumentKind, DraftAction, WizardState};
use crate::components::DocumentInput;

#[component]
fn ApplicantInput(
    wizard: RwSignal<WizardState>,
    field: ApplicantField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = Memo::new(move |_| {
        wizard.with(|w| {
            let applicant = &w.draft.applicant;
            match field {
                ApplicantField::FirstName => applicant.first_name.clone(),
                ApplicantField::LastName => applicant.last_name.clone(),
                ApplicantField::Email => applicant.email.clone(),
                ApplicantField::Phone => applicant.phone.clone(),
                ApplicantField::Program => applicant.program.clone(),
                ApplicantField::Course => applicant.course.clone(),
                ApplicantField::AdditionalEmail => applicant.additional_email.clone(),
            }
        })
    });

    view! {
        <div class="form-group">
            <label class="form-label">{label} {required.then_some(" *")}</label>
            <input
                class="form-input"
                type=input_type
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    wizard.update(|w| w.dispatch(DraftAction::SetApplicant(field, text)));
                }
            />
        </div>
    }
}

#[component]
fn AddressInput(wizard: RwSignal<WizardState>, field: AddressField, label: &'static str) -> impl IntoView {
    let value = Memo::new(move |_| {
        wizard.with(|w| {
            let addresses = &w.draft.addresses;
            match field {
                AddressField::Secondary => addresses.secondary.clone(),
                AddressField::HighSchool => addresses.high_school.clone(),
                AddressField::University => addresses.university.clone(),
            }
        })
    });

    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <input
                class="form-input"
                type="text"
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    wizard.update(|w| w.dispatch(DraftAction::SetAddress(field, text)));
                }
            />
        </div>
    }
}

#[component]
pub fn ApplicantStep(
    wizard: RwSignal<WizardState>,
    on_next: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="form-section active">
            <h2>"Applicant Details"</h2>

            <form class="applicant-form" on:submit=move |ev| ev.prevent_default()>
                <div class="form-grid">
                    <ApplicantInput wizard=wizard field=ApplicantField::FirstName label="First Name" required=true/>
                    <ApplicantInput wizard=wizard field=ApplicantField::LastName label="Last Name" required=true/>
                    <ApplicantInput
                        wizard=wizard
                        field=ApplicantField::Email
                        label="Email"
                        input_type="email"
                        required=true
                    />
                    <ApplicantInput
                        wizard=wizard
                        field=ApplicantField::Phone
                        label="Phone"
                        input_type="tel"
                        required=true
                    />
                    <ApplicantInput wizard=wizard field=ApplicantField::Program label="Desired Program"/>
                    <ApplicantInput wizard=wizard field=ApplicantField::Course label="Desired Course"/>

                    <DocumentInput kind=DocumentKind::Passport wizard=wizard/>
                    <DocumentInput kind=DocumentKind::Photo wizard=wizard/>

                    <DocumentInput kind=DocumentKind::OLevel wizard=wizard/>
                    <AddressInput wizard=wizard field=AddressField::Secondary label="Secondary School Address"/>
                    <DocumentInput kind=DocumentKind::ALevel wizard=wizard/>
                    <AddressInput wizard=wizard field=AddressField::HighSchool label="High School Address"/>
                    <DocumentInput kind=DocumentKind::Bachelor wizard=wizard/>
                    <AddressInput wizard=wizard field=AddressField::University label="University Address"/>
                    <DocumentInput kind=DocumentKind::Transcript wizard=wizard/>
                    <DocumentInput kind=DocumentKind::Others wizard=wizard/>

                    <ApplicantInput
                        wizard=wizard
                        field=ApplicantField::AdditionalEmail
                        label="Additional Email"
                        input_type="email"
                    />
                </div>
            </form>

            <div class="form-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_back.run(())>
                    "Previous"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_next.run(())>
                    "Review & Confirm"
                </Button>
            </div>
        </section>
    }
}
