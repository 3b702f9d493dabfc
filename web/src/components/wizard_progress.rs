use leptos::prelude::*;

use crate::booking::WizardStep;

#[component]
pub fn WizardProgress(#[prop(into)] step: Signal<WizardStep>) -> impl IntoView {
    let progress_percentage = Memo::new(move |_| step.get().progress_percent());

    view! {
        <div class="progress-container">
            <div class="progress-steps">
                {WizardStep::ALL
                    .into_iter()
                    .map(|item| {
                        let index = item.index();
                        view! {
                            <div
                                class="progress-step"
                                class:completed=move || index < step.get().index()
                                class:active=move || index == step.get().index()
                            >
                                <span class="step-number">{index + 1}</span>
                                <span class="step-title">{item.title()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress_percentage.get())
                ></div>
            </div>
        </div>
    }
}
