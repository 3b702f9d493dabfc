use leptos::prelude::*;

use crate::booking::{DocumentKind, DraftAction, WizardState};

/// File picker for one applicant document. The chosen file is read into memory and
/// attached to the draft; clearing the picker detaches it.
#[component]
pub fn DocumentInput(kind: DocumentKind, wizard: RwSignal<WizardState>) -> impl IntoView {
    let reading = RwSignal::new(false);
    let attached = Memo::new(move |_| {
        wizard.with(|w| w.draft.document(kind).map(|a| (a.file_name.clone(), a.len())))
    });

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use web_sys::HtmlInputElement;

            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                wizard.update(|w| w.dispatch(DraftAction::Detach(kind)));
                return;
            };

            reading.set(true);
            leptos::task::spawn_local(async move {
                let result = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await;
                match result {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        let attachment = crate::booking::Attachment::new(file.name(), file.type_(), bytes);
                        wizard.update(|w| w.dispatch(DraftAction::Attach(kind, attachment)));
                    }
                    Err(e) => {
                        tracing::warn!(key = kind.key(), error = ?e, "could not read selected file");
                        wizard.update(|w| w.dispatch(DraftAction::Detach(kind)));
                    }
                }
                reading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="form-group document-input">
            <label class="form-label">
                {kind.label()}
                {kind.is_required().then_some(" *")}
            </label>
            <input type="file" class="form-input" accept="image/*,.pdf" on:change=on_change/>
            <p class="file-status">
                {move || {
                    if reading.get() {
                        "Reading file...".to_string()
                    } else {
                        match attached.get() {
                            Some((name, size)) => format!("{} ({} KB)", name, size.div_ceil(1024)),
                            None if kind.is_required() => "Required".to_string(),
                            None => "Optional".to_string(),
                        }
                    }
                }}
            </p>
        </div>
    }
}
