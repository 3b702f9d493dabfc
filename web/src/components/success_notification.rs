use std::time::Duration;

use leptos::prelude::*;

const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Shown after an appointment is saved. Hides itself after five seconds or on close.
#[component]
pub fn SuccessNotification(show: RwSignal<bool>) -> impl IntoView {
    Effect::new(move |_| {
        if show.get() {
            if let Ok(handle) = set_timeout_with_handle(move || show.set(false), AUTO_DISMISS) {
                on_cleanup(move || handle.clear());
            }
        }
    });

    view! {
        <Show when=move || show.get()>
            <div class="success-notification" role="status">
                <div class="success-icon">
                    <svg viewBox="0 0 100 100">
                        <path
                            class="checkmark"
                            fill="none"
                            stroke="#4CAF50"
                            stroke-width="8"
                            d="M20,50 L40,70 L80,30"
                        />
                    </svg>
                </div>
                <div class="success-content">
                    <h3>"Appointment Confirmed!"</h3>
                    <p>"Your appointment has been successfully scheduled. A confirmation email has been sent."</p>
                </div>
                <button class="close-notification" on:click=move |_| show.set(false)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
