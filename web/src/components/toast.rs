use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURATION: Duration = Duration::from_millis(2600);

/// Short-lived status line shared by the landing page forms.
#[component]
pub fn Toast(message: RwSignal<Option<String>>) -> impl IntoView {
    Effect::new(move |_| {
        if message.with(Option::is_some) {
            if let Ok(handle) = set_timeout_with_handle(move || message.set(None), TOAST_DURATION) {
                on_cleanup(move || handle.clear());
            }
        }
    });

    view! {
        <div class="vp-toast" class:vp-show=move || message.with(Option::is_some) role="status">
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
