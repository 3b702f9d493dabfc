use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Inline replacement for a blocking alert. Renders nothing while `error` is `None`;
/// clicking the message clears it.
#[component]
pub fn ErrorView(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="form-error" on:click=move |_| error.set(None)>
                    <MessageBar intent=MessageBarIntent::Error>
                        {message}
                    </MessageBar>
                </div>
            }
        })
    }
}
