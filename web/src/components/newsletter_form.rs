use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::server::subscribe_newsletter;

const INVALID_EMAIL: &str = "Please enter a valid email";

/// Accepts `local@domain.tld` shaped addresses and returns the trimmed address.
pub fn validate_subscriber_email(raw: &str) -> Result<String, String> {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(INVALID_EMAIL.to_string());
    };

    let clean = |part: &str| !part.is_empty() && !part.contains(|c: char| c == '@' || c.is_whitespace());
    let dotted = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    if clean(local) && clean(domain) && dotted {
        Ok(email.to_string())
    } else {
        Err(INVALID_EMAIL.to_string())
    }
}

#[component]
pub fn NewsletterForm(toast: RwSignal<Option<String>>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = match validate_subscriber_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                toast.set(Some(message));
                return;
            }
        };

        is_submitting.set(true);
        spawn_local(async move {
            match subscribe_newsletter(address).await {
                Ok(()) => {
                    email.set(String::new());
                    toast.set(Some("Subscribed, check your inbox!".to_string()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "newsletter subscription failed");
                    toast.set(Some("Could not subscribe right now. Please try again.".to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    view! {
        <form class="newsletter-form" on:submit=on_submit>
            <Input value=email placeholder="Your email address" />
            <Button
                appearance=ButtonAppearance::Primary
                button_type=ButtonType::Submit
                disabled=is_submitting
            >
                {move || if is_submitting.get() { "Subscribing..." } else { "Subscribe" }}
            </Button>
        </form>
    }
}
