use leptos::prelude::*;
use thaw::*;

pub const PHONE_NUMBER: &str = "+15551234567";
pub const WHATSAPP_NUMBER: &str = "15551234567";
const WHATSAPP_GREETING: &str = "Hi, I need help with my visa.";

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

/// Name and email are required; the message is optional.
pub fn contact_form_error(name: &str, email: &str) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() {
        Some("Please provide your name and email.")
    } else {
        None
    }
}

#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn clear(self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.message.set(String::new());
    }
}

#[component]
pub fn ContactModal(show: RwSignal<bool>, toast: RwSignal<Option<String>>) -> impl IntoView {
    let fields = ContactFields::new();
    let ContactFields { name, email, message } = fields;

    // Every way out of the modal resets the form.
    let close_modal = move || {
        fields.clear();
        show.set(false);
    };

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && show.get_untracked() {
            close_modal();
        }
    });
    on_cleanup(move || escape.remove());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(error) = contact_form_error(&name.get_untracked(), &email.get_untracked()) {
            toast.set(Some(error.to_string()));
            return;
        }
        tracing::info!("contact request submitted");
        toast.set(Some("Thanks, your message is on its way!".to_string()));
        close_modal();
    };

    view! {
        <div
            class=move || if show.get() { "vp-modal-overlay show" } else { "vp-modal-overlay" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="vpContactTitle"
        >
            <div class="vp-modal">
                <div class="modal-header">
                    <h3 id="vpContactTitle">"Let's get you help, fast"</h3>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| close_modal()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label">"Name *"</label>
                        <Input value=name placeholder="Your full name" />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Email *"</label>
                        <Input value=email input_type=InputType::Email placeholder="you@example.com" />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"How can we help?"</label>
                        <Textarea value=message placeholder="Tell us about your case" />
                    </div>

                    <div class="modal-actions">
                        <a class="vp-secondary" href=format!("tel:{}", PHONE_NUMBER)>"Quick call"</a>
                        <a class="vp-secondary" href=whatsapp_link() target="_blank" rel="noopener">
                            "WhatsApp"
                        </a>
                        <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                            "Send message"
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
