use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found-card">
                <div class="not-found-code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist or may have been moved."</p>

                <div class="not-found-actions">
                    <button
                        class="vp-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/", Default::default())
                        }
                    >
                        "Go Home"
                    </button>
                    <button
                        class="vp-secondary"
                        on:click=move |_| navigate("/appointment", Default::default())
                    >
                        "Book an Appointment"
                    </button>
                </div>

                <p class="not-found-help">
                    "Still stuck? "
                    <a href="mailto:support@govservices.gov">"Contact support"</a>
                </p>
            </div>
        </div>
    }
}
