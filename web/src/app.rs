use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::views::appointment::AppointmentPage;
use crate::views::home::HomePage;
use crate::views::not_found::NotFoundPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/visa-portal.css"/>
        <Title text="VisaPremium | Visa Advisory & Appointments"/>

        <ConfigProvider>
            <Router>
                <nav id="mainNav" class="nav-container">
                    <a href="/" class="brand">"VisaPremium"</a>
                    <div class="nav-links">
                        <a href="/">"Home"</a>
                        <a href="/#services">"Services"</a>
                        <a href="/appointment" class="vp-cta-appointment">"Make an Appointment"</a>
                    </div>
                </nav>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("appointment") view=AppointmentPage/>
                    </Routes>
                </main>
                <footer class="site-footer">"© Government Services. All rights reserved."</footer>
            </Router>
        </ConfigProvider>
    }
}
