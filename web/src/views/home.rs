use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::booking::catalog::SERVICES;
use crate::components::{Carousel, ContactModal, NewsletterForm, Toast};

struct Slide {
    image: &'static str,
    title: &'static str,
    subtitle: &'static str,
}

static SLIDES: [Slide; 3] = [
    Slide {
        image: "https://plus.unsplash.com/premium_photo-1661414779271-d8478e2944bc?w=1600&auto=format&fit=crop&q=80",
        title: "Premium Visa Services That Move Faster",
        subtitle: "Personalised immigration guidance for executives, families and corporate relocations, handled by senior advisors across multiple jurisdictions.",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1653389527286-604ab2dd2471?w=1600&auto=format&fit=crop&q=80",
        title: "Trusted Visa Advisors, Exceptional Outcomes",
        subtitle: "Precise documentation, embassy-ready submissions and an industry-leading success rate.",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1521791055366-0d553872125f?w=1600&auto=format&fit=crop&q=80",
        title: "Global Reach, Local Expertise",
        subtitle: "Our network of counsel and partners in-country gives you an edge where timing and compliance matter most.",
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "They rewrote our company narrative to match adjudicator expectations. Result: embassy approved in record time.",
        name: "L. Morgan",
        role: "Head of People, Global SaaS",
    },
    Testimonial {
        quote: "A complex family relocation with sensitive documents, handled with speed, transparency and empathy.",
        name: "R. Kapoor",
        role: "Founder & CEO, Fintech",
    },
    Testimonial {
        quote: "They turned a last-minute embassy block into a same-week approval. Honestly felt like magic.",
        name: "A. Daniels",
        role: "Private Client",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let show_contact = RwSignal::new(false);
    let toast = RwSignal::new(None::<String>);

    view! {
        <div class="homepage-container">
            <HeroSlider show_contact=show_contact/>

            <section id="services" class="services-section">
                <h2>"Our Services"</h2>
                <div class="service-cards">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <span class="service-code">{service.sort_code}</span>
                                    <h3>{service.name}</h3>
                                    <A href="/appointment">"Book an appointment"</A>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <TestimonialCarousel/>

            <section class="newsletter-section">
                <h3>"Stay informed"</h3>
                <p>"Visa policy updates and appointment availability, straight to your inbox."</p>
                <NewsletterForm toast=toast/>
            </section>

            <button
                id="vpContactFab"
                class="vp-contact-fab"
                aria-label="Contact us"
                on:click=move |_| show_contact.set(true)
            >
                "Contact"
            </button>

            <ContactModal show=show_contact toast=toast/>
            <Toast message=toast/>
        </div>
    }
}

/// Hero slides with manual navigation. Any manual move restarts the auto-advance timer.
#[component]
fn HeroSlider(show_contact: RwSignal<bool>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(SLIDES.len()));
    // Bumped on manual navigation so the interval effect re-arms.
    let restart = RwSignal::new(0u32);

    Effect::new(move |_| {
        restart.track();
        if let Ok(handle) = set_interval_with_handle(
            move || carousel.update(Carousel::next),
            std::time::Duration::from_millis(Carousel::AUTO_ADVANCE_MS),
        ) {
            on_cleanup(move || handle.clear());
        }
    });

    let navigate = move |f: fn(&mut Carousel)| {
        carousel.update(f);
        restart.update(|n| *n = n.wrapping_add(1));
    };

    view! {
        <section class="hero-slider">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div
                            class="hero-slide"
                            class:active=move || carousel.with(|c| c.current() == index)
                            style:background-image=format!("url('{}')", slide.image)
                        >
                            <div class="hero-content">
                                <h1>{slide.title}</h1>
                                <p>{slide.subtitle}</p>
                                <div class="hero-actions">
                                    <A href="/appointment">"Make an Appointment"</A>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| show_contact.set(true)
                                    >
                                        "Request Consultation"
                                    </Button>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            <button id="prev-slide" class="slider-arrow prev" on:click=move |_| navigate(Carousel::previous)>
                "‹"
            </button>
            <button id="next-slide" class="slider-arrow next" on:click=move |_| navigate(Carousel::next)>
                "›"
            </button>

            <div class="slider-bullets">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                class="slider-bullet"
                                class:active=move || carousel.with(|c| c.current() == index)
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| {
                                    carousel.update(|c| c.go_to(index));
                                    restart.update(|n| *n = n.wrapping_add(1));
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    view! {
        <section class="testimonials-section">
            <div class="testim-title">"What our clients say"</div>
            <div class="testim-viewport">
                {move || {
                    let testimonial = &TESTIMONIALS[carousel.with(Carousel::current)];
                    view! {
                        <article class="testim-card">
                            <div class="testim-quote">{testimonial.quote}</div>
                            <div class="testim-meta">
                                <div class="testim-name">{testimonial.name}</div>
                                <div class="testim-role">{testimonial.role}</div>
                            </div>
                        </article>
                    }
                }}
            </div>
            <div class="testim-controls">
                <button aria-label="previous testimonial" on:click=move |_| carousel.update(Carousel::previous)>
                    "‹"
                </button>
                <button aria-label="next testimonial" on:click=move |_| carousel.update(Carousel::next)>
                    "›"
                </button>
            </div>
        </section>
    }
}
