use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Reveal, Slide};
use crate::components::service_card::ServiceCard;
use crate::dom;
use crate::services::SERVICES;
use crate::Route;

/// Services shown on the landing page before "view all".
const FEATURED: usize = 6;

const STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Discover",
        "A short paid discovery where we map the problem, the constraints and what success looks like.",
    ),
    (
        "02",
        "Build",
        "Small, senior teams shipping to production every week, with a demo you can click every Friday.",
    ),
    (
        "03",
        "Hand over",
        "Documentation, runbooks and pairing sessions so your team owns the result from day one.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-hero {
                        min-height: 92vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: flex-start;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 8rem 1.5rem 4rem;
                    }
                    .home-hero h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.05;
                        margin: 0 0 1.5rem;
                        color: #fff;
                        max-width: 14ch;
                    }
                    .home-hero p {
                        font-size: 1.25rem;
                        color: #97a3b6;
                        max-width: 40rem;
                        margin: 0 0 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .button-primary, .button-secondary {
                        padding: 0.9rem 1.8rem;
                        border-radius: 999px;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .button-primary {
                        background: #3d6bff;
                        color: #fff;
                    }
                    .button-secondary {
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        color: #e6ecf5;
                    }
                    .home-section {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }
                    .home-section h2 {
                        color: #fff;
                        font-size: 2.2rem;
                        margin: 0 0 2.5rem;
                    }
                    .steps {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .step-number {
                        color: #3d6bff;
                        font-size: 2.5rem;
                        font-weight: 700;
                    }
                    .step h3 {
                        color: #fff;
                        margin: 0.5rem 0;
                    }
                    .step p {
                        color: #97a3b6;
                    }
                    .home-cta {
                        text-align: center;
                        padding: 5rem 1.5rem 7rem;
                    }
                    .home-cta h2 {
                        color: #fff;
                        font-size: 2.4rem;
                    }
                    .view-all {
                        display: inline-block;
                        margin-top: 2rem;
                        color: #7ea4ff;
                        text-decoration: none;
                    }
                    @media (max-width: 960px) {
                        .steps {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section class="home-hero">
                <Reveal>
                    <h1>{"Software that ships, and keeps shipping."}</h1>
                    <p>
                        {"We are a small team of senior engineers and designers who build, rescue and scale software for companies that need it to work."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="button-primary">
                            {"Start a project"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="button-secondary">
                            {"See what we do"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>

            <section class="home-section">
                <Reveal>
                    <h2>{"What we do"}</h2>
                </Reveal>
                <div class="services-grid">
                    { for SERVICES.iter().take(FEATURED).map(|entry| html! {
                        <Reveal key={entry.slug}>
                            <ServiceCard entry={entry} />
                        </Reveal>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="view-all">
                    {format!("View all {} services →", SERVICES.len())}
                </Link<Route>>
            </section>

            <section class="home-section">
                <Reveal>
                    <h2>{"How we work"}</h2>
                </Reveal>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(index, (number, title, body))| {
                        let slide = if index % 2 == 0 { Slide::Left } else { Slide::Right };
                        html! {
                            <Reveal key={*number} slide={slide} class={classes!("step")}>
                                <span class="step-number">{*number}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section class="home-cta">
                <Reveal>
                    <h2>{"Have something in mind?"}</h2>
                    <Link<Route> to={Route::Contact} classes="button-primary">
                        {"Tell us about it"}
                    </Link<Route>>
                </Reveal>
            </section>
        </div>
    }
}
