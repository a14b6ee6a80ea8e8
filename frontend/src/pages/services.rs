use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Reveal, Slide};
use crate::components::service_card::ServiceCard;
use crate::dom;
use crate::pages::not_found::NotFound;
use crate::services::{self, Placement, SERVICES};
use crate::Route;

const PAGE_CSS: &str = r#"
    .services-page, .service-detail {
        max-width: 1200px;
        margin: 0 auto;
        padding: 9rem 1.5rem 5rem;
        color: #e6ecf5;
    }
    .services-page h1, .service-detail h1 {
        color: #fff;
        font-size: clamp(2.2rem, 5vw, 3.5rem);
        margin: 0 0 1rem;
    }
    .page-lead {
        color: #97a3b6;
        font-size: 1.2rem;
        max-width: 42rem;
        margin: 0 0 3rem;
    }
    .service-detail-icon {
        font-size: 3rem;
    }
    .service-detail-body {
        display: grid;
        grid-template-columns: 3fr 2fr;
        gap: 3rem;
        margin-top: 2rem;
    }
    .service-detail-body p {
        line-height: 1.7;
        color: #c5cfdf;
    }
    .service-highlights {
        padding: 1.75rem;
        border-radius: 16px;
        background: #101828;
        border: 1px solid rgba(126, 164, 255, 0.12);
    }
    .service-highlights ul {
        padding-left: 1.2rem;
        margin: 0;
        line-height: 2;
    }
    .service-neighbours {
        display: flex;
        justify-content: space-between;
        margin-top: 4rem;
        gap: 1rem;
    }
    .service-neighbours a {
        color: #7ea4ff;
        text-decoration: none;
    }
    @media (max-width: 960px) {
        .service-detail-body {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(ServicesIndex)]
pub fn services_index() -> Html {
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="services-page">
            <style>{PAGE_CSS}</style>
            <Reveal>
                <h1>{"Services"}</h1>
                <p class="page-lead">
                    {"Pick one, or combine a few. Most engagements start with a short discovery and grow from there."}
                </p>
            </Reveal>
            <div class="services-grid">
                { for SERVICES.iter().map(|entry| html! {
                    <Reveal key={entry.slug}>
                        <ServiceCard entry={entry} />
                    </Reveal>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

/// One template for every catalog entry.
#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        props.slug.clone(),
    );

    let Some(Placement {
        previous,
        entry,
        next,
    }) = services::locate(&props.slug)
    else {
        warn!("Unknown service slug: {}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <article class="service-detail">
            <style>{PAGE_CSS}</style>
            <Reveal>
                <span class="service-detail-icon">{entry.icon}</span>
                <h1>{entry.title}</h1>
                <p class="page-lead">{entry.description}</p>
            </Reveal>
            <div class="service-detail-body">
                <Reveal slide={Slide::Left}>
                    { for entry.summary.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <Link<Route> to={Route::Contact} classes="button-primary">
                        {format!("Talk to us about {}", entry.title)}
                    </Link<Route>>
                </Reveal>
                <Reveal slide={Slide::Right} class={classes!("service-highlights")}>
                    <h3>{"What's included"}</h3>
                    <ul>
                        { for entry.highlights.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </Reveal>
            </div>
            <nav class="service-neighbours">
                {
                    match previous {
                        Some(previous) => html! {
                            <Link<Route> to={previous.route()}>{format!("← {}", previous.title)}</Link<Route>>
                        },
                        None => html! { <span></span> },
                    }
                }
                {
                    match next {
                        Some(next) => html! {
                            <Link<Route> to={next.route()}>{format!("{} →", next.title)}</Link<Route>>
                        },
                        None => html! {
                            <Link<Route> to={Route::Services}>{"All services →"}</Link<Route>>
                        },
                    }
                }
            </nav>
        </article>
    }
}
