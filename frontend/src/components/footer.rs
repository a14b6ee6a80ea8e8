use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::services::ServiceEntry;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub services: &'static [ServiceEntry],
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    // Two balanced columns of service links.
    let services: &'static [ServiceEntry] = props.services;
    let (left, right) = services.split_at(services.len().div_ceil(2));

    let column = |entries: &'static [ServiceEntry]| -> Html {
        html! {
            <ul class="footer-links">
                { for entries.iter().map(|entry| html! {
                    <li key={entry.slug}>
                        <Link<Route> to={entry.route()}>{entry.title}</Link<Route>>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #080c16;
                        color: #97a3b6;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 2rem;
                    }
                    .footer-brand h2 {
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .footer-content h3 {
                        color: #e6ecf5;
                        font-size: 0.95rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-links a {
                        color: #97a3b6;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #fff;
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        font-size: 0.85rem;
                    }
                    @media (max-width: 960px) {
                        .footer-content {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-content">
                <div class="footer-brand">
                    <h2>{config::SITE_NAME}</h2>
                    <p>{"Software consultancy for teams that would rather ship than sit in meetings."}</p>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    { column(left) }
                </div>
                <div>
                    <h3>{"\u{00a0}"}</h3>
                    { column(right) }
                </div>
                <div>
                    <h3>{"Company"}</h3>
                    <ul class="footer-links">
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Services}>{"All services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} Software Ltd. All rights reserved.", config::SITE_NAME)}
            </div>
        </footer>
    }
}
