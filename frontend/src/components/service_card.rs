use yew::prelude::*;
use yew_router::prelude::*;

use crate::services::ServiceEntry;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub entry: &'static ServiceEntry,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let entry = props.entry;
    html! {
        <Link<Route> to={entry.route()} classes="service-card">
            <span class="service-card-icon">{entry.icon}</span>
            <h3>{entry.title}</h3>
            <p>{entry.description}</p>
            <span class="service-card-more">{"Learn more →"}</span>
        </Link<Route>>
    }
}

pub const SERVICE_CARD_CSS: &str = r#"
    .services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .service-card {
        display: flex;
        flex-direction: column;
        gap: 0.6rem;
        height: 100%;
        padding: 1.75rem;
        border-radius: 16px;
        background: #101828;
        border: 1px solid rgba(126, 164, 255, 0.12);
        color: #e6ecf5;
        text-decoration: none;
        transition: transform 0.2s ease, border-color 0.2s ease;
    }
    .service-card:hover {
        transform: translateY(-4px);
        border-color: rgba(126, 164, 255, 0.45);
    }
    .service-card-icon {
        font-size: 2rem;
    }
    .service-card h3 {
        margin: 0;
        font-size: 1.2rem;
    }
    .service-card p {
        margin: 0;
        flex: 1;
        color: #97a3b6;
    }
    .service-card-more {
        color: #7ea4ff;
        font-size: 0.9rem;
    }
"#;
