use log::error;
use stylist::Style;
use yew::prelude::*;
use yew_router::prelude::*;

use super::hover_intent::{GlooScheduler, HoverIntent};
use super::state::{NavAction, NavState};
use crate::config;
use crate::dom;
use crate::services::ServiceEntry;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub services: &'static [ServiceEntry],
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let services = props.services;
    let state = use_reducer(NavState::default);
    let hover = use_mut_ref(|| HoverIntent::new(GlooScheduler, config::HOVER_CLOSE_DELAY_MS));
    let trigger_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let style_class = use_memo(|_| nav_class(), ());

    let sink = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: NavAction| dispatcher.dispatch(action))
    };

    {
        let sink = sink.clone();
        use_effect_with_deps(
            move |scrolled| {
                sink.emit(NavAction::Scrolled(*scrolled));
                || ()
            },
            props.scrolled,
        );
    }

    // Outside-press listener and hover timer live exactly as long as the nav.
    {
        let sink = sink.clone();
        let hover = hover.clone();
        let regions = [trigger_ref.clone(), panel_ref.clone()];
        use_effect_with_deps(
            move |_| {
                let subscription = match dom::watch_outside_presses(regions, sink.clone()) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        error!("Outside-click detection disabled: {}", err);
                        None
                    }
                };
                move || {
                    drop(subscription);
                    hover.borrow_mut().cancel();
                    sink.emit(NavAction::Unmounted);
                }
            },
            (),
        );
    }

    let on_services_enter = {
        let hover = hover.clone();
        let sink = sink.clone();
        Callback::from(move |_: MouseEvent| hover.borrow_mut().enter(&sink))
    };

    let on_services_leave = {
        let hover = hover.clone();
        let sink = sink.clone();
        Callback::from(move |_: MouseEvent| hover.borrow_mut().leave(&sink))
    };

    let toggle_dropdown = sink.reform(|e: MouseEvent| {
        e.prevent_default();
        NavAction::TriggerClicked
    });
    let open_mobile = sink.reform(|_: MouseEvent| NavAction::HamburgerClicked);
    let close_mobile = sink.reform(|_: MouseEvent| NavAction::CloseClicked);
    let toggle_accordion = sink.reform(|_: MouseEvent| NavAction::AccordionToggled);
    let on_destination = sink.reform(|_: MouseEvent| NavAction::DestinationClicked);

    let dropdown_open = state.dropdown_open();
    let mobile_open = state.mobile_menu_open();
    let accordion_open = state.accordion_open();

    html! {
        <nav class={classes!((*style_class).clone(), "top-nav", state.scrolled().then(|| "scrolled"))}>
            <div class="nav-content">
                <div onclick={on_destination.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {config::SITE_NAME}
                    </Link<Route>>
                </div>

                <div class="nav-desktop">
                    <div class="nav-services" onmouseenter={on_services_enter} onmouseleave={on_services_leave}>
                        <button
                            ref={trigger_ref}
                            class="nav-link nav-services-trigger"
                            aria-haspopup="true"
                            aria-expanded={dropdown_open.to_string()}
                            onclick={toggle_dropdown}
                        >
                            {"Services"}
                            <span class={classes!("chevron", dropdown_open.then(|| "up"))}>{"▾"}</span>
                        </button>
                        <div ref={panel_ref} class={classes!("mega-menu", dropdown_open.then(|| "open"))}>
                            <div class="mega-menu-grid">
                                { for services.iter().map(|entry| html! {
                                    <div key={entry.slug} onclick={on_destination.clone()}>
                                        <Link<Route> to={entry.route()} classes="mega-menu-item">
                                            <span class="mega-menu-icon">{entry.icon}</span>
                                            <span class="mega-menu-text">
                                                <span class="mega-menu-title">{entry.title}</span>
                                                <span class="mega-menu-description">{entry.description}</span>
                                            </span>
                                        </Link<Route>>
                                    </div>
                                }) }
                            </div>
                            <div onclick={on_destination.clone()}>
                                <Link<Route> to={Route::Services} classes="mega-menu-all">
                                    {"View all services →"}
                                </Link<Route>>
                            </div>
                        </div>
                    </div>
                    <div onclick={on_destination.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Contact us"}
                        </Link<Route>>
                    </div>
                </div>

                <button class="burger-menu" aria-label="Open menu" onclick={open_mobile}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", mobile_open.then(|| "open"))} aria-hidden={(!mobile_open).to_string()}>
                <div class="mobile-menu-header">
                    <div onclick={on_destination.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-logo">
                            {config::SITE_NAME}
                        </Link<Route>>
                    </div>
                    <button class="mobile-menu-close" aria-label="Close menu" onclick={close_mobile}>
                        {"✕"}
                    </button>
                </div>
                <div onclick={on_destination.clone()}>
                    <Link<Route> to={Route::Home} classes="mobile-link">
                        {"Home"}
                    </Link<Route>>
                </div>
                <button
                    class={classes!("mobile-link", "mobile-accordion-header", accordion_open.then(|| "expanded"))}
                    aria-expanded={accordion_open.to_string()}
                    onclick={toggle_accordion}
                >
                    {"Services"}
                    <span class="chevron">{"▾"}</span>
                </button>
                <div class={classes!("mobile-accordion-body", accordion_open.then(|| "expanded"))}>
                    { for services.iter().map(|entry| html! {
                        <div key={entry.slug} onclick={on_destination.clone()}>
                            <Link<Route> to={entry.route()} classes="mobile-sublink">
                                <span class="mobile-sublink-icon">{entry.icon}</span>
                                {entry.title}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={on_destination.clone()}>
                        <Link<Route> to={Route::Services} classes="mobile-sublink all">
                            {"All services"}
                        </Link<Route>>
                    </div>
                </div>
                <div onclick={on_destination.clone()}>
                    <Link<Route> to={Route::Contact} classes="mobile-link mobile-cta">
                        {"Contact us"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

fn nav_class() -> String {
    let css = NAV_CSS
        .replace("__BREAKPOINT__", &format!("{}px", config::MOBILE_BREAKPOINT_PX))
        .replace("__DESKTOP_FROM__", &format!("{}px", config::MOBILE_BREAKPOINT_PX + 1));
    match Style::new(css.as_str()) {
        Ok(style) => style.get_class_name().to_string(),
        Err(err) => {
            error!("Failed to build nav style: {}", err);
            String::new()
        }
    }
}

const NAV_CSS: &str = r#"
position: fixed;
top: 0;
left: 0;
right: 0;
z-index: 100;
background: transparent;
transition: background 0.3s ease, box-shadow 0.3s ease;

&.scrolled {
    background: rgba(12, 18, 32, 0.96);
    box-shadow: 0 4px 24px rgba(0, 0, 0, 0.25);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    color: #fff;
    font-size: 1.4rem;
    font-weight: 700;
    text-decoration: none;
}

.nav-desktop {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-services {
    position: relative;
}

.nav-link {
    background: none;
    border: none;
    color: #e6ecf5;
    font-size: 1rem;
    cursor: pointer;
    display: flex;
    align-items: center;
    gap: 0.35rem;
    text-decoration: none;
}

.chevron {
    display: inline-block;
    transition: transform 0.2s ease;
}

.chevron.up {
    transform: rotate(180deg);
}

.mega-menu {
    position: absolute;
    top: calc(100% + 0.75rem);
    left: 50%;
    width: 720px;
    padding: 1.25rem;
    border-radius: 14px;
    background: #101828;
    border: 1px solid rgba(126, 164, 255, 0.15);
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
    opacity: 0;
    visibility: hidden;
    transform: translate(-50%, -8px);
    transition: opacity 0.2s ease, transform 0.2s ease, visibility 0.2s;
}

.mega-menu.open {
    opacity: 1;
    visibility: visible;
    transform: translate(-50%, 0);
}

.mega-menu-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 0.5rem;
}

.mega-menu-item {
    display: flex;
    gap: 0.75rem;
    padding: 0.6rem;
    border-radius: 10px;
    color: #e6ecf5;
    text-decoration: none;
}

.mega-menu-item:hover {
    background: rgba(126, 164, 255, 0.08);
}

.mega-menu-icon {
    font-size: 1.4rem;
}

.mega-menu-text {
    display: flex;
    flex-direction: column;
}

.mega-menu-title {
    font-weight: 600;
}

.mega-menu-description {
    font-size: 0.85rem;
    color: #97a3b6;
}

.mega-menu-all {
    display: block;
    margin-top: 1rem;
    color: #7ea4ff;
    text-decoration: none;
}

.nav-cta {
    padding: 0.55rem 1.2rem;
    border-radius: 999px;
    background: #3d6bff;
    color: #fff;
    text-decoration: none;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}

.mobile-menu {
    position: fixed;
    inset: 0;
    padding: 1rem 1.5rem;
    background: #0c1220;
    overflow-y: auto;
    transform: translateX(100%);
    transition: transform 0.3s ease;
}

.mobile-menu.open {
    transform: translateX(0);
}

.mobile-menu-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 2rem;
}

.mobile-menu-close {
    background: none;
    border: none;
    color: #fff;
    font-size: 1.5rem;
    cursor: pointer;
}

.mobile-link {
    display: flex;
    justify-content: space-between;
    width: 100%;
    padding: 1rem 0;
    background: none;
    border: none;
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
    color: #fff;
    font-size: 1.2rem;
    text-align: left;
    text-decoration: none;
    cursor: pointer;
}

.mobile-accordion-header.expanded .chevron {
    transform: rotate(180deg);
}

.mobile-accordion-body {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.3s ease;
}

.mobile-accordion-body.expanded {
    max-height: 1200px;
}

.mobile-sublink {
    display: flex;
    gap: 0.75rem;
    padding: 0.7rem 0 0.7rem 1rem;
    color: #c5cfdf;
    text-decoration: none;
}

.mobile-sublink.all {
    color: #7ea4ff;
}

.mobile-cta {
    color: #7ea4ff;
}

@media (max-width: __BREAKPOINT__) {
    .nav-desktop {
        display: none;
    }

    .burger-menu {
        display: flex;
    }
}

@media (min-width: __DESKTOP_FROM__) {
    .mobile-menu {
        display: none;
    }
}
"#;
