use log::error;
use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::scroll::in_reveal_band;

/// Direction a section slides in from while it fades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slide {
    #[default]
    Up,
    Left,
    Right,
}

impl Slide {
    fn class(self) -> &'static str {
        match self {
            Slide::Up => "reveal-up",
            Slide::Left => "reveal-left",
            Slide::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub slide: Slide,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = dom::window().and_then(|window| {
                    let check = {
                        let window = window.clone();
                        move || {
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|height| height.as_f64())
                                .unwrap_or(0.0);
                            let top = element.get_bounding_client_rect().top();
                            // Only ever flips on; a revealed section stays revealed.
                            if in_reveal_band(top, viewport_height) {
                                visible.set(true);
                            }
                        }
                    };
                    check();
                    dom::listen(&window, "scroll", move |_| check())
                });
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        error!("Reveal animation disabled: {}", err);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.slide.class(), (*visible).then(|| "visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Shared transition rules for [`Reveal`]; rendered once by the app shell.
pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    }
    .reveal-up {
        transform: translateY(40px);
    }
    .reveal-left {
        transform: translateX(-60px);
    }
    .reveal-right {
        transform: translateX(60px);
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal {
            transition: none;
            transform: none;
        }
    }
"#;
