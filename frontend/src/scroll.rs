use log::error;
use yew::prelude::*;

use crate::config;
use crate::dom;

pub fn is_scrolled(offset_px: f64) -> bool {
    offset_px > config::SCROLL_THRESHOLD_PX
}

/// Whether a section whose top edge sits at `top_px` should be revealed.
pub fn in_reveal_band(top_px: f64, viewport_height_px: f64) -> bool {
    top_px < viewport_height_px * config::REVEAL_VIEWPORT_FRACTION
}

/// Tracks whether the page has scrolled past the nav threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = dom::window().and_then(|window| {
                    let check = {
                        let window = window.clone();
                        move || scrolled.set(is_scrolled(window.scroll_y().unwrap_or(0.0)))
                    };
                    check();
                    dom::listen(&window, "scroll", move |_| check())
                });
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        error!("Scroll tracking disabled: {}", err);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(config::SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(config::SCROLL_THRESHOLD_PX + 1.0));
    }

    #[test]
    fn reveal_band_uses_viewport_fraction() {
        assert!(in_reveal_band(0.0, 800.0));
        assert!(in_reveal_band(-300.0, 800.0));
        assert!(in_reveal_band(679.0, 800.0));
        assert!(!in_reveal_band(700.0, 800.0));
        assert!(!in_reveal_band(2_000.0, 800.0));
    }
}
