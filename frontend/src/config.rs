/// Grace period before a pointer leaving the services dropdown closes it.
pub const HOVER_CLOSE_DELAY_MS: u32 = 150;

/// Page offset after which the nav switches to its solid "scrolled" look.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Below this width the mobile overlay replaces the desktop links (CSS only).
pub const MOBILE_BREAKPOINT_PX: u32 = 960;

/// A section reveals once its top edge is above this fraction of the viewport.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

pub const CONTACT_FORM_ID: &str = "nb-contact-2024";
pub const CONTACT_SCRIPT_ELEMENT_ID: &str = "contact-embed-script";

pub const SITE_NAME: &str = "Northbeam";

#[cfg(debug_assertions)]
pub fn get_embed_script_url() -> &'static str {
    "http://localhost:8081/embed.js"  // Local stub of the form widget
}

#[cfg(not(debug_assertions))]
pub fn get_embed_script_url() -> &'static str {
    "https://embed.formloom.io/v2/embed.js"
}

#[cfg(debug_assertions)]
pub fn get_site_origin() -> &'static str {
    "http://localhost:8080"
}

#[cfg(not(debug_assertions))]
pub fn get_site_origin() -> &'static str {
    "https://northbeam.dev"
}
