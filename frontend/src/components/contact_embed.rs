use log::{error, info};
use yew::prelude::*;

use crate::config;
use crate::dom;

/// Third-party contact form. Shows a placeholder until the first client render
/// has happened and the widget script has been requested.
#[function_component(ContactEmbed)]
pub fn contact_embed() -> Html {
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let src = config::get_embed_script_url();
                match dom::inject_script(src, config::CONTACT_SCRIPT_ELEMENT_ID) {
                    Ok(true) => info!("Loading contact form widget from {}", src),
                    Ok(false) => {}
                    Err(err) => error!("Contact form widget unavailable: {}", err),
                }
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="contact-embed-wrapper">
            <style>
                {r#"
                    .contact-embed-wrapper {
                        min-height: 520px;
                        border-radius: 16px;
                        background: #101828;
                        border: 1px solid rgba(126, 164, 255, 0.15);
                        padding: 1.5rem;
                    }
                    .contact-embed-placeholder {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        min-height: 470px;
                        gap: 1rem;
                        color: #97a3b6;
                    }
                    .contact-embed-spinner {
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        border: 3px solid rgba(126, 164, 255, 0.2);
                        border-top-color: #7ea4ff;
                        animation: contactSpin 0.9s linear infinite;
                    }
                    @keyframes contactSpin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
            {
                if *mounted {
                    html! {
                        <div
                            class="contact-embed"
                            data-form-id={config::CONTACT_FORM_ID}
                            data-origin={config::get_site_origin()}
                        ></div>
                    }
                } else {
                    html! {
                        <div class="contact-embed-placeholder">
                            <div class="contact-embed-spinner"></div>
                            <p>{"Loading the contact form…"}</p>
                        </div>
                    }
                }
            }
        </div>
    }
}
