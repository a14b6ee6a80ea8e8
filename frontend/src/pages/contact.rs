use yew::prelude::*;

use crate::components::contact_embed::ContactEmbed;
use crate::components::reveal::Reveal;
use crate::dom;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 9rem 1.5rem 5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        color: #c5cfdf;
                    }
                    .contact-page h1 {
                        color: #fff;
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        margin: 0 0 1rem;
                    }
                    .contact-details {
                        list-style: none;
                        padding: 0;
                        line-height: 2;
                    }
                    @media (max-width: 960px) {
                        .contact-page {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <Reveal>
                <h1>{"Let's talk"}</h1>
                <p>{"Tell us what you are building and where you are stuck. We reply within one working day."}</p>
                <ul class="contact-details">
                    <li>{"hello@northbeam.dev"}</li>
                    <li>{"Mon–Fri, 9:00–17:00 CET"}</li>
                </ul>
            </Reveal>
            <ContactEmbed />
        </div>
    }
}
