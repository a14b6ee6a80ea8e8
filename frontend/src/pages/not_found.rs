use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        padding: 9rem 1.5rem 5rem;
                        color: #c5cfdf;
                        text-align: center;
                    }
                    .not-found h1 {
                        color: #fff;
                        font-size: 4rem;
                        margin: 0;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"That page does not exist, or it moved."}</p>
            <Link<Route> to={Route::Home} classes="button-primary">
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}
