use yew::prelude::*;

use crate::pages::Page;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page page-not-found">
            <h2>{"Page not found"}</h2>
            <a href={Page::Home.path()}>{"Back to home"}</a>
        </section>
    }
}
