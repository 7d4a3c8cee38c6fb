use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_state_context;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_state_context();
    let onclick = ctx.set_is_sidebar_open.toggle_callback::<MouseEvent>();

    html! {
        <section class="page page-home">
            <h2>{ format!("Welcome to {}", CONFIG.app_title) }</h2>
            <p class="sidebar-status">
                { if ctx.is_sidebar_open { "Menu is open" } else { "Menu is closed" } }
            </p>
            <button class="btn-primary" onclick={onclick}>
                { if ctx.is_sidebar_open { "Hide menu" } else { "Show menu" } }
            </button>
        </section>
    }
}
