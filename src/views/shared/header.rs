use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_state_context;
use crate::views::shared::Sidebar;

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_state_context();
    let onclick = ctx.set_is_sidebar_open.toggle_callback::<MouseEvent>();

    html! {
        <header class="app-header">
            <button
                class="btn-menu"
                aria-label="Toggle navigation"
                aria-expanded={ctx.is_sidebar_open.to_string()}
                onclick={onclick}
            >
                {"☰"}
            </button>
            <h1>{ CONFIG.app_title.clone() }</h1>
            <Sidebar />
        </header>
    }
}
