use yew::prelude::*;

use crate::config::CONFIG;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{ CONFIG.footer_text.clone() }</p>
        </footer>
    }
}
