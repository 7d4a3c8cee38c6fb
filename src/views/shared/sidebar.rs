use yew::prelude::*;

use crate::hooks::use_state_context;
use crate::pages::Page;

/// Panel de navegación controlado por el flag compartido
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let ctx = use_state_context();
    let on_close = ctx.set_is_sidebar_open.close_callback::<MouseEvent>();

    html! {
        <aside
            class={classes!("sidebar", ctx.is_sidebar_open.then_some("open"))}
            aria-hidden={(!ctx.is_sidebar_open).to_string()}
        >
            <button class="btn-close" aria-label="Close navigation" onclick={on_close}>
                {"✕"}
            </button>
            <nav>
                <ul>
                    { for Page::NAVIGATION.iter().map(|page| html! {
                        <li><a href={page.path()}>{ page.title() }</a></li>
                    }) }
                </ul>
            </nav>
        </aside>
    }
}
