// ============================================================================
// APP - Raíz de la aplicación: StateProvider > Layout > Página
// ============================================================================

use yew::prelude::*;

use crate::context::StateProvider;
use crate::pages::Page;
use crate::views::Layout;

#[derive(Properties, PartialEq)]
pub struct AppRootProps {
    pub page: Page,
}

/// Envuelve la página con el provider (exterior) y el layout: tanto el
/// chrome como la página ven el estado compartido.
#[function_component(AppRoot)]
pub fn app_root(props: &AppRootProps) -> Html {
    html! {
        <StateProvider>
            <Layout>
                { props.page.render() }
            </Layout>
        </StateProvider>
    }
}

/// Aplicación principal (resuelve la página desde la URL)
#[function_component(App)]
pub fn app() -> Html {
    let page = use_memo((), |_| Page::current());
    log::debug!("📄 [APP] Página: {:?}", *page);

    html! { <AppRoot page={*page} /> }
}
