// ============================================================================
// STATE PROVIDER - Comparte el estado de UI con todo el árbol
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::interfaces::{ChildrenProps, StateContext};
use crate::state::{ambient, UiSessionState};

/// Provider component que envuelve la app y proporciona el estado de UI.
///
/// Crea un único [`UiSessionState`] por montaje y se re-renderiza (y con él
/// todos los consumidores del contexto) cada vez que cambia el sidebar.
#[function_component(StateProvider)]
pub fn state_provider(props: &ChildrenProps) -> Html {
    // Se ejecuta una sola vez por montaje
    let state = use_memo((), |_| UiSessionState::new());
    let force_update = use_force_update();

    let context: StateContext = state.context();

    {
        let state = (*state).clone();
        let rendered = context.is_sidebar_open;
        use_effect_with((), move |_| {
            connect_provider(&state, rendered, move || force_update.force_update())
        });
    }

    html! {
        <ContextProvider<StateContext> context={context}>
            {props.children.clone()}
        </ContextProvider<StateContext>>
    }
}

/// Conecta el estado con el re-render del provider y lo registra en el slot
/// global. Devuelve el teardown del efecto.
///
/// Yew ejecuta los efectos de los hijos antes que los del padre: si un hijo
/// cambió el valor en su propio efecto, `rendered` ya no coincide y se pide
/// un re-render inmediato.
pub(crate) fn connect_provider<F>(
    state: &UiSessionState,
    rendered: bool,
    rerender: F,
) -> impl FnOnce()
where
    F: Fn() + 'static,
{
    let rerender = Rc::new(rerender);

    let subscription = {
        let rerender = rerender.clone();
        state.subscribe(move |open| {
            log::debug!("🔄 [STATE] Sidebar {}", if open { "abierto" } else { "cerrado" });
            rerender();
        })
    };

    if state.is_sidebar_open() != rendered {
        log::debug!("🔄 [STATE] Valor cambiado antes de suscribirse, re-renderizando");
        rerender();
    }

    let registered = match ambient::mount(state.clone()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("⚠️ [STATE] {}, este provider queda local a su subárbol", e);
            false
        }
    };
    log::debug!("✅ [STATE] StateProvider montado");

    let state = state.clone();
    move || {
        state.unsubscribe(subscription);
        if registered {
            ambient::unmount();
        }
        log::debug!("🧹 [STATE] StateProvider desmontado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_state_context;
    use crate::interfaces::SetStateAction;
    use std::cell::Cell;
    use yew::ServerRenderer;

    #[function_component]
    fn FlagView() -> Html {
        let ctx = use_state_context();
        html! { <span id="flag">{ if ctx.is_sidebar_open { "open" } else { "closed" } }</span> }
    }

    #[function_component]
    fn NestedFlag() -> Html {
        html! { <div><section><FlagView /></section></div> }
    }

    #[function_component]
    fn ProviderFixture() -> Html {
        html! {
            <StateProvider>
                <FlagView />
                <NestedFlag />
            </StateProvider>
        }
    }

    #[tokio::test]
    async fn test_consumers_start_closed() {
        let rendered = ServerRenderer::<ProviderFixture>::new()
            .hydratable(false)
            .render()
            .await;

        assert_eq!(rendered.matches(r#"<span id="flag">closed</span>"#).count(), 2);
        assert!(!rendered.contains("open"));
    }

    /// Simula el ciclo de Yew: cada re-render vuelve a tomar el snapshot
    /// del contexto que ven los consumidores.
    struct RenderLoop {
        state: UiSessionState,
        published: Rc<Cell<bool>>,
        renders: Rc<Cell<usize>>,
    }

    impl RenderLoop {
        fn mount() -> Self {
            let state = UiSessionState::new();
            let published = Rc::new(Cell::new(state.context().is_sidebar_open));
            Self {
                state,
                published,
                renders: Rc::new(Cell::new(1)),
            }
        }

        fn connect(&self) -> impl FnOnce() {
            let state = self.state.clone();
            let published = self.published.clone();
            let renders = self.renders.clone();
            connect_provider(&self.state, self.published.get(), move || {
                published.set(state.context().is_sidebar_open);
                renders.set(renders.get() + 1);
            })
        }
    }

    #[test]
    fn test_consumers_follow_every_setter_call() {
        let tree = RenderLoop::mount();
        let teardown = tree.connect();
        let setter = tree.state.setter();

        assert!(!tree.published.get());
        setter.set(true);
        assert!(tree.published.get());
        setter.set(SetStateAction::update(|prev: &bool| !prev));
        assert!(!tree.published.get());
        setter.toggle();
        assert!(tree.published.get());
        assert_eq!(tree.renders.get(), 4);

        teardown();
    }

    #[test]
    fn test_change_before_subscription_triggers_rerender() {
        let tree = RenderLoop::mount();

        // Efecto de un hijo que corre antes que el del provider
        tree.state.setter().open();
        assert!(!tree.published.get());

        let teardown = tree.connect();

        assert!(tree.published.get());
        assert_eq!(tree.renders.get(), 2);
        teardown();
    }

    #[test]
    fn test_no_rerender_when_value_unchanged_at_mount() {
        let tree = RenderLoop::mount();
        let teardown = tree.connect();

        assert_eq!(tree.renders.get(), 1);
        teardown();
    }

    #[test]
    fn test_teardown_unsubscribes_and_releases_slot() {
        let tree = RenderLoop::mount();
        let teardown = tree.connect();
        assert!(ambient::is_mounted());

        teardown();
        tree.state.setter().open();

        assert!(!ambient::is_mounted());
        assert!(!tree.published.get());
        assert_eq!(tree.renders.get(), 1);
    }

    #[test]
    fn test_second_provider_stays_local() {
        let first = RenderLoop::mount();
        let second = RenderLoop::mount();
        let first_teardown = first.connect();
        let second_teardown = second.connect();

        let mounted = ambient::with_mounted(|state| state.clone()).unwrap();
        assert!(mounted.ptr_eq(&first.state));

        second.state.setter().open();
        assert!(second.published.get());
        assert!(!first.published.get());

        second_teardown();
        assert!(ambient::is_mounted());
        first_teardown();
        assert!(!ambient::is_mounted());
    }
}
