// ============================================================================
// UI SESSION STATE - Flag del sidebar compartido por todo el árbol
// ============================================================================

use crate::interfaces::{SidebarSetter, StateContext};
use crate::state::reactivity::{ReactiveState, SubscriptionId};

/// Una instancia por `StateProvider` montado. Los clones comparten la celda.
#[derive(Clone)]
pub struct UiSessionState {
    sidebar_open: ReactiveState<bool>,
}

impl UiSessionState {
    /// Crear estado inicial (sidebar cerrado)
    pub fn new() -> Self {
        Self {
            sidebar_open: ReactiveState::new(false),
        }
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open.get()
    }

    pub fn setter(&self) -> SidebarSetter {
        SidebarSetter::new(self.sidebar_open.clone())
    }

    /// Snapshot publicado a través del contexto
    pub fn context(&self) -> StateContext {
        StateContext {
            is_sidebar_open: self.is_sidebar_open(),
            set_is_sidebar_open: self.setter(),
        }
    }

    /// Se llama de forma síncrona tras cada cambio del flag
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + 'static,
    {
        self.sidebar_open.subscribe(move |open| callback(*open))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.sidebar_open.unsubscribe(id)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.sidebar_open.ptr_eq(&other.sidebar_open)
    }
}

impl Default for UiSessionState {
    fn default() -> Self {
        Self::new()
    }
}
