// ============================================================================
// INTERFACES - Props y forma del contexto compartido
// ============================================================================

use std::fmt;

use yew::prelude::*;

use crate::state::ReactiveState;

/// Props para componentes que solo envuelven a sus hijos.
#[derive(Properties, PartialEq)]
pub struct ChildrenProps {
    #[prop_or_default]
    pub children: Children,
}

/// Nuevo valor para una celda de estado: el valor directo o una función
/// del valor anterior.
pub enum SetStateAction<T> {
    Value(T),
    Update(Box<dyn FnOnce(&T) -> T>),
}

impl<T> SetStateAction<T> {
    pub fn update<F>(updater: F) -> Self
    where
        F: FnOnce(&T) -> T + 'static,
    {
        SetStateAction::Update(Box::new(updater))
    }
}

impl<T> From<T> for SetStateAction<T> {
    fn from(value: T) -> Self {
        SetStateAction::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for SetStateAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetStateAction::Value(value) => f.debug_tuple("Value").field(value).finish(),
            SetStateAction::Update(_) => f.write_str("Update(..)"),
        }
    }
}

/// Setter del sidebar. Los clones apuntan a la misma celda.
#[derive(Clone)]
pub struct SidebarSetter {
    cell: ReactiveState<bool>,
}

impl SidebarSetter {
    pub(crate) fn new(cell: ReactiveState<bool>) -> Self {
        Self { cell }
    }

    /// Acepta un `bool` o un closure [`SetStateAction::update`].
    pub fn set(&self, action: impl Into<SetStateAction<bool>>) {
        self.cell.apply(action.into());
    }

    pub fn toggle(&self) {
        self.set(SetStateAction::update(|open: &bool| !open));
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }

    /// [`toggle`](Self::toggle) como callback de evento.
    pub fn toggle_callback<E: 'static>(&self) -> Callback<E> {
        let setter = self.clone();
        Callback::from(move |_: E| setter.toggle())
    }

    /// [`close`](Self::close) como callback de evento.
    pub fn close_callback<E: 'static>(&self) -> Callback<E> {
        let setter = self.clone();
        Callback::from(move |_: E| setter.close())
    }
}

impl PartialEq for SidebarSetter {
    fn eq(&self, other: &Self) -> bool {
        self.cell.ptr_eq(&other.cell)
    }
}

impl fmt::Debug for SidebarSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarSetter")
            .field("is_sidebar_open", &self.cell.get())
            .finish()
    }
}

/// Valor que `StateProvider` publica a todos sus descendientes.
#[derive(Clone, PartialEq, Debug)]
pub struct StateContext {
    pub is_sidebar_open: bool,
    pub set_is_sidebar_open: SidebarSetter,
}
