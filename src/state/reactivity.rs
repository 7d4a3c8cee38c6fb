// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::interfaces::SetStateAction;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Devuelto por [`ReactiveState::subscribe`], sirve para desuscribirse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: Cell<u64>,
}

/// Estado reactivo con sistema de notificaciones.
///
/// Los clones comparten la celda y la lista de subscribers.
pub struct ReactiveState<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + PartialEq + 'static> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Leer el valor actual sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.inner.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers.
    ///
    /// Asignar un valor igual al actual no hace nada.
    pub fn set(&self, new_value: T) {
        {
            let mut value = self.inner.value.borrow_mut();
            if *value == new_value {
                return;
            }
            *value = new_value;
        }
        self.notify();
    }

    /// Calcular el nuevo valor a partir del actual y aplicarlo como `set`
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = updater(&self.inner.value.borrow());
        self.set(next);
    }

    pub fn apply(&self, action: SetStateAction<T>) {
        match action {
            SetStateAction::Value(value) => self.set(value),
            SetStateAction::Update(updater) => self.update(updater),
        }
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    /// Devuelve `false` si el id ya no estaba suscrito
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Notificar a todos los subscribers.
    ///
    /// Recorre una copia de la lista y entrega a cada callback el valor
    /// vigente en ese momento: los callbacks pueden llamar a `set`/`subscribe`.
    fn notify(&self) {
        let snapshot: Vec<Subscriber<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in snapshot {
            let value = self.get();
            callback(&value);
        }
    }

    /// Obtener copia del valor actual
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
