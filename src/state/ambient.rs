// ============================================================================
// AMBIENT SLOT - Estado de UI accesible fuera del árbol de componentes
// ============================================================================
// El StateProvider montado registra aquí su estado para que JavaScript
// (exports en lib.rs) pueda accederlo. Montaje/desmontaje explícitos.
// ============================================================================

use std::cell::RefCell;

use crate::error::AmbientError;
use crate::state::ui_state::UiSessionState;

thread_local! {
    static MOUNTED: RefCell<Option<UiSessionState>> = RefCell::new(None);
}

/// Registrar el estado del provider montado
pub fn mount(state: UiSessionState) -> Result<(), AmbientError> {
    MOUNTED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(AmbientError::AlreadyMounted);
        }
        *slot = Some(state);
        Ok(())
    })
}

/// Liberar el slot (provider desmontado)
pub fn unmount() -> Option<UiSessionState> {
    MOUNTED.with(|slot| slot.borrow_mut().take())
}

pub fn is_mounted() -> bool {
    MOUNTED.with(|slot| slot.borrow().is_some())
}

/// Ejecutar `f` sobre el estado montado. El slot no queda prestado mientras
/// `f` corre, así los subscribers pueden volver a leerlo.
pub fn with_mounted<R>(f: impl FnOnce(&UiSessionState) -> R) -> Result<R, AmbientError> {
    let state = MOUNTED
        .with(|slot| slot.borrow().clone())
        .ok_or(AmbientError::NotMounted)?;
    Ok(f(&state))
}
