// ============================================================================
// USE STATE CONTEXT HOOK - Acceso al estado de UI compartido
// ============================================================================

use yew::prelude::*;

use crate::error::ContextError;
use crate::interfaces::StateContext;

/// Leer el estado de UI compartido.
///
/// # Panics
///
/// Si no hay un [`StateProvider`](crate::context::StateProvider) montado
/// por encima del componente. Es un error de integración: no hay valor por
/// defecto.
#[hook]
pub fn use_state_context() -> StateContext {
    expect_provider(use_context::<StateContext>())
}

/// Igual que [`use_state_context`], pero devuelve el error en vez de panic.
#[hook]
pub fn use_try_state_context() -> Result<StateContext, ContextError> {
    require_provider(use_context::<StateContext>())
}

pub fn require_provider(context: Option<StateContext>) -> Result<StateContext, ContextError> {
    context.ok_or(ContextError::MissingProvider)
}

pub fn expect_provider(context: Option<StateContext>) -> StateContext {
    match require_provider(context) {
        Ok(context) => context,
        Err(e) => panic!("{}", e),
    }
}
