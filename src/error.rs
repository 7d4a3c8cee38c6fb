// ============================================================================
// ERRORS - Errores del estado de UI
// ============================================================================

use thiserror::Error;

/// Fallo al leer el contexto. Es un error de integración, no de runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("use_state_context must be used within a StateProvider")]
    MissingProvider,
}

/// Uso incorrecto del slot global de estado de UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmbientError {
    #[error("a StateProvider is already mounted")]
    AlreadyMounted,
    #[error("no StateProvider is mounted")]
    NotMounted,
}
