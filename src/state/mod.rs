// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod ui_state;
pub mod ambient;

pub use reactivity::*;
pub use ui_state::*;
