// ============================================================================
// UI SHELL - Estado de UI compartido + Layout (Rust + Yew)
// ============================================================================
// - interfaces: Props y forma del contexto
// - state: Celda reactiva del sidebar + slot global
// - context: StateProvider
// - hooks: use_state_context
// - views: Layout + Header/Sidebar/Footer
// - pages: Páginas y resolución desde la URL
// ============================================================================

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod interfaces;
pub mod pages;
pub mod state;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::ambient;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 {} ({})", CONFIG.app_title, CONFIG.environment);

    yew::Renderer::<App>::new().render();
    Ok(())
}

/// Toggle del sidebar desde JavaScript. Devuelve el nuevo valor.
#[wasm_bindgen]
pub fn toggle_sidebar() -> Result<bool, JsValue> {
    ambient::with_mounted(|state| {
        state.setter().toggle();
        state.is_sidebar_open()
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn set_sidebar_open(open: bool) -> Result<(), JsValue> {
    ambient::with_mounted(|state| state.setter().set(open))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn is_sidebar_open() -> Result<bool, JsValue> {
    ambient::with_mounted(|state| state.is_sidebar_open())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
