// ============================================================================
// MODEL GALLERY - SPA en Rust puro (WASM)
// ============================================================================
// - Router: tabla estática "/" -> Index, "/:model" -> Model (modo hash)
// - Filters: `percentage` y `round` para las vistas
// - App: raíz montada en #app, se re-renderiza al navegar
// ============================================================================

pub mod config;
pub mod filters;
pub mod router;
pub mod state;
pub mod dom;
pub mod views;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::filters::FilterRegistry;
use crate::router::Router;

// Instancia única de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 {} - Rust Puro ({})", CONFIG.app_title, CONFIG.environment);
    if let Ok(json) = serde_json::to_string(&*CONFIG) {
        log::debug!("⚙️ [CONFIG] {}", json);
    }

    let router = Router::with_default_routes().map_err(|e| JsValue::from_str(&e))?;
    let app = App::new(CONFIG.clone(), router, FilterRegistry::with_defaults())?;

    app.sync_route();
    app.render()?;
    app.subscribe_rerender();
    let navigation_event = app.navigation_event();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listener global de navegación: se registra UNA sola vez aquí
    dom::on_window_event(navigation_event, |_e| {
        APP.with(|app_cell| {
            if let Some(ref app) = *app_cell.borrow() {
                app.sync_route();
            }
        });
    })?;

    Ok(())
}

/// Re-render completo de la vista actual
pub fn rerender_app() {
    APP.with(|app_cell| match *app_cell.borrow() {
        Some(ref app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Filtro `percentage` para plantillas del host
#[wasm_bindgen]
pub fn format_percentage(value: Option<f64>, decimals: Option<u32>) -> String {
    filters::percentage(value, decimals)
}

/// Filtro `round` para plantillas del host
#[wasm_bindgen]
pub fn format_round(value: Option<f64>, decimals: Option<u32>) -> f64 {
    filters::round(value, decimals)
}

/// Aplicar un filtro registrado en la App por nombre
#[wasm_bindgen]
pub fn apply_filter(name: &str, value: Option<f64>, decimals: Option<u32>) -> Option<String> {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .and_then(|app| app.filters().apply(name, value, decimals))
    })
}

/// Ruta actual serializada como JSON (`null` si ninguna coincide)
#[wasm_bindgen]
pub fn current_route_json() -> Option<String> {
    APP.with(|app_cell| {
        let borrowed = app_cell.borrow();
        let route = borrowed.as_ref()?.route_state().current()?;
        serde_json::to_string(&route).ok()
    })
}
