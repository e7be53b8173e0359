// ============================================================================
// EVENT HANDLING - Listeners globales en window
// ============================================================================
// Los listeners de window solo se registran UNA VEZ al arrancar la app;
// el closure se mantiene vivo con forget().
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::dom::window;

/// Registrar listener en window (p.ej. "hashchange", "popstate")
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
