// ============================================================================
// VIEWS - Una función de render por vista
// ============================================================================

pub mod index;
pub mod model;

pub use index::render_index;
pub use model::render_model;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::filters::FilterRegistry;
use crate::router::{RouteMatch, ViewId};

/// Todo lo que una vista necesita, inyectado por `App`
pub struct RenderContext<'a> {
    pub route: &'a RouteMatch,
    pub filters: &'a FilterRegistry,
    pub config: &'a AppConfig,
}

impl RenderContext<'_> {
    /// Aplicar un filtro registrado; texto vacío si no existe
    pub fn filter(&self, name: &str, value: Option<f64>, decimals: Option<u32>) -> String {
        self.filters.apply(name, value, decimals).unwrap_or_else(|| {
            log::warn!("⚠️ [VIEW] Filtro desconocido: {}", name);
            String::new()
        })
    }
}

/// Renderizar la vista de la ruta actual
pub fn render_view(ctx: &RenderContext) -> Result<Element, JsValue> {
    match ctx.route.view {
        ViewId::Index => render_index(ctx),
        ViewId::Model => render_model(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;

    #[test]
    fn test_context_filter_lookup() {
        let route = Router::with_default_routes().unwrap().resolve("/resnet").unwrap();
        let filters = FilterRegistry::with_defaults();
        let config = AppConfig::default();
        let ctx = RenderContext {
            route: &route,
            filters: &filters,
            config: &config,
        };

        assert_eq!(ctx.filter("percentage", Some(0.7612), Some(1)), "76.1%");
        assert_eq!(ctx.filter("round", Some(4.256), Some(2)), "4.26");
        assert_eq!(ctx.filter("missing", Some(1.0), None), "");
    }
}
