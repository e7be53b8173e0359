// ============================================================================
// APP - Raíz de la aplicación montada en #app
// ============================================================================
// Router, filtros y configuración se inyectan en el constructor.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{get_element_by_id, set_inner_html, append_child, set_document_title};
use crate::filters::FilterRegistry;
use crate::router::Router;
use crate::state::RouteState;
use crate::views::{render_view, RenderContext};

pub struct App {
    config: AppConfig,
    router: Router,
    filters: FilterRegistry,
    route: RouteState,
    root: Element,
}

impl App {
    /// Crear la aplicación sobre el punto de montaje configurado
    pub fn new(config: AppConfig, router: Router, filters: FilterRegistry) -> Result<Self, JsValue> {
        let root = get_element_by_id(&config.mount_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", config.mount_id)))?;

        log::info!(
            "🧩 [APP] Montando en #{} ({} rutas, filtros: {:?})",
            config.mount_id,
            router.routes().len(),
            filters.names()
        );

        Ok(Self {
            config,
            router,
            filters,
            route: RouteState::new(),
            root,
        })
    }

    /// Evento de window que dispara la navegación en el modo configurado
    pub fn navigation_event(&self) -> &'static str {
        self.config.router_mode.navigation_event()
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn route_state(&self) -> &RouteState {
        &self.route
    }

    /// Leer el path del navegador y actualizar la ruta actual.
    /// Devuelve `true` si la ruta cambió.
    pub fn sync_route(&self) -> bool {
        let path = Router::current_path(self.config.router_mode).unwrap_or_else(|| "/".to_string());
        self.route.navigate(&self.router, &path)
    }

    /// Re-render (batcheado con un timeout 0) cada vez que cambia la ruta
    pub fn subscribe_rerender(&self) {
        self.route.subscribe(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::rerender_app).forget();
        });
    }

    /// Renderizar la vista de la ruta actual (vacío si no hay ruta)
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        set_document_title(&self.config.app_title);

        let Some(route) = self.route.current() else {
            log::debug!("🔄 [APP] Sin ruta activa, nada que renderizar");
            return Ok(());
        };

        let ctx = RenderContext {
            route: &route,
            filters: &self.filters,
            config: &self.config,
        };
        let view = render_view(&ctx)?;
        append_child(&self.root, &view)?;

        log::debug!("✅ [APP] Vista {} renderizada ({})", route.view, route.path);
        Ok(())
    }
}
