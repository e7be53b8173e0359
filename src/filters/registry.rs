// ============================================================================
// FILTER REGISTRY - Filtros con nombre invocables desde las vistas
// ============================================================================
// Se construye una vez en el arranque y se inyecta en `App` (sin estado global).
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::format::{percentage, round};
use super::number::js_number_string;

/// Filtro de presentación: (valor, decimales) -> texto
pub type Filter = Rc<dyn Fn(Option<f64>, Option<u32>) -> String>;

pub const PERCENTAGE: &str = "percentage";
pub const ROUND: &str = "round";

/// Registro de filtros por nombre
#[derive(Clone, Default)]
pub struct FilterRegistry {
    filters: BTreeMap<String, Filter>,
}

impl FilterRegistry {
    /// Registro vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Registro con `percentage` y `round`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PERCENTAGE, percentage);
        registry.register(ROUND, |value, decimals| js_number_string(round(value, decimals)));
        registry
    }

    /// Registrar (o reemplazar) un filtro
    pub fn register<F>(&mut self, name: &str, filter: F) -> &mut Self
    where
        F: Fn(Option<f64>, Option<u32>) -> String + 'static,
    {
        if self.filters.insert(name.to_string(), Rc::new(filter)).is_some() {
            log::warn!("⚠️ [FILTERS] Filtro '{}' reemplazado", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Filter> {
        self.filters.get(name).cloned()
    }

    /// Aplicar filtro por nombre. `None` si no existe.
    pub fn apply(&self, name: &str, value: Option<f64>, decimals: Option<u32>) -> Option<String> {
        self.filters.get(name).map(|filter| filter(value, decimals))
    }

    pub fn names(&self) -> Vec<&str> {
        self.filters.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .finish()
    }
}
