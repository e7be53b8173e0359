// ============================================================================
// ROUTER MODULE - Tabla de rutas estática + resolución de paths
// ============================================================================
// Las rutas se evalúan en orden y gana la primera que coincide.
// Un path sin coincidencia resuelve a `None` (la vista queda vacía).
// ============================================================================

pub mod pattern;

pub use pattern::*;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Identificador de vista (las vistas se renderizan en `crate::views`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewId {
    /// Listado principal
    Index,
    /// Detalle de un modelo (`:model`)
    Model,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Index => f.write_str("Index"),
            ViewId::Model => f.write_str("Model"),
        }
    }
}

/// Entrada de la tabla de rutas
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub view: ViewId,
}

impl Route {
    pub fn new(pattern: &str, view: ViewId) -> Result<Self, String> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            view,
        })
    }
}

/// Resultado de resolver un path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub view: ViewId,
    pub path: String,
    pub pattern: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// De dónde se lee el path actual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterMode {
    /// `location.hash` ("#/resnet50")
    #[default]
    Hash,
    /// `location.pathname` ("/resnet50")
    History,
}

impl FromStr for RouterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(RouterMode::Hash),
            "history" => Ok(RouterMode::History),
            other => Err(format!("Modo de router desconocido: '{}'", other)),
        }
    }
}

impl RouterMode {
    /// Evento de `window` que indica navegación en este modo
    pub fn navigation_event(&self) -> &'static str {
        match self {
            RouterMode::Hash => "hashchange",
            RouterMode::History => "popstate",
        }
    }

    /// `href` de un enlace interno: "#/resnet" o "/resnet"
    pub fn href(&self, path: &str) -> String {
        let path = normalize_path(path);
        match self {
            RouterMode::Hash => format!("#{}", path),
            RouterMode::History => path,
        }
    }
}

/// Router con tabla inmutable
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// `/` -> Index, `/:model` -> Model
    pub fn with_default_routes() -> Result<Self, String> {
        Ok(Self::new(vec![
            Route::new("/", ViewId::Index)?,
            Route::new("/:model", ViewId::Model)?,
        ]))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolver un path. Se ignoran query y fragmento.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = normalize_path(path);
        self.routes.iter().find_map(|route| {
            route.pattern.matches(&path).map(|params| RouteMatch {
                view: route.view,
                path: path.clone(),
                pattern: route.pattern.to_string(),
                params,
            })
        })
    }

    /// Leer el path actual del navegador según el modo
    pub fn current_path(mode: RouterMode) -> Option<String> {
        let location = web_sys::window()?.location();
        let path = match mode {
            RouterMode::Hash => {
                let hash = location.hash().ok()?;
                hash.strip_prefix('#').unwrap_or(&hash).to_string()
            }
            RouterMode::History => location.pathname().ok()?,
        };
        Some(normalize_path(&path))
    }
}

/// "" -> "/", "model?x=1" -> "/model"
pub fn normalize_path(path: &str) -> String {
    let end = path.find(|c| c == '?' || c == '#').unwrap_or(path.len());
    let path = path[..end].trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::with_default_routes().unwrap()
    }

    #[test]
    fn test_default_table_order() {
        let router = router();
        let patterns: Vec<&str> = router.routes().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/", "/:model"]);
    }

    #[test]
    fn test_root_resolves_index() {
        let matched = router().resolve("/").unwrap();
        assert_eq!(matched.view, ViewId::Index);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(router().resolve("").unwrap().view, ViewId::Index);
    }

    #[test]
    fn test_segment_resolves_model() {
        let matched = router().resolve("/anything").unwrap();
        assert_eq!(matched.view, ViewId::Model);
        assert_eq!(matched.param("model"), Some("anything"));
        assert_eq!(matched.pattern, "/:model");
    }

    #[test]
    fn test_query_and_trailing_slash_ignored() {
        let matched = router().resolve("/resnet50/?sort=top1").unwrap();
        assert_eq!(matched.view, ViewId::Model);
        assert_eq!(matched.param("model"), Some("resnet50"));
        assert_eq!(matched.path, "/resnet50/");
    }

    #[test]
    fn test_unmatched_path() {
        assert!(router().resolve("/a/b").is_none());
        assert!(Router::new(Vec::new()).resolve("/").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::new(vec![
            Route::new("/:model", ViewId::Model).unwrap(),
            Route::new("/about", ViewId::Index).unwrap(),
        ]);
        assert_eq!(router.resolve("/about").unwrap().view, ViewId::Model);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("model?x=1"), "/model");
        assert_eq!(normalize_path("/a#b"), "/a");
    }

    #[test]
    fn test_router_mode_parse() {
        assert_eq!("hash".parse::<RouterMode>(), Ok(RouterMode::Hash));
        assert_eq!(" History ".parse::<RouterMode>(), Ok(RouterMode::History));
        assert!("abstract".parse::<RouterMode>().is_err());
        assert_eq!(RouterMode::default().navigation_event(), "hashchange");
    }

    #[test]
    fn test_router_mode_href() {
        assert_eq!(RouterMode::Hash.href("/"), "#/");
        assert_eq!(RouterMode::Hash.href("resnet"), "#/resnet");
        assert_eq!(RouterMode::History.href("/resnet"), "/resnet");
    }
}
