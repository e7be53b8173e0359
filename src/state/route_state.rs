// ============================================================================
// ROUTE STATE - Ruta actual de la aplicación
// ============================================================================

use crate::router::{RouteMatch, Router};
use crate::state::ReactiveState;

/// Ruta resuelta actualmente (`None` = ninguna ruta coincide)
#[derive(Clone)]
pub struct RouteState {
    current: ReactiveState<Option<RouteMatch>>,
}

impl RouteState {
    pub fn new() -> Self {
        Self {
            current: ReactiveState::new(None),
        }
    }

    pub fn current(&self) -> Option<RouteMatch> {
        self.current.get_cloned()
    }

    /// Resolver `path` y guardar el resultado. Solo notifica si la ruta cambió.
    pub fn navigate(&self, router: &Router, path: &str) -> bool {
        let matched = router.resolve(path);
        match &matched {
            Some(m) => log::debug!("🧭 [ROUTER] {} -> {} {:?}", path, m.view, m.params),
            None => log::warn!("⚠️ [ROUTER] Sin ruta para '{}'", path),
        }
        self.current.set_if_changed(matched)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::ViewId;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_navigate_updates_current() {
        let router = Router::with_default_routes().unwrap();
        let state = RouteState::new();
        assert!(state.current().is_none());

        assert!(state.navigate(&router, "/squeezenext"));
        let current = state.current().unwrap();
        assert_eq!(current.view, ViewId::Model);
        assert_eq!(current.param("model"), Some("squeezenext"));
    }

    #[test]
    fn test_same_route_does_not_notify() {
        let router = Router::with_default_routes().unwrap();
        let state = RouteState::new();
        let renders = Rc::new(Cell::new(0));
        let renders_clone = renders.clone();
        state.subscribe(move || renders_clone.set(renders_clone.get() + 1));

        state.navigate(&router, "/");
        state.navigate(&router, "/");
        state.navigate(&router, "/resnet");
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn test_unmatched_clears_route() {
        let router = Router::with_default_routes().unwrap();
        let state = RouteState::new();
        state.navigate(&router, "/");
        assert!(state.navigate(&router, "/a/b/c"));
        assert!(state.current().is_none());
    }
}
