//! Client-side routes

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Portfolio,
    Admin,
}

impl Route {
    /// Navbar order
    pub const ALL: [Route; 3] = [Route::Home, Route::Portfolio, Route::Admin];

    /// Resolve a location path; `None` for anything unknown
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/portfolio" => Some(Route::Portfolio),
            "/admin" => Some(Route::Admin),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Portfolio => "/portfolio",
            Route::Admin => "/admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Portfolio => "Portafolio",
            Route::Admin => "Panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/admin/"), Some(Route::Admin));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/blog"), None);
        assert_eq!(Route::from_path("/admin/extra"), None);
    }
}
