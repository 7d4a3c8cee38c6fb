// ============================================================================
// PAGES - Resolución de página a partir de la URL
// ============================================================================

pub mod home;
pub mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    NotFound,
}

impl Page {
    /// Páginas listadas en el sidebar
    pub const NAVIGATION: &'static [Page] = &[Page::Home];

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/index.html" => Page::Home,
            _ => Page::NotFound,
        }
    }

    /// Página de la URL actual (Home si no se puede leer)
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Self::from_path(&path))
            .unwrap_or(Page::Home)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::NotFound => "Not found",
        }
    }

    pub fn render(&self) -> Html {
        match self {
            Page::Home => html! { <HomePage /> },
            Page::NotFound => html! { <NotFoundPage /> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/tracks"), Page::NotFound);
        assert_eq!(Page::from_path("/404"), Page::NotFound);
    }

    #[test]
    fn test_navigation_paths_resolve_to_themselves() {
        for page in Page::NAVIGATION {
            assert_eq!(Page::from_path(page.path()), *page);
        }
    }
}
