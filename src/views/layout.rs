// ============================================================================
// LAYOUT - Header + contenido de la página + Footer
// ============================================================================

use yew::prelude::*;

use crate::interfaces::ChildrenProps;
use crate::views::shared::{Footer, Header};

#[function_component(Layout)]
pub fn layout(props: &ChildrenProps) -> Html {
    html! {
        <>
            <Header />
            <main class="min-h-screen">{ props.children.clone() }</main>
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StateProvider;
    use yew::ServerRenderer;

    #[function_component]
    fn WithChildren() -> Html {
        html! {
            <StateProvider>
                <Layout>
                    <p id="page">{"page body"}</p>
                    <p id="page-2">{"more"}</p>
                </Layout>
            </StateProvider>
        }
    }

    #[function_component]
    fn WithoutChildren() -> Html {
        html! {
            <StateProvider>
                <Layout />
            </StateProvider>
        }
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not rendered in {haystack}"))
    }

    #[tokio::test]
    async fn test_header_children_footer_order() {
        let html = ServerRenderer::<WithChildren>::new()
            .hydratable(false)
            .render()
            .await;

        let header = position(&html, "<header");
        let main = position(&html, r#"<main class="min-h-screen">"#);
        let first = position(&html, r#"<p id="page">"#);
        let second = position(&html, r#"<p id="page-2">"#);
        let footer = position(&html, "<footer");

        assert!(header < main);
        assert!(main < first && first < second);
        assert!(second < footer);
    }

    #[tokio::test]
    async fn test_empty_children_still_render_chrome() {
        let html = ServerRenderer::<WithoutChildren>::new()
            .hydratable(false)
            .render()
            .await;

        let header = position(&html, "<header");
        let main = position(&html, r#"<main class="min-h-screen"></main>"#);
        let footer = position(&html, "<footer");
        assert!(header < main && main < footer);
    }

    #[tokio::test]
    async fn test_sidebar_starts_hidden() {
        let html = ServerRenderer::<WithoutChildren>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(r#"class="sidebar""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }
}
