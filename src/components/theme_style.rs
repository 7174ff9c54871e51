use dioxus::prelude::*;

use crate::highlight::{HighlightContext, THEME_INSTALLER, THEME_STYLE_ID};

/// Installs the highlight theme stylesheet. Mount once near the app root,
/// before any `CodeBlock`; the first mounted instance queries the
/// `ThemeSource` and emits the style element, every later instance
/// renders nothing. The style is never torn down.
#[component]
pub fn ThemeStyle() -> Element {
    let highlight = use_context::<HighlightContext>();

    // Decided once at mount; the install flag is never handed back.
    let css = use_hook(|| {
        if !THEME_INSTALLER.try_install() {
            return None;
        }
        match highlight.theme.css_text() {
            Ok(css) => Some(css),
            Err(e) => {
                tracing::error!("could not build highlight theme css: {}", e);
                None
            }
        }
    });

    match css {
        Some(css) => rsx! {
            style { id: THEME_STYLE_ID, "{css}" }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::highlight::{LineTokenizer, ThemeSource, Token};

    struct OneTokenizer;

    impl LineTokenizer for OneTokenizer {
        fn line_tokens(&self, line: &str) -> Vec<Token> {
            vec![Token {
                value: line.to_string(),
                category: "text.plain".to_string(),
            }]
        }
    }

    struct FixedTheme;

    impl ThemeSource for FixedTheme {
        fn css_text(&self) -> anyhow::Result<String> {
            Ok(".vl-keyword { color: #a626a4; }".to_string())
        }
    }

    fn twice_app() -> Element {
        use_context_provider(|| {
            HighlightContext::new(Arc::new(OneTokenizer), Arc::new(FixedTheme))
        });

        rsx! {
            ThemeStyle {}
            ThemeStyle {}
        }
    }

    // The only test allowed to consume the process-wide install flag;
    // everything else exercises ThemeInstaller instances directly.
    #[test]
    fn test_two_instances_install_exactly_one_style() {
        let mut dom = VirtualDom::new(twice_app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let occurrences = html.matches(THEME_STYLE_ID).count();
        assert_eq!(occurrences, 1);
        assert!(html.contains(".vl-keyword"));
    }
}
