use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::Level;

use vellum_ui::components::{CodeBlock, ConfirmOutlet, DeleteModal, DeleteThreadModal, ThemeStyle};
use vellum_ui::confirm::ConfirmHost;
use vellum_ui::highlight::syntect::{SyntectThemeSource, SyntectTokenizer, DEFAULT_THEME};
use vellum_ui::highlight::HighlightContext;

const CONFIG_FILENAME: &str = ".vellum-gallery.json";

const SAMPLE_QUERY: &str = "SELECT id, title, updated_at\nFROM threads\nWHERE archived_at IS NULL\nORDER BY updated_at DESC\nLIMIT 20;";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GalleryConfig {
    theme: String,
}

impl GalleryConfig {
    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(PathBuf::from(home).join(CONFIG_FILENAME))
    }

    /// Load config from disk, returns None if missing or invalid
    fn load() -> Option<GalleryConfig> {
        let config_path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Failed to get config path: {}", e);
                return None;
            }
        };

        if !config_path.exists() {
            return None;
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str::<GalleryConfig>(&contents) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                None
            }
        }
    }

    fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let contents = serde_json::to_string_pretty(self)?;

        // Write atomically: write to temp file, then rename
        let temp_path = config_path.with_extension("json.tmp");
        std::fs::write(&temp_path, contents)?;
        std::fs::rename(&temp_path, &config_path)?;

        Ok(())
    }
}

/// Theme resolution order: VELLUM_THEME, then the saved config, then the
/// bundled default.
fn theme_name() -> String {
    if let Ok(theme) = std::env::var("VELLUM_THEME") {
        if !theme.is_empty() {
            return theme;
        }
    }
    match GalleryConfig::load() {
        Some(config) => config.theme,
        None => DEFAULT_THEME.to_string(),
    }
}

fn main() {
    dioxus::logger::init(Level::DEBUG).expect("failed to init logger");
    tracing::info!("starting vellum gallery");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_hook(theme_name);
    let theme_for_highlight = theme.clone();
    let theme_for_save = theme.clone();

    use_context_provider(|| ConfirmHost::new());
    use_context_provider(move || {
        let tokenizer = SyntectTokenizer::new("sql").expect("bundled syntaxes include sql");
        let theme_source = SyntectThemeSource::new(&theme_for_highlight).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme {}: {}", theme_for_highlight, e);
            SyntectThemeSource::new(DEFAULT_THEME).expect("default theme is bundled")
        });
        HighlightContext::new(Arc::new(tokenizer), Arc::new(theme_source))
    });

    use_effect(move || {
        let config = GalleryConfig {
            theme: theme_for_save.clone(),
        };
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save gallery config: {}", e);
        }
    });

    let mut busy = use_signal(|| false);
    let mut deleted = use_signal(|| 0usize);

    rsx! {
        ThemeStyle {}

        div { class: "min-h-screen bg-zinc-950 text-zinc-100 p-8 space-y-10",
            div { class: "space-y-2",
                h1 { class: "text-2xl font-semibold", "Vellum UI gallery" }
                p { class: "text-sm text-zinc-400", "Token styles come from the {theme} theme." }
            }

            section { class: "space-y-3",
                h2 { class: "text-lg font-semibold", "Code block" }
                CodeBlock {
                    code: SAMPLE_QUERY.to_string(),
                    show_line_numbers: true,
                    copyable: true,
                    max_height: 240,
                }
            }

            section { class: "space-y-3",
                h2 { class: "text-lg font-semibold", "Inline" }
                p { class: "text-sm text-zinc-300",
                    "The cleanup job runs "
                    CodeBlock {
                        code: "DELETE FROM sessions WHERE expires_at < now()",
                        inline: true,
                    }
                    " once an hour."
                }
            }

            section { class: "space-y-3",
                h2 { class: "text-lg font-semibold", "Loading" }
                button {
                    class: "px-4 py-2 bg-zinc-800 hover:bg-zinc-700 border border-zinc-700 rounded-md text-sm font-medium transition-all",
                    onclick: move |_| {
                        let now = busy();
                        busy.set(!now);
                    },
                    if busy() { "Stop loading" } else { "Start loading" }
                }
                CodeBlock { code: "SELECT count(*) FROM messages;", loading: busy() }
            }

            section { class: "space-y-3",
                h2 { class: "text-lg font-semibold", "Delete confirmations" }
                div { class: "flex items-center gap-6",
                    DeleteModal {
                        on_confirm: EventHandler::new(|_| tracing::info!("item deleted")),
                    }
                    DeleteThreadModal {
                        on_confirm: EventHandler::new(move |_| deleted += 1),
                    }
                }
                p { class: "text-sm text-zinc-400", "Threads deleted this session: {deleted}" }
            }
        }

        ConfirmOutlet {}
    }
}
