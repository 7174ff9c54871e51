use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

pub mod syntect;

/// Class namespace shared by token spans and the generated theme CSS.
/// Category parts and theme scope atoms both land under this prefix, so
/// selectors produced by a [`ThemeSource`] match what [`token_classes`]
/// puts on the spans.
pub const CLASS_PREFIX: &str = "vl-";

/// Element id of the installed highlight stylesheet.
pub const THEME_STYLE_ID: &str = "vellum-highlight-theme";

/// A classified substring of one line. `category` is a dot-separated
/// taxonomy string such as `keyword.other.sql`; classification never
/// changes `value`, it only attaches presentation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: String,
    pub category: String,
}

/// Splits one line of text into an ordered run of tokens covering the
/// line end-to-end, no gaps, no overlaps.
pub trait LineTokenizer: Send + Sync {
    fn line_tokens(&self, line: &str) -> Vec<Token>;
}

/// Supplies the stylesheet body for the installed highlight theme.
/// Queried once, at mount, by `ThemeStyle`.
pub trait ThemeSource: Send + Sync {
    fn css_text(&self) -> Result<String>;
}

/// App-level handles to the tokenizer and theme implementations. Provide
/// one at the root with `use_context_provider`; `CodeBlock` and
/// `ThemeStyle` read it from context and fail to render without it.
#[derive(Clone)]
pub struct HighlightContext {
    pub tokenizer: Arc<dyn LineTokenizer>,
    pub theme: Arc<dyn ThemeSource>,
}

impl HighlightContext {
    pub fn new(tokenizer: Arc<dyn LineTokenizer>, theme: Arc<dyn ThemeSource>) -> Self {
        Self { tokenizer, theme }
    }
}

/// Split on `\n` with string-split semantics: empty input is one empty
/// line, a trailing newline yields a trailing empty line, and rejoining
/// with `\n` reconstructs the input exactly.
pub fn split_lines(code: &str) -> Vec<&str> {
    code.split('\n').collect()
}

/// Map a dotted category like `keyword.other.sql` to space-separated
/// class names, one per part, each under [`CLASS_PREFIX`].
pub fn token_classes(category: &str) -> String {
    category
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| format!("{}{}", CLASS_PREFIX, part))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-shot guard for stylesheet installation. The theme style must land
/// in the document exactly once per process no matter how many
/// `ThemeStyle` instances mount, so the decision lives behind an explicit
/// flag instead of a probe against the document.
#[derive(Debug)]
pub struct ThemeInstaller {
    installed: AtomicBool,
}

impl ThemeInstaller {
    pub const fn new() -> Self {
        Self {
            installed: AtomicBool::new(false),
        }
    }

    /// Returns true exactly once; the caller that gets `true` owns the
    /// install. The flag is never handed back.
    pub fn try_install(&self) -> bool {
        !self.installed.swap(true, Ordering::SeqCst)
    }

    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::SeqCst)
    }
}

/// Process-wide guard consumed by `ThemeStyle`.
pub static THEME_INSTALLER: ThemeInstaller = ThemeInstaller::new();
