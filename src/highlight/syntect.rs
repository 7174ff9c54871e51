use anyhow::{anyhow, Context, Result};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle};
use syntect::parsing::{BasicScopeStackOp, ParseState, Scope, ScopeStack, SyntaxSet};

use super::{LineTokenizer, ThemeSource, Token, CLASS_PREFIX};

/// Bundled theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Category for text outside any scope and for lines the parser gave up on.
const PLAIN_CATEGORY: &str = "text.plain";

/// Scope atoms become `vl-`-prefixed classes, the same mapping
/// `token_classes` applies to token categories, so generated theme CSS
/// lines up with the rendered spans.
const THEME_CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed {
    prefix: CLASS_PREFIX,
};

/// [`LineTokenizer`] backed by syntect's bundled sublime-text grammars.
/// Each line is parsed independently from a fresh state, so tokens never
/// depend on surrounding lines.
pub struct SyntectTokenizer {
    syntax_set: SyntaxSet,
    syntax_name: String,
}

impl SyntectTokenizer {
    /// Resolve a syntax by its short token, e.g. `sql` or `rs`.
    pub fn new(language_token: &str) -> Result<Self> {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let syntax_name = syntax_set
            .find_syntax_by_token(language_token)
            .ok_or_else(|| anyhow!("no bundled syntax for language token '{}'", language_token))?
            .name
            .clone();

        Ok(Self {
            syntax_set,
            syntax_name,
        })
    }

    fn tokenize(&self, line: &str) -> Result<Vec<Token>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_name(&self.syntax_name)
            .ok_or_else(|| anyhow!("syntax '{}' missing from loaded set", self.syntax_name))?;

        let mut parse_state = ParseState::new(syntax);
        let ops = parse_state
            .parse_line(line, &self.syntax_set)
            .context("could not parse line")?;

        // Walk the scope operations, emitting a token for every span of
        // text between op positions. The shadow stack mirrors pushes and
        // pops so the innermost scope is known at each boundary.
        let mut tokens = Vec::new();
        let mut shadow: Vec<Scope> = Vec::new();
        let mut stack = ScopeStack::new();
        let mut last = 0;

        for (pos, op) in ops {
            if pos > last {
                tokens.push(Token {
                    value: line[last..pos].to_string(),
                    category: category_of(&shadow),
                });
                last = pos;
            }
            stack
                .apply_with_hook(&op, |basic, _| match basic {
                    BasicScopeStackOp::Push(scope) => shadow.push(scope),
                    BasicScopeStackOp::Pop => {
                        shadow.pop();
                    }
                })
                .context("could not apply scope operation")?;
        }

        if last < line.len() {
            tokens.push(Token {
                value: line[last..].to_string(),
                category: category_of(&shadow),
            });
        }

        Ok(tokens)
    }
}

fn category_of(scopes: &[Scope]) -> String {
    scopes
        .last()
        .map(|scope| scope.build_string())
        .unwrap_or_else(|| PLAIN_CATEGORY.to_string())
}

impl LineTokenizer for SyntectTokenizer {
    fn line_tokens(&self, line: &str) -> Vec<Token> {
        match self.tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!("tokenizer degraded to plain text: {}", e);
                vec![Token {
                    value: line.to_string(),
                    category: PLAIN_CATEGORY.to_string(),
                }]
            }
        }
    }
}

/// [`ThemeSource`] backed by syntect's bundled themes; emits class-style
/// CSS whose selectors use the shared `vl-` prefix.
pub struct SyntectThemeSource {
    theme: Theme,
}

impl SyntectThemeSource {
    pub fn new(theme_name: &str) -> Result<Self> {
        let themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .get(theme_name)
            .cloned()
            .ok_or_else(|| anyhow!("no bundled theme named '{}'", theme_name))?;

        Ok(Self { theme })
    }
}

impl ThemeSource for SyntectThemeSource {
    fn css_text(&self) -> Result<String> {
        css_for_theme_with_class_style(&self.theme, THEME_CLASS_STYLE)
            .context("could not generate theme css")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_cover_every_line_exactly() {
        let tokenizer = SyntectTokenizer::new("sql").unwrap();
        let code = "SELECT name, count(*) FROM users\nWHERE id = 1 -- trailing comment\nGROUP BY name;";

        for line in code.split('\n') {
            let tokens = tokenizer.line_tokens(line);
            let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
            assert_eq!(rebuilt, line);
        }
    }

    #[test]
    fn test_empty_line_has_no_tokens() {
        let tokenizer = SyntectTokenizer::new("sql").unwrap();
        assert!(tokenizer.line_tokens("").is_empty());
    }

    #[test]
    fn test_categories_are_dotted_taxonomy_strings() {
        let tokenizer = SyntectTokenizer::new("sql").unwrap();
        let tokens = tokenizer.line_tokens("SELECT 1;");

        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(!token.category.is_empty());
        }
        assert!(tokens.iter().any(|t| t.category.contains('.')));
    }

    #[test]
    fn test_select_is_classified_as_keyword() {
        let tokenizer = SyntectTokenizer::new("sql").unwrap();
        let tokens = tokenizer.line_tokens("SELECT 1;");

        let select = tokens
            .iter()
            .find(|t| t.value.eq_ignore_ascii_case("select"))
            .expect("SELECT token");
        assert!(select.category.starts_with("keyword"));
    }

    #[test]
    fn test_unknown_language_token_is_an_error() {
        assert!(SyntectTokenizer::new("not-a-language").is_err());
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        assert!(SyntectThemeSource::new("not-a-theme").is_err());
    }

    #[test]
    fn test_theme_css_targets_prefixed_classes() {
        let source = SyntectThemeSource::new(DEFAULT_THEME).unwrap();
        let css = source.css_text().unwrap();

        assert!(!css.is_empty());
        assert!(css.contains(".vl-"));
    }
}
