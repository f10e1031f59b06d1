use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::app::infrastructure::error::{AppError, Result};

/// Light theme close to the "friendly" look the code view is expected to have.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Renders one code block as a complete, standalone HTML document.
pub trait Highlighter {
    /// Fails with [`AppError::UnknownLanguage`] when `language` has no lexer.
    ///
    /// An empty `language` (a bare fence) is accepted and rendered as plain
    /// text rather than reported as unknown.
    fn render_block(&self, language: &str, code: &str) -> Result<String>;
}

pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME).unwrap_or_else(|_| {
            let mut themes = ThemeSet::load_defaults();
            let theme = themes
                .themes
                .pop_first()
                .map(|(_, theme)| theme)
                .unwrap_or_default();
            Self {
                syntax_set: SyntaxSet::load_defaults_newlines(),
                theme,
            }
        })
    }

    /// Use one of syntect's bundled themes by key.
    pub fn with_theme(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(theme_name)
            .ok_or_else(|| AppError::Highlight(format!("no bundled theme named {}", theme_name)))?;
        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Lexer for a fence tag. The empty tag means plain text.
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return Some(self.syntax_set.find_syntax_plain_text());
        }
        self.syntax_set.find_syntax_by_token(language)
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn render_block(&self, language: &str, code: &str) -> Result<String> {
        let syntax = self
            .find_syntax(language)
            .ok_or_else(|| AppError::UnknownLanguage(language.to_string()))?;

        // Surrounding blank lines are dropped and the block always ends in a newline.
        let code = format!("{}\n", code.trim());
        let pre = highlighted_html_for_string(&code, &self.syntax_set, syntax, &self.theme)
            .map_err(|e| AppError::Highlight(e.to_string()))?;

        Ok(standalone_document(&syntax.name, &pre))
    }
}

fn standalone_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>\nbody {{ margin: 0; padding: 12px; }}\n\
         pre {{ padding: 12px; font-family: Consolas, Menlo, \"DejaVu Sans Mono\", monospace; font-size: 14px; }}\n\
         </style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_renders_full_document() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.render_block("rust", "fn main() {}\n").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Rust</title>"));
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_lookup_by_extension() {
        let highlighter = SyntectHighlighter::new();
        assert!(highlighter.render_block("py", "print(1)").is_ok());
    }

    #[test]
    fn test_unknown_language() {
        let highlighter = SyntectHighlighter::new();
        let err = highlighter.render_block("no-such-lang", "x").unwrap_err();
        assert!(matches!(err, AppError::UnknownLanguage(tag) if tag == "no-such-lang"));
    }

    #[test]
    fn test_empty_tag_is_plain_text() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.render_block("", "a < b").unwrap();
        assert!(html.contains("<title>Plain Text</title>"));
        assert!(html.contains("&lt;"));
    }

    #[test]
    fn test_missing_theme_is_an_error() {
        assert!(matches!(
            SyntectHighlighter::with_theme("Nope"),
            Err(AppError::Highlight(_))
        ));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<C++ & \"co\">"), "&lt;C++ &amp; &quot;co&quot;&gt;");
    }
}
