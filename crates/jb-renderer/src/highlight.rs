//! Class-based syntax highlighting for fenced code blocks.
//!
//! Highlighted code carries `hl-*` CSS classes rather than inline styles;
//! [`Highlighter::stylesheet`] produces the matching rules for the
//! configured color theme.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Theme used when none is configured.
pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Error returned by [`Highlighter`].
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Theme name not present in the bundled theme set.
    #[error("Unknown code theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    /// Syntax parsing or stylesheet generation failed.
    #[error("Highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
}

/// Syntax set and color theme, loaded once and shared read-only.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
    theme_name: String,
}

impl Highlighter {
    /// Load the bundled syntaxes with the named color theme.
    pub fn new(theme_name: &str) -> Result<Self, HighlightError> {
        let mut themes = ThemeSet::load_defaults().themes;
        let Some(theme) = themes.remove(theme_name) else {
            return Err(HighlightError::UnknownTheme {
                name: theme_name.to_owned(),
                available: Self::theme_names().join(", "),
            });
        };
        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: theme_name.to_owned(),
        })
    }

    /// Names of the bundled color themes, sorted.
    #[must_use]
    pub fn theme_names() -> Vec<String> {
        ThemeSet::load_defaults().themes.into_keys().collect()
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Whether a fence language tag maps to a known syntax.
    #[must_use]
    pub fn supports(&self, language: &str) -> bool {
        self.syntaxes.find_syntax_by_token(language).is_some()
    }

    /// Highlight source code as class-annotated HTML spans.
    ///
    /// Returns `Ok(None)` when the language is unknown.
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>, HighlightError> {
        let Some(syntax) = self.syntaxes.find_syntax_by_token(language) else {
            return Ok(None);
        };
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(Some(generator.finalize()))
    }

    /// CSS rules for the `hl-*` classes in the configured theme.
    pub fn stylesheet(&self) -> Result<String, HighlightError> {
        Ok(css_for_theme_with_class_style(&self.theme, CLASS_STYLE)?)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        let theme = ThemeSet::load_defaults()
            .themes
            .remove(DEFAULT_CODE_THEME)
            .unwrap_or_default();
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: DEFAULT_CODE_THEME.to_owned(),
        }
    }
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme_name", &self.theme_name)
            .finish_non_exhaustive()
    }
}
