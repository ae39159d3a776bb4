//! Site colors, fonts and the generated stylesheet.

use std::fmt::Write;

use jb_renderer::{HighlightError, Highlighter};

/// Page layout rules; colors and fonts come from the CSS variables.
const LAYOUT_CSS: &str = r"
* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-body), sans-serif;
  -webkit-font-smoothing: antialiased;
}
h1, h2, h3, h4, h5, h6 { font-family: var(--font-heading), sans-serif; color: var(--primary); }
a { color: var(--secondary); }
.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.5rem 2rem;
  border-bottom: 1px solid rgb(255 255 255 / 0.2);
  background: var(--primary);
}
.navbar .brand { color: #ffffff; font-family: var(--font-heading), sans-serif; font-weight: 700; font-size: 1.75rem; letter-spacing: 0.1em; text-decoration: none; }
.doc-wrapper { display: flex; gap: 1.5rem; padding: 1.5rem 2rem; }
.sidebar { width: 260px; flex-shrink: 0; background: var(--background); }
.sidebar h2 { color: var(--tertiary); font-size: 1.25rem; }
.sidebar ul { list-style: none; margin: 0; padding: 0; }
.sidebar ul ul { padding-left: 1rem; }
.sidebar li { position: relative; margin-bottom: 0.25rem; }
.sidebar a { text-decoration: none; }
.sidebar a:hover { text-decoration: underline; }
.sidebar-description {
  display: none;
  position: absolute;
  left: 100%;
  top: 0.2rem;
  margin-left: 0.5rem;
  width: 16rem;
  padding: 0.5rem;
  border-radius: 0.25rem;
  background: var(--tertiary);
  color: var(--background);
  font-size: 0.75rem;
  z-index: 10;
}
.sidebar li:hover > .sidebar-description { display: block; }
.content-wrapper { flex: 1; min-width: 0; }
.markdown-content pre { padding: 1rem; border-radius: 0.375rem; overflow-x: auto; background: var(--dark-background); color: #ffffff; }
.markdown-content h1 a, .markdown-content h2 a, .markdown-content h3 a, .markdown-content h4 a { color: inherit; text-decoration: none; }
.markdown-content table { border-collapse: collapse; }
.markdown-content th, .markdown-content td { border: 1px solid var(--light-background); padding: 0.25rem 0.5rem; }
.alert { border-left: 4px solid var(--tertiary); padding: 0.5rem 1rem; margin: 1rem 0; }
.alert-title { font-weight: 700; margin: 0; }
.alert-warning, .alert-caution { border-left-color: #d97706; }
.toc { width: 220px; flex-shrink: 0; position: sticky; top: 1.5rem; align-self: flex-start; }
.toc p { font-weight: 700; text-transform: uppercase; font-size: 0.75rem; letter-spacing: 0.05em; }
.toc ul { list-style: none; margin: 0; padding: 0; }
.toc .level-2 { padding-left: 0.75rem; }
.toc .level-3 { padding-left: 1.5rem; }
";

/// Colors and fonts of the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub light_background: String,
    pub dark_background: String,
    pub heading_font: String,
    pub body_font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_owned(),
            foreground: "#171717".to_owned(),
            primary: "#102B55".to_owned(),
            secondary: "#174A7E".to_owned(),
            tertiary: "#22699D".to_owned(),
            light_background: "#202124".to_owned(),
            dark_background: "#121212".to_owned(),
            heading_font: "Josefin Sans".to_owned(),
            body_font: "Comfortaa".to_owned(),
        }
    }
}

impl Theme {
    /// `:root` block declaring the theme's CSS variables.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        let variables = [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("tertiary", self.tertiary.as_str()),
            ("light-background", self.light_background.as_str()),
            ("dark-background", self.dark_background.as_str()),
        ];
        for (name, value) in variables {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        let _ = writeln!(css, "  --font-heading: \"{}\";", self.heading_font);
        let _ = writeln!(css, "  --font-body: \"{}\";", self.body_font);
        css.push_str("}\n");
        css
    }

    /// Google Fonts stylesheet URL for the heading and body fonts.
    #[must_use]
    pub fn fonts_url(&self) -> String {
        let family = |name: &str| name.split_whitespace().collect::<Vec<_>>().join("+");
        format!(
            "https://fonts.googleapis.com/css2?family={}&family={}&display=swap",
            family(&self.heading_font),
            family(&self.body_font)
        )
    }

    /// Full site stylesheet: variables, layout and code highlighting rules.
    pub fn stylesheet(&self, highlighter: &Highlighter) -> Result<String, HighlightError> {
        let mut css = self.css_variables();
        css.push_str(LAYOUT_CSS);
        css.push_str(&highlighter.stylesheet()?);
        Ok(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --primary: #102B55;\n"));
        assert!(css.contains("  --dark-background: #121212;\n"));
        assert!(css.contains("  --font-heading: \"Josefin Sans\";\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_custom_colors() {
        let theme = Theme {
            primary: "#000".to_owned(),
            ..Theme::default()
        };
        assert!(theme.css_variables().contains("--primary: #000;"));
    }

    #[test]
    fn test_fonts_url() {
        assert_eq!(
            Theme::default().fonts_url(),
            "https://fonts.googleapis.com/css2?family=Josefin+Sans&family=Comfortaa&display=swap"
        );
    }

    #[test]
    fn test_stylesheet_includes_highlighting() {
        let css = Theme::default()
            .stylesheet(&Highlighter::default())
            .unwrap();
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".doc-wrapper"));
        assert!(css.contains(".hl-"));
    }
}
