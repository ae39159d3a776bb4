//! Configuration management for the JugadBase docs viewer.
//!
//! Parses `jb.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `source.base_url`
//! - `source.sidebar_url`

mod expand;

use jb_source::{DEFAULT_BASE_URL, DEFAULT_ROOT_DOCUMENT, DEFAULT_SIDEBAR_URL, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the remote documentation base URL.
    pub base_url: Option<String>,
    /// Override the sidebar table-of-contents URL.
    pub sidebar_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "jb.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Remote document source configuration.
    pub source: SourceConfig,
    /// Visual theme handed to the render layer.
    pub theme: ThemeConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Remote document source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL that page addresses are appended to.
    pub base_url: String,
    /// Document served when no category is given.
    pub root_document: String,
    /// JSON table of contents for the sidebar.
    pub sidebar_url: String,
    /// Global HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            root_document: DEFAULT_ROOT_DOCUMENT.to_owned(),
            sidebar_url: DEFAULT_SIDEBAR_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Theme configuration.
///
/// Colors mirror the site palette; fonts are CSS font-family names.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub light_background: String,
    pub dark_background: String,
    pub heading_font: String,
    pub body_font: String,
    /// Name of the syntax highlighting theme for code blocks.
    pub code_theme: String,
}

impl Default for ThemeConfig {
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
            code_theme: "base16-ocean.dark".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Color fields paired with their config keys.
    fn colors(&self) -> [(&str, &str); 7] {
        [
            (self.background.as_str(), "theme.background"),
            (self.foreground.as_str(), "theme.foreground"),
            (self.primary.as_str(), "theme.primary"),
            (self.secondary.as_str(), "theme.secondary"),
            (self.tertiary.as_str(), "theme.tertiary"),
            (self.light_background.as_str(), "theme.light_background"),
            (self.dark_background.as_str(), "theme.dark_background"),
        ]
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a `#rgb` or `#rrggbb` hex color.
fn require_hex_color(value: &str, field: &str) -> Result<(), ConfigError> {
    let valid = value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be a hex color like #22699D, got {value:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `jb.toml` in current directory and parents,
    /// falling back to built-in defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(base_url) = &settings.base_url {
            self.source.base_url.clone_from(base_url);
        }
        if let Some(sidebar_url) = &settings.sidebar_url {
            self.source.sidebar_url.clone_from(sidebar_url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_source()?;
        self.validate_theme()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_source(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.source.base_url, "source.base_url")?;
        require_http_url(&self.source.base_url, "source.base_url")?;
        require_non_empty(&self.source.sidebar_url, "source.sidebar_url")?;
        require_http_url(&self.source.sidebar_url, "source.sidebar_url")?;
        require_non_empty(&self.source.root_document, "source.root_document")?;

        if !self.source.root_document.ends_with(".md") {
            return Err(ConfigError::Validation(
                "source.root_document must be a .md file".to_owned(),
            ));
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "source.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        for (value, field) in self.theme.colors() {
            require_hex_color(value, field)?;
        }
        require_non_empty(&self.theme.heading_font, "theme.heading_font")?;
        require_non_empty(&self.theme.body_font, "theme.body_font")?;
        require_non_empty(&self.theme.code_theme, "theme.code_theme")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.source.base_url = expand::expand_env(&self.source.base_url, "source.base_url")?;
        self.source.sidebar_url =
            expand::expand_env(&self.source.sidebar_url, "source.sidebar_url")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source.root_document, "index.md");
        assert_eq!(config.source.sidebar_url, DEFAULT_SIDEBAR_URL);
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.theme.tertiary, "#22699D");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_source_config() {
        let toml = r#"
[source]
base_url = "https://docs.example.com/raw"
root_document = "home.md"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.source.base_url, "https://docs.example.com/raw");
        assert_eq!(config.source.root_document, "home.md");
        assert_eq!(config.source.timeout_secs, 5);
        // Unset keys keep their defaults
        assert_eq!(config.source.sidebar_url, DEFAULT_SIDEBAR_URL);
    }

    #[test]
    fn test_parse_theme_config() {
        let toml = r##"
[theme]
primary = "#000000"
code_theme = "InspiredGitHub"
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.primary, "#000000");
        assert_eq!(config.theme.code_theme, "InspiredGitHub");
        assert_eq!(config.theme.secondary, "#174A7E");
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let err = Config::load(Some(Path::new("/nonexistent/jb.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jb.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_from_file_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jb.toml");
        std::fs::write(&path, "[source]\nbase_url = \"ftp://example.com\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("source.base_url"));
    }

    #[test]
    fn test_load_from_file_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jb.toml");
        std::fs::write(&path, "[server\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_config_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            base_url: Some("http://localhost:8000/docs".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.source.base_url, "http://localhost:8000/docs");
        assert_eq!(config.source.sidebar_url, DEFAULT_SIDEBAR_URL);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_expand_env_vars_source() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("JB_TEST_DOCS_HOST", "mirror.example.com");
        }

        let toml = r#"
[source]
base_url = "https://${JB_TEST_DOCS_HOST}/docs"
sidebar_url = "${JB_TEST_SIDEBAR_UNSET:-https://mirror.example.com/config.json}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.source.base_url, "https://mirror.example.com/docs");
        assert_eq!(
            config.source.sidebar_url,
            "https://mirror.example.com/config.json"
        );

        unsafe {
            std::env::remove_var("JB_TEST_DOCS_HOST");
        }
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_sidebar_url_scheme() {
        let mut config = Config::default();
        config.source.sidebar_url = "file:///tmp/config.json".to_owned();
        assert_validation_error(&config, &["source.sidebar_url", "http"]);
    }

    #[test]
    fn test_validate_root_document_extension() {
        let mut config = Config::default();
        config.source.root_document = "index.html".to_owned();
        assert_validation_error(&config, &["root_document", ".md"]);
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert_validation_error(&config, &["timeout_secs"]);
    }

    #[test]
    fn test_validate_theme_color() {
        let mut config = Config::default();
        config.theme.primary = "navy".to_owned();
        assert_validation_error(&config, &["theme.primary", "hex"]);
    }

    #[test]
    fn test_validate_theme_short_color() {
        let mut config = Config::default();
        config.theme.background = "#fff".to_owned();
        assert!(config.validate().is_ok());
    }
}
