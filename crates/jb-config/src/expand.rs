//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Bare `$VAR` syntax is left alone; only the braced form is expanded.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut missing = Vec::new();
    let expanded = shellexpand::env_with_context_no_errors(value, |var| {
        std::env::var(var).ok().or_else(|| {
            missing.push(var.to_owned());
            None
        })
    });

    // Unset variables with a `:-default` were replaced; those without one stay verbatim.
    if let Some(var) = missing
        .iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }

    Ok(expanded.into_owned())
}
