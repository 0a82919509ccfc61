use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable that may legitimately be absent.
///
/// An empty value is treated the same as an unset variable, since shell
/// wrappers often export empty strings for optional settings.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_reports_its_name() {
        let err = get_env_var("SHARED_UTILS_TEST_SURELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("SHARED_UTILS_TEST_SURELY_UNSET"));
    }

    #[test]
    fn empty_optional_var_is_none() {
        // SAFETY: test-local variable name, no other thread reads it.
        unsafe { std::env::set_var("SHARED_UTILS_TEST_EMPTY", "  ") };
        assert_eq!(get_optional_env_var("SHARED_UTILS_TEST_EMPTY"), None);
    }
}
