//! Backend resolution for the CLI.
//!
//! The backend URL comes from, in order:
//! 1. `--backend-url`
//! 2. `$SIGNVERSE_BACKEND_URL`
//! 3. `http://localhost:5000`

use signverse_core::config::{BackendConfig, BACKEND_URL_ENV};

/// Builds the backend config from the command line and environment.
pub fn backend_config(flag: Option<&str>) -> BackendConfig {
    resolve(flag, std::env::var(BACKEND_URL_ENV).ok())
}

fn resolve(flag: Option<&str>, env: Option<String>) -> BackendConfig {
    let from_env = env.filter(|url| !url.trim().is_empty());

    match (flag, from_env) {
        (Some(url), _) => BackendConfig::with_base_url(url),
        (None, Some(url)) => BackendConfig::with_base_url(url),
        (None, None) => BackendConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signverse_core::config::DEFAULT_BACKEND_URL;

    #[test]
    fn test_flag_wins_over_env() {
        let config = resolve(
            Some("http://flag:5000"),
            Some("http://env:5000".to_string()),
        );
        assert_eq!(config.base_url, "http://flag:5000");
    }

    #[test]
    fn test_env_used_without_flag() {
        let config = resolve(None, Some("http://env:5000".to_string()));
        assert_eq!(config.base_url, "http://env:5000");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let config = resolve(None, Some("  ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(resolve(None, None), BackendConfig::default());
    }
}
