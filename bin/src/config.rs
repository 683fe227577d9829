//! Configuration loading for the affinity CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use affinity::RecommenderConfig;
use anyhow::{Context, Result};
use tracing::info;

/// Environment variable naming a TOML configuration file.
pub(crate) const ENV_CONFIG_PATH: &str = "AFFINITY_CONFIG";

/// Parse and validate a TOML configuration document.
pub(crate) fn parse_config(text: &str) -> Result<RecommenderConfig> {
    let config: RecommenderConfig = toml::from_str(text).context("invalid configuration TOML")?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration from `path`, then `AFFINITY_CONFIG`, else defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<RecommenderConfig> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from));

    let Some(path) = path else {
        return Ok(RecommenderConfig::default());
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config =
        parse_config(&text).with_context(|| format!("in config {}", path.display()))?;
    info!(
        path = %path.display(),
        max_results = config.max_results,
        recency_window_days = config.recency_window_days,
        "loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = parse_config(
            r#"
            max_results = 10
            recency_window_days = 14

            [weights]
            popularity = 0.0
            same_category = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.recency_window_days, 14);
        assert_eq!(config.weights.scale("popularity"), 0.0);
        assert_eq!(config.weights.scale("same_category"), 1.5);
        assert_eq!(config.weights.scale("recency"), 1.0);
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), RecommenderConfig::default());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(parse_config("max_results = 0").is_err());
        assert!(parse_config("[weights]\nunknown_signal = 2.0").is_err());
        assert!(parse_config("max_results = \"six\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("affinity-config-{}.toml", std::process::id()));
        fs::write(&path, "max_results = 4\n").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.max_results, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/affinity.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
