use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    /// When set, spans are exported to this OTLP collector.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl ArticleConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ArticleConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("sbs"), is_prod)?,
                collection: get_env("MONGODB_COLLECTION", Some("articles"), is_prod)?,
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_core::error::ErrorCategory;

    #[test]
    fn get_env_prefers_set_value() {
        env::set_var("ARTICLE_CONFIG_TEST_SET", "from-env");
        let value = get_env("ARTICLE_CONFIG_TEST_SET", Some("default"), false).unwrap();
        assert_eq!(value, "from-env");
    }

    #[test]
    fn get_env_falls_back_to_default_outside_prod() {
        let value = get_env("ARTICLE_CONFIG_TEST_UNSET", Some("sbs"), false).unwrap();
        assert_eq!(value, "sbs");
    }

    #[test]
    fn get_env_requires_value_in_prod() {
        let err = get_env("ARTICLE_CONFIG_TEST_UNSET_PROD", Some("sbs"), true).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Fatal);
    }

    #[test]
    fn get_env_without_default_is_an_error() {
        let err = get_env("ARTICLE_CONFIG_TEST_NO_DEFAULT", None, false).unwrap_err();
        assert!(err.message().contains("ARTICLE_CONFIG_TEST_NO_DEFAULT"));
    }
}
