//! # Storefront Configuration
//!
//! One explicit configuration value replaces the per-page base URL literals: every page
//! shares the same API endpoint and image base URL.
//!
//! Values come from [`Default`], then [`ConfigOverrides`] (environment variables, and CLI flags
//! in the `storefront` binary, which take precedence). Validation runs once, on the result.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::pages::PageOptions;

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_IMAGE_BASE_URL: &str = "STOREFRONT_IMAGE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "STOREFRONT_TIMEOUT_SECS";
pub const ENV_FETCH_LIMIT: &str = "STOREFRONT_FETCH_LIMIT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Product API root; products live at `{api_url}/products`.
    pub api_url: String,
    /// Prefix for rooted image paths such as `/uploads/whey.png`.
    pub image_base_url: String,
    /// Transport timeout for a single fetch.
    pub timeout_secs: u64,
    /// Optional result-count limit sent with every fetch.
    pub fetch_limit: Option<usize>,
    /// Message shown when a page fails to load.
    pub error_message: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".to_string(),
            image_base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
            fetch_limit: None,
            error_message: "Failed to load products. Please try again.".to_string(),
        }
    }
}

/// Optional values layered over the defaults, from the environment or the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub image_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub fetch_limit: Option<usize>,
}

impl ConfigOverrides {
    /// Parses the `STOREFRONT_*` variables found by `lookup`. Nothing is validated here
    /// beyond number parsing; that happens once, on the resolved config.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            api_url: lookup(ENV_API_URL),
            image_base_url: lookup(ENV_IMAGE_BASE_URL),
            timeout_secs: lookup(ENV_TIMEOUT_SECS)
                .map(|value| parse_number(ENV_TIMEOUT_SECS, &value))
                .transpose()?,
            fetch_limit: lookup(ENV_FETCH_LIMIT)
                .map(|value| parse_number(ENV_FETCH_LIMIT, &value))
                .transpose()?,
        })
    }

    /// Values set in `self` win; the rest fall back to `lower`.
    pub fn or(self, lower: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.or(lower.api_url),
            image_base_url: self.image_base_url.or(lower.image_base_url),
            timeout_secs: self.timeout_secs.or(lower.timeout_secs),
            fetch_limit: self.fetch_limit.or(lower.fetch_limit),
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CatalogError> {
    value
        .trim()
        .parse()
        .map_err(|_| CatalogError::Config(format!("{key} is not a number: {value:?}")))
}

impl StorefrontConfig {
    /// Defaults overlaid with `STOREFRONT_*` environment variables.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a pluggable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CatalogError> {
        Self::resolve(ConfigOverrides::from_lookup(lookup)?)
    }

    /// Defaults with every set override applied, validated once at the end.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, CatalogError> {
        let mut config = Self::default();
        if let Some(api_url) = overrides.api_url {
            config.api_url = api_url;
        }
        if let Some(image_base_url) = overrides.image_base_url {
            config.image_base_url = image_base_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if overrides.fetch_limit.is_some() {
            config.fetch_limit = overrides.fetch_limit;
        }

        config.validate()?;
        Ok(config)
    }

    /// Rejects empty or scheme-less URLs and a zero timeout.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_url("api_url", &self.api_url)?;
        check_url("image_base_url", &self.image_base_url)?;
        if self.timeout_secs == 0 {
            return Err(CatalogError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            fetch_limit: self.fetch_limit,
            error_message: self.error_message.clone(),
        }
    }
}

fn check_url(field: &str, value: &str) -> Result<(), CatalogError> {
    let value = value.trim();
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| value.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if has_host {
        Ok(())
    } else {
        Err(CatalogError::Config(format!(
            "{field} must be an absolute http(s) URL, got {value:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(StorefrontConfig::default().validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://api.shop.example.com"),
            (ENV_IMAGE_BASE_URL, "https://cdn.shop.example.com"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_FETCH_LIMIT, "100"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.shop.example.com");
        assert_eq!(config.image_base_url, "https://cdn.shop.example.com");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.fetch_limit, Some(100));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = StorefrontConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(CatalogError::Config(_))));

        let result = StorefrontConfig::from_lookup(lookup(&[(ENV_IMAGE_BASE_URL, "localhost:5000")]));
        assert!(matches!(result, Err(CatalogError::Config(_))));

        let config = StorefrontConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{ "image_base_url": "https://kingofmuscles.example" }"#).unwrap();
        assert_eq!(config.image_base_url, "https://kingofmuscles.example");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_higher_override_replaces_invalid_lower_value() {
        let env = ConfigOverrides::from_lookup(lookup(&[
            (ENV_IMAGE_BASE_URL, "localhost:5000"),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_FETCH_LIMIT, "50"),
        ]))
        .unwrap();
        assert!(StorefrontConfig::resolve(env.clone()).is_err());

        let flags = ConfigOverrides {
            image_base_url: Some("https://cdn.shop.example.com".to_string()),
            timeout_secs: Some(10),
            ..Default::default()
        };
        let config = StorefrontConfig::resolve(flags.or(env)).unwrap();

        assert_eq!(config.image_base_url, "https://cdn.shop.example.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.fetch_limit, Some(50));
    }
}
