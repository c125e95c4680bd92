//! Site configuration from environment variables.
//!
//! Load configuration using `SiteConfig::from_env()` after calling `dotenvy::dotenv()`.
//! Every value here is public: the server embeds the whole struct into the page so
//! the hydrated client sees exactly what the server rendered with.

use serde::{Deserialize, Serialize};
use url::Url;

/// Public base URL of the deployed site (required)
pub const SITE_URL_VAR: &str = "SITE_URL";

/// Waitlist submission endpoint; demo mode when unset
pub const WAITLIST_API_URL_VAR: &str = "WAITLIST_API_URL";

/// Google Analytics measurement id
pub const GA_ID_VAR: &str = "GA_ID";

/// Id of the `<script>` tag carrying the embedded config
pub const EMBEDDED_CONFIG_ID: &str = "site-config";

const DEFAULT_SITE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} environment variable is not set")]
    Missing { var: &'static str },

    #[error("{var} must be a valid URL (got {value:?}): {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Site configuration shared by server and client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical site URL, used for SEO links
    /// Example: https://intmoney.com
    pub site_url: String,

    /// Waitlist endpoint receiving `POST {name?, email}`
    #[serde(default)]
    pub waitlist_api_url: Option<String>,

    /// Analytics measurement id
    #[serde(default)]
    pub ga_id: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let site_url = get(SITE_URL_VAR).ok_or(ConfigError::Missing { var: SITE_URL_VAR })?;
        let site_url = parse_http_url(SITE_URL_VAR, &site_url)?;

        let waitlist_api_url = get(WAITLIST_API_URL_VAR)
            .map(|value| parse_http_url(WAITLIST_API_URL_VAR, &value))
            .transpose()?;

        Ok(Self {
            site_url,
            waitlist_api_url,
            ga_id: get(GA_ID_VAR),
        })
    }

    /// True when no waitlist endpoint is configured
    pub fn is_demo_mode(&self) -> bool {
        self.waitlist_api_url.is_none()
    }

    /// Check if analytics are configured
    pub fn has_analytics(&self) -> bool {
        self.ga_id.is_some()
    }

    /// Serialize for embedding inside an HTML `<script>` element.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        // `</` would terminate the surrounding script element early
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    /// Parse the JSON produced by [`SiteConfig::to_embedded_json`].
    pub fn from_embedded_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            waitlist_api_url: None,
            ga_id: None,
        }
    }
}

fn parse_http_url(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SITE_URL", "https://intmoney.com"),
            ("WAITLIST_API_URL", "https://api.intmoney.com/waitlist"),
            ("GA_ID", "G-ABC123"),
        ]))
        .unwrap();

        assert_eq!(config.site_url, "https://intmoney.com");
        assert_eq!(
            config.waitlist_api_url.as_deref(),
            Some("https://api.intmoney.com/waitlist")
        );
        assert_eq!(config.ga_id.as_deref(), Some("G-ABC123"));
        assert!(!config.is_demo_mode());
        assert!(config.has_analytics());
    }

    #[test]
    fn test_missing_endpoint_means_demo_mode() {
        let config = SiteConfig::from_lookup(lookup(&[("SITE_URL", "https://intmoney.com")]))
            .unwrap();

        assert!(config.waitlist_api_url.is_none());
        assert!(config.is_demo_mode());
        assert!(!config.has_analytics());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SITE_URL", "https://intmoney.com"),
            ("WAITLIST_API_URL", "   "),
            ("GA_ID", ""),
        ]))
        .unwrap();

        assert!(config.is_demo_mode());
        assert!(config.ga_id.is_none());
    }

    #[test]
    fn test_site_url_is_required() {
        let err = SiteConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing { var: "SITE_URL" });
        assert_eq!(err.to_string(), "SITE_URL environment variable is not set");
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: "SITE_URL", .. }));

        let err = SiteConfig::from_lookup(lookup(&[
            ("SITE_URL", "https://intmoney.com"),
            ("WAITLIST_API_URL", "ftp://files.intmoney.com/waitlist"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                var: "WAITLIST_API_URL",
                ..
            }
        ));
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_default_is_demo_mode() {
        let config = SiteConfig::default();
        assert_eq!(config.site_url, "http://127.0.0.1:3000");
        assert!(config.is_demo_mode());
    }

    #[test]
    fn test_embedded_json_escapes_script_terminator() {
        let config = SiteConfig {
            site_url: "https://intmoney.com".to_string(),
            waitlist_api_url: Some("https://api.intmoney.com/</script>".to_string()),
            ga_id: None,
        };

        let json = config.to_embedded_json().unwrap();
        assert!(!json.contains("</"));

        let parsed = SiteConfig::from_embedded_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_embedded_json_tolerates_missing_optionals() {
        let parsed = SiteConfig::from_embedded_json(r#"{"site_url":"https://intmoney.com"}"#)
            .unwrap();
        assert!(parsed.is_demo_mode());
        assert!(parsed.ga_id.is_none());
    }
}
