//! `[base]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in orbit.toml - site origin and language.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://example.netlify.app/"
/// language = "en"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site origin, used by sitemap and canonical links downstream.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en", "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            url = "https://uc-site.example.com/"
            language = "en-US"
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(
            config.base.url,
            Some("https://uc-site.example.com/".to_string())
        );
        assert_eq!(config.base.language, "en-US");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = SiteConfig::from_str("[base]").unwrap();
        assert_eq!(config.base.url, None);
        assert_eq!(config.base.language, "en");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            unknown_field = "should_fail"
        "#;
        let err = SiteConfig::from_str(config).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"));
    }
}
