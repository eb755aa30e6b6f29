//! `[theme]` section configuration.
//!
//! The theme config is what page templates import as `virtual:<module>`.
//! It is read from TOML in snake_case and serialized for templates in camelCase.
//!
//! # Example
//! ```toml
//! [theme]
//! site_title = "Unity Catalog"
//! default_image = "/images/default-image.jpg"
//!
//! [[theme.menus.header]]
//! label = "Blogs"
//! url = "/blogs"
//!
//! [[theme.menus.header]]
//! label = "Community"
//! items = [{ label = "Slack", url = "https://example.com/slack" }]
//!
//! [[theme.menus.header_ctas]]
//! label = "View GitHub"
//! url = "https://github.com/unitycatalog/unitycatalog"
//! variant = "white"
//! ```

use super::{defaults, error::ConfigError};
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct ThemeConfig {
    /// Site title
    #[serde(default = "defaults::theme::site_title")]
    #[educe(Default = defaults::theme::site_title())]
    pub site_title: String,

    /// Default image to display on pages which don't have an `image`
    #[serde(default = "defaults::theme::default_image")]
    #[educe(Default = defaults::theme::default_image())]
    pub default_image: String,

    /// Site menus
    #[serde(default)]
    pub menus: Menus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct Menus {
    /// Header menu
    #[serde(default)]
    pub header: Vec<MenuItem>,

    /// Header menu - CTAs
    #[serde(default)]
    pub header_ctas: Vec<MenuItem>,

    /// Footer menu
    #[serde(default)]
    pub footer: Vec<MenuItem>,
}

/// A single link, or a labelled group of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItem {
    Group(MenuGroup),
    Link(MenuLink),
}

/// A labelled dropdown of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuGroup {
    pub label: String,
    pub items: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuLink {
    pub label: String,

    #[serde(alias = "href")]
    pub url: String,

    /// Button style for call-to-action items (e.g. "primary", "white").
    #[serde(default, alias = "color", skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl ThemeConfig {
    /// Check the shape of the theme config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[theme.site_title] must not be empty".into(),
            ));
        }
        if self.default_image.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[theme.default_image] must not be empty".into(),
            ));
        }

        let menus = [
            ("header", &self.menus.header),
            ("header_ctas", &self.menus.header_ctas),
            ("footer", &self.menus.footer),
        ];
        for (name, items) in menus {
            for (index, item) in items.iter().enumerate() {
                item.validate()
                    .map_err(|reason| {
                        ConfigError::Validation(format!(
                            "[theme.menus.{name}] item {index}: {reason}"
                        ))
                    })?;
            }
        }
        Ok(())
    }
}

impl MenuItem {
    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Link(link) => link.validate(),
            Self::Group(MenuGroup { label, items }) => {
                if label.trim().is_empty() {
                    return Err("group label must not be empty".into());
                }
                if items.is_empty() {
                    return Err(format!("group `{label}` has no items"));
                }
                items.iter().try_for_each(MenuLink::validate)
            }
        }
    }
}

impl MenuLink {
    fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("label must not be empty".into());
        }
        if self.url.trim().is_empty() {
            return Err(format!("`{}` has an empty url", self.label));
        }
        Ok(())
    }
}
