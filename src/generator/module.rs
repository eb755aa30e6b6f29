//! Site config virtual module.
//!
//! Page templates import the site config as a single module:
//!
//! ```js
//! import { config } from "virtual:config";
//! ```
//!
//! The module is emitted as `virtual-<name>.mjs` next to the data files;
//! the bundler aliases `virtual:<name>` to it.

use crate::{
    config::{IntegrationsConfig, SiteConfig, ThemeConfig},
    log,
};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::{fs, path::PathBuf, sync::LazyLock};

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Config exposed to templates: the theme plus site-wide switches.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<&'a str>,
    pub language: &'a str,
    #[serde(flatten)]
    pub theme: &'a ThemeConfig,
    pub integrations: &'a IntegrationsConfig,
}

impl<'a> From<&'a SiteConfig> for ModuleConfig<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            site: config.base.url.as_deref(),
            language: &config.base.language,
            theme: &config.theme,
            integrations: &config.integrations,
        }
    }
}

/// Import specifier of the module, e.g. `virtual:config`.
pub fn module_id(name: &str) -> String {
    format!("virtual:{name}")
}

/// File stem of the module: lowercased, every non-word char replaced by `-`.
///
/// `My Config` → `virtual-my-config`.
pub fn file_stem(name: &str) -> String {
    let name = name.to_lowercase();
    format!("virtual-{}", RE_NON_WORD.replace_all(&name, "-"))
}

/// Module source.
pub fn render(config: &SiteConfig) -> Result<String> {
    let json = serde_json::to_string(&ModuleConfig::from(config))?;
    Ok(format!("export const config = {json};\n"))
}

/// Write the module into the data directory, returning its path.
pub fn write_module(config: &SiteConfig) -> Result<PathBuf> {
    let path = config
        .data_dir()
        .join(file_stem(&config.build.module))
        .with_extension("mjs");
    let source = render(config)?;

    fs::write(&path, source)
        .with_context(|| format!("Failed to write config module to {}", path.display()))?;

    log!("module"; "{} ({})", module_id(&config.build.module), path.display());
    Ok(path)
}
