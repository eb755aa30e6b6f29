//! `[build]` and `[integrations]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in orbit.toml - where generated files go.
///
/// # Example
/// ```toml
/// [build]
/// output = "dist"
/// data = "_data"
/// module = "config"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Data subdirectory of `output` holding collection JSON and the config module.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Name of the config virtual module, imported as `virtual:<module>`.
    #[serde(default = "defaults::build::module")]
    #[educe(Default = defaults::build::module())]
    pub module: String,

    /// Remove the output directory before writing (CLI `--clean`).
    #[serde(skip)]
    pub clean: bool,
}

/// `[integrations]` section - toggles for the external site plugins.
///
/// Orbit does not run these; it hands the switches to the rendering layer.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IntegrationsConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub sitemap: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub favicons: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub search: bool,
}
