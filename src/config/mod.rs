//! Site configuration management for `orbit.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[base]`         | Site origin and language                         |
//! | `[theme]`        | Site title, default image, menus                 |
//! | `[content]`      | Where the blog/profiles/home collections live    |
//! | `[build]`        | Output, data directory, config module name       |
//! | `[integrations]` | Sitemap, favicon and search toggles              |
//! | `[redirects]`    | Old path → new path table                        |
//!
//! The loaded [`SiteConfig`] is built once in `main` and passed by reference
//! to every consumer. Nothing reads it from global state.
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.netlify.app/"
//!
//! [theme]
//! site_title = "Unity Catalog"
//!
//! [redirects]
//! "/blog" = "/blogs"
//! ```

mod base;
mod build;
mod content;
pub mod defaults;
mod error;
mod theme;

pub use base::BaseConfig;
pub use build::{BuildConfig, IntegrationsConfig};
pub use content::{BlogConfig, ContentConfig, HomeConfig, ProfilesSource};
pub use error::ConfigError;
pub use theme::{MenuGroup, MenuItem, MenuLink, Menus, ThemeConfig};

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing orbit.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub integrations: IntegrationsConfig,

    /// Static redirects applied by the hosting edge.
    #[serde(default)]
    pub redirects: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).with_context(|| format!("in `{}`", path.display()))
    }

    /// Load, resolve and validate the config for a CLI invocation.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => root.join(name),
            _ => root,
        };
        let config_path = root.join(&cli.config);

        let mut config = match (cli.is_init(), config_path.exists()) {
            (true, true) => bail!(
                "Config file already exists. Remove it manually or init in a different path."
            ),
            (true, false) => Self::default(),
            (false, false) => bail!("Config file not found: {}", config_path.display()),
            (false, true) => Self::from_path(&config_path)?,
        };

        config.update_with_cli(cli);
        config.resolve(&root);
        config.config_path = normalize_path(&config_path);

        if !cli.is_init() {
            config.validate()?;
        }
        Ok(config)
    }

    /// Apply CLI overrides that are not path-relative.
    fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        if let Commands::Build { clean } = cli.command {
            self.build.clean = clean;
        }
    }

    /// Resolve every directory against the site root.
    pub fn resolve(&mut self, root: &Path) {
        self.root = normalize_path(root);
        self.content.resolve(&self.root);
        self.build.output = self.root.join(&self.build.output);
    }

    /// Directory holding the emitted collection data and config module.
    pub fn data_dir(&self) -> PathBuf {
        self.build.output.join(&self.build.data)
    }

    /// Validate the configuration shape.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        self.theme.validate()?;

        if self.build.module.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[build.module] must not be empty".into()
            ));
        }
        let output = normalize_path(&self.build.output);
        let guarded = [
            ("site root", &self.root),
            ("[content.dir]", &self.content.dir),
            ("config file", &self.config_path),
        ];
        for (name, path) in guarded {
            if !path.as_os_str().is_empty() && normalize_path(path).starts_with(&output) {
                bail!(ConfigError::Validation(format!(
                    "[build.output] `{}` must not contain the {name} `{}`",
                    self.build.output.display(),
                    path.display()
                )));
            }
        }
        if self.build.data.is_absolute() {
            bail!(ConfigError::Validation(
                "[build.data] must be relative to [build.output]".into()
            ));
        }

        for (from, to) in &self.redirects {
            if !from.starts_with('/') {
                bail!(ConfigError::Validation(format!(
                    "[redirects] source `{from}` must start with `/`"
                )));
            }
            if !(to.starts_with('/') || to.starts_with("http")) {
                bail!(ConfigError::Validation(format!(
                    "[redirects] target `{to}` must be a path or an http(s) url"
                )));
            }
            if from.trim_end_matches('/') == to.trim_end_matches('/') {
                bail!(ConfigError::Validation(format!(
                    "[redirects] `{from}` redirects to itself"
                )));
            }
        }
        Ok(())
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
