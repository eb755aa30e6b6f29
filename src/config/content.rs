//! `[content]` section configuration.
//!
//! Locates the three content collections. Relative paths are resolved
//! against `content.dir`, which itself is resolved against the site root.
//!
//! # Example
//! ```toml
//! [content]
//! dir = "src/content"
//!
//! [content.blog]
//! dir = "blog"
//! pattern = "**/index.md"
//!
//! [content.profiles]
//! source = "file"
//! path = "profiles/profiles.json"
//! ```

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Root of all content collections.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub profiles: ProfilesSource,

    #[serde(default)]
    pub home: HomeConfig,
}

/// `[content.blog]` - one `YYYY-MM-DD-<slug>/index.md` per post.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BlogConfig {
    #[serde(default = "defaults::content::blog::dir")]
    #[educe(Default = defaults::content::blog::dir())]
    pub dir: PathBuf,

    #[serde(default = "defaults::content::index_pattern")]
    #[educe(Default = defaults::content::index_pattern())]
    pub pattern: String,
}

/// `[content.profiles]` - where author profiles come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ProfilesSource {
    /// A single JSON file holding every profile.
    File {
        #[serde(default = "defaults::content::profiles::path")]
        path: PathBuf,
    },
    /// One data file per profile under `dir`.
    Glob {
        #[serde(default = "defaults::content::profiles::dir")]
        dir: PathBuf,
        #[serde(default = "defaults::content::index_pattern")]
        pattern: String,
    },
}

impl Default for ProfilesSource {
    fn default() -> Self {
        Self::File {
            path: defaults::content::profiles::path(),
        }
    }
}

/// `[content.home]` - optional landing page fragments.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HomeConfig {
    #[serde(default = "defaults::content::home::dir")]
    #[educe(Default = defaults::content::home::dir())]
    pub dir: PathBuf,

    #[serde(default = "defaults::content::home::pattern")]
    #[educe(Default = defaults::content::home::pattern())]
    pub pattern: String,
}

impl ContentConfig {
    /// Make `dir` absolute under `root` and collection paths absolute under `dir`.
    pub fn resolve(&mut self, root: &Path) {
        self.dir = root.join(&self.dir);
        self.blog.dir = self.dir.join(&self.blog.dir);
        self.home.dir = self.dir.join(&self.home.dir);
        match &mut self.profiles {
            ProfilesSource::File { path } => *path = self.dir.join(&*path),
            ProfilesSource::Glob { dir, .. } => *dir = self.dir.join(&*dir),
        }
    }
}
