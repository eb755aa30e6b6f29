//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── check_site() ──► load + validate profiles, blog, home
//!     │
//!     ├── write_data() ──► <data>/*.json
//!     │
//!     ├── write_module() ──► <data>/virtual-<module>.mjs
//!     │
//!     └── write_redirects() ──► _redirects
//! ```
//!
//! Nothing is written unless every collection validates.

use crate::{
    config::SiteConfig,
    content::{self, ContentSet},
    generator::{data::write_data, module::write_module, redirects::write_redirects},
    log,
};
use anyhow::{Context, Result};
use std::fs;

/// Load and validate every collection.
pub fn check_site(config: &SiteConfig) -> Result<ContentSet> {
    log!("check"; "using {}", config.config_path.display());
    let content = content::load(&config.content)
        .with_context(|| format!("in site `{}`", config.root.display()))?;

    log!(
        "check";
        "{} posts, {} profiles, {} home fragments",
        content.blog.len(),
        content.profiles.len(),
        content.home.len()
    );
    Ok(content)
}

/// Validate the site, then emit data files, the config module and redirects.
///
/// If `config.build.clean` is true, clears the entire output directory first.
pub fn build_site(config: &SiteConfig) -> Result<ContentSet> {
    let content = check_site(config)?;
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
    }

    write_data(config, &content)?;
    write_module(config)?;
    write_redirects(config)?;

    log!("build"; "done, output in {}", output.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentError;
    use std::path::Path;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(root: &Path) -> SiteConfig {
        write(
            root,
            "content/profiles/profiles.json",
            r#"[{"id": "alice", "name": "Alice"}]"#,
        );
        write(
            root,
            "content/blog/2024-01-15-hello-world/index.md",
            "---\ntitle: Hello\nauthors: [alice]\ncategory: guide\n---\nHi!",
        );
        write(
            root,
            "content/home/hero.json",
            r#"{"hero": {"title": "Welcome"}}"#,
        );

        let mut config = SiteConfig::from_str("[redirects]\n\"/blog\" = \"/blogs\"").unwrap();
        config.resolve(root);
        config
    }

    #[test]
    fn test_build_site() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());

        let content = build_site(&config).unwrap();
        assert_eq!(content.blog[0].id, "hello-world");

        let data = config.data_dir();
        for name in [
            "blog.json",
            "profiles.json",
            "home.json",
            "config.json",
            "virtual-config.mjs",
        ] {
            assert!(data.join(name).exists(), "missing {name}");
        }
        assert_eq!(
            fs::read_to_string(config.build.output.join("_redirects")).unwrap(),
            "/blog /blogs 301\n"
        );
    }

    #[test]
    fn test_build_clean_removes_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site(dir.path());
        write(&config.build.output, "stale.txt", "old");

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!config.build.output.join("stale.txt").exists());
        assert!(config.data_dir().join("blog.json").exists());
    }

    #[test]
    fn test_invalid_content_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());
        write(
            dir.path(),
            "content/blog/undated/index.md",
            "---\ntitle: Lost\nauthors: [alice]\ncategory: guide\n---\n",
        );

        let err = build_site(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::Format { path }) if path == "undated/index.md"
        ));
        assert!(!config.build.output.exists());
    }

    #[test]
    fn test_check_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());
        let content = check_site(&config).unwrap();
        assert_eq!(content.home.len(), 1);
        assert!(!config.build.output.exists());
    }
}
