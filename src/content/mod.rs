//! Content collections.
//!
//! | Collection | Source                          | Identifier                    |
//! |------------|---------------------------------|-------------------------------|
//! | `profiles` | one JSON file, or a glob        | `id` field                    |
//! | `blog`     | `YYYY-MM-DD-<slug>/index.md`    | `slug` override, else `<slug>` |
//! | `home`     | `*.{json,md}` (optional)        | file stem                     |
//!
//! Profiles load first: blog posts reference them through `authors`.

pub mod blog;
mod entry;
mod error;
mod frontmatter;
pub mod home;
mod loader;
pub mod path;
pub mod profiles;
pub mod schema;

pub use blog::BlogPost;
pub use entry::{Data, Entry};
pub use error::ContentError;
pub use profiles::Profile;

use crate::{config::ContentConfig, log};
use rustc_hash::FxHashSet;
use schema::References;
use serde_json::Value;
use std::collections::BTreeMap;

/// Every collection of a site, validated.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub profiles: BTreeMap<String, Profile>,
    /// Newest first.
    pub blog: Vec<BlogPost>,
    pub home: BTreeMap<String, Value>,
}

/// Load and validate all collections.
pub fn load(config: &ContentConfig) -> Result<ContentSet, ContentError> {
    let profiles = profiles::validate(profiles::load(&config.profiles)?)?;
    log!("content"; "{} profiles", profiles.len());

    let mut references = References::default();
    references.insert(profiles::COLLECTION, profiles.keys().cloned());

    let blog = blog::validate(blog::load(&config.blog)?, &references)?;
    log!("content"; "{} blog posts", blog.len());

    let home = home::validate(home::load(&config.home)?)?;
    if !home.is_empty() {
        log!("content"; "{} home fragments", home.len());
    }

    Ok(ContentSet {
        profiles,
        blog,
        home,
    })
}

/// Reject collections where two entries share an id.
pub(crate) fn ensure_unique_ids(collection: &str, entries: &[Entry]) -> Result<(), ContentError> {
    let mut seen = FxHashSet::default();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(ContentError::validation(
                collection,
                &entry.id,
                "id",
                format!("duplicate id (also used by `{}`)", entry.file_path),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfilesSource;
    use std::{fs, path::Path};

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config(root: &Path) -> ContentConfig {
        let mut config = ContentConfig::default();
        config.resolve(root);
        config
    }

    #[test]
    fn test_load_site_content() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "content/profiles/profiles.json",
            r#"[{"id": "alice", "name": "Alice"}]"#,
        );
        write(
            dir.path(),
            "content/blog/2024-01-15-hello-world/index.md",
            "---\ntitle: Hello\nauthors: [alice]\ncategory: guide\n---\nHi!",
        );
        write(
            dir.path(),
            "content/blog/2023-11-02-launch/index.md",
            "---\ntitle: Launch\nauthors: [alice]\ncategory: guide\n---\n",
        );

        let content = load(&config(dir.path())).unwrap();
        assert_eq!(content.profiles.len(), 1);
        let ids: Vec<_> = content.blog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["hello-world", "launch"]);
        assert!(content.home.is_empty());
    }

    #[test]
    fn test_unknown_author_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "content/profiles/profiles.json", "[]");
        write(
            dir.path(),
            "content/blog/2024-01-15-hello/index.md",
            "---\ntitle: Hello\nauthors: [ghost]\ncategory: guide\n---\n",
        );

        let err = load(&config(dir.path())).unwrap_err();
        assert!(matches!(err, ContentError::Validation { ref field, .. } if field == "authors[0]"));
    }

    #[test]
    fn test_missing_profiles_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&config(dir.path())).unwrap_err();
        assert!(matches!(err, ContentError::Io(..)));
    }

    #[test]
    fn test_glob_profiles_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ContentConfig {
            profiles: ProfilesSource::Glob {
                dir: "people".into(),
                pattern: "**/index.md".into(),
            },
            ..Default::default()
        };
        config.resolve(dir.path());

        let content = load(&config).unwrap();
        assert!(content.profiles.is_empty());
        assert!(content.blog.is_empty());
    }

    #[test]
    fn test_ensure_unique_ids() {
        let entry = |id: &str, file_path: &str| Entry {
            id: id.into(),
            file_path: file_path.into(),
            source: file_path.into(),
            data: Data::new(),
            body: String::new(),
        };
        assert!(ensure_unique_ids("blog", &[entry("a", "a.md"), entry("b", "b.md")]).is_ok());

        let err = ensure_unique_ids("blog", &[entry("a", "a.md"), entry("a", "x/a.md")]).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Validation { ref entry, ref field, ref reason, .. }
                if entry == "a" && field == "id" && reason.contains("x/a.md")
        ));
    }
}
