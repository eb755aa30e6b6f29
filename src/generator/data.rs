//! Collection data files.
//!
//! Writes every validated collection as JSON into the data directory, where
//! the rendering layer picks them up:
//!
//! - `blog.json`: posts, newest first
//! - `profiles.json`: profiles sorted by id
//! - `home.json`: fragment id → fragment, only when the collection exists
//! - `config.json`: the same config the virtual module exports

use super::module::ModuleConfig;
use crate::{config::SiteConfig, content::ContentSet, log};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write all data files, returning the paths written.
pub fn write_data(config: &SiteConfig, content: &ContentSet) -> Result<Vec<PathBuf>> {
    let dir = config.data_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

    let mut written = vec![
        write_json(&dir, "blog.json", &content.blog)?,
        write_json(&dir, "profiles.json", &content.profiles.values().collect::<Vec<_>>())?,
    ];
    if !content.home.is_empty() {
        written.push(write_json(&dir, "home.json", &content.home)?);
    }
    written.push(write_json(&dir, "config.json", &ModuleConfig::from(config))?);

    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("data"; "{name}");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, Profile, blog::BlogFields, blog::Category};
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.into(),
            name: id.to_uppercase(),
            title: None,
            image: None,
        }
    }

    fn content() -> ContentSet {
        let post = BlogPost {
            id: "hello".into(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            file_path: "2024-01-15-hello/index.md".into(),
            fields: BlogFields {
                title: "Hello".into(),
                description: None,
                thumbnail: None,
                authors: vec!["bob".into()],
                category: Category::Guide,
                date: None,
                featured: Some(true),
            },
            body: "Hi!".into(),
        };
        ContentSet {
            profiles: BTreeMap::from([
                ("bob".to_string(), profile("bob")),
                ("alice".to_string(), profile("alice")),
            ]),
            blog: vec![post],
            home: BTreeMap::new(),
        }
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_write_data() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.resolve(dir.path());

        let written = write_data(&config, &content()).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["blog.json", "profiles.json", "config.json"]);

        let data = config.data_dir();
        let blog = read(&data.join("blog.json"));
        assert_eq!(blog[0]["publishedAt"], "2024-01-15T00:00:00Z");
        assert_eq!(blog[0]["featured"], true);
        assert_eq!(blog[0]["body"], "Hi!");

        let profiles = read(&data.join("profiles.json"));
        assert_eq!(profiles[0]["id"], "alice");
        assert_eq!(profiles[1]["id"], "bob");

        let site = read(&data.join("config.json"));
        assert_eq!(site["siteTitle"], "My Site");
    }

    #[test]
    fn test_write_home_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.resolve(dir.path());

        let mut content = content();
        content
            .home
            .insert("hero".into(), json!({"hero": {"title": "Welcome"}}));
        write_data(&config, &content).unwrap();

        let home = read(&config.data_dir().join("home.json"));
        assert_eq!(home["hero"]["hero"]["title"], "Welcome");
    }
}
