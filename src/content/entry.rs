//! Loaded content entries.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Field mapping of an entry (frontmatter or JSON record).
pub type Data = Map<String, Value>;

/// One record of a collection, before schema validation.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Derived identifier, unique within the collection.
    pub id: String,
    /// Path relative to the collection base, `/`-separated.
    pub file_path: String,
    /// Absolute source file the entry was read from.
    pub source: PathBuf,
    pub data: Data,
    /// Markdown body, empty for data files.
    pub body: String,
}

impl Entry {
    /// Directory relative images are resolved against.
    pub fn dir(&self) -> Option<&Path> {
        self.source.parent()
    }

    /// String value of a data field, if present.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(Value::as_str)
    }
}

/// Default identifier for an entry path: extension and trailing `/index` removed.
///
/// `alice/index.md` → `alice`, `hero.json` → `hero`.
pub fn default_id(file_path: &str) -> String {
    let stem = match file_path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => file_path,
    };
    let stem = stem.strip_suffix("/index").unwrap_or(stem);
    stem.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_id() {
        assert_eq!(default_id("alice/index.md"), "alice");
        assert_eq!(default_id("hero.json"), "hero");
        assert_eq!(default_id("team/bob/index.md"), "team/bob");
        assert_eq!(default_id("index.md"), "index");
        assert_eq!(default_id("v1.2/notes"), "v1.2/notes");
    }

    #[test]
    fn test_str_field() {
        let mut data = Data::new();
        data.insert("slug".into(), Value::String("custom".into()));
        data.insert("featured".into(), Value::Bool(true));
        let entry = Entry {
            id: "custom".into(),
            file_path: "post/index.md".into(),
            source: PathBuf::from("/site/content/blog/post/index.md"),
            data,
            body: String::new(),
        };
        assert_eq!(entry.str_field("slug"), Some("custom"));
        assert_eq!(entry.str_field("featured"), None);
        assert_eq!(entry.dir(), Some(Path::new("/site/content/blog/post")));
    }
}
