//! The `profiles` collection: blog authors.

use super::{
    entry::{Data, Entry, default_id},
    error::ContentError,
    loader,
    schema::{Field, Kind, References, Schema},
};
use crate::config::ProfilesSource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const COLLECTION: &str = "profiles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub fn schema() -> Schema {
    Schema::new(
        COLLECTION,
        vec![
            Field::required("id", Kind::Text),
            Field::required("name", Kind::Text),
            Field::optional("title", Kind::Text),
            Field::optional("image", Kind::Text),
        ],
    )
}

/// Per-file profiles are named by their `id` field, else by their path.
fn generate_id(file_path: &str, data: &Data) -> Result<String, ContentError> {
    Ok(data
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map_or_else(|| default_id(file_path), str::to_owned))
}

/// Load profiles from a single JSON file or one file per profile.
///
/// Per-file profiles without an `id` field get their directory name as `id`.
pub fn load(source: &ProfilesSource) -> Result<Vec<Entry>, ContentError> {
    match source {
        ProfilesSource::File { path } => loader::file(COLLECTION, path),
        ProfilesSource::Glob { dir, pattern } => {
            let mut entries = loader::glob(dir, pattern, generate_id)?;
            for entry in &mut entries {
                entry
                    .data
                    .entry("id")
                    .or_insert_with(|| Value::String(entry.id.clone()));
            }
            Ok(entries)
        }
    }
}

/// Validate profiles, keyed by id.
pub fn validate(entries: Vec<Entry>) -> Result<BTreeMap<String, Profile>, ContentError> {
    super::ensure_unique_ids(COLLECTION, &entries)?;
    let schema = schema();
    let references = References::default();

    entries
        .into_iter()
        .map(|entry| {
            let data = schema.validate(&entry, &references)?;
            let profile: Profile = serde_json::from_value(Value::Object(data))
                .map_err(|e| ContentError::validation(COLLECTION, &entry.id, "", e.to_string()))?;
            Ok((entry.id, profile))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{fs, path::PathBuf};

    fn entry(id: &str, value: Value) -> Entry {
        let Value::Object(data) = value else {
            panic!("expected an object");
        };
        Entry {
            id: id.into(),
            file_path: "profiles.json".into(),
            source: PathBuf::from("/content/profiles/profiles.json"),
            data,
            body: String::new(),
        }
    }

    #[test]
    fn test_minimal_profile_passes() {
        let profiles = validate(vec![entry("alice", json!({"id": "alice", "name": "Alice"}))]).unwrap();
        assert_eq!(
            profiles["alice"],
            Profile {
                id: "alice".into(),
                name: "Alice".into(),
                title: None,
                image: None,
            }
        );
    }

    #[test]
    fn test_missing_name_fails() {
        let err = validate(vec![entry("alice", json!({"id": "alice"}))]).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Validation { ref collection, ref field, .. }
                if collection == "profiles" && field == "name"
        ));
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let err = validate(vec![
            entry("alice", json!({"id": "alice", "name": "Alice"})),
            entry("alice", json!({"id": "alice", "name": "Alice B."})),
        ])
        .unwrap_err();
        assert!(matches!(err, ContentError::Validation { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_generate_id() {
        let data = json!({"id": "carol"});
        let Value::Object(data) = data else { unreachable!() };
        assert_eq!(generate_id("c/index.md", &data).unwrap(), "carol");
        assert_eq!(generate_id("dave/index.md", &Data::new()).unwrap(), "dave");
    }

    #[test]
    fn test_load_glob_source() {
        let dir = tempfile::tempdir().unwrap();
        let alice = dir.path().join("alice");
        fs::create_dir_all(&alice).unwrap();
        fs::write(
            alice.join("index.md"),
            "---\nid: alice\nname: Alice\ntitle: Engineer\n---\nBio",
        )
        .unwrap();

        let source = ProfilesSource::Glob {
            dir: dir.path().to_path_buf(),
            pattern: "**/index.md".into(),
        };
        let profiles = validate(load(&source).unwrap()).unwrap();
        assert_eq!(profiles["alice"].title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_load_glob_source_without_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("alice")).unwrap();
        fs::write(dir.path().join("alice/index.md"), "---\nname: Alice\n---\n").unwrap();

        let source = ProfilesSource::Glob {
            dir: dir.path().to_path_buf(),
            pattern: "**/index.md".into(),
        };
        let profiles = validate(load(&source).unwrap()).unwrap();
        assert_eq!(profiles["alice"].id, "alice");
        assert_eq!(profiles["alice"].name, "Alice");
    }

    #[test]
    fn test_load_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"[{"id": "alice", "name": "Alice", "image": "/images/alice.png"}]"#,
        )
        .unwrap();

        let profiles = validate(load(&ProfilesSource::File { path }).unwrap()).unwrap();
        assert_eq!(profiles["alice"].image.as_deref(), Some("/images/alice.png"));
    }
}
