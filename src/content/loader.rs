//! Content loaders.
//!
//! - [`glob`]: walk a base directory and read every file matching a pattern
//!   (markdown with frontmatter, JSON or YAML data files).
//! - [`file`]: read every record of a single JSON file.
//!
//! Files are parsed in parallel; entries are always returned in path order.

use super::{
    entry::{Data, Entry},
    error::ContentError,
    frontmatter,
};
use crate::{log, utils::glob as glob_pattern};
use rayon::prelude::*;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Load every file under `base` matching `pattern`.
///
/// `generate_id` receives the `/`-separated path relative to `base` and the
/// parsed data. A missing `base` yields an empty collection.
pub fn glob<F>(base: &Path, pattern: &str, generate_id: F) -> Result<Vec<Entry>, ContentError>
where
    F: Fn(&str, &Data) -> Result<String, ContentError> + Sync,
{
    let matcher =
        glob_pattern::compile(pattern).map_err(|e| ContentError::Pattern(pattern.to_owned(), e))?;

    if !base.is_dir() {
        log!("content"; "{} not found, skipping", base.display());
        return Ok(Vec::new());
    }

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    for entry in WalkDir::new(base).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(base).to_path_buf();
            ContentError::Io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(base) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");
        if matcher.is_match(&relative) {
            files.push((entry.into_path(), relative));
        }
    }

    files
        .into_par_iter()
        .map(|(source, file_path)| -> Result<Entry, ContentError> {
            let (data, body) = read_entry(&source)?;
            let id = generate_id(&file_path, &data)?;
            Ok(Entry {
                id,
                file_path,
                source,
                data,
                body,
            })
        })
        .collect()
}

/// Load every record of a single JSON file.
///
/// Accepts an array of records, each carrying its own `id`, or a map of
/// `id → record` (the key is copied into the record when it has no `id`).
pub fn file(collection: &str, path: &Path) -> Result<Vec<Entry>, ContentError> {
    let content =
        fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| ContentError::Json(path.to_path_buf(), e))?;

    let file_path = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let entry = |id: String, data: Data| Entry {
        id,
        file_path: file_path.clone(),
        source: path.to_path_buf(),
        data,
        body: String::new(),
    };

    match value {
        Value::Array(records) => records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let Value::Object(data) = record else {
                    return Err(ContentError::validation(
                        collection,
                        &format!("#{index}"),
                        "",
                        "record must be an object",
                    ));
                };
                match data.get("id").and_then(Value::as_str) {
                    Some(id) if !id.is_empty() => Ok(entry(id.to_owned(), data)),
                    _ => Err(ContentError::validation(
                        collection,
                        &format!("#{index}"),
                        "id",
                        "required",
                    )),
                }
            })
            .collect(),
        Value::Object(records) => records
            .into_iter()
            .map(|(id, record)| {
                let Value::Object(mut data) = record else {
                    return Err(ContentError::validation(
                        collection,
                        &id,
                        "",
                        "record must be an object",
                    ));
                };
                data.entry("id").or_insert_with(|| Value::String(id.clone()));
                Ok(entry(id, data))
            })
            .collect(),
        _ => Err(ContentError::NotAMapping(path.to_path_buf())),
    }
}

/// Read one content file into `(data, body)` based on its extension.
fn read_entry(path: &Path) -> Result<(Data, String), ContentError> {
    let content =
        fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let (value, body) = match extension {
        "json" => (
            serde_json::from_str(&content).map_err(|e| ContentError::Json(path.to_path_buf(), e))?,
            String::new(),
        ),
        "yaml" | "yml" => (parse_yaml(path, &content)?, String::new()),
        _ => {
            let (yaml, body) = frontmatter::split(&content);
            let value = match yaml {
                Some(yaml) => parse_yaml(path, yaml)?,
                None => Value::Null,
            };
            (value, body.to_owned())
        }
    };

    match value {
        Value::Object(data) => Ok((data, body)),
        Value::Null => Ok((Data::new(), body)),
        _ => Err(ContentError::NotAMapping(path.to_path_buf())),
    }
}

fn parse_yaml(path: &Path, yaml: &str) -> Result<Value, ContentError> {
    if yaml.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(yaml).map_err(|e| ContentError::Frontmatter(path.to_path_buf(), e))
}
