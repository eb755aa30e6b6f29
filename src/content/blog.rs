//! The `blog` collection.
//!
//! Every post lives at `YYYY-MM-DD-<slug>/index.md`. The path names the post
//! (`<slug>`, unless the frontmatter carries a `slug` override) and dates it
//! (`YYYY-MM-DD` at midnight UTC).

use super::{
    entry::{Data, Entry},
    error::ContentError,
    loader,
    path::BlogPath,
    profiles,
    schema::{Field, Kind, References, Schema},
};
use crate::{config::BlogConfig, utils::date};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const COLLECTION: &str = "blog";

/// Allowed values of `category`.
pub const CATEGORIES: &[&str] = &["guide"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Guide,
}

/// Frontmatter fields of a post, after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogFields {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub authors: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// A validated, addressable blog post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    #[serde(serialize_with = "date::serialize_rfc3339")]
    pub published_at: DateTime<Utc>,
    pub file_path: String,
    #[serde(flatten)]
    pub fields: BlogFields,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
}

pub fn schema() -> Schema {
    Schema::new(
        COLLECTION,
        vec![
            Field::required("title", Kind::Text),
            Field::optional("description", Kind::Text),
            Field::optional("thumbnail", Kind::Image),
            Field::required("authors", Kind::array(Kind::Reference(profiles::COLLECTION))),
            Field::required("category", Kind::Enum(CATEGORIES)),
            Field::optional("date", Kind::Text),
            Field::optional("featured", Kind::Bool),
        ],
    )
}

/// Identifier of a blog entry.
///
/// A non-empty `slug` in the data wins; otherwise the `<slug>` part of a
/// `YYYY-MM-DD-<slug>` path. Anything else is a [`ContentError::Format`].
/// A `slug` that is not text is a [`ContentError::Validation`].
pub fn derive_id(file_path: &str, data: &Data) -> Result<String, ContentError> {
    match data.get("slug") {
        Some(Value::String(slug)) if !slug.is_empty() => return Ok(slug.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => {
            return Err(ContentError::validation(
                COLLECTION,
                file_path,
                "slug",
                "expected text",
            ));
        }
    }
    BlogPath::parse(file_path).map(|path| path.slug.to_owned())
}

/// Publish date of a post: midnight UTC of the date in its file path.
///
/// `2023-11-02-launch/index.md` → `2023-11-02T00:00:00Z`.
pub fn published_at(file_path: Option<&str>) -> Result<DateTime<Utc>, ContentError> {
    let file_path = file_path
        .filter(|path| !path.is_empty())
        .ok_or(ContentError::MissingField { field: "filePath" })?;
    let format_error = || ContentError::Format {
        path: file_path.to_owned(),
    };
    BlogPath::parse(file_path)?.date().ok_or_else(format_error)
}

/// Publish date of an entry whose path may carry no date.
///
/// Posts with a `slug` override may live at an undated path; they fall back
/// to a `YYYY-MM-DD` value in their `date` field. A dated path with an
/// impossible date never falls back.
fn resolve_published_at(entry: &Entry) -> Result<DateTime<Utc>, ContentError> {
    if BlogPath::parse(&entry.file_path).is_ok() {
        return published_at(Some(entry.file_path.as_str()));
    }
    entry
        .str_field("date")
        .and_then(date::parse_ymd)
        .ok_or_else(|| ContentError::Format {
            path: entry.file_path.clone(),
        })
}

/// Load every post under the configured blog directory.
pub fn load(config: &BlogConfig) -> Result<Vec<Entry>, ContentError> {
    loader::glob(&config.dir, &config.pattern, derive_id)
}

/// Validate posts against the schema and the known profiles.
///
/// Returns posts newest first; posts of the same day are ordered by id.
pub fn validate(entries: Vec<Entry>, references: &References) -> Result<Vec<BlogPost>, ContentError> {
    super::ensure_unique_ids(COLLECTION, &entries)?;
    let schema = schema();

    let mut posts = entries
        .into_iter()
        .map(|entry| -> Result<BlogPost, ContentError> {
            let data = schema.validate(&entry, references)?;
            let published_at = resolve_published_at(&entry)?;
            let fields: BlogFields = serde_json::from_value(Value::Object(data))
                .map_err(|e| ContentError::validation(COLLECTION, &entry.id, "", e.to_string()))?;
            Ok(BlogPost {
                id: entry.id,
                published_at,
                file_path: entry.file_path,
                fields,
                body: entry.body,
            })
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    posts.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(posts)
}
