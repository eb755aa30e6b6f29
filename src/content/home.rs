//! The optional `home` collection: loosely-typed landing page fragments.
//!
//! Every field is optional; only the shape of nested buttons, logos and
//! items is checked.

use super::{
    entry::{Data, Entry, default_id},
    error::ContentError,
    loader,
    schema::{Field, Kind, References, Schema},
};
use crate::config::HomeConfig;
use serde_json::Value;
use std::collections::BTreeMap;

pub const COLLECTION: &str = "home";

fn button() -> Kind {
    Kind::Object(vec![
        Field::required("label", Kind::Text),
        Field::required("url", Kind::Text),
        Field::optional("style", Kind::Text),
    ])
}

pub fn schema() -> Schema {
    let hero = Kind::Object(vec![
        Field::optional("title", Kind::Text),
        Field::optional("description", Kind::Text),
        Field::optional("image", Kind::Image),
        Field::optional("buttons", Kind::array(button())),
    ]);
    let logo = Kind::Object(vec![
        Field::optional("name", Kind::Text),
        Field::required("image", Kind::Image),
        Field::optional("url", Kind::Text),
    ]);
    let sub_item = Kind::Object(vec![
        Field::required("title", Kind::Text),
        Field::optional("description", Kind::Text),
    ]);
    let item = Kind::Object(vec![
        Field::required("title", Kind::Text),
        Field::optional("description", Kind::Text),
        Field::optional("image", Kind::Image),
        Field::optional("link", button()),
        Field::optional("items", Kind::array(sub_item)),
    ]);

    Schema::new(
        COLLECTION,
        vec![
            Field::optional("title", Kind::Text),
            Field::optional("description", Kind::Text),
            Field::optional("hero", hero),
            Field::optional("buttons", Kind::array(button())),
            Field::optional("links", Kind::array(button())),
            Field::optional("logos", Kind::array(logo)),
            Field::optional("items", Kind::array(item)),
        ],
    )
}

/// Load fragments; a missing home directory is an empty collection.
pub fn load(config: &HomeConfig) -> Result<Vec<Entry>, ContentError> {
    loader::glob(&config.dir, &config.pattern, |file_path, _: &Data| {
        Ok(default_id(file_path))
    })
}

/// Validate fragments, keyed by id.
pub fn validate(entries: Vec<Entry>) -> Result<BTreeMap<String, Value>, ContentError> {
    super::ensure_unique_ids(COLLECTION, &entries)?;
    let schema = schema();
    let references = References::default();

    entries
        .into_iter()
        .map(|entry| {
            let data = schema.validate(&entry, &references)?;
            Ok((entry.id, Value::Object(data)))
        })
        .collect()
}
