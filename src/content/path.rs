//! The `YYYY-MM-DD-<slug>` path convention of blog posts.
//!
//! Both the identifier and the publish date of a post come from this one
//! parser, so the two can never disagree about what a valid path is.

use super::error::ContentError;
use crate::utils::date::parse_ymd;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static RE_BLOG_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})-([A-Za-z0-9_-]+)").unwrap()
});

/// Date and slug parts of a blog post path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPath<'a> {
    year: &'a str,
    month: &'a str,
    day: &'a str,
    /// The `<slug>` portion.
    pub slug: &'a str,
}

impl<'a> BlogPath<'a> {
    /// Find the first `YYYY-MM-DD-<slug>` segment anywhere in `path`.
    ///
    /// | Path                                  | slug          |
    /// |---------------------------------------|---------------|
    /// | `2024-01-15-hello-world/index.md`     | `hello-world` |
    /// | `2024/2024-01-15-launch_v2/index.md`  | `launch_v2`   |
    /// | `hello-world/index.md`                | FormatError   |
    pub fn parse(path: &'a str) -> Result<Self, ContentError> {
        let format_error = || ContentError::Format {
            path: path.to_owned(),
        };
        let caps = RE_BLOG_PATH.captures(path).ok_or_else(format_error)?;
        let group = |i| caps.get(i).map(|m| m.as_str()).ok_or_else(format_error);

        Ok(Self {
            year: group(1)?,
            month: group(2)?,
            day: group(3)?,
            slug: group(4)?,
        })
    }

    /// `YYYY-MM-DD` as written in the path.
    pub fn date_str(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// Midnight UTC of the path date; `None` for impossible dates like `2023-02-30`.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        parse_ymd(&self.date_str())
    }
}
