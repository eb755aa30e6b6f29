//! Site initialization module.
//!
//! Scaffolds a minimal site that passes `orbit check` out of the box.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Default config filename
const CONFIG_FILE: &str = "orbit.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content/blog", "content/profiles", "content/home"];

const DEFAULT_CONFIG: &str = r#"[base]
# url = "https://example.com/"
language = "en"

[theme]
site_title = "My Site"
default_image = "/images/default-image.jpg"

[[theme.menus.header]]
label = "Blogs"
url = "/blogs"

[[theme.menus.footer]]
label = "Blogs"
url = "/blogs"

[content]
dir = "content"

[build]
output = "dist"

[redirects]
"/blog" = "/blogs"
"#;

const SAMPLE_PROFILES: &str = r#"[
  { "id": "orbit-team", "name": "Orbit Team", "title": "Maintainers" }
]
"#;

const SAMPLE_POST: &str = r#"---
title: Hello, world
description: The first post of this site.
authors:
  - orbit-team
category: guide
---

Posts live in `content/blog/YYYY-MM-DD-<slug>/index.md`.
"#;

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = &config.root;

    // Without a name the site is created in place, so the directory must be empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `orbit init <SITE_NAME>` to create in a subdirectory."
        );
    }

    let post = format!("content/blog/{}-hello-world/index.md", Utc::now().format("%Y-%m-%d"));
    let files = [
        (CONFIG_FILE, DEFAULT_CONFIG),
        ("content/profiles/profiles.json", SAMPLE_PROFILES),
        (post.as_str(), SAMPLE_POST),
    ];
    for (relative, _) in &files {
        let path = root.join(relative);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `orbit init <SITE_NAME>` instead.",
                path.display()
            );
        }
    }

    init_site_structure(root)?;
    for (relative, content) in files {
        write_file(&root.join(relative), content)?;
    }

    let output = config
        .build
        .output
        .strip_prefix(root)
        .unwrap_or(&config.build.output);
    init_ignored_files(root, &[output])?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write a file, creating its parent directories.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Initialize ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .map(|p| format!("/{}/\n", p.trim_matches('/')))
        .collect::<String>();

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
