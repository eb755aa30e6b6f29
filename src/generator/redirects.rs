//! Static redirect table (`_redirects`).
//!
//! ```text
//! /blog /blogs 301
//! ```

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, fs, path::PathBuf};

/// Redirect status written for every rule.
const STATUS: u16 = 301;

/// One `from to 301` line per rule, sorted by source path.
pub fn render(redirects: &BTreeMap<String, String>) -> String {
    redirects
        .iter()
        .map(|(from, to)| format!("{from} {to} {STATUS}\n"))
        .collect()
}

/// Write `<output>/_redirects`; nothing is written for an empty table.
pub fn write_redirects(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if config.redirects.is_empty() {
        return Ok(None);
    }

    let path = config.build.output.join("_redirects");
    fs::write(&path, render(&config.redirects))
        .with_context(|| format!("Failed to write redirects to {}", path.display()))?;

    log!("redirects"; "{} rules", config.redirects.len());
    Ok(Some(path))
}
