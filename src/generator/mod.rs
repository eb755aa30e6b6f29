//! Output generation.
//!
//! | File                              | Generator          |
//! |-----------------------------------|--------------------|
//! | `<data>/{blog,profiles,home}.json` | [`data`]           |
//! | `<data>/config.json`              | [`data`]           |
//! | `<data>/virtual-<module>.mjs`     | [`module`]         |
//! | `_redirects`                      | [`redirects`]      |

pub mod data;
pub mod module;
pub mod redirects;
