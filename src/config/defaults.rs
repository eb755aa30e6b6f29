//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    pub fn site_title() -> String {
        "My Site".into()
    }

    pub fn default_image() -> String {
        "/images/default-image.jpg".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content".into()
    }

    pub fn index_pattern() -> String {
        "**/index.md".into()
    }

    pub mod blog {
        use std::path::PathBuf;

        pub fn dir() -> PathBuf {
            "blog".into()
        }
    }

    pub mod profiles {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "profiles/profiles.json".into()
        }

        pub fn dir() -> PathBuf {
            "profiles".into()
        }
    }

    pub mod home {
        use std::path::PathBuf;

        pub fn dir() -> PathBuf {
            "home".into()
        }

        pub fn pattern() -> String {
            "*.{json,md}".into()
        }
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn data() -> PathBuf {
        "_data".into()
    }

    pub fn module() -> String {
        "config".into()
    }
}
