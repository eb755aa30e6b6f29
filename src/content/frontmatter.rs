//! YAML frontmatter of markdown entries.

const DELIMITER: &str = "---";

/// Split a markdown file into `(frontmatter, body)`.
///
/// Frontmatter is only recognized when the file starts with a `---` line and
/// a closing `---` line follows. Otherwise the whole file is the body.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = strip_delimiter_line(content) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body.trim_start_matches(['\r', '\n']));
        }
        offset += line.len();
    }

    (None, content)
}

/// Strip the opening `---` line, if present.
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let content = "---\ntitle: Hello\nauthors: [alice]\n---\n\n# Hello\n";
        let (yaml, body) = split(content);
        assert_eq!(yaml, Some("title: Hello\nauthors: [alice]\n"));
        assert_eq!(body, "# Hello\n");
    }

    #[test]
    fn test_split_crlf() {
        let content = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (yaml, body) = split(content);
        assert_eq!(yaml, Some("title: Hello\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n";
        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Hello\n";
        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn test_empty_frontmatter() {
        let (yaml, body) = split("---\n---\nBody");
        assert_eq!(yaml, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_thematic_break_in_body_is_kept() {
        let content = "---\ntitle: A\n---\nintro\n---\nmore";
        let (yaml, body) = split(content);
        assert_eq!(yaml, Some("title: A\n"));
        assert_eq!(body, "intro\n---\nmore");
    }
}
