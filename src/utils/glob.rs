//! Glob patterns for content loaders.
//!
//! Patterns are matched against `/`-separated paths relative to a collection
//! base and support `**/`, `*`, `?` and `{a,b}` alternatives.

use regex::Regex;

/// Translate a glob pattern into an anchored regex.
///
/// | Glob      | Regex       |
/// |-----------|-------------|
/// | `**/`     | `(?:.*/)?`  |
/// | `**`      | `.*`        |
/// | `*`       | `[^/]*`     |
/// | `?`       | `[^/]`      |
/// | `{a,b}`   | `(?:a\|b)`  |
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let mut re = String::from("^");
    let mut chars = pattern.chars().peekable();
    let mut in_group = false;

    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    chars.next();
                    re.push_str("(?:.*/)?");
                } else {
                    re.push_str(".*");
                }
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            '{' if !in_group => {
                in_group = true;
                re.push_str("(?:");
            }
            '}' if in_group => {
                in_group = false;
                re.push(')');
            }
            ',' if in_group => re.push('|'),
            c => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    re.push('$');
    Regex::new(&re)
}
