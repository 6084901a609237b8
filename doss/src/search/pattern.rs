//! Glob patterns matched against file base names.

use std::ffi::OsStr;
use std::path::Path;

use doss_shared::errors::{DossError, DossResult};
use globset::{GlobBuilder, GlobMatcher};

/// A compiled shell-glob (`*`, `?`, `[...]`) for base names.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    matcher: GlobMatcher,
}

impl FilePattern {
    /// Compile `pattern`. An empty pattern is a usage error, not a
    /// search without constraints.
    pub fn new(pattern: &str) -> DossResult<Self> {
        if pattern.is_empty() {
            return Err(DossError::Usage("search pattern must not be empty".into()));
        }

        let glob = GlobBuilder::new(&literal_braces(pattern))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| DossError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            raw: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches_name(&self, name: &OsStr) -> bool {
        self.matcher.is_match(Path::new(name))
    }
}

/// Rewrite `{` and `}` outside character classes as one-character classes.
///
/// Shell globs have no alternation; globset would read `{a,b}` as one.
fn literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                if let Some(neg) = chars.next_if(|&n| n == '!' || n == '^') {
                    out.push(neg);
                }
                // A leading `]` is a member, not the end of the class.
                if let Some(close) = chars.next_if_eq(&']') {
                    out.push(close);
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, name: &str) -> bool {
        FilePattern::new(pattern)
            .unwrap()
            .matches_name(OsStr::new(name))
    }

    #[test]
    fn test_star_and_question() {
        assert!(matches("*.log", "app.log"));
        assert!(matches("*.log", ".log"));
        assert!(!matches("*.log", "app.log.1"));
        assert!(matches("db-?.sql", "db-1.sql"));
        assert!(!matches("db-?.sql", "db-10.sql"));
    }

    #[test]
    fn test_character_class() {
        assert!(matches("file[0-9].txt", "file7.txt"));
        assert!(!matches("file[0-9].txt", "filex.txt"));
        assert!(matches("file[!0-9].txt", "filex.txt"));
    }

    #[test]
    fn test_exact_name() {
        assert!(matches("config.yml", "config.yml"));
        assert!(!matches("config.yml", "config.yaml"));
    }

    #[test]
    fn test_braces_are_literal() {
        assert!(matches("{a,b}.txt", "{a,b}.txt"));
        assert!(!matches("{a,b}.txt", "a.txt"));
        assert!(!matches("{a,b}.txt", "b.txt"));
        assert!(matches("report-{*}.csv", "report-{2024}.csv"));
        assert!(!matches("report-{*}.csv", "report-2024.csv"));
    }

    #[test]
    fn test_braces_inside_class_stay_members() {
        assert!(matches("x[{}].log", "x{.log"));
        assert!(matches("x[{}].log", "x}.log"));
        assert!(!matches("x[{}].log", "xa.log"));
    }

    #[test]
    fn test_literal_braces_rewrite() {
        assert_eq!(literal_braces("{a,b}.txt"), "[{]a,b[}].txt");
        assert_eq!(literal_braces("[{]x"), "[{]x");
        assert_eq!(literal_braces("[]{]x{"), "[]{]x[{]");
        assert_eq!(literal_braces(r"\{x"), r"\{x");
    }

    #[test]
    fn test_empty_pattern_is_usage_error() {
        let err = FilePattern::new("").unwrap_err();
        assert!(matches!(err, DossError::Usage(_)));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let err = FilePattern::new("file[0-9").unwrap_err();
        assert!(matches!(err, DossError::InvalidPattern(_)));
    }
}
