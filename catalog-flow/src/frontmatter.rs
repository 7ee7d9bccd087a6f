use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// Fields the catalog reads from a post; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub draft: bool,
}

/// Returns the YAML between the opening and closing `---` lines.
pub fn split(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }
    let start = first.len();
    let mut end = start;
    for line in lines {
        if line.trim_end() == "---" {
            return Some(&text[start..end]);
        }
        end += line.len();
    }
    None
}

pub fn parse(text: &str, path: &Path) -> Result<FrontMatter> {
    let yaml = split(text).ok_or_else(|| CatalogError::MissingFrontMatter { path: path.to_path_buf() })?;
    serde_yaml::from_str(yaml).map_err(|source| CatalogError::FrontMatter { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "---\ntitle: \"I Wanna Be The Guy\"\ndescription: The classic.\ntags: [Long, Hard, Classic]\npubDate: 2024-01-02\n---\n\n# Body\n\n---\nnot front matter\n";

    #[test]
    fn splits_only_the_leading_block() {
        let yaml = split(POST).unwrap();
        assert!(yaml.starts_with("title:"));
        assert!(yaml.ends_with("2024-01-02\n"));
        assert!(!yaml.contains("Body"));
    }

    #[test]
    fn parses_known_fields_and_ignores_the_rest() {
        let fm = parse(POST, Path::new("post.md")).unwrap();
        assert_eq!(fm.title, "I Wanna Be The Guy");
        assert_eq!(fm.description, "The classic.");
        assert_eq!(fm.tags, Some(vec!["Long".to_string(), "Hard".to_string(), "Classic".to_string()]));
        assert!(!fm.draft);
    }

    #[test]
    fn crlf_and_bom_are_accepted() {
        let text = "\u{feff}---\r\ntitle: Crlf\r\ndraft: true\r\n---\r\nbody";
        let fm = parse(text, Path::new("crlf.md")).unwrap();
        assert_eq!(fm.title, "Crlf");
        assert!(fm.draft);
        assert_eq!(fm.tags, None);
    }

    #[test]
    fn missing_block_is_an_error() {
        let err = parse("# just markdown\n", Path::new("bare.md")).unwrap_err();
        assert!(matches!(err, CatalogError::MissingFrontMatter { .. }));
        assert!(split("---\ntitle: unterminated\n").is_none());
    }

    #[test]
    fn missing_title_is_an_error() {
        let err = parse("---\ndescription: nameless\n---\n", Path::new("nameless.md")).unwrap_err();
        assert!(err.to_string().contains("nameless.md"));
        assert!(matches!(err, CatalogError::FrontMatter { .. }));
    }
}
