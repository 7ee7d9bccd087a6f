use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];
pub const BANNER_FILE: &str = "banner.png";

/// One post found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSource {
    pub id: String,
    pub markdown: PathBuf,
    /// Per-post folder when the post is `<id>/index.md`.
    pub folder: Option<PathBuf>,
}

impl PostSource {
    pub fn banner(&self) -> Option<PathBuf> {
        self.folder
            .as_ref()
            .map(|dir| dir.join(BANNER_FILE))
            .filter(|path| path.is_file())
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| MARKDOWN_EXTENSIONS.contains(&e))
}

fn index_file(dir: &Path) -> Option<PathBuf> {
    MARKDOWN_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("index.{}", ext)))
        .find(|path| path.is_file())
}

/// Lists posts directly under `root`, sorted by id. Folders without an
/// index file and non-markdown files are skipped.
pub fn scan_content(root: &Path) -> Result<Vec<PostSource>> {
    tracing::debug!(root = %root.display(), "scanning content");
    let mut posts = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| CatalogError::io(root, e))? {
        let entry = entry.map_err(|e| CatalogError::io(root, e))?;
        let path = entry.path();
        let is_dir = path.is_dir();
        let name = if is_dir { path.file_name() } else { path.file_stem() };
        let Some(name) = name.and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }
        if is_dir {
            match index_file(&path) {
                Some(markdown) => posts.push(PostSource { id: name, markdown, folder: Some(path) }),
                None => tracing::debug!(dir = %path.display(), "no index file, skipping"),
            }
        } else if is_markdown(&path) {
            posts.push(PostSource { id: name, markdown: path, folder: None });
        }
    }
    posts.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.markdown.cmp(&b.markdown)));
    tracing::debug!(count = posts.len(), "scan complete");
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "---\ntitle: x\n---\n").unwrap();
    }

    #[test]
    fn finds_folder_and_file_posts() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("beta/index.md"));
        touch(&dir.path().join("alpha.md"));
        touch(&dir.path().join("gamma/index.mdx"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("_draft-ideas.md"));
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let posts = scan_content(dir.path()).unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
        assert!(posts[0].folder.is_none());
        assert_eq!(posts[1].folder.as_deref(), Some(dir.path().join("beta").as_path()));
    }

    #[test]
    fn banner_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("with/index.md"));
        fs::write(dir.path().join("with").join(BANNER_FILE), b"png").unwrap();
        touch(&dir.path().join("without/index.md"));

        let posts = scan_content(dir.path()).unwrap();
        assert!(posts[0].banner().is_some());
        assert!(posts[1].banner().is_none());
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_content(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
