use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: missing `---` front matter block", .path.display())]
    MissingFrontMatter { path: PathBuf },
    #[error("{}: invalid front matter: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("duplicate slug `{id}` in {} and {}", .first.display(), .second.display())]
    DuplicateSlug { id: String, first: PathBuf, second: PathBuf },
    #[error("failed to encode catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("watcher error: {0}")]
    Watch(#[from] notify::Error),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
