//! Turns the blog content collection into the catalog the finder fetches.
//!
//! Each post contributes one record `{id, data: {title, description, tags,
//! banner}}`. Drafts are left out, ids must be unique, and the output file
//! is only rewritten when its content changes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub mod error;
pub mod frontmatter;
pub mod scan;
pub mod watch;

pub use error::{CatalogError, Result};
use scan::{PostSource, BANNER_FILE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub data: RecordData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub content_dir: PathBuf,
    pub out_file: PathBuf,
    /// Static root; banners are copied to `<public>/blog/<id>/banner.png`.
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub records: usize,
    pub drafts: usize,
    pub banners: usize,
    pub outcome: WriteOutcome,
}

/// Servable banner URL for a post id.
pub fn banner_url(id: &str) -> String {
    format!("/blog/{}/{}", id, BANNER_FILE)
}

fn read_post(post: &PostSource) -> Result<Option<RawRecord>> {
    let text = fs::read_to_string(&post.markdown).map_err(|e| CatalogError::io(&post.markdown, e))?;
    let fm = frontmatter::parse(&text, &post.markdown)?;
    if fm.draft {
        tracing::debug!(id = %post.id, "skipping draft");
        return Ok(None);
    }
    Ok(Some(RawRecord {
        id: post.id.clone(),
        data: RecordData {
            title: fm.title,
            description: fm.description,
            tags: fm.tags,
            banner: post.banner().map(|_| banner_url(&post.id)),
        },
    }))
}

fn reject_duplicates(posts: &[PostSource]) -> Result<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for post in posts {
        if let Some(first) = seen.insert(&post.id, &post.markdown) {
            return Err(CatalogError::DuplicateSlug {
                id: post.id.clone(),
                first: first.to_path_buf(),
                second: post.markdown.clone(),
            });
        }
    }
    Ok(())
}

/// Published records sorted by id, plus the sources they came from.
pub fn collect(content_dir: &Path) -> Result<(Vec<RawRecord>, Vec<PostSource>, usize)> {
    let posts = scan::scan_content(content_dir)?;
    reject_duplicates(&posts)?;
    let mut records = Vec::with_capacity(posts.len());
    let mut published = Vec::with_capacity(posts.len());
    let mut drafts = 0;
    for post in posts {
        match read_post(&post)? {
            Some(record) => {
                records.push(record);
                published.push(post);
            }
            None => drafts += 1,
        }
    }
    Ok((records, published, drafts))
}

fn copy_banners(posts: &[PostSource], public_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    for post in posts {
        let Some(src) = post.banner() else {
            tracing::warn!(id = %post.id, "no {} next to post", BANNER_FILE);
            continue;
        };
        let dest_dir = public_dir.join("blog").join(&post.id);
        fs::create_dir_all(&dest_dir).map_err(|e| CatalogError::io(&dest_dir, e))?;
        let dest = dest_dir.join(BANNER_FILE);
        if digest_file(&dest).ok() == Some(digest_file(&src)?) {
            copied += 1;
            continue;
        }
        fs::copy(&src, &dest).map_err(|e| CatalogError::io(&dest, e))?;
        tracing::debug!(from = %src.display(), to = %dest.display(), "copied banner");
        copied += 1;
    }
    Ok(copied)
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn digest_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(digest(&bytes))
}

pub fn render(records: &[RawRecord]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes the catalog unless the file on disk already has the same digest.
pub fn write_catalog(records: &[RawRecord], out_file: &Path) -> Result<WriteOutcome> {
    let bytes = render(records)?;
    if let Ok(existing) = digest_file(out_file) {
        if existing == digest(&bytes) {
            tracing::info!(path = %out_file.display(), "catalog unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
    }
    if let Some(parent) = out_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    fs::write(out_file, &bytes).map_err(|e| CatalogError::io(out_file, e))?;
    tracing::info!(path = %out_file.display(), records = records.len(), "catalog written");
    Ok(WriteOutcome::Written)
}

pub fn build(options: &BuildOptions) -> Result<BuildReport> {
    let (records, published, drafts) = collect(&options.content_dir)?;
    let banners = match &options.public_dir {
        Some(public) => copy_banners(&published, public)?,
        None => published.iter().filter(|p| p.banner().is_some()).count(),
    };
    let outcome = write_catalog(&records, &options.out_file)?;
    Ok(BuildReport { records: records.len(), drafts, banners, outcome })
}
