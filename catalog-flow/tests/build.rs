use std::fs;
use std::path::Path;

use catalog_flow::{build, BuildOptions, CatalogError, RawRecord, WriteOutcome};

fn post(root: &Path, rel: &str, front: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("---\n{}---\n\nBody text.\n", front)).unwrap();
}

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    post(&content, "beta/index.md", "title: Beta\ndescription: Second\ntags: [Long, Hard]\n");
    fs::write(content.join("beta/banner.png"), b"beta-png").unwrap();
    post(&content, "alpha.md", "title: Alpha\ndescription: First\ntags: [Short, Easy]\n");
    post(&content, "wip/index.md", "title: Work in progress\ndraft: true\n");
    post(&content, "gamma/index.mdx", "title: Gamma\n");
    dir
}

fn options(dir: &Path, public: bool) -> BuildOptions {
    BuildOptions {
        content_dir: dir.join("content"),
        out_file: dir.join("public/catalog.json"),
        public_dir: public.then(|| dir.join("public")),
    }
}

fn read_catalog(path: &Path) -> Vec<RawRecord> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn builds_published_records_sorted_by_id() {
    let dir = site();
    let opts = options(dir.path(), false);
    let report = build(&opts).unwrap();
    assert_eq!(report.records, 3);
    assert_eq!(report.drafts, 1);
    assert_eq!(report.outcome, WriteOutcome::Written);

    let records = read_catalog(&opts.out_file);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
    assert_eq!(records[0].data.tags, Some(vec!["Short".to_string(), "Easy".to_string()]));
    assert_eq!(records[1].data.banner.as_deref(), Some("/blog/beta/banner.png"));
    assert_eq!(records[2].data.tags, None);
    assert_eq!(records[2].data.description, "");
}

#[test]
fn second_build_leaves_file_alone() {
    let dir = site();
    let opts = options(dir.path(), false);
    assert_eq!(build(&opts).unwrap().outcome, WriteOutcome::Written);
    assert_eq!(build(&opts).unwrap().outcome, WriteOutcome::Unchanged);

    post(&dir.path().join("content"), "delta.md", "title: Delta\n");
    assert_eq!(build(&opts).unwrap().outcome, WriteOutcome::Written);
    assert_eq!(read_catalog(&opts.out_file).len(), 4);
}

#[test]
fn banners_are_copied_to_servable_path() {
    let dir = site();
    let opts = options(dir.path(), true);
    let report = build(&opts).unwrap();
    assert_eq!(report.banners, 1);
    let copied = dir.path().join("public/blog/beta/banner.png");
    assert_eq!(fs::read(copied).unwrap(), b"beta-png");
}

#[test]
fn duplicate_slugs_fail_the_build() {
    let dir = site();
    post(&dir.path().join("content"), "alpha/index.md", "title: Alpha again\n");
    let err = build(&options(dir.path(), false)).unwrap_err();
    match err {
        CatalogError::DuplicateSlug { id, .. } => assert_eq!(id, "alpha"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_front_matter_names_the_file() {
    let dir = site();
    post(&dir.path().join("content"), "broken.md", "title: [unclosed\n");
    let err = build(&options(dir.path(), false)).unwrap_err();
    assert!(err.to_string().contains("broken.md"), "{err}");
}
