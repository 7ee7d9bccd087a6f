use std::collections::HashSet;

use crate::app::api::fetch_json;
use crate::app::types::{Entry, RawRecord};

const SOURCE_PREFIX: &str = "/src/content";

/// Rewrites a banner given as a content-source path to the path the site
/// serves. Already-servable paths pass through.
pub fn servable_banner(path: &str) -> String {
    match path.strip_prefix(SOURCE_PREFIX) {
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

pub fn record_to_entry(record: RawRecord) -> Entry {
    let banner = record.data.banner.as_deref().map(servable_banner);
    Entry {
        title: record.data.title,
        description: record.data.description,
        tags: record.data.tags.unwrap_or_default(),
        slug: record.id,
        banner,
    }
}

/// Published entries in source order. Drafts are skipped, and a slug seen
/// twice keeps its first record so list keys stay unique.
pub fn records_to_entries(records: Vec<RawRecord>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| !r.data.draft)
        .filter(|r| seen.insert(r.id.clone()))
        .map(record_to_entry)
        .collect()
}

pub async fn load_catalog(url: &str) -> Result<Vec<Entry>, String> {
    web_sys::console::log_1(&format!("[Catalog] Loading {}", url).into());
    let value = fetch_json(url).await?;
    let records = serde_wasm_bindgen::from_value::<Vec<RawRecord>>(value).map_err(|e| e.to_string())?;
    let entries = records_to_entries(records);
    web_sys::console::log_1(&format!("[Catalog] Loaded {} fangames", entries.len()).into());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<RawRecord> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn maps_records_to_entries() {
        let records = parse(
            r#"[{"id":"alpha","data":{"title":"Alpha","description":"First","tags":["Short","Easy"],"banner":"/blog/alpha/banner.png"}}]"#,
        );
        let entries = records_to_entries(records);
        assert_eq!(
            entries,
            vec![Entry {
                title: "Alpha".to_string(),
                description: "First".to_string(),
                tags: vec!["Short".to_string(), "Easy".to_string()],
                slug: "alpha".to_string(),
                banner: Some("/blog/alpha/banner.png".to_string()),
            }]
        );
    }

    #[test]
    fn missing_banner_stays_absent() {
        let entries = records_to_entries(parse(r#"[{"id":"nobanner","data":{"title":"No Banner"}}]"#));
        assert_eq!(entries[0].banner, None);
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let entries = records_to_entries(parse(r#"[{"id":"b","data":{"title":"B","description":""}},{"id":"c","data":{"title":"C","tags":null}}]"#));
        assert!(entries.iter().all(|e| e.tags.is_empty()));
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn source_banner_paths_are_rewritten_once() {
        assert_eq!(servable_banner("/src/content/blog/alpha/banner.png"), "/blog/alpha/banner.png");
        assert_eq!(servable_banner("/blog/alpha/banner.png"), "/blog/alpha/banner.png");
        assert_eq!(servable_banner("/src/contentious/x.png"), "/src/contentious/x.png");

        let entries = records_to_entries(parse(
            r#"[{"id":"alpha","data":{"title":"Alpha","banner":"/src/content/blog/alpha/cover.png"}}]"#,
        ));
        assert_eq!(entries[0].banner.as_deref(), Some("/blog/alpha/cover.png"));
    }

    #[test]
    fn drafts_and_duplicate_slugs_are_dropped() {
        let entries = records_to_entries(parse(
            r#"[
                {"id":"a","data":{"title":"A"}},
                {"id":"wip","data":{"title":"WIP","draft":true}},
                {"id":"a","data":{"title":"A again"}},
                {"id":"b","data":{"title":"B"}}
            ]"#,
        ));
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn empty_catalog_is_fine() {
        assert!(records_to_entries(Vec::new()).is_empty());
    }
}
