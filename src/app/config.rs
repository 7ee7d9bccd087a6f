use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "fangame-finder-config";

const DEFAULT_CATEGORIES: [(&str, &[&str]); 4] = [
    ("Length", &["Short", "Medium", "Long"]),
    ("Difficulty", &["Easy", "Normal", "Hard"]),
    ("Maturity", &["All Ages", "Mature"]),
    ("Type", &["Classic", "Experimental", "Remake"]),
];

/// How checked tags narrow the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagPolicy {
    /// Keep entries sharing at least one tag with the checked set.
    #[default]
    AnyTag,
    /// Keep entries that match a checked tag in every category with checks.
    EveryCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCategory {
    pub name: String,
    pub tags: Vec<String>,
}

/// Ordered category table shown by the tag picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCategories(Vec<TagCategory>);

impl TagCategories {
    pub fn iter(&self) -> impl Iterator<Item = &TagCategory> {
        self.0.iter()
    }

    pub fn declares(&self, category: &str, tag: &str) -> bool {
        self.0
            .iter()
            .any(|c| c.name == category && c.tags.iter().any(|t| t == tag))
    }
}

impl Default for TagCategories {
    fn default() -> Self {
        Self(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(name, tags)| TagCategory {
                    name: name.to_string(),
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                })
                .collect(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinderConfig {
    pub catalog_url: String,
    pub route_prefix: String,
    /// Fuzzy tolerance in `0.0..=1.0`; 0 accepts only ideal matches.
    pub threshold: f64,
    pub tag_policy: TagPolicy,
    pub categories: TagCategories,
    pub placeholder: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            catalog_url: "/catalog.json".to_string(),
            route_prefix: "/blog".to_string(),
            threshold: 0.3,
            tag_policy: TagPolicy::AnyTag,
            categories: TagCategories::default(),
            placeholder: "Search fangames...".to_string(),
        }
    }
}

impl FinderConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: FinderConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.threshold = if self.threshold.is_finite() { self.threshold.clamp(0.0, 1.0) } else { 0.3 };
        let trimmed = self.route_prefix.trim_end_matches('/');
        self.route_prefix = if trimmed.is_empty() || trimmed.starts_with('/') { trimmed.to_string() } else { format!("/{}", trimmed) };
        self
    }

    pub fn detail_route(&self, slug: &str) -> String {
        format!("{}/{}", self.route_prefix, slug)
    }
}

/// Reads the inline JSON config block if the page has one.
pub fn load_from_page() -> FinderConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(text) = text else {
        return FinderConfig::default();
    };
    match FinderConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("[Finder] Invalid config, using defaults: {}", e).into());
            FinderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_categories_match_the_site() {
        let defaults = TagCategories::default();
        let names: Vec<&str> = defaults.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Length", "Difficulty", "Maturity", "Type"]);
        assert!(TagCategories::default().declares("Maturity", "All Ages"));
        assert!(!TagCategories::default().declares("Length", "Hard"));
        assert!(!TagCategories::default().declares("Genre", "Short"));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = FinderConfig::from_json(r#"{"tagPolicy":"everyCategory","threshold":0.5}"#).unwrap();
        assert_eq!(config.tag_policy, TagPolicy::EveryCategory);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.catalog_url, "/catalog.json");
        assert_eq!(config.categories, TagCategories::default());
    }

    #[test]
    fn custom_categories_are_read_in_order() {
        let config = FinderConfig::from_json(
            r#"{"categories":[{"name":"Engine","tags":["GameMaker","Unity"]},{"name":"Length","tags":["Short"]}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Engine", "Length"]);
    }

    #[test]
    fn threshold_and_route_prefix_are_normalized() {
        let config = FinderConfig::from_json(r#"{"threshold":4.0,"routePrefix":"games/"}"#).unwrap();
        assert_eq!(config.threshold, 1.0);
        assert_eq!(config.detail_route("i-wanna-be-the-guy"), "/games/i-wanna-be-the-guy");
        assert_eq!(FinderConfig::default().detail_route("alpha"), "/blog/alpha");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(FinderConfig::from_json("{not json").is_err());
        assert!(FinderConfig::from_json(r#"{"tagPolicy":"sometimes"}"#).is_err());
    }
}
