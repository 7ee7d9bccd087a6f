use serde::{Deserialize, Serialize};

/// One fangame as the finder shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub banner: Option<String>,
}

// Wire shape of the published catalog (one record per blog post)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub data: RawRecordData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRecordData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub draft: bool,
}
