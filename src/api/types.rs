//! Wire records exchanged with the search service

use serde::{Deserialize, Deserializer, Serialize};

/// Lightweight record shown while typing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    #[serde(deserialize_with = "section_id")]
    pub section: String,
    pub title: String,
}

impl Suggestion {
    /// `Section 302 — Punishment for murder`
    pub fn label(&self) -> String {
        format!("Section {} — {}", self.section, self.title)
    }
}

/// One entry of a search response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    #[serde(deserialize_with = "section_id")]
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chapter: Option<String>,
}

impl SearchHit {
    pub fn label(&self) -> String {
        format!("Section {} — {}", self.section, self.title)
    }
}

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub top_k: usize,
}

/// Section ids arrive as strings ("120A") or bare numbers (302).
fn section_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
