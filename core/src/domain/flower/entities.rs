use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNVERIFIED_NOTE: &str =
    "AI-generated (unverified). Consult a veterinarian for authoritative guidance.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Safe,
    Toxic,
}

/// A curated registry row. Immutable once the registry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowerEntry {
    pub name: String,
    pub message: String,
    pub safety: Safety,
}

impl FlowerEntry {
    pub fn new(name: impl Into<String>, message: impl Into<String>, safety: Safety) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            safety,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    Database,
    Llm,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LookupResult {
    pub flower: String,
    pub message: String,
    pub verified: bool,
    pub source: LookupSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LookupResult {
    pub fn from_entry(entry: &FlowerEntry) -> Self {
        Self {
            flower: entry.name.clone(),
            message: entry.message.clone(),
            verified: true,
            source: LookupSource::Database,
            note: None,
        }
    }

    /// Model answers only get the advisory note when they are unverified.
    pub fn from_llm(flower: impl Into<String>, reply: String, verified: bool) -> Self {
        Self {
            flower: flower.into(),
            message: reply,
            verified,
            source: LookupSource::Llm,
            note: (!verified).then(|| UNVERIFIED_NOTE.to_string()),
        }
    }

    pub fn from_error(flower: impl Into<String>, description: impl std::fmt::Display) -> Self {
        Self {
            flower: flower.into(),
            message: format!(
                "⚠️ Error checking safety: {description}. If in doubt, contact your veterinarian."
            ),
            verified: false,
            source: LookupSource::Error,
            note: None,
        }
    }
}
