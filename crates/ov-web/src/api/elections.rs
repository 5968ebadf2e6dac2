use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::query::QueryKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    #[default]
    Upcoming,
    Active,
    Closed,
}

impl ElectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ElectionStatus::Upcoming => "upcoming",
            ElectionStatus::Active => "open",
            ElectionStatus::Closed => "closed",
        }
    }
}

/// One row of the election listing served by the voting backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: ElectionStatus,
}

pub fn elections_key() -> QueryKey {
    QueryKey::new(["elections"])
}

pub fn elections_url() -> String {
    format!("{}/elections", CONFIG.api_base_url.trim_end_matches('/'))
}
