use serde::{Deserialize, Serialize};

/// A ticket/issue snapshot as returned by the work tracker. Never mutated
/// locally; refresh replaces the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub display_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub stage: Option<WorkStage>,
    pub created_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkStage {
    pub name: String,
}

impl WorkItem {
    pub fn stage_name(&self) -> &str {
        self.stage
            .as_ref()
            .map(|stage| stage.name.as_str())
            .unwrap_or("No stage")
    }
}

/// The "self user" payload from the identity probe. Only presence is
/// load-bearing; the display name feeds the sign-in greeting when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
