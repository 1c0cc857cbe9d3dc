use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemKind {
    Ticket,
    Issue,
}

impl WorkItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemKind::Ticket => "ticket",
            WorkItemKind::Issue => "issue",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ticket" => Some(WorkItemKind::Ticket),
            "issue" => Some(WorkItemKind::Issue),
            _ => None,
        }
    }
}

/// Form state for a work item that has not been submitted yet. Owned by the
/// open creation form and dropped on successful submission, so the next form
/// starts from the empty default again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub body: String,
    pub kind: WorkItemKind,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            kind: WorkItemKind::Ticket,
        }
    }
}

impl TicketDraft {
    /// Pre-network check: both title and body must survive trimming.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Err(AppError::Validation(
                "Please fill in both title and description".to_string(),
            ));
        }
        Ok(())
    }
}
