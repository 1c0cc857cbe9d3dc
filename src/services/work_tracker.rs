use async_trait::async_trait;

use crate::domain::credential::Credential;
use crate::domain::draft::TicketDraft;
use crate::domain::work_item::{DevUser, WorkItem};
use crate::error::AppResult;

/// Seam to the external work tracker. The session owns the credential and
/// passes it per call; implementations hold no authentication state.
#[async_trait]
pub trait WorkTrackerService: Send + Sync {
    /// Probe the identity endpoint to confirm the credential is usable.
    async fn verify_credential(&self, credential: &Credential) -> AppResult<DevUser>;

    /// Fetch up to `limit` work items. Every call is a fresh full fetch.
    async fn list_work_items(
        &self,
        credential: &Credential,
        limit: u32,
    ) -> AppResult<Vec<WorkItem>>;

    /// Submit a draft as a new work item.
    async fn create_work_item(
        &self,
        credential: &Credential,
        draft: &TicketDraft,
    ) -> AppResult<WorkItem>;
}
