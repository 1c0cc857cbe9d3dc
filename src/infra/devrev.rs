use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::domain::credential::Credential;
use crate::domain::draft::{TicketDraft, WorkItemKind};
use crate::domain::work_item::{DevUser, WorkItem};
use crate::error::{AppError, AppResult};
use crate::services::WorkTrackerService;

pub struct DevRevClient {
    http: Client,
    base_url: String,
}

impl DevRevClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn bearer(credential: &Credential) -> String {
        format!("Bearer {}", credential.expose())
    }

    /// Non-success responses carry a JSON body with an optional `message`
    /// field; fall back to a status-derived description when it is absent
    /// or unreadable.
    async fn into_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Err(AppError::Request(message))
    }
}

#[async_trait]
impl WorkTrackerService for DevRevClient {
    async fn verify_credential(&self, credential: &Credential) -> AppResult<DevUser> {
        let response = self
            .http
            .get(self.endpoint("dev-users.self"))
            .header(AUTHORIZATION, Self::bearer(credential))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| AppError::Request(err.to_string()))?;

        let response = Self::into_success(response).await?;
        let payload: SelfResponse = response
            .json()
            .await
            .map_err(|err| AppError::Request(format!("failed to parse response: {err}")))?;

        let user = payload.dev_user.ok_or_else(|| {
            AppError::Request("identity endpoint returned no dev_user".to_string())
        })?;
        tracing::debug!(user = ?user.id, "credential verified");
        Ok(user)
    }

    async fn list_work_items(
        &self,
        credential: &Credential,
        limit: u32,
    ) -> AppResult<Vec<WorkItem>> {
        let response = self
            .http
            .post(self.endpoint("works.list"))
            .header(AUTHORIZATION, Self::bearer(credential))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&ListWorksRequest { limit })
            .send()
            .await
            .map_err(|err| AppError::Request(err.to_string()))?;

        let response = Self::into_success(response).await?;
        let payload: ListWorksResponse = response
            .json()
            .await
            .map_err(|err| AppError::Request(format!("failed to parse response: {err}")))?;

        tracing::debug!(count = payload.works.len(), "fetched work items");
        Ok(payload.works)
    }

    async fn create_work_item(
        &self,
        credential: &Credential,
        draft: &TicketDraft,
    ) -> AppResult<WorkItem> {
        let request_body = CreateWorkRequest {
            title: &draft.title,
            body: &draft.body,
            kind: draft.kind,
        };

        let response = self
            .http
            .post(self.endpoint("works.create"))
            .header(AUTHORIZATION, Self::bearer(credential))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Request(err.to_string()))?;

        let response = Self::into_success(response).await?;
        let payload: CreateWorkResponse = response
            .json()
            .await
            .map_err(|err| AppError::Request(format!("failed to parse response: {err}")))?;

        let work = payload
            .work
            .ok_or_else(|| AppError::Request("create endpoint returned no work".to_string()))?;
        tracing::debug!(display_id = %work.display_id, "created work item");
        Ok(work)
    }
}

#[derive(Serialize)]
struct ListWorksRequest {
    limit: u32,
}

#[derive(Serialize)]
struct CreateWorkRequest<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(rename = "type")]
    kind: WorkItemKind,
}

#[derive(Deserialize)]
struct SelfResponse {
    #[serde(default)]
    dev_user: Option<DevUser>,
}

#[derive(Deserialize)]
struct ListWorksResponse {
    #[serde(default)]
    works: Vec<WorkItem>,
}

#[derive(Deserialize)]
struct CreateWorkResponse {
    #[serde(default)]
    work: Option<WorkItem>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoint_without_double_slash() {
        let client = DevRevClient::new("https://api.devrev.ai/".to_string());
        assert_eq!(
            client.endpoint("works.list"),
            "https://api.devrev.ai/works.list"
        );
    }

    #[test]
    fn formats_bearer_header() {
        let credential = Credential::parse("pat-123").unwrap();
        assert_eq!(DevRevClient::bearer(&credential), "Bearer pat-123");
    }

    #[test]
    fn create_request_uses_type_key() {
        let body = serde_json::to_value(CreateWorkRequest {
            title: "Fix login bug",
            body: "Users cannot log in",
            kind: WorkItemKind::Issue,
        })
        .unwrap();
        assert_eq!(body["type"], "issue");
        assert_eq!(body["title"], "Fix login bug");
    }

    #[test]
    fn list_response_tolerates_missing_works() {
        let payload: ListWorksResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.works.is_empty());
    }

    #[test]
    fn error_body_message_is_optional() {
        let with: ApiErrorBody = serde_json::from_str(r#"{"message":"bad token"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("bad token"));
        let without: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());
    }
}
