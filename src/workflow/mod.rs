pub mod auth;
pub mod works;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::credential::Credential;
    use crate::domain::draft::TicketDraft;
    use crate::domain::work_item::{DevUser, WorkItem, WorkStage};
    use crate::error::{AppError, AppResult};
    use crate::services::WorkTrackerService;

    /// In-memory tracker with canned responses and a call log, so tests can
    /// assert exactly which network operations a flow issued.
    pub struct ScriptedTracker {
        verify: Result<DevUser, String>,
        list: Result<Vec<WorkItem>, String>,
        create: Result<WorkItem, String>,
        pub calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedTracker {
        pub fn accepting() -> Self {
            Self {
                verify: Ok(DevUser {
                    id: Some("dev-user/1".to_string()),
                    display_name: Some("Dana".to_string()),
                    email: None,
                }),
                list: Ok(Vec::new()),
                create: Ok(sample_item("TKT-99", "ticket", "New ticket")),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_items(items: Vec<WorkItem>) -> Self {
            let mut tracker = Self::accepting();
            tracker.list = Ok(items);
            tracker
        }

        pub fn rejecting_auth(message: &str) -> Self {
            let mut tracker = Self::accepting();
            tracker.verify = Err(message.to_string());
            tracker
        }

        pub fn failing_list(message: &str) -> Self {
            let mut tracker = Self::accepting();
            tracker.list = Err(message.to_string());
            tracker
        }

        pub fn failing_create(message: &str) -> Self {
            let mut tracker = Self::accepting();
            tracker.create = Err(message.to_string());
            tracker
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, operation: &'static str) {
            self.calls.lock().unwrap().push(operation);
        }
    }

    #[async_trait]
    impl WorkTrackerService for ScriptedTracker {
        async fn verify_credential(&self, _credential: &Credential) -> AppResult<DevUser> {
            self.record("verify");
            self.verify.clone().map_err(AppError::Request)
        }

        async fn list_work_items(
            &self,
            _credential: &Credential,
            _limit: u32,
        ) -> AppResult<Vec<WorkItem>> {
            self.record("list");
            self.list.clone().map_err(AppError::Request)
        }

        async fn create_work_item(
            &self,
            _credential: &Credential,
            _draft: &TicketDraft,
        ) -> AppResult<WorkItem> {
            self.record("create");
            self.create.clone().map_err(AppError::Request)
        }
    }

    pub fn sample_item(display_id: &str, kind: &str, title: &str) -> WorkItem {
        WorkItem {
            id: format!("work/{display_id}"),
            display_id: display_id.to_string(),
            title: title.to_string(),
            kind: kind.to_string(),
            stage: Some(WorkStage {
                name: "triage".to_string(),
            }),
            created_date: "2024-01-15T10:30:00Z".to_string(),
        }
    }
}
