use crate::config::LIST_LIMIT;
use crate::domain::draft::TicketDraft;
use crate::services::WorkTrackerService;
use crate::session::{Activity, Session};

/// Replace the work item collection with a fresh full fetch. A demo session
/// holds no credential and skips the network entirely; on failure the
/// previous collection stays visible next to the banner.
pub async fn refresh(session: &mut Session, tracker: &dyn WorkTrackerService) {
    let Session::SignedIn(dashboard) = session else {
        return;
    };
    let Some(credential) = dashboard.credential.clone() else {
        return;
    };

    dashboard.activity = Activity::Fetching;
    match tracker.list_work_items(&credential, LIST_LIMIT).await {
        Ok(items) => {
            dashboard.work_items = items;
            dashboard.error = None;
        }
        Err(err) => {
            dashboard.error = Some(format!("Failed to fetch work items: {err}"));
        }
    }
    dashboard.activity = Activity::Idle;
}

/// Open the creation form at the empty default, unless it is already open.
pub fn open_form(session: &mut Session) {
    if let Session::SignedIn(dashboard) = session {
        if dashboard.form.is_none() {
            dashboard.form = Some(TicketDraft::default());
        }
    }
}

/// Replace the open form's draft with edited field values.
pub fn update_draft(session: &mut Session, draft: TicketDraft) {
    if let Session::SignedIn(dashboard) = session {
        if dashboard.form.is_some() {
            dashboard.form = Some(draft);
        }
    }
}

/// Hide the form, discarding the draft.
pub fn close_form(session: &mut Session) {
    if let Session::SignedIn(dashboard) = session {
        dashboard.form = None;
    }
}

/// Submit the open form. Validation failures and demo sessions never reach
/// the network and leave the form untouched. On success the form is dropped
/// and the list resynchronized; nothing is inserted locally, so the new item
/// only appears once the follow-up fetch succeeds.
pub async fn submit_draft(session: &mut Session, tracker: &dyn WorkTrackerService) {
    let created = {
        let Session::SignedIn(dashboard) = &mut *session else {
            return;
        };
        let Some(draft) = dashboard.form.clone() else {
            return;
        };

        if let Err(err) = draft.validate() {
            dashboard.error = Some(err.to_string());
            return;
        }
        let Some(credential) = dashboard.credential.clone() else {
            dashboard.error = Some(
                "Demo session cannot create work items; connect with a real API token".to_string(),
            );
            return;
        };

        dashboard.activity = Activity::Creating;
        match tracker.create_work_item(&credential, &draft).await {
            Ok(_work) => {
                dashboard.form = None;
                dashboard.error = None;
                dashboard.activity = Activity::Idle;
                true
            }
            Err(err) => {
                dashboard.error = Some(format!("Failed to create work item: {err}"));
                dashboard.activity = Activity::Idle;
                false
            }
        }
    };

    if created {
        refresh(session, tracker).await;
    }
}
