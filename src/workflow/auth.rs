use crate::domain::credential::Credential;
use crate::services::WorkTrackerService;
use crate::session::{Dashboard, Session};
use crate::workflow::works;

/// Validate the entered token, probe the identity endpoint, and load the
/// dashboard. Ends `SignedIn` on success, back at `SignedOut` with a banner
/// otherwise. Issues at most one probe and one follow-up list request.
pub async fn submit_credential(
    session: &mut Session,
    tracker: &dyn WorkTrackerService,
    input: &str,
) {
    if !matches!(session, Session::SignedOut { .. }) {
        return;
    }

    let credential = match Credential::parse(input) {
        Ok(credential) => credential,
        Err(err) => {
            *session = Session::SignedOut {
                error: Some(err.to_string()),
            };
            return;
        }
    };

    *session = Session::Authenticating;
    tracing::debug!("probing identity endpoint");

    match tracker.verify_credential(&credential).await {
        Ok(user) => {
            let mut dashboard = Dashboard::new(Some(credential));
            dashboard.greeting = user.display_name;
            *session = Session::SignedIn(dashboard);
            works::refresh(session, tracker).await;
        }
        Err(err) => {
            *session = Session::SignedOut {
                error: Some(format!("Authentication failed: {err}")),
            };
        }
    }
}

/// UI-only bypass: signs in with no credential and no data, skipping the
/// network entirely. Not a security boundary.
pub fn activate_demo(session: &mut Session) {
    if matches!(session, Session::SignedIn(_)) {
        return;
    }
    *session = Session::SignedIn(Dashboard::demo());
}
