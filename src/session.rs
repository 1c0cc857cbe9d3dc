use crate::domain::credential::Credential;
use crate::domain::draft::TicketDraft;
use crate::domain::work_item::WorkItem;

/// Whole-application state, one tagged value per view. Loading flags, error
/// strings and form visibility are folded into the variants so stale
/// combinations (loading while idle, form without a draft) cannot be
/// represented.
#[derive(Debug, Clone)]
pub enum Session {
    SignedOut { error: Option<String> },
    Authenticating,
    SignedIn(Dashboard),
}

impl Session {
    pub fn signed_out() -> Self {
        Session::SignedOut { error: None }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Absent in a demo session; fetch is then a no-op and create fails
    /// locally.
    pub credential: Option<Credential>,
    /// Always exactly the last successful list response.
    pub work_items: Vec<WorkItem>,
    pub activity: Activity,
    pub error: Option<String>,
    /// `Some` while the creation form is open; the draft lives inside it.
    pub form: Option<TicketDraft>,
    /// Greeting from the identity probe, when the service provided one.
    pub greeting: Option<String>,
}

impl Dashboard {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            credential,
            work_items: Vec::new(),
            activity: Activity::Idle,
            error: None,
            form: None,
            greeting: None,
        }
    }

    pub fn demo() -> Self {
        Self::new(None)
    }

    pub fn is_demo(&self) -> bool {
        self.credential.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Fetching,
    Creating,
}
