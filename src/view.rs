use owo_colors::OwoColorize;

use crate::domain::draft::TicketDraft;
use crate::domain::work_item::WorkItem;
use crate::session::{Activity, Dashboard, Session};

/// Render the whole screen for the current session state. Pure: no IO, no
/// mutation; the interactive loop prints the result after every transition.
pub fn render(session: &Session) -> String {
    match session {
        Session::SignedOut { error } => render_signed_out(error.as_deref()),
        Session::Authenticating => format!("{}\n", "Connecting...".dimmed()),
        Session::SignedIn(dashboard) => render_dashboard(dashboard),
    }
}

fn render_signed_out(error: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Work Tracker Dashboard".bold()));
    out.push_str("Enter your personal access token to get started.\n");

    if let Some(message) = error {
        out.push_str(&format!("\n{}\n", message.red()));
    }

    out.push_str(&format!("\n{}\n", "Demo mode".bold()));
    out.push_str("Type 'demo' to explore the dashboard without an account; nothing is fetched.\n");

    out.push_str(&format!("\n{}\n", "How to get your API token:".bold()));
    out.push_str("  1. Sign up with the work tracker\n");
    out.push_str("  2. Go to Settings -> Account -> Personal Access Token\n");
    out.push_str("  3. Create a new token and copy it\n");
    out.push_str("  4. Paste it at the prompt below\n");
    out
}

fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    let mut header = format!("Work Items ({})", dashboard.work_items.len());
    if dashboard.is_demo() {
        header.push_str(" (demo)");
    }
    out.push_str(&format!("\n{}\n", header.bold()));
    if let Some(name) = &dashboard.greeting {
        out.push_str(&format!("Signed in as {name}\n"));
    }
    out.push_str(&format!(
        "{}\n",
        "[c]reate  [r]efresh  [x] close form  [q]uit".dimmed()
    ));

    if let Some(message) = &dashboard.error {
        out.push_str(&format!("\n{}\n", message.red()));
    }

    if let Some(draft) = &dashboard.form {
        out.push_str(&render_form(draft));
    }

    out.push('\n');
    match dashboard.activity {
        Activity::Fetching => out.push_str("Loading work items...\n"),
        Activity::Creating => out.push_str("Creating work item...\n"),
        Activity::Idle if dashboard.work_items.is_empty() => {
            out.push_str("No work items found. Create your first ticket with 'c'.\n");
        }
        Activity::Idle => {
            for item in &dashboard.work_items {
                out.push_str(&render_card(item));
            }
        }
    }
    out
}

fn render_form(draft: &TicketDraft) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "New work item".bold()));
    out.push_str(&format!("  Type:        {}\n", draft.kind.as_str()));
    out.push_str(&format!("  Title:       {}\n", draft.title));
    out.push_str(&format!("  Description: {}\n", draft.body));
    out
}

fn render_card(item: &WorkItem) -> String {
    let kind = match item.kind.as_str() {
        "issue" => item.kind.red().to_string(),
        "ticket" => item.kind.yellow().to_string(),
        _ => item.kind.clone(),
    };
    format!(
        "{}  {}  {}\n  {}\n  Created: {}\n",
        item.display_id.cyan().bold(),
        kind,
        item.stage_name().dimmed(),
        item.title,
        format_date(&item.created_date),
    )
}

/// Render an ISO-8601 timestamp as a date in the system timezone;
/// unparseable values pass through verbatim.
fn format_date(raw: &str) -> String {
    match raw.parse::<jiff::Timestamp>() {
        Ok(timestamp) => timestamp
            .to_zoned(jiff::tz::TimeZone::system())
            .strftime("%b %e, %Y")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
