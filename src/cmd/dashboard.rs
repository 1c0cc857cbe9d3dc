use std::io::{self, Write};

use crate::context::AppContext;
use crate::domain::draft::{TicketDraft, WorkItemKind};
use crate::error::AppResult;
use crate::session::Session;
use crate::view;
use crate::workflow::{auth, works};

#[derive(Debug, Clone)]
pub struct DashboardArgs {
    pub demo: bool,
}

/// Interactive loop: render the session, read one command, run the owning
/// workflow, repeat. Every network call is awaited before the next prompt,
/// so no two requests are ever in flight at once.
pub async fn run(ctx: &AppContext, args: DashboardArgs) -> AppResult<()> {
    let mut session = Session::signed_out();
    if args.demo {
        auth::activate_demo(&mut session);
    }

    loop {
        print!("{}", view::render(&session));

        match &session {
            Session::SignedOut { .. } | Session::Authenticating => {
                let Some(input) = prompt_line("\nToken ('demo' to explore, 'quit' to exit): ")?
                else {
                    break;
                };
                match input.trim() {
                    "" => {
                        auth::submit_credential(&mut session, ctx.work_tracker.as_ref(), &input)
                            .await;
                    }
                    "quit" | "q" => break,
                    "demo" => auth::activate_demo(&mut session),
                    _ => {
                        println!("Connecting...");
                        auth::submit_credential(&mut session, ctx.work_tracker.as_ref(), &input)
                            .await;
                    }
                }
            }
            Session::SignedIn(_) => {
                let Some(input) = prompt_line("\n> ")? else {
                    break;
                };
                match input.trim() {
                    "" => {}
                    "q" | "quit" => break,
                    "r" | "refresh" => {
                        println!("Loading...");
                        works::refresh(&mut session, ctx.work_tracker.as_ref()).await;
                    }
                    "c" | "create" => edit_and_submit(&mut session, ctx).await?,
                    "x" | "cancel" => works::close_form(&mut session),
                    other => println!("Unknown command '{other}'. Use c, r, x or q."),
                }
            }
        }
    }

    Ok(())
}

/// Open the form (keeping values from a failed attempt), walk the fields
/// with Enter-to-keep prompts, then submit.
async fn edit_and_submit(session: &mut Session, ctx: &AppContext) -> AppResult<()> {
    works::open_form(session);
    let current = match &*session {
        Session::SignedIn(dashboard) => match dashboard.form.clone() {
            Some(draft) => draft,
            None => return Ok(()),
        },
        _ => return Ok(()),
    };

    let kind = match prompt_field("Type (ticket/issue)", current.kind.as_str())? {
        FieldAction::Keep | FieldAction::Clear => current.kind,
        FieldAction::Set(value) => match WorkItemKind::from_str(&value) {
            Some(kind) => kind,
            None => {
                println!("Unknown type '{value}', keeping {}.", current.kind.as_str());
                current.kind
            }
        },
    };
    let title = apply_field(prompt_field("Title", &current.title)?, current.title);
    let body = apply_field(prompt_field("Description", &current.body)?, current.body);

    works::update_draft(session, TicketDraft { title, body, kind });
    println!("Creating...");
    works::submit_draft(session, ctx.work_tracker.as_ref()).await;
    Ok(())
}

fn apply_field(action: FieldAction, current: String) -> String {
    match action {
        FieldAction::Keep => current,
        FieldAction::Clear => String::new(),
        FieldAction::Set(value) => value,
    }
}

fn prompt_field(field: &str, current: &str) -> AppResult<FieldAction> {
    let shown = if current.is_empty() {
        format!("{field}: ")
    } else {
        format!("{field} [{current}] (Enter to keep, '-' to clear): ")
    };
    let Some(input) = prompt_line(&shown)? else {
        return Ok(FieldAction::Keep);
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(FieldAction::Keep)
    } else if trimmed == "-" {
        Ok(FieldAction::Clear)
    } else {
        Ok(FieldAction::Set(trimmed.to_string()))
    }
}

/// One line from stdin; `None` means EOF (treat like quitting).
fn prompt_line(prompt: &str) -> AppResult<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\n', '\r']).to_string()))
}

enum FieldAction {
    Keep,
    Clear,
    Set(String),
}
