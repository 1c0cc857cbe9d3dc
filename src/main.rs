mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod session;
mod view;
mod workflow;

use std::sync::Arc;

use clap::Parser;

use crate::cmd::dashboard::{self, DashboardArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::devrev::DevRevClient;

#[derive(Parser)]
#[command(
    name = "workdeck",
    author,
    version,
    about = "Terminal dashboard for a work-tracking API"
)]
struct Cli {
    /// Override the work tracker API base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Start signed in with an empty demo dashboard; no network calls.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.base_url)?;

    let work_tracker = Arc::new(DevRevClient::new(config.api_base_url.clone()));
    let context = AppContext::new(config, work_tracker);

    dashboard::run(&context, DashboardArgs { demo: cli.demo }).await
}
