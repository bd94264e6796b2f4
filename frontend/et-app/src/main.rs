//! et - expense tracker CLI
//!
//! # Examples
//!
//! ```bash
//! et login --email asha@example.com --password secret
//! et expense add --title Coffee --amount 4.50 --category Food --date 2024-03-05
//! et dashboard --month 3 --year 2024
//! et budget set --limit 800
//! ```

use et_api::{Client, ClientError, FileSessionStore, Session};
use et_app::{App, AppError, AppResult, Cli, TerminalPrompt, logger};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(AppError::Aborted) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<String> {
    let mut config = et_config::Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting et v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session_path = config.session_path()?;
    info!("Session file: {}", session_path.display());
    let session = Session::restore(Arc::new(FileSessionStore::new(session_path)));

    let mut http = reqwest::Client::builder();
    if let Some(timeout) = config.api.timeout() {
        http = http.timeout(timeout);
    }
    let http = http.build().map_err(ClientError::from_reqwest)?;

    let client = Client::with_http(&config.api.base_url, session, http);
    let prompt = TerminalPrompt::new(cli.command.assume_yes());
    let app = App::new(
        client,
        Box::new(prompt),
        &config.display.currency_symbol,
        cli.json,
    );

    app.run(cli.command).await
}
