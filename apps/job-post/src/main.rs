use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use job_post::board_client::HttpJobBoard;
use job_post::config::Config;
use job_post::console;
use job_post::form::JobPostForm;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so the form on stdout stays readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("job_post={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting job post console v{}", env!("CARGO_PKG_VERSION"));

    let board = HttpJobBoard::new(&config.jobs_api_url, config.request_timeout)?;
    info!("Posting jobs to {}", board.endpoint());

    let mut form = JobPostForm::new();
    let mut stdout = tokio::io::stdout();
    console::run(
        &mut form,
        &board,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
    )
    .await?;

    info!("Bye");
    Ok(())
}
