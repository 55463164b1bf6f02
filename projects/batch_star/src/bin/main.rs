use clap::Parser;
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

use projects_batch_star::config::Args;
use projects_batch_star::credentials::resolve_provider;
use projects_batch_star::run::{connect, run, ConnectError, RunError};
use projects_batch_star::url_parser::UrlParser;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },

    #[error("Connect: {source}")]
    Connect {
        #[from]
        source: ConnectError,
    },

    #[error("Run: {source}")]
    Run {
        #[from]
        source: RunError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    // a missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_init(&args.log_level).map_err(|source| MainError::TracingInit { source })?;

    let source = args.input.source();
    let parser = UrlParser::new(&args.host);

    let credentials = resolve_provider(args.token.as_deref());
    let client = connect(&args.api_url, credentials.as_ref())?;
    info!(api_url = client.base_url(), "client ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&client, &source, &parser, &mut out).await?;
    info!(?outcome, "run finished");

    Ok(())
}
