//! One end-to-end invocation: credentials, probe, input, batch.

use std::io::Write;

use interfaces_github_starring::index::{
    GitHubRequestError, GitHubRestClient, NewGitHubRestClientError,
};
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{info, warn};

use crate::batch::{process_urls, BatchResult, ProcessUrlsError, AUTHENTICATION_FAILED};
use crate::credentials::{CredentialError, CredentialProvider};
use crate::input::InputSource;
use crate::star::{ProbeOutcome, StarApi};
use crate::url_parser::UrlParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The probe call did not return `200 OK`; nothing was starred.
    AuthenticationRejected,
    /// The input file could not be read; nothing was starred.
    InputUnavailable,
    Completed(BatchResult),
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Credential: {source}")]
    Credential {
        #[from]
        source: CredentialError,
    },

    #[error("NewGitHubRestClient: {source}")]
    NewGitHubRestClient {
        #[from]
        source: NewGitHubRestClientError,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Probe: {source}")]
    Probe {
        #[source]
        source: GitHubRequestError,
    },

    #[error("WriteOutput: {source}")]
    WriteOutput {
        #[from]
        source: std::io::Error,
    },

    #[error("ProcessUrls: {source}")]
    ProcessUrls {
        #[from]
        source: ProcessUrlsError,
    },
}

pub fn connect(
    api_url: &str,
    credentials: &dyn CredentialProvider,
) -> Result<GitHubRestClient, ConnectError> {
    let token = credentials.bearer_token()?;
    let client = GitHubRestClient::new(api_url, token.expose_secret())?;
    Ok(client)
}

pub async fn run<A, W>(
    api: &A,
    source: &InputSource,
    parser: &UrlParser,
    out: &mut W,
) -> Result<RunOutcome, RunError>
where
    A: StarApi,
    W: Write,
{
    let probe = api
        .probe()
        .await
        .map_err(|source| RunError::Probe { source })?;

    if let ProbeOutcome::Rejected { status } = probe {
        warn!(status, "credential probe rejected");
        writeln!(out, "{AUTHENTICATION_FAILED}")?;
        return Ok(RunOutcome::AuthenticationRejected);
    }
    info!("credentials accepted");

    let lines = match source.read_lines().await {
        Ok(lines) => lines,
        Err(err) => {
            writeln!(out, "error: {err}")?;
            return Ok(RunOutcome::InputUnavailable);
        }
    };

    let result = process_urls(&lines, parser, api, out).await?;
    Ok(RunOutcome::Completed(result))
}
