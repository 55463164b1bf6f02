//! The sequential star loop and its console report.

use std::io::Write;

use interfaces_github_starring::index::GitHubRequestError;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::star::{StarApi, StarOutcome};
use crate::url_parser::UrlParser;

pub const AUTHENTICATION_FAILED: &str = "authentication failed, please check your credentials";

/// Tally of one pass. `total` is the raw line count, blank lines included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
}

impl BatchResult {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

#[derive(Debug, Error)]
pub enum ProcessUrlsError {
    #[error("WriteOutput: {source}")]
    WriteOutput {
        #[from]
        source: std::io::Error,
    },

    #[error("StarRepository: {source}")]
    StarRepository {
        #[from]
        source: GitHubRequestError,
    },
}

/// Stops at the first transport error.
pub async fn process_urls<A, W>(
    lines: &[String],
    parser: &UrlParser,
    api: &A,
    out: &mut W,
) -> Result<BatchResult, ProcessUrlsError>
where
    A: StarApi,
    W: Write,
{
    if lines.iter().all(|line| line.trim().is_empty()) {
        writeln!(out, "no URLs provided")?;
        return Ok(BatchResult::default());
    }

    let total = lines.len();
    let mut succeeded = 0;

    for (index, line) in lines.iter().enumerate() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }

        writeln!(out, "[{}/{total}] processing: {url}", index + 1)?;

        let Some(repo) = parser.parse(url) else {
            debug!(url, "no repository in line");
            writeln!(out, "error: unable to parse URL: {url}")?;
            continue;
        };

        let outcome = api.star(&repo).await?;
        match &outcome {
            StarOutcome::Starred => {
                writeln!(out, "starred repository: {repo}")?;
            }
            StarOutcome::NotFound => {
                writeln!(
                    out,
                    "error: repository {repo} does not exist or you do not have access"
                )?;
            }
            StarOutcome::Unauthorized => {
                warn!(%repo, "token rejected mid-batch");
                writeln!(out, "{AUTHENTICATION_FAILED}")?;
            }
            StarOutcome::Unexpected { status, body } => {
                writeln!(out, "unknown error: {status} - {body}")?;
            }
        }

        if outcome.is_success() {
            succeeded += 1;
        }
    }

    let result = BatchResult { total, succeeded };
    info!(total, succeeded, failed = result.failed(), "batch finished");
    writeln!(
        out,
        "\ndone! total: {}, succeeded: {}, failed: {}",
        result.total,
        result.succeeded,
        result.failed()
    )?;

    Ok(result)
}
