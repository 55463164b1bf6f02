//! Classification of GitHub responses for the probe and star calls.

use std::future::Future;

use interfaces_github_starring::index::{GitHubRequestError, GitHubRestClient, GitHubRestResult};
use reqwest::StatusCode;

use crate::url_parser::RepositoryRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarOutcome {
    Starred,
    NotFound,
    Unauthorized,
    Unexpected { status: u16, body: String },
}

impl StarOutcome {
    pub fn classify(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NO_CONTENT => StarOutcome::Starred,
            StatusCode::NOT_FOUND => StarOutcome::NotFound,
            StatusCode::UNAUTHORIZED => StarOutcome::Unauthorized,
            _ => StarOutcome::Unexpected {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// Only a `204 No Content` counts. Re-starring yields the same status.
    pub fn is_success(&self) -> bool {
        matches!(self, StarOutcome::Starred)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated,
    Rejected { status: u16 },
}

impl ProbeOutcome {
    pub fn classify(status: StatusCode) -> Self {
        if status == StatusCode::OK {
            ProbeOutcome::Authenticated
        } else {
            ProbeOutcome::Rejected {
                status: status.as_u16(),
            }
        }
    }
}

/// Transport failures are errors, every HTTP status is an outcome.
pub trait StarApi {
    fn probe(&self) -> impl Future<Output = Result<ProbeOutcome, GitHubRequestError>>;

    fn star(
        &self,
        repo: &RepositoryRef,
    ) -> impl Future<Output = Result<StarOutcome, GitHubRequestError>>;
}

impl StarApi for GitHubRestClient {
    async fn probe(&self) -> Result<ProbeOutcome, GitHubRequestError> {
        let GitHubRestResult { status, .. } = self.fetch_authenticated_user().await?;
        Ok(ProbeOutcome::classify(status))
    }

    async fn star(&self, repo: &RepositoryRef) -> Result<StarOutcome, GitHubRequestError> {
        let GitHubRestResult { body, status } =
            self.star_repository(repo.owner(), repo.name()).await?;
        Ok(StarOutcome::classify(status, body))
    }
}
