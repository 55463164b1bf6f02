use std::fmt;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("batch-star/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

#[derive(Clone)]
pub struct GitHubRestClient {
    client: Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for GitHubRestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubRestClient")
            .field("base_url", &self.base_url)
            .field("token", &"[redacted]")
            .finish()
    }
}

impl GitHubRestClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, NewGitHubRestClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| NewGitHubRestClientError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_authenticated_user(&self) -> Result<GitHubRestResult, GitHubRequestError> {
        let url = format!("{}/user", self.base_url);
        self.send(self.client.get(url)).await
    }

    /// `PUT /user/starred/{owner}/{name}`. Starring twice is not an error upstream.
    pub async fn star_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<GitHubRestResult, GitHubRequestError> {
        let url = format!("{}/user/starred/{owner}/{name}", self.base_url);
        let request = self.client.put(url).header(header::CONTENT_LENGTH, "0");
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<GitHubRestResult, GitHubRequestError> {
        let response = request
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await
            .map_err(|source| GitHubRequestError::RequestSend { source })?;

        let status = response.status();
        debug!(url = %response.url(), %status, "github responded");

        let body = response
            .text()
            .await
            .map_err(|source| GitHubRequestError::ResponseRead { source })?;

        Ok(GitHubRestResult { body, status })
    }
}

#[derive(Debug, Error)]
pub enum NewGitHubRestClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum GitHubRequestError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::HeaderMap,
        routing::{get, put},
        Router,
    };

    const TOKEN: &str = "s3cret";

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            == Some("Bearer s3cret")
    }

    async fn user(headers: HeaderMap) -> (StatusCode, String) {
        if !authorized(&headers) {
            return (StatusCode::UNAUTHORIZED, "Bad credentials".to_string());
        }
        let agent = headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (StatusCode::OK, agent)
    }

    async fn star(
        Path((owner, repo)): Path<(String, String)>,
        headers: HeaderMap,
    ) -> (StatusCode, String) {
        if !authorized(&headers) {
            return (StatusCode::UNAUTHORIZED, "Bad credentials".to_string());
        }
        match owner.as_str() {
            "ghost" => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            "teapot" => (StatusCode::IM_A_TEAPOT, format!("{repo} is short and stout")),
            _ => (StatusCode::NO_CONTENT, String::new()),
        }
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/user", get(user))
            .route("/user/starred/{owner}/{repo}", put(star));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn probe_sends_bearer_token_and_user_agent() {
        let base = spawn_server().await;
        let client = GitHubRestClient::new(&base, TOKEN).unwrap();

        let result = client.fetch_authenticated_user().await.unwrap();

        assert_eq!(result.status, StatusCode::OK);
        assert!(result.body.starts_with("batch-star/"));
    }

    #[tokio::test]
    async fn probe_with_wrong_token_is_unauthorized() {
        let base = spawn_server().await;
        let client = GitHubRestClient::new(&base, "nope").unwrap();

        let result = client.fetch_authenticated_user().await.unwrap();

        assert_eq!(result.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn star_returns_raw_status_and_body() {
        let base = spawn_server().await;
        let client = GitHubRestClient::new(&format!("{base}/"), TOKEN).unwrap();

        let starred = client.star_repository("rust-lang", "rust").await.unwrap();
        assert_eq!(starred.status, StatusCode::NO_CONTENT);
        assert!(starred.body.is_empty());

        let missing = client.star_repository("ghost", "nothing").await.unwrap();
        assert_eq!(missing.status, StatusCode::NOT_FOUND);

        let odd = client.star_repository("teapot", "pot").await.unwrap();
        assert_eq!(odd.status, StatusCode::IM_A_TEAPOT);
        assert_eq!(odd.body, "pot is short and stout");
    }

    #[tokio::test]
    async fn trailing_slash_is_stripped_from_base_url() {
        let client = GitHubRestClient::new("https://api.example.test///", TOKEN).unwrap();
        assert_eq!(client.base_url(), "https://api.example.test");
    }

    #[tokio::test]
    async fn connection_refused_is_a_send_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GitHubRestClient::new(&format!("http://{addr}"), TOKEN).unwrap();
        let err = client.star_repository("a", "b").await.err().unwrap();

        assert!(matches!(err, GitHubRequestError::RequestSend { .. }));
    }

    #[tokio::test]
    async fn debug_output_hides_token() {
        let client = GitHubRestClient::new(DEFAULT_API_URL, TOKEN).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains(TOKEN));
    }
}
