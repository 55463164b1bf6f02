//! Extraction of `(owner, name)` from repository URLs.
//!
//! The host marker must be present somewhere in the string, followed by
//! exactly two path segments. Anything past the repository segment other
//! than a `.git` suffix or a single trailing slash means no match.

use std::fmt;

pub const DEFAULT_HOST: &str = "github.com";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let owner = owner.into();
        let name = name.into();
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

type PathMatcher = fn(&str) -> Option<(&str, &str)>;

/// Tried in order, first hit wins.
const MATCHERS: [PathMatcher; 2] = [owner_repo_with_git_suffix, owner_repo_with_trailing_slash];

/// `<owner>/<repo>` or `<owner>/<repo>.git`, nothing after.
fn owner_repo_with_git_suffix(path: &str) -> Option<(&str, &str)> {
    let (owner, repo) = split_owner_repo(path)?;
    // the repository segment needs at least one character before the suffix
    let repo = match repo.strip_suffix(".git") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => repo,
    };
    Some((owner, repo))
}

/// `<owner>/<repo>` or `<owner>/<repo>/`, nothing after.
fn owner_repo_with_trailing_slash(path: &str) -> Option<(&str, &str)> {
    let path = path.strip_suffix('/').unwrap_or(path);
    split_owner_repo(path)
}

fn split_owner_repo(path: &str) -> Option<(&str, &str)> {
    let (owner, repo) = path.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner, repo))
}

#[derive(Debug, Clone)]
pub struct UrlParser {
    marker: String,
}

impl Default for UrlParser {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl UrlParser {
    pub fn new(host: &str) -> Self {
        Self {
            marker: format!("{}/", host.trim_end_matches('/')),
        }
    }

    pub fn parse(&self, url: &str) -> Option<RepositoryRef> {
        let url = url.trim();

        MATCHERS.iter().find_map(|matcher| {
            url.match_indices(self.marker.as_str())
                .find_map(|(start, marker)| matcher(&url[start + marker.len()..]))
                .and_then(|(owner, name)| RepositoryRef::new(owner, name))
        })
    }
}
