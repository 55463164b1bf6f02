//! Star GitHub repositories in bulk
//!
//! - URL parsing in `url_parser`
//! - Token sources in `credentials`
//! - Response classification in `star`, the sequential loop in `batch`
//! - Calls go through `interfaces_github_starring`

pub mod batch;
pub mod config;
pub mod credentials;
pub mod input;
pub mod run;
pub mod star;
pub mod url_parser;
