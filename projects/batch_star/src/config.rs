use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use interfaces_github_starring::index::DEFAULT_API_URL;

use crate::input::InputSource;
use crate::url_parser::DEFAULT_HOST;

/// Star GitHub repositories in bulk from a list of URLs.
#[derive(Parser, Debug)]
#[command(name = "batch-star", version)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Personal access token. Prompted for when absent or empty.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Host that repository URLs must point at.
    #[arg(long, env = "GITHUB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Log filter, overridden by RUST_LOG.
    #[arg(long, env = "BATCH_STAR_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// File with one repository URL per line.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Repository URLs given inline, separated by newlines.
    #[arg(short, long)]
    pub text: Option<String>,
}

impl InputArgs {
    /// The argument group guarantees exactly one of the two is set.
    pub fn source(&self) -> InputSource {
        match &self.file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Text(self.text.clone().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_mode() {
        let args = Args::try_parse_from(["batch-star", "-f", "urls.txt"]).unwrap();
        assert_eq!(
            args.input.source(),
            InputSource::File(PathBuf::from("urls.txt"))
        );
    }

    #[test]
    fn text_mode_with_token() {
        let args = Args::try_parse_from([
            "batch-star",
            "--text",
            "https://github.com/a/b\nhttps://github.com/c/d",
            "--token",
            "ghp_abc",
        ])
        .unwrap();

        assert_eq!(
            args.input.source(),
            InputSource::Text("https://github.com/a/b\nhttps://github.com/c/d".to_string())
        );
        assert_eq!(args.token.as_deref(), Some("ghp_abc"));
    }

    #[test]
    fn an_input_is_required() {
        assert!(Args::try_parse_from(["batch-star"]).is_err());
    }

    #[test]
    fn inputs_are_mutually_exclusive() {
        let parsed = Args::try_parse_from(["batch-star", "-f", "urls.txt", "-t", "x"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn custom_endpoints() {
        let args = Args::try_parse_from([
            "batch-star",
            "-t",
            "x",
            "--api-url",
            "https://ghe.example/api/v3",
            "--host",
            "ghe.example",
        ])
        .unwrap();

        assert_eq!(args.api_url, "https://ghe.example/api/v3");
        assert_eq!(args.host, "ghe.example");
    }
}
