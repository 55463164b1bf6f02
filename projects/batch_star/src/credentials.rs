//! Where the bearer token comes from.

use dialoguer::{Input, Password};
use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Prompt: {source}")]
    Prompt {
        #[from]
        source: dialoguer::Error,
    },
}

pub trait CredentialProvider {
    fn bearer_token(&self) -> Result<SecretString, CredentialError>;
}

pub struct FixedToken {
    token: SecretString,
}

impl FixedToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl CredentialProvider for FixedToken {
    fn bearer_token(&self) -> Result<SecretString, CredentialError> {
        Ok(self.token.clone())
    }
}

/// Only the secret is used for authentication; the username is read and dropped.
pub struct InteractivePrompt;

impl CredentialProvider for InteractivePrompt {
    fn bearer_token(&self) -> Result<SecretString, CredentialError> {
        println!("Enter GitHub credentials:");

        let _username: String = Input::new().with_prompt("Username").interact_text()?;
        debug!("username collected, not used for authentication");

        let secret = Password::new()
            .with_prompt("Password (or personal access token)")
            .allow_empty_password(true)
            .interact()?;

        // validity is only known once the probe call answers
        Ok(SecretString::from(secret))
    }
}

/// An empty token counts as absent.
fn supplied_token(token: Option<&str>) -> Option<&str> {
    token.filter(|token| !token.is_empty())
}

pub fn resolve_provider(token: Option<&str>) -> Box<dyn CredentialProvider> {
    match supplied_token(token) {
        Some(token) => Box::new(FixedToken::new(token)),
        None => Box::new(InteractivePrompt),
    }
}
