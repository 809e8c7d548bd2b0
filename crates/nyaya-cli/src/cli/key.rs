//! Credential management commands and key resolution helpers.
//!
//! The OpenAI key and GitHub token resolve from flag/env first, then
//! the OS keychain. `key set` / `key clear` are the only paths that
//! write or remove the stored key.

use console::style;
use dialoguer::Password;
use secrecy::SecretString;

use nyaya_core::chat::service::CHAT_MODEL;
use nyaya_core::credential::{self, KeyCheck, MIN_CREDENTIAL_LEN};
use nyaya_infra::keychain::{GITHUB_TOKEN_NAME, KeychainStore, OPENAI_KEY_NAME};
use nyaya_infra::llm::OpenAiProvider;
use nyaya_types::credential::Redacted;

use super::{Cli, spinner};

/// Resolve the OpenAI key: flag/env first, then the OS keychain.
pub fn resolve_api_key(cli: &Cli) -> Option<String> {
    if let Some(key) = &cli.api_key {
        if !key.trim().is_empty() {
            return Some(key.trim().to_string());
        }
    }
    KeychainStore::new().get(OPENAI_KEY_NAME).ok().flatten()
}

/// Resolve the GitHub token: flag/env first, then the OS keychain.
pub fn resolve_github_token(cli: &Cli) -> Option<SecretString> {
    let token = match &cli.github_token {
        Some(t) if !t.trim().is_empty() => Some(t.trim().to_string()),
        _ => KeychainStore::new().get(GITHUB_TOKEN_NAME).ok().flatten(),
    };
    token.map(SecretString::from)
}

/// Store the OpenAI key in the OS keychain.
pub fn set_key(value: Option<&str>) -> anyhow::Result<()> {
    let value = match value {
        Some(v) => v.to_string(),
        None => Password::new().with_prompt("OpenAI API key").interact()?,
    };
    let value = value.trim().to_string();

    if !credential::plausible(&value) {
        println!(
            "\n  {} Key looks too short (minimum {MIN_CREDENTIAL_LEN} characters); not stored.",
            style("!").yellow().bold()
        );
        return Ok(());
    }

    KeychainStore::new().set(OPENAI_KEY_NAME, &value)?;
    println!(
        "\n  {} Stored OpenAI key {} in the OS keychain.",
        style("\u{2713}").green().bold(),
        style(Redacted::new(value).masked()).dim()
    );
    println!(
        "  {}",
        style("Validate it with: nyaya key validate").dim()
    );
    Ok(())
}

/// Check the configured key against the provider.
pub async fn validate_key(cli: &Cli) -> anyhow::Result<()> {
    let Some(candidate) = resolve_api_key(cli) else {
        println!(
            "\n  {} No API key configured. Set one with: nyaya key set",
            style("!").yellow().bold()
        );
        return Ok(());
    };

    let provider = OpenAiProvider::new(SecretString::from(candidate.clone()), CHAT_MODEL);
    let pb = spinner("validating API key...");
    let check = credential::validate(&candidate, &provider).await;
    pb.finish_and_clear();

    match check {
        KeyCheck::Valid => {
            println!(
                "\n  {} API key {} is valid.",
                style("\u{2713}").green().bold(),
                style(Redacted::new(candidate).masked()).dim()
            );
        }
        KeyCheck::TooShort => {
            println!(
                "\n  {} Key is shorter than {MIN_CREDENTIAL_LEN} characters; rejected without contacting the provider.",
                style("\u{2717}").red().bold()
            );
        }
        KeyCheck::Rejected { detail } => {
            println!(
                "\n  {} API key rejected: {detail}",
                style("\u{2717}").red().bold()
            );
        }
    }
    Ok(())
}

/// Remove the OpenAI key from the OS keychain.
pub fn clear_key() -> anyhow::Result<()> {
    KeychainStore::new().delete(OPENAI_KEY_NAME)?;
    println!(
        "\n  {} API key cleared from the OS keychain.",
        style("\u{2713}").green().bold()
    );
    Ok(())
}
