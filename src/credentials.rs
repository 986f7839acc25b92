//! Publishing resolved credentials to the downstream client.
//!
//! The request-routing client discovers Anthropic credentials through the
//! `ANTHROPIC_API_KEY` environment variable rather than an explicit
//! parameter. The write sits behind [`CredentialPublisher`] so it can be
//! stubbed out, or replaced by a direct pass-through.

use std::env;

use crate::classifier::ProviderKind;

/// Environment variable the Anthropic client reads its key from.
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Receives the resolved credential once a provider has been classified.
pub trait CredentialPublisher {
    fn publish(&self, kind: ProviderKind, api_key: &str);
}

/// The environment variable a provider kind publishes its key to, if any.
#[must_use]
pub fn credential_env_var(kind: ProviderKind) -> Option<&'static str> {
    match kind {
        ProviderKind::Anthropic => Some(ANTHROPIC_API_KEY_ENV),
        ProviderKind::OpenRouter | ProviderKind::Vllm | ProviderKind::Generic => None,
    }
}

/// Writes credentials to the process environment.
///
/// Only Anthropic keys are written. Other kinds leave any existing value
/// untouched. The environment is process-global: two threads publishing
/// different Anthropic keys race and the last write wins, so callers that
/// initialize providers concurrently must serialize construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPublisher;

impl CredentialPublisher for EnvPublisher {
    fn publish(&self, kind: ProviderKind, api_key: &str) {
        if api_key.is_empty() {
            return;
        }
        if let Some(var) = credential_env_var(kind) {
            env::set_var(var, api_key);
            tracing::debug!(var, kind = %kind, "published credential to environment");
        }
    }
}

/// Discards credentials. For callers that pass the key to the client directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl CredentialPublisher for NoopPublisher {
    fn publish(&self, _kind: ProviderKind, _api_key: &str) {}
}
