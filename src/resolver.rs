//! Active-provider resolution.
//!
//! Scans the provider table in a fixed priority order (OpenRouter, Anthropic,
//! vLLM, then custom slots in declaration order) and surfaces the first slot
//! that carries an API key. Only key presence decides activity; a slot with a
//! base URL but no key is skipped.

use std::fmt;

use crate::credentials::CredentialPublisher;
use crate::models::{Config, ProviderConfig};
use crate::provider::LiteLlmProvider;

/// Identifies a slot in the provider table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSlot {
    OpenRouter,
    Anthropic,
    Vllm,
    Custom(String),
}

impl ProviderSlot {
    /// Config-file name of the slot.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ProviderSlot::OpenRouter => "openrouter",
            ProviderSlot::Anthropic => "anthropic",
            ProviderSlot::Vllm => "vllm",
            ProviderSlot::Custom(name) => name,
        }
    }
}

impl fmt::Display for ProviderSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The slot that won resolution, borrowed from its [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProvider<'a> {
    pub slot: ProviderSlot,
    pub config: &'a ProviderConfig,
}

impl ActiveProvider<'_> {
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    #[must_use]
    pub fn api_base(&self) -> Option<&str> {
        self.config.base()
    }
}

impl Config {
    /// All provider slots in priority order, configured or not.
    pub fn slots(&self) -> impl Iterator<Item = (ProviderSlot, &ProviderConfig)> {
        let p = &self.providers;
        [
            (ProviderSlot::OpenRouter, &p.openrouter),
            (ProviderSlot::Anthropic, &p.anthropic),
            (ProviderSlot::Vllm, &p.vllm),
        ]
        .into_iter()
        .chain(
            p.custom
                .iter()
                .map(|c| (ProviderSlot::Custom(c.name.clone()), &c.config)),
        )
    }

    /// The first slot with a non-empty API key.
    #[must_use]
    pub fn active_provider(&self) -> Option<ActiveProvider<'_>> {
        let active = self
            .slots()
            .find(|(_, config)| config.is_configured())
            .map(|(slot, config)| ActiveProvider { slot, config });
        match &active {
            Some(a) => tracing::debug!(slot = %a.slot, "resolved active provider"),
            None => tracing::debug!("no provider configured"),
        }
        active
    }

    /// API key of the active provider, or `None` when nothing is configured.
    #[must_use]
    pub fn get_api_key(&self) -> Option<&str> {
        self.active_provider().map(|a| a.config.api_key.as_str())
    }

    /// API base of the active provider.
    ///
    /// Returns `None` when nothing is configured, and also when the active
    /// provider relies on its implicit default endpoint. A base URL on a slot
    /// without a key is never returned.
    #[must_use]
    pub fn get_api_base(&self) -> Option<&str> {
        self.active_provider().and_then(|a| a.config.base())
    }

    /// Build the runtime provider for the active slot, using the configured
    /// default model.
    ///
    /// Returns `None` when no provider is configured.
    pub fn build_provider(&self, publisher: &dyn CredentialPublisher) -> Option<LiteLlmProvider> {
        let active = self.active_provider()?;
        Some(LiteLlmProvider::with_publisher(
            active.api_key(),
            active.api_base(),
            self.default_model(),
            publisher,
        ))
    }
}
