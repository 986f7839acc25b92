use crate::classifier::{classify, ProviderKind};
use crate::credentials::{CredentialPublisher, EnvPublisher};

/// Routing prefix the client expects for OpenRouter models.
const OPENROUTER_MODEL_PREFIX: &str = "openrouter/";

/// Routing prefix the client expects for self-hosted vLLM models.
const VLLM_MODEL_PREFIX: &str = "hosted_vllm/";

/// Runtime view of the active provider, handed to the request-routing client.
///
/// Classification happens once, at construction; the flags never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteLlmProvider {
    api_key: String,
    api_base: Option<String>,
    default_model: String,
    kind: ProviderKind,
}

impl LiteLlmProvider {
    /// Classify the provider and publish its credential to the environment.
    ///
    /// For Anthropic this sets `ANTHROPIC_API_KEY` process-wide; see
    /// [`EnvPublisher`] for the threading caveat.
    pub fn new(api_key: &str, api_base: Option<&str>, default_model: &str) -> Self {
        Self::with_publisher(api_key, api_base, default_model, &EnvPublisher)
    }

    /// Classify the provider and hand its credential to `publisher`.
    pub fn with_publisher(
        api_key: &str,
        api_base: Option<&str>,
        default_model: &str,
        publisher: &dyn CredentialPublisher,
    ) -> Self {
        let kind = classify(api_key, api_base, default_model);
        tracing::debug!(kind = %kind, model = default_model, "classified provider");
        publisher.publish(kind, api_key);
        Self {
            api_key: api_key.to_string(),
            api_base: api_base.map(str::to_string),
            default_model: default_model.to_string(),
            kind,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL exactly as configured.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn is_anthropic(&self) -> bool {
        self.kind == ProviderKind::Anthropic
    }

    pub fn is_openrouter(&self) -> bool {
        self.kind == ProviderKind::OpenRouter
    }

    pub fn is_vllm(&self) -> bool {
        self.kind == ProviderKind::Vllm
    }

    /// Qualify `model` with the routing prefix the client expects for this
    /// provider. Models already carrying the prefix are returned unchanged.
    #[must_use]
    pub fn resolve_model(&self, model: &str) -> String {
        let prefix = match self.kind {
            ProviderKind::OpenRouter => OPENROUTER_MODEL_PREFIX,
            ProviderKind::Vllm => VLLM_MODEL_PREFIX,
            ProviderKind::Anthropic | ProviderKind::Generic => return model.to_string(),
        };
        if model.starts_with(prefix) {
            model.to_string()
        } else {
            format!("{prefix}{model}")
        }
    }
}
