use serde::{Deserialize, Serialize};

/// Default model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "anthropic/claude-opus-4-5";

/// Credentials for a single provider slot.
///
/// An empty `api_key` means the slot is unset. A missing or empty `api_base`
/// means the downstream client uses the provider's own default endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, alias = "apiKey")]
    pub api_key: String,

    #[serde(
        default,
        alias = "apiBase",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_base: Option<String>,
}

impl ProviderConfig {
    /// Create a provider config with a key and no explicit base.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: None,
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Returns `true` if this slot carries a non-empty API key.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The API base, with an empty string normalized to `None`.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.api_base.as_deref().filter(|b| !b.is_empty())
    }
}

/// A user-named provider slot scanned after the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProvider {
    pub name: String,

    #[serde(flatten)]
    pub config: ProviderConfig,
}

/// The fixed provider table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openrouter: ProviderConfig,

    #[serde(default)]
    pub anthropic: ProviderConfig,

    #[serde(default)]
    pub vllm: ProviderConfig,

    /// Extra slots, in priority order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomProvider>,
}

/// Per-agent defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefaults {
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default)]
    pub defaults: AgentDefaults,
}

/// Root configuration.
///
/// Built once at startup and read-only afterwards. Resolution queries live
/// in [`crate::resolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agents: AgentsConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Config {
    /// Create a config with the given provider table and default agent settings.
    #[must_use]
    pub fn new(providers: ProvidersConfig) -> Self {
        Self {
            agents: AgentsConfig::default(),
            providers,
        }
    }

    /// The model requests go to when the caller does not pick one.
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.agents.defaults.model
    }
}
