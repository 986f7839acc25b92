//! Provider classification.
//!
//! Provider identity is not always explicit in configuration, so it is
//! inferred from an ordered table of rules over the resolved
//! `(api_key, api_base, default_model)` triple. The first matching rule
//! wins; a triple that matches no rule is [`ProviderKind::Generic`].

use std::fmt;

use serde::Serialize;

/// Key prefix issued by OpenRouter.
pub const OPENROUTER_KEY_PREFIX: &str = "sk-or-";

/// Key prefix issued by Anthropic.
pub const ANTHROPIC_KEY_PREFIX: &str = "sk-ant-";

/// Model-name marker for Anthropic models (`anthropic/...`).
pub const ANTHROPIC_MODEL_MARKER: &str = "anthropic";

/// Request-formatting family of the active provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenRouter,
    Anthropic,
    Vllm,
    /// No rule matched; plain OpenAI-compatible handling.
    Generic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenRouter => "openrouter",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Vllm => "vllm",
            ProviderKind::Generic => "generic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Inputs a rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    pub api_key: &'a str,
    pub api_base: Option<&'a str>,
    pub default_model: &'a str,
}

/// One entry of the classification table.
pub struct ClassificationRule {
    pub kind: ProviderKind,
    /// Human-readable statement of the predicate.
    pub description: &'static str,
    pub matches: fn(&Signals<'_>) -> bool,
}

impl fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("kind", &self.kind)
            .field("description", &self.description)
            .finish()
    }
}

/// Classification rules in evaluation order.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        kind: ProviderKind::OpenRouter,
        description: "api_key starts with `sk-or-`",
        matches: is_openrouter_key,
    },
    ClassificationRule {
        kind: ProviderKind::Anthropic,
        description: "api_key starts with `sk-ant-`, or default_model contains `anthropic`",
        matches: is_anthropic_signal,
    },
    ClassificationRule {
        kind: ProviderKind::Vllm,
        description: "api_base is set (self-hosted OpenAI-compatible endpoint)",
        matches: has_custom_base,
    },
];

fn is_openrouter_key(s: &Signals<'_>) -> bool {
    s.api_key.starts_with(OPENROUTER_KEY_PREFIX)
}

fn is_anthropic_signal(s: &Signals<'_>) -> bool {
    s.api_key.starts_with(ANTHROPIC_KEY_PREFIX) || s.default_model.contains(ANTHROPIC_MODEL_MARKER)
}

fn has_custom_base(s: &Signals<'_>) -> bool {
    s.api_base.is_some_and(|b| !b.is_empty())
}

/// Classify a resolved credential triple against [`RULES`].
#[must_use]
pub fn classify(api_key: &str, api_base: Option<&str>, default_model: &str) -> ProviderKind {
    let signals = Signals {
        api_key,
        api_base,
        default_model,
    };
    RULES
        .iter()
        .find(|rule| (rule.matches)(&signals))
        .map_or(ProviderKind::Generic, |rule| rule.kind)
}
