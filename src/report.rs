//! Human- and machine-readable resolution reports.

use serde::Serialize;

use crate::classifier::ProviderKind;
use crate::provider::LiteLlmProvider;

/// Snapshot of a resolved provider, safe to print (the key is masked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// Config slot the provider came from, when resolved from a config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    pub api_key: String,
    pub api_base: Option<String>,
    pub kind: ProviderKind,
    pub is_anthropic: bool,
    pub is_openrouter: bool,
    pub is_vllm: bool,
    pub default_model: String,
    /// `default_model` with the routing prefix applied.
    pub model: String,
}

impl ResolutionReport {
    #[must_use]
    pub fn new(provider: &LiteLlmProvider, slot: Option<&str>) -> Self {
        Self {
            slot: slot.map(str::to_string),
            api_key: mask_key(provider.api_key()),
            api_base: provider.api_base().map(str::to_string),
            kind: provider.kind(),
            is_anthropic: provider.is_anthropic(),
            is_openrouter: provider.is_openrouter(),
            is_vllm: provider.is_vllm(),
            default_model: provider.default_model().to_string(),
            model: provider.resolve_model(provider.default_model()),
        }
    }
}

/// Mask an API key for display.
///
/// Keys longer than 8 characters keep their first 6 and last 3 characters;
/// shorter keys are hidden entirely.
#[must_use]
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{head}...{tail}")
}

/// Render a report as aligned `label: value` lines.
#[must_use]
pub fn format_report(report: &ResolutionReport) -> String {
    let mut out = String::new();
    if let Some(slot) = &report.slot {
        out.push_str(&format!("Slot:          {slot}\n"));
    }
    out.push_str(&format!("Kind:          {}\n", report.kind));
    out.push_str(&format!("API key:       {}\n", report.api_key));
    out.push_str(&format!(
        "API base:      {}\n",
        report.api_base.as_deref().unwrap_or("(provider default)")
    ));
    out.push_str(&format!("is_anthropic:  {}\n", report.is_anthropic));
    out.push_str(&format!("is_openrouter: {}\n", report.is_openrouter));
    out.push_str(&format!("is_vllm:       {}\n", report.is_vllm));
    out.push_str(&format!("Default model: {}\n", report.default_model));
    out.push_str(&format!("Routed model:  {}\n", report.model));
    out
}
