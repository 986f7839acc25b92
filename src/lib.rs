pub mod classifier;
pub mod credentials;
pub mod errors;
pub mod loader;
pub mod models;
pub mod provider;
pub mod report;
pub mod resolver;

// Re-export key types at crate root for convenience.
pub use classifier::{classify, ClassificationRule, ProviderKind, RULES};
pub use credentials::{CredentialPublisher, EnvPublisher, NoopPublisher};
pub use errors::{ResolveError, Result};
pub use loader::{load_config, parse_config_json, parse_config_yaml};
pub use models::{Config, CustomProvider, ProviderConfig, ProvidersConfig};
pub use provider::LiteLlmProvider;
pub use report::{format_report, mask_key, ResolutionReport};
pub use resolver::{ActiveProvider, ProviderSlot};
