use std::path::PathBuf;

use provider_resolve::{EnvPublisher, LiteLlmProvider, ResolutionReport};

pub(crate) fn run(config: Option<PathBuf>, model: Option<String>, format: super::Format) {
    let config = match config {
        Some(path) => match provider_resolve::load_config(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("provider-resolve resolve: {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => provider_resolve::Config::default(),
    };

    let Some(active) = config.active_provider() else {
        eprintln!("provider-resolve resolve: no provider configured");
        std::process::exit(1);
    };

    let default_model = model.as_deref().unwrap_or_else(|| config.default_model());
    let provider = LiteLlmProvider::with_publisher(
        active.api_key(),
        active.api_base(),
        default_model,
        &EnvPublisher,
    );
    let report = ResolutionReport::new(&provider, Some(active.slot.name()));
    super::print_report(&report, format);
}
