use provider_resolve::{LiteLlmProvider, NoopPublisher, ResolutionReport};

// Diagnostic only: nothing is published to the environment.
pub(crate) fn run(api_key: &str, api_base: Option<&str>, model: &str, format: super::Format) {
    let provider = LiteLlmProvider::with_publisher(api_key, api_base, model, &NoopPublisher);
    let report = ResolutionReport::new(&provider, None);
    super::print_report(&report, format);
}
