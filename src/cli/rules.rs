pub(crate) fn run() {
    for (i, rule) in provider_resolve::RULES.iter().enumerate() {
        println!("{}. {:<10} {}", i + 1, rule.kind, rule.description);
    }
    println!(
        "{}. {:<10} no rule matched",
        provider_resolve::RULES.len() + 1,
        provider_resolve::ProviderKind::Generic
    );
}
