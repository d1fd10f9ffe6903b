use dcc_config::DccConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DccConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DccConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.database.is_remote() && has_env_prefix(&env_keys, "DCC_DATABASE") {
        warnings.push(
            "Remote database not configured while DCC_DATABASE* env vars exist. Set both DCC_DATABASE__URL and DCC_DATABASE__AUTH_TOKEN (double underscores)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "DCC_GENERAL") {
        warnings.push(
            "DCC_GENERAL_* env vars are ignored. Use double underscores (example: DCC_GENERAL__DEFAULT_LIMIT)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
