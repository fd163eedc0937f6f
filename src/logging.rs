use tracing_subscriber::EnvFilter;

/// Third-party targets that are too chatty at the service's default level.
const QUIET_TARGETS: &[(&str, &str)] = &[("actix_server", "warn"), ("actix_web", "info")];

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(development: bool) -> String {
    let base = if development { "debug" } else { "info" };
    std::iter::once(base.to_string())
        .chain(QUIET_TARGETS.iter().map(|(t, l)| format!("{t}={l}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global `tracing` subscriber. `log` records emitted by
/// actix-web's `Logger` middleware are forwarded into it.
pub fn init(development: bool) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(development))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(false),
            "info,actix_server=warn,actix_web=info"
        );
        assert!(default_directives(true).starts_with("debug,"));
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
    }
}
