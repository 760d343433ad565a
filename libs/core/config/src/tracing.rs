use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre so startup failures print with file locations.
///
/// Call before the first fallible operation in `main`. Repeat calls are
/// harmless, the second install attempt is ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Log filter when `RUST_LOG` is not set.
///
/// Production keeps the driver quiet since every store call is already
/// logged through the repositories.
fn default_filter(environment: &Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("info,tower_http=info,mongodb=warn")
    } else {
        EnvFilter::new("debug")
    }
}

/// Initialize the tracing subscriber for the given environment.
///
/// Production emits flattened JSON for log aggregation; development uses
/// the pretty human format. Both attach `tracing_error::ErrorLayer` so
/// eyre reports carry the span trace of instrumented code.
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=storefront_api=trace`.
///
/// Safe to call multiple times: if a global subscriber is already set
/// (common when tests share a process), the call is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(environment));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(environment = ?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, keeping the existing subscriber"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_across_environments() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_rust_log_override_is_accepted() {
        temp_env::with_var("RUST_LOG", Some("warn,storefront_api=trace"), || {
            init_tracing(&Environment::Production);
        });
    }
}
