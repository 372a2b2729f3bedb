pub mod app_config;
pub mod catalog_api_config;
pub mod view_config;

use std::str::FromStr;

/// Reads `name` from the environment, falling back to `default` when the
/// variable is unset or does not parse.
pub(crate) fn env_or<T: FromStr>(name: &str, default: T) -> T {
    parse_or(name, std::env::var(name).ok(), default)
}

pub(crate) fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Ignoring invalid value {:?} for {}", value, name);
                default
            }
        },
    }
}
