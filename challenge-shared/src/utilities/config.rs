use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

const STAGE_PREFIXES_VAR: &str = "API_STAGE_PREFIXES";
const DEFAULT_STAGE_PREFIXES: &str = "/dev,/prod";

static STAGE_PREFIXES: Lazy<Vec<String>> = Lazy::new(|| {
    let raw = get_env_var_or(STAGE_PREFIXES_VAR, DEFAULT_STAGE_PREFIXES);
    parse_stage_prefixes(&raw)
});

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    match dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(_) => log::debug!("No .env file found, using process environment"),
    }
}

/// Fetch an environment variable, falling back to `default` when unset.
pub fn get_env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// API Gateway stage prefixes stripped from incoming paths.
pub fn get_stage_prefixes() -> &'static [String] {
    &STAGE_PREFIXES
}

pub fn parse_stage_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().trim_end_matches('/'))
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            if entry.starts_with('/') {
                entry.to_string()
            } else {
                format!("/{}", entry)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_prefixes() {
        assert_eq!(parse_stage_prefixes(DEFAULT_STAGE_PREFIXES), vec!["/dev", "/prod"]);
    }

    #[test]
    fn test_parse_normalizes_entries() {
        assert_eq!(
            parse_stage_prefixes(" staging/ , /v1,, /"),
            vec!["/staging", "/v1"]
        );
    }

    #[test]
    fn test_get_env_var_or_default() {
        assert_eq!(get_env_var_or("CHALLENGE_TEST_UNSET_VARIABLE", "fallback"), "fallback");
    }
}
