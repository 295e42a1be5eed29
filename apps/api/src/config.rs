use anyhow::{Context, Result};

/// Origins the original frontend dev servers run on.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000,http://localhost:8080";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    /// Only required when `enable_ai_enhancement` is on.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origins: Vec<String>,
    /// `false` swaps the LLM enhancer for one that returns profiles unchanged.
    pub enable_ai_enhancement: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            enable_ai_enhancement: parse_flag(
                std::env::var("ENABLE_AI_ENHANCEMENT").ok().as_deref(),
                true,
            )
            .context("ENABLE_AI_ENHANCEMENT must be true or false")?,
        })
    }

    /// API key for the LLM enhancer. Errors when the key is unset.
    pub fn llm_api_key(&self) -> Result<String> {
        self.anthropic_api_key.clone().context(
            "ANTHROPIC_API_KEY must be set when ENABLE_AI_ENHANCEMENT is on",
        )
    }
}

/// Unset and blank values both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn parse_flag(raw: Option<&str>, default: bool) -> Result<bool> {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => anyhow::bail!("unrecognized boolean '{other}'"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        let origins = parse_origins(DEFAULT_CORS_ORIGINS);
        assert_eq!(origins.len(), 3);
        assert_eq!(origins[0], "http://localhost:5173");
    }

    #[test]
    fn test_origins_skip_blanks() {
        let origins = parse_origins(" https://folio.dev , ,http://localhost:3000,");
        assert_eq!(origins, vec!["https://folio.dev", "http://localhost:3000"]);
    }

    fn config_with_key(anthropic_api_key: Option<&str>) -> Config {
        Config {
            database_url: "postgres://localhost/folio".into(),
            s3_bucket: "folio".into(),
            s3_endpoint: "http://localhost:9000".into(),
            aws_access_key_id: "test".into(),
            aws_secret_access_key: "test".into(),
            anthropic_api_key: anthropic_api_key.map(String::from),
            port: 8000,
            rust_log: "info".into(),
            cors_allowed_origins: vec![],
            enable_ai_enhancement: false,
        }
    }

    #[test]
    fn test_llm_api_key_required_only_on_use() {
        assert!(config_with_key(None).llm_api_key().is_err());
        assert_eq!(config_with_key(Some("sk-test")).llm_api_key().unwrap(), "sk-test");
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("FOLIO_TEST_BLANK_KEY", "  ");
        assert_eq!(optional_env("FOLIO_TEST_BLANK_KEY"), None);
        std::env::set_var("FOLIO_TEST_SET_KEY", " sk-test ");
        assert_eq!(optional_env("FOLIO_TEST_SET_KEY").as_deref(), Some("sk-test"));
        assert_eq!(optional_env("FOLIO_TEST_NEVER_SET_KEY"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(None, true).unwrap());
        assert!(!parse_flag(Some("false"), true).unwrap());
        assert!(parse_flag(Some(" ON "), false).unwrap());
        assert!(parse_flag(Some("maybe"), true).is_err());
    }
}
