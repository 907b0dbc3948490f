use std::time::Duration;

use bloomcheck_core::domain::common::{BloomCheckConfig, CacheConfig, LLMConfig, RetryConfig};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bloomcheck", version, about = "Pet-safe flower lookup API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub retry: RetryArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGIN", default_value = "*")]
    pub allowed_origin: String,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics_enabled: bool,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3333,
            root_path: String::new(),
            allowed_origin: "*".to_string(),
            metrics_enabled: true,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = 0.2)]
    pub llm_temperature: f32,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,
}

impl Default for LlmArgs {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            llm_temperature: 0.2,
            llm_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RetryArgs {
    #[arg(long, env = "RETRY_MAX_ATTEMPTS", default_value_t = 3)]
    pub retry_max_attempts: u32,

    #[arg(long, env = "RETRY_MIN_BACKOFF_SECS", default_value_t = 1.0)]
    pub retry_min_backoff_secs: f64,

    #[arg(long, env = "RETRY_MAX_BACKOFF_SECS", default_value_t = 4.0)]
    pub retry_max_backoff_secs: f64,
}

impl Default for RetryArgs {
    fn default() -> Self {
        Self {
            retry_max_attempts: 3,
            retry_min_backoff_secs: 1.0,
            retry_max_backoff_secs: 4.0,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CacheArgs {
    #[arg(long, env = "CACHE_CAPACITY", default_value_t = 200)]
    pub cache_capacity: usize,
}

impl Default for CacheArgs {
    fn default() -> Self {
        Self {
            cache_capacity: 200,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or_default()
}

impl From<Args> for BloomCheckConfig {
    fn from(args: Args) -> Self {
        BloomCheckConfig {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                openai_base_url: args.llm.openai_base_url,
                temperature: args.llm.llm_temperature,
                timeout: Duration::from_secs(args.llm.llm_timeout_secs),
            },
            retry: RetryConfig {
                max_attempts: args.retry.retry_max_attempts,
                min_backoff: seconds(args.retry.retry_min_backoff_secs),
                max_backoff: seconds(args.retry.retry_max_backoff_secs),
            },
            cache: CacheConfig {
                capacity: args.cache.cache_capacity,
            },
        }
    }
}
