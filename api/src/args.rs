use clap::{Args as ClapArgs, Parser};
use hungry_owl_core::domain::common::{CacheConfig, DatabaseConfig, HungryOwlConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "hungry-owl-api", version, about = "Hungry Owl kitchen API")]
pub struct Args {
    #[arg(long, env = "ENV", default_value = "development")]
    pub env: String,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub identity: IdentityArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "hungry_owl")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CacheArgs {
    /// Redis URL. The recipe cache stays in-process when unset.
    #[arg(long = "cache-url", env = "CACHE_URL")]
    pub url: Option<String>,

    #[arg(long = "cache-ttl-seconds", env = "CACHE_TTL_SECONDS", default_value_t = 1800)]
    pub ttl_seconds: u64,

    #[arg(long = "cache-max-entries", env = "CACHE_MAX_ENTRIES", default_value_t = 1000)]
    pub max_entries: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    #[arg(long = "anthropic-api-key", env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(
        long = "anthropic-model",
        env = "ANTHROPIC_MODEL",
        default_value = "claude-sonnet-4-20250514"
    )]
    pub model: String,

    #[arg(long = "anthropic-max-tokens", env = "ANTHROPIC_MAX_TOKENS", default_value_t = 4000)]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct IdentityArgs {
    /// PEM encoded RSA public key of the identity provider.
    #[arg(long = "identity-public-key", env = "IDENTITY_PUBLIC_KEY")]
    pub public_key: String,

    #[arg(long = "identity-issuer", env = "IDENTITY_ISSUER")]
    pub issuer: Option<String>,
}

impl From<Args> for HungryOwlConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                anthropic_api_key: args.llm.api_key,
                anthropic_model: args.llm.model,
                max_tokens: args.llm.max_tokens,
            },
            cache: CacheConfig {
                url: args.cache.url.filter(|url| !url.trim().is_empty()),
                ttl_seconds: args.cache.ttl_seconds,
                max_entries: args.cache.max_entries,
            },
        }
    }
}
