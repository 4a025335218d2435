use std::path::PathBuf;

/// Runtime configuration, read once at startup from the environment
/// (after `dotenvy::dotenv()` has loaded any `.env` file).
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Root directory for the local storage backend.
    pub data_dir: PathBuf,
    /// Comma-separated allowed CORS origins, `*` for permissive.
    pub allowed_origins: String,
    /// Requests per minute per client IP on the create endpoint.
    pub rate_limit_per_minute: usize,

    /// OpenRouter API key; absent means the deterministic outline
    /// generator is used instead of the remote model.
    pub openrouter_api_key: Option<String>,
    /// Chat model passed to OpenRouter.
    pub openrouter_model: String,

    /// Pexels API key for export-time image search; absent disables
    /// auto-fetching.
    pub pexels_api_key: Option<String>,

    /// S3-compatible remote storage (Cloudflare R2 in production).
    pub r2_bucket: String,
    pub r2_endpoint_url: Option<String>,
    pub r2_access_key_id: Option<String>,
    pub r2_secret_access_key: Option<String>,
}

const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";
const DEFAULT_RATE_LIMIT: usize = 30;

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("RENDER_DISK_PATH")
            .unwrap_or_else(|_| "persistent_data".to_string());

        let rate_limit_per_minute = std::env::var("RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT);

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5002".to_string()),
            data_dir: PathBuf::from(data_dir),
            allowed_origins: std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            rate_limit_per_minute,
            openrouter_api_key: non_empty(std::env::var("OPENROUTER_API_KEY").ok()),
            openrouter_model: std::env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            pexels_api_key: non_empty(std::env::var("PEXELS_API_KEY").ok()),
            r2_bucket: std::env::var("R2_BUCKET_NAME").unwrap_or_else(|_| "deckgen-files".to_string()),
            r2_endpoint_url: non_empty(std::env::var("R2_ENDPOINT_URL").ok()),
            r2_access_key_id: non_empty(std::env::var("R2_ACCESS_KEY_ID").ok()),
            r2_secret_access_key: non_empty(std::env::var("R2_SECRET_ACCESS_KEY").ok()),
        }
    }

    /// True when every credential the remote backend needs is present.
    pub fn remote_storage_configured(&self) -> bool {
        self.r2_endpoint_url.is_some()
            && self.r2_access_key_id.is_some()
            && self.r2_secret_access_key.is_some()
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
