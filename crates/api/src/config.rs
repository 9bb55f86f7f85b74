/// Server configuration loaded from environment variables.
///
/// All fields except the two credentials have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Static token every non-health request must present in its
    /// `Authorization` header.
    pub auth_token: String,
    /// Redis connection URL (default: `redis://127.0.0.1:6379`).
    pub redis_url: String,
    /// Mailbox service endpoint for expiry refund notifications.
    pub mailbox_base_url: String,
    /// Static credential sent with every mailbox request.
    pub mailbox_auth_token: String,
    /// How often the auction sweeper fires, in seconds (default: `60`).
    pub sweep_interval_secs: u64,
    /// Signed offset added to the current time to form the expiry cutoff
    /// (default: `-3600`, i.e. listings older than one hour expire).
    pub sweep_cutoff_offset_secs: i64,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Default                        |
    /// |----------------------------|--------------------------------|
    /// | `HOST`                     | `0.0.0.0`                      |
    /// | `PORT`                     | `3000`                         |
    /// | `API_AUTH_TOKEN`           | (required)                     |
    /// | `REDIS_URL`                | `redis://127.0.0.1:6379`       |
    /// | `MAILBOX_BASE_URL`         | (required)                     |
    /// | `MAILBOX_AUTH_TOKEN`       | (required)                     |
    /// | `SWEEP_INTERVAL_SECS`      | `60`                           |
    /// | `SWEEP_CUTOFF_OFFSET_SECS` | `-3600`                        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let auth_token = std::env::var("API_AUTH_TOKEN").expect("API_AUTH_TOKEN must be set");

        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());

        let mailbox_base_url =
            std::env::var("MAILBOX_BASE_URL").expect("MAILBOX_BASE_URL must be set");

        let mailbox_auth_token =
            std::env::var("MAILBOX_AUTH_TOKEN").expect("MAILBOX_AUTH_TOKEN must be set");

        let sweep_interval_secs: u64 = std::env::var("SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("SWEEP_INTERVAL_SECS must be a valid u64");

        let sweep_cutoff_offset_secs: i64 = std::env::var("SWEEP_CUTOFF_OFFSET_SECS")
            .unwrap_or_else(|_| "-3600".into())
            .parse()
            .expect("SWEEP_CUTOFF_OFFSET_SECS must be a valid i64");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            auth_token,
            redis_url,
            mailbox_base_url,
            mailbox_auth_token,
            sweep_interval_secs,
            sweep_cutoff_offset_secs,
            request_timeout_secs,
        }
    }
}
