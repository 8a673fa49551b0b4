/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In
/// production, override via environment variables — the two delete
/// secrets in particular.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Secret gating `DELETE /report-closed/{id}` (the machine API path).
    pub api_delete_key: String,
    /// Secret gating `POST /delete_cafe` (the human form path).
    ///
    /// Deliberately independent of `api_delete_key`: the two deletion
    /// entry points sit in different trust contexts and rotate separately.
    pub form_delete_secret: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `API_DELETE_KEY`       | `TopSecretAPIKey`          |
    /// | `FORM_DELETE_SECRET`   | `TOPSECRETKEY`             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let api_delete_key =
            std::env::var("API_DELETE_KEY").unwrap_or_else(|_| "TopSecretAPIKey".into());

        let form_delete_secret =
            std::env::var("FORM_DELETE_SECRET").unwrap_or_else(|_| "TOPSECRETKEY".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_delete_key,
            form_delete_secret,
        }
    }
}
