use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Networking fields have defaults suitable for local development;
/// secrets (JWT, Google OAuth, CDN private key) are required and missing
/// values fail fast at startup rather than mid-request.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Emails allowed through the OAuth gate. The first entry is the site
    /// owner whose display order drives the public project list.
    pub admin_emails: Vec<String>,
    /// Base URL of the front end; OAuth redirects land under it.
    pub frontend_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Google OAuth application credentials.
    pub google: GoogleOAuthConfig,
    /// Remote image CDN credentials.
    pub image_cdn: ImageCdnConfig,
}

/// Credentials for the Google OAuth code exchange.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Connection settings for the image CDN.
#[derive(Debug, Clone)]
pub struct ImageCdnConfig {
    /// Management API base URL (default: `https://api.imagekit.io`).
    pub api_url: String,
    /// Upload API base URL (default: `https://upload.imagekit.io`).
    pub upload_url: String,
    /// Private API key.
    pub private_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default                     |
    /// |--------------------------|----------|-----------------------------|
    /// | `HOST`                   | no       | `0.0.0.0`                   |
    /// | `PORT`                   | no       | `3000`                      |
    /// | `CORS_ORIGINS`           | no       | `http://localhost:3000`     |
    /// | `REQUEST_TIMEOUT_SECS`   | no       | `30`                        |
    /// | `ADMIN_EMAILS`           | **yes**  | --                          |
    /// | `FRONTEND_URL`           | no       | `http://localhost:3000`     |
    /// | `JWT_SECRET`             | **yes**  | --                          |
    /// | `GOOGLE_CLIENT_ID`       | **yes**  | --                          |
    /// | `GOOGLE_CLIENT_SECRET`   | **yes**  | --                          |
    /// | `GOOGLE_REDIRECT_URI`    | **yes**  | --                          |
    /// | `IMAGE_CDN_API_URL`      | no       | `https://api.imagekit.io`   |
    /// | `IMAGE_CDN_UPLOAD_URL`   | no       | `https://upload.imagekit.io`|
    /// | `IMAGE_CDN_PRIVATE_KEY`  | **yes**  | --                          |
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing or a numeric variable
    /// does not parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_csv(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_emails = split_csv(
            &std::env::var("ADMIN_EMAILS").expect("ADMIN_EMAILS must be set in the environment"),
        );
        assert!(!admin_emails.is_empty(), "ADMIN_EMAILS must not be empty");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let google = GoogleOAuthConfig {
            client_id: std::env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set"),
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .expect("GOOGLE_CLIENT_SECRET must be set"),
            redirect_uri: std::env::var("GOOGLE_REDIRECT_URI")
                .expect("GOOGLE_REDIRECT_URI must be set"),
        };

        let image_cdn = ImageCdnConfig {
            api_url: std::env::var("IMAGE_CDN_API_URL")
                .unwrap_or_else(|_| "https://api.imagekit.io".into()),
            upload_url: std::env::var("IMAGE_CDN_UPLOAD_URL")
                .unwrap_or_else(|_| "https://upload.imagekit.io".into()),
            private_key: std::env::var("IMAGE_CDN_PRIVATE_KEY")
                .expect("IMAGE_CDN_PRIVATE_KEY must be set"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_emails,
            frontend_url,
            jwt: JwtConfig::from_env(),
            google,
            image_cdn,
        }
    }
}

/// Split a comma-separated env value into trimmed, non-empty entries.
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
