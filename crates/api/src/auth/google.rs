//! Google OAuth code exchange and profile lookup.
//!
//! Wraps the two endpoints the callback handler needs: the token endpoint
//! (authorization code -> access token) and the userinfo endpoint
//! (access token -> profile), using [`reqwest`].

use serde::Deserialize;

use crate::config::GoogleOAuthConfig;

/// Default Google token endpoint.
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Default Google userinfo endpoint.
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo";

/// Errors from the Google OAuth endpoints.
#[derive(Debug, thiserror::Error)]
pub enum GoogleAuthError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Google returned a non-2xx status code.
    #[error("Google API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Access-token grant returned by the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
}

/// Profile fields returned by the userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct GoogleProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Client for the Google OAuth endpoints.
pub struct GoogleOAuth {
    client: reqwest::Client,
    token_url: String,
    userinfo_url: String,
    config: GoogleOAuthConfig,
}

impl GoogleOAuth {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url: TOKEN_URL.to_string(),
            userinfo_url: USERINFO_URL.to_string(),
            config,
        }
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenGrant, GoogleAuthError> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the signed-in user's profile with the granted access token.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<GoogleProfile, GoogleAuthError> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Decode a 2xx response as JSON; otherwise capture the status and
    /// body as an [`GoogleAuthError::Api`].
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GoogleAuthError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleAuthError::Api { status, body });
        }
        Ok(response.json().await?)
    }
}
