//! Shared harness for the HTTP-level integration tests.
//!
//! Builds the full application router with the production middleware
//! stack (CORS, request ID, timeout, tracing, panic recovery) so tests
//! exercise the same pipeline the binary serves, with the image CDN
//! swapped for an in-memory stub.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use atelier_api::auth::google::GoogleOAuth;
use atelier_api::auth::jwt::{generate_token, JwtConfig};
use atelier_api::config::{GoogleOAuthConfig, ImageCdnConfig, ServerConfig};
use atelier_api::routes;
use atelier_api::state::AppState;
use atelier_assets::{AssetError, AssetStore, RemoteFile, UploadedAsset};
use atelier_core::types::DbId;
use atelier_db::models::admin_user::{AdminUser, UpsertAdminUser};
use atelier_db::repositories::AdminUserRepo;

/// Signing secret shared by the test config and the token helper.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Owner email configured in the allow-list; the first entry drives the
/// public list ordering.
pub const OWNER_EMAIL: &str = "owner@test.com";

// ---------------------------------------------------------------------------
// Asset store stub
// ---------------------------------------------------------------------------

/// In-memory stand-in for the image CDN.
///
/// Records every delete call so tests can assert the remote delete was
/// attempted; `fail_delete` simulates a CDN outage.
pub struct StubAssetStore {
    pub fail_delete: bool,
    pub deleted: Mutex<Vec<String>>,
}

impl StubAssetStore {
    pub fn new() -> Self {
        Self {
            fail_delete: false,
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_delete: true,
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Delete handles recorded so far, in call order.
    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AssetStore for StubAssetStore {
    async fn upload(
        &self,
        file_name: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<UploadedAsset, AssetError> {
        Ok(UploadedAsset {
            url: format!("https://cdn.test/{file_name}"),
            file_id: format!("file-{file_name}"),
        })
    }

    async fn delete(&self, file_id: &str) -> Result<(), AssetError> {
        self.deleted.lock().unwrap().push(file_id.to_string());
        if self.fail_delete {
            Err(AssetError::Api {
                status: 500,
                body: "simulated outage".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn list_all(&self) -> Result<Vec<RemoteFile>, AssetError> {
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and no env access.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        admin_emails: vec![OWNER_EMAIL.to_string()],
        frontend_url: "http://localhost:3000".to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_secs: 86_400,
        },
        google: GoogleOAuthConfig {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            redirect_uri: "http://localhost:3000/api/v1/auth/google/callback".to_string(),
        },
        image_cdn: ImageCdnConfig {
            api_url: "https://api.cdn.test".to_string(),
            upload_url: "https://upload.cdn.test".to_string(),
            private_key: "test-private-key".to_string(),
        },
    }
}

/// Build the full application router with the default (always succeeding)
/// asset stub.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_assets(pool, Arc::new(StubAssetStore::new()))
}

/// Build the full application router with a caller-supplied asset store.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the production middleware stack.
pub fn build_test_app_with_assets(pool: PgPool, assets: Arc<dyn AssetStore>) -> Router {
    let config = test_config();
    let google = Arc::new(GoogleOAuth::new(config.google.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config),
        assets,
        google,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create the owner's admin row directly in the database.
pub async fn seed_admin(pool: &PgPool) -> AdminUser {
    AdminUserRepo::upsert(
        pool,
        &UpsertAdminUser {
            email: OWNER_EMAIL.to_string(),
            display_name: Some("Site Owner".to_string()),
            picture_url: None,
        },
    )
    .await
    .expect("admin upsert should succeed")
}

/// Sign a session token the way the OAuth callback does.
pub fn auth_token(admin_id: DbId, email: &str) -> String {
    let config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry_secs: 86_400,
    };
    generate_token(admin_id, email, &config).expect("token signing should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a public contact submission with an `x-forwarded-for` header.
pub async fn post_json_from_ip(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    ip: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body and decode it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
