//! HTTP-level integration tests for the public contact endpoint and its
//! rate-limit policy, plus the dashboard list/delete operations.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    auth_token, body_json, delete_auth, get, get_auth, post_json, post_json_from_ip, seed_admin,
    OWNER_EMAIL,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn submission(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Visitor",
        "email": email,
        "message": "Hello from the contact form"
    })
}

/// Insert a message with an explicit `created_at` so window and cooldown
/// cases can be staged.
async fn seed_message(pool: &PgPool, ip: &str, email: &str, age: Duration) {
    sqlx::query(
        "INSERT INTO contacts (name, email, message, ip, created_at)
         VALUES ('Visitor', $1, 'Backdated message', $2, $3)",
    )
    .bind(email)
    .bind(ip)
    .bind(Utc::now() - age)
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Submission basics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_returns_201_and_stores_the_ip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("a@test.com"), "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["ip"], "1.2.3.4");
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_without_resolvable_ip_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/contacts", submission("a@test.com")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Could not determine IP address");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_reports_the_first_missing_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "a@test.com", "message": "hi" });
    let response = post_json_from_ip(app, "/api/v1/contacts", body, "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: name");

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Visitor", "email": "a@test.com" });
    let response = post_json_from_ip(app, "/api/v1/contacts", body, "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: message");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_rejects_overlong_messages(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Visitor",
        "email": "a@test.com",
        "message": "x".repeat(301)
    });
    let response = post_json_from_ip(app, "/api/v1/contacts", body, "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message is too long. Maximum 300 characters allowed.");
}

// ---------------------------------------------------------------------------
// Daily limits
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fourth_message_from_one_ip_in_a_day_is_rejected(pool: PgPool) {
    // Three messages from the IP, spread across the day and well outside
    // the cooldown, each from a different email.
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::hours(20)).await;
    seed_message(&pool, "1.2.3.4", "b@test.com", Duration::hours(10)).await;
    seed_message(&pool, "1.2.3.4", "c@test.com", Duration::hours(1)).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("d@test.com"), "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Daily message limit exceeded for this IP. Try again tomorrow."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stale_messages_do_not_count_against_the_ip_limit(pool: PgPool) {
    // Two in the window, one outside it.
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::hours(30)).await;
    seed_message(&pool, "1.2.3.4", "b@test.com", Duration::hours(10)).await;
    seed_message(&pool, "1.2.3.4", "c@test.com", Duration::hours(1)).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("d@test.com"), "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fourth_message_from_one_email_in_a_day_is_rejected(pool: PgPool) {
    // Three messages from the email, each from a different IP.
    seed_message(&pool, "1.1.1.1", "a@test.com", Duration::hours(20)).await;
    seed_message(&pool, "2.2.2.2", "a@test.com", Duration::hours(10)).await;
    seed_message(&pool, "3.3.3.3", "a@test.com", Duration::hours(1)).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("a@test.com"), "9.9.9.9").await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Daily message limit exceeded for this email. Try again tomorrow."
    );
}

// ---------------------------------------------------------------------------
// Cooldown
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn message_inside_the_cooldown_is_rejected(pool: PgPool) {
    // Just inside the 10-minute window (with margin for test runtime).
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::seconds(590)).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("b@test.com"), "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please wait before sending another message");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn message_after_the_cooldown_is_accepted(pool: PgPool) {
    // Just past the 10-minute window.
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::seconds(601)).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("b@test.com"), "1.2.3.4").await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_cooldown_applies_across_ips(pool: PgPool) {
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::seconds(300)).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("a@test.com"), "9.9.9.9").await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please wait before sending another message");
}

// ---------------------------------------------------------------------------
// End-to-end policy scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn policy_checks_compose_in_order(pool: PgPool) {
    // Three messages from 1.2.3.4 spread across the day; a@test.com sent
    // two of them, the latest five minutes ago.
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::hours(12)).await;
    seed_message(&pool, "1.2.3.4", "b@test.com", Duration::hours(6)).await;
    seed_message(&pool, "1.2.3.4", "a@test.com", Duration::minutes(5)).await;

    // Fourth from the same IP: the daily limit fires first.
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("c@test.com"), "1.2.3.4").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Daily message limit exceeded for this IP. Try again tomorrow."
    );

    // Fifth from a fresh IP but a@test.com's address: the email daily
    // count is only 2, yet the five-minute-old message trips the cooldown.
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("a@test.com"), "9.9.9.9").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please wait before sending another message");

    // An unrelated sender is still admitted.
    let app = common::build_test_app(pool);
    let response =
        post_json_from_ip(app, "/api/v1/contacts", submission("d@test.com"), "8.8.8.8").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Dashboard list / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/contacts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_most_recent_first(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let token = auth_token(admin.id, OWNER_EMAIL);

    seed_message(&pool, "1.1.1.1", "a@test.com", Duration::hours(2)).await;
    seed_message(&pool, "2.2.2.2", "b@test.com", Duration::hours(1)).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/contacts", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ips: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["ip"].as_str().unwrap())
        .collect();
    assert_eq!(ips, vec!["2.2.2.2", "1.1.1.1"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_a_message(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let token = auth_token(admin.id, OWNER_EMAIL);

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json_from_ip(app, "/api/v1/contacts", submission("a@test.com"), "1.2.3.4").await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/contacts/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Message deleted successfully");

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/contacts/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
