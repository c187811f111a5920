mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;
use uuid::Uuid;

fn date_in_days(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

async fn setup_booking(app: &TestApp, owner_token: &str) -> String {
    app.signup("Admin", "admin@example.com").await;
    let admin = app.make_admin("admin@example.com").await;
    let offering = app.create_offering(&admin, "Haircut").await;

    let res = app
        .post_json(
            "/api/v1/bookings",
            json!({ "offering_id": offering, "booking_date": date_in_days(1), "start_time": "10:00" }),
            Some(owner_token),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_owner_can_get_own_booking() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;
    let booking_id = setup_booking(&app, &alice).await;

    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["id"], booking_id.as_str());
    assert_eq!(body["user_name"], "Alice");
    assert_eq!(body["offering_name"], "Haircut");
}

#[tokio::test]
async fn test_other_users_booking_reads_as_not_found() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;
    let booking_id = setup_booking(&app, &alice).await;

    let mallory = app.signup("Mallory", "mallory@example.com").await;

    // Not 403: a foreign booking must be indistinguishable from a missing one.
    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&mallory)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["code"], "BOOKING_NOT_FOUND");

    let res = app.delete(&format!("/api/v1/bookings/{booking_id}"), Some(&mallory)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["code"], "BOOKING_NOT_FOUND");

    // The booking is untouched.
    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "PENDING");
}

#[tokio::test]
async fn test_admin_can_access_any_booking() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;
    let booking_id = setup_booking(&app, &alice).await;
    let admin = app.login("admin@example.com", "password123").await;

    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&admin)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.delete(&format!("/api/v1/bookings/{booking_id}"), Some(&admin)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(parse_body(res).await["status"], "CANCELLED");
}

#[tokio::test]
async fn test_unknown_booking_not_found() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;

    let res = app.get(&format!("/api/v1/bookings/{}", Uuid::new_v4()), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_double_cancel_rejected() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;
    let booking_id = setup_booking(&app, &alice).await;

    let res = app.delete(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.delete(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["code"], "ALREADY_CANCELLED");

    // Terminal state: still exactly CANCELLED afterwards.
    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(parse_body(res).await["status"], "CANCELLED");
}

#[tokio::test]
async fn test_cancel_past_booking_rejected() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;
    app.signup("Admin", "admin@example.com").await;
    let admin = app.make_admin("admin@example.com").await;
    let offering = app.create_offering(&admin, "Haircut").await;

    // A booking whose date has already passed cannot be created through the
    // API, so seed it directly.
    let user_id = app.user_id("alice@example.com").await;
    let booking_id = Uuid::new_v4().to_string();
    let yesterday = Utc::now().date_naive() - Duration::days(1);
    sqlx::query(
        "INSERT INTO bookings (id, user_id, offering_id, booking_date, start_time, status, created_at)
         VALUES (?, ?, ?, ?, ?, 'PENDING', ?)",
    )
    .bind(&booking_id)
    .bind(&user_id)
    .bind(&offering)
    .bind(yesterday)
    .bind(chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap())
    .bind(Utc::now())
    .execute(&app.pool)
    .await
    .unwrap();

    let res = app.delete(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["code"], "PAST_BOOKING");

    // Status unchanged.
    let res = app.get(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(parse_body(res).await["status"], "PENDING");
}

#[tokio::test]
async fn test_confirmed_booking_can_be_cancelled() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;
    let booking_id = setup_booking(&app, &alice).await;

    // Confirmation is driven by an external process; emulate it.
    sqlx::query("UPDATE bookings SET status = 'CONFIRMED' WHERE id = ?")
        .bind(&booking_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let res = app.delete(&format!("/api/v1/bookings/{booking_id}"), Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
