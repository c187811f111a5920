mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

fn date_in_days(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_list_is_empty_for_new_user() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@example.com").await;

    let res = app.get("/api/v1/bookings/me", Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_sorted_by_date_then_time_descending() {
    let app = TestApp::new().await;
    app.signup("Admin", "admin@example.com").await;
    let admin = app.make_admin("admin@example.com").await;
    let offering = app.create_offering(&admin, "Haircut").await;
    let alice = app.signup("Alice", "alice@example.com").await;

    // Created out of order on purpose.
    for (date, time) in [
        (date_in_days(1), "10:00"),
        (date_in_days(2), "09:00"),
        (date_in_days(1), "14:00"),
        (date_in_days(3), "08:00"),
    ] {
        let res = app
            .post_json(
                "/api/v1/bookings",
                json!({ "offering_id": offering, "booking_date": date, "start_time": time }),
                Some(&alice),
            )
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app.get("/api/v1/bookings/me", Some(&alice)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let slots: Vec<(String, String)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| {
            (
                b["booking_date"].as_str().unwrap().to_string(),
                b["start_time"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        slots,
        vec![
            (date_in_days(3), "08:00:00".to_string()),
            (date_in_days(2), "09:00:00".to_string()),
            (date_in_days(1), "14:00:00".to_string()),
            (date_in_days(1), "10:00:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_list_only_shows_own_bookings() {
    let app = TestApp::new().await;
    app.signup("Admin", "admin@example.com").await;
    let admin = app.make_admin("admin@example.com").await;
    let offering = app.create_offering(&admin, "Haircut").await;
    let alice = app.signup("Alice", "alice@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;

    app.post_json(
        "/api/v1/bookings",
        json!({ "offering_id": offering, "booking_date": date_in_days(1), "start_time": "10:00" }),
        Some(&alice),
    )
    .await;
    app.post_json(
        "/api/v1/bookings",
        json!({ "offering_id": offering, "booking_date": date_in_days(1), "start_time": "11:00" }),
        Some(&bob),
    )
    .await;

    let res = app.get("/api/v1/bookings/me", Some(&alice)).await;
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["user_name"], "Alice");
}
