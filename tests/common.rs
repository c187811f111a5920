use slotbook::{
    api::router::create_router,
    config::Config,
    domain::services::{auth_service::AuthService, booking_service::BookingService},
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_offering_repo::SqliteOfferingRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret-key-for-integration-tests".to_string(),
            auth_issuer: "test-issuer".to_string(),
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let offering_repo = Arc::new(SqliteOfferingRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let booking_service = Arc::new(BookingService::new(
            booking_repo.clone(),
            user_repo.clone(),
            offering_repo.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(&config));

        let state = Arc::new(AppState {
            config,
            user_repo,
            offering_repo,
            booking_repo,
            auth_service,
            booking_service,
        });

        let router = create_router(state.clone());

        Self { router, pool, db_filename, state }
    }

    pub async fn post_json(&self, uri: &str, body: Value, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn put_json(&self, uri: &str, body: Value, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Value {
        let res = self
            .post_json(
                "/api/v1/auth/register",
                json!({ "name": name, "email": email, "password": password }),
                None,
            )
            .await;
        assert!(res.status().is_success(), "registration failed: {}", res.status());
        parse_body(res).await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let res = self
            .post_json(
                "/api/v1/auth/login",
                json!({ "email": email, "password": password }),
                None,
            )
            .await;
        assert!(res.status().is_success(), "login failed: {}", res.status());
        let body = parse_body(res).await;
        body["token"].as_str().expect("login response has no token").to_string()
    }

    /// Registers and logs a user in, returning their bearer token.
    pub async fn signup(&self, name: &str, email: &str) -> String {
        self.register(name, email, "password123").await;
        self.login(email, "password123").await
    }

    /// Flips a registered user to the ADMIN role directly in the store and
    /// returns a fresh token carrying the new role.
    pub async fn make_admin(&self, email: &str) -> String {
        sqlx::query("UPDATE users SET role = 'ADMIN' WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .expect("failed to promote user");
        self.login(email, "password123").await
    }

    pub async fn user_id(&self, email: &str) -> String {
        sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .expect("user not found")
    }

    pub async fn create_offering(&self, admin_token: &str, name: &str) -> String {
        let res = self
            .post_json(
                "/api/v1/offerings",
                json!({
                    "name": name,
                    "description": "Test offering",
                    "duration_minutes": 60,
                    "price_cents": 5000
                }),
                Some(admin_token),
            )
            .await;
        assert!(res.status().is_success(), "offering creation failed: {}", res.status());
        let body = parse_body(res).await;
        body["id"].as_str().unwrap().to_string()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
