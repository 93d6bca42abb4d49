//! Test utilities: in-memory application state and request helpers

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    app::build_router,
    config::{Config, DatabaseConfig, IdentityConfig, PaymentConfig, ServerConfig, ServiceAccount},
    db::{MemoryStore, Stores},
    identity::MockIdentityVerifier,
    payment::MockPaymentGateway,
    state::AppState,
};

/// Configuration that never reaches a real provider
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            json_logs: false,
            client_origins: vec!["http://localhost:5173".to_string()],
            client_domain: "http://localhost:5173".to_string(),
        },
        database: DatabaseConfig {
            connect: None,
            max_connections: 1,
        },
        payment: PaymentConfig {
            secret_key: "sk_test_unused".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            currency: "usd".to_string(),
            timeout_secs: 1,
        },
        identity: IdentityConfig {
            service_account: ServiceAccount {
                project_id: "prochallenger-test".to_string(),
                client_email: None,
            },
            timeout_secs: 1,
        },
    }
}

/// State over an existing in-memory store
pub fn state_over(
    store: MemoryStore,
    payments: MockPaymentGateway,
    identity: MockIdentityVerifier,
) -> AppState {
    AppState::new(
        Stores::in_memory(store),
        Arc::new(payments),
        Arc::new(identity),
        test_config(),
    )
}

/// Router over a fresh in-memory store; the store handle is returned for assertions
pub fn test_app(payments: MockPaymentGateway, identity: MockIdentityVerifier) -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let state = state_over(store.clone(), payments, identity);
    (build_router(state), store)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the body as JSON (`Value::Null` when it is not JSON)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Send a request and return the raw body text
pub async fn send_text(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Lazily started Postgres container shared by the database tests
pub mod containers {
    use sqlx::PgPool;
    use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
    use testcontainers_modules::postgres::Postgres;
    use tokio::sync::OnceCell;

    static POSTGRES: OnceCell<ContainerAsync<Postgres>> = OnceCell::const_new();

    /// Get or start a PostgreSQL container (lazy initialization)
    pub async fn get_postgres() -> &'static ContainerAsync<Postgres> {
        POSTGRES
            .get_or_init(|| async {
                Postgres::default()
                    .with_user("prochallenger")
                    .with_password("prochallenger_test")
                    .with_db_name("prochallenger_test")
                    .with_tag("16-alpine")
                    .start()
                    .await
                    .expect("Failed to start PostgreSQL container")
            })
            .await
    }

    /// Connected and migrated pool on the shared container
    pub async fn migrated_pool() -> PgPool {
        let container = get_postgres().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        let url = format!(
            "postgres://prochallenger:prochallenger_test@{}:{}/prochallenger_test",
            host, port
        );

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to connect to test database");
        crate::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }
}
