//! Shared helpers for the HTTP-level tests.

#![allow(dead_code)]

use api_lib::config::Config;
use api_lib::web::{self, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use chirpy_core::domain::{Chirp, User};
use chirpy_core::ports::{DatabaseService, PortError, PortResult};
use chrono::Utc;
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

/// In-memory stand-in for the Postgres adapter.
#[derive(Default)]
pub struct InMemoryDb {
    users: Mutex<Vec<User>>,
    chirps: Mutex<Vec<Chirp>>,
    fail_writes: bool,
}

impl InMemoryDb {
    /// A store whose every call fails with an unexpected error.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn chirps(&self) -> Vec<Chirp> {
        self.chirps.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatabaseService for InMemoryDb {
    async fn create_user(&self, email: &str) -> PortResult<User> {
        if self.fail_writes {
            return Err(PortError::Unexpected("database is down".to_string()));
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(PortError::Conflict(format!("duplicate email {}", email)));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn create_chirp(&self, chirp: Chirp) -> PortResult<Chirp> {
        if self.fail_writes {
            return Err(PortError::Unexpected("database is down".to_string()));
        }
        if !self.users.lock().unwrap().iter().any(|u| u.id == chirp.user_id) {
            return Err(PortError::Unexpected("foreign key violation".to_string()));
        }
        self.chirps.lock().unwrap().push(chirp.clone());
        Ok(chirp)
    }

    async fn delete_all_users(&self) -> PortResult<()> {
        if self.fail_writes {
            return Err(PortError::Unexpected("database is down".to_string()));
        }
        self.users.lock().unwrap().clear();
        self.chirps.lock().unwrap().clear();
        Ok(())
    }
}

pub struct TestApp {
    pub state: Arc<AppState>,
    pub db: Arc<InMemoryDb>,
    pub router: Router,
}

pub fn config(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn spawn_app_with(db: InMemoryDb, config: Config) -> TestApp {
    let db = Arc::new(db);
    let state = Arc::new(AppState::new(db.clone(), Arc::new(config)).unwrap());
    let router = web::router(state.clone());
    TestApp { state, db, router }
}

/// A dev-mode app over an empty in-memory store.
pub fn spawn_app() -> TestApp {
    spawn_app_with(InMemoryDb::default(), config(&[("PLATFORM", "dev")]))
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, json: serde_json::Value) -> Response<Body> {
        self.request(Method::POST, uri, Some(&json.to_string())).await
    }

    /// Registers a user and returns its id.
    pub async fn create_user(&self, email: &str) -> Uuid {
        let response = self
            .post_json("/api/users", serde_json::json!({ "email": email }))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        json["id"].as_str().unwrap().parse().unwrap()
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A fresh directory with an `index.html` for the static file routes, removed
/// when dropped.
pub fn static_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
    std::fs::write(dir.path().join("assets").join("logo.txt"), "chirpy logo").unwrap();
    dir
}
