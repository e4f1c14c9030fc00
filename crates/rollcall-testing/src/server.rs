//! Fake randomuser.me server for integration tests.
//!
//! Runs an axum server on its own thread so both async tests and blocking
//! CLI tests can point a client at it.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::fixtures::SAMPLE_COUNTRIES;

const FIRST_NAMES: &[&str] = &["Émile", "Ana", "Zoe", "Jon", "Ida", "Ömer", "Luis", "Bea"];
const LAST_NAMES: &[&str] = &["Zola", "Ortiz", "Álvarez", "Berg", "Nilsen", "Yılmaz"];

#[derive(Debug, Clone, Default)]
struct Behaviour {
    /// Pages at or beyond this index answer 500
    fail_from_page: Option<u32>,
}

/// Handle to a running fake server. The server lives until the test process exits.
pub struct FakeRandomUser {
    base_url: String,
}

impl FakeRandomUser {
    pub fn start() -> Self {
        Self::spawn(Behaviour::default())
    }

    /// Serve pages normally until `page`, then fail every request from there on.
    pub fn failing_from_page(page: u32) -> Self {
        Self::spawn(Behaviour {
            fail_from_page: Some(page),
        })
    }

    fn spawn(behaviour: Behaviour) -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind fake server");
        listener
            .set_nonblocking(true)
            .expect("Failed to set listener non-blocking");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let app = Router::new()
            .route("/api/", get(users))
            .with_state(Arc::new(behaviour));

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build fake server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt listener");
                axum::serve(listener, app).await.expect("Fake server failed");
            });
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint to put in the client options / config file.
    pub fn endpoint(&self) -> String {
        format!("{}/api/", self.base_url)
    }
}

/// Deterministic user `index` of `page`, shaped like a randomuser.me result.
pub fn sample_user_json(seed: &str, page: u32, index: usize) -> Value {
    let n = (page as usize - 1) * 7 + index;
    json!({
        "gender": "female",
        "name": {
            "title": "Ms",
            "first": FIRST_NAMES[n % FIRST_NAMES.len()],
            "last": LAST_NAMES[n % LAST_NAMES.len()],
        },
        "location": {
            "city": "Nowhere",
            "country": SAMPLE_COUNTRIES[n % SAMPLE_COUNTRIES.len()],
        },
        "email": "someone@example.com",
        "login": { "uuid": format!("{}-{}-{}", seed, page, index), "username": "user" },
        "picture": {
            "large": "https://example.test/l.jpg",
            "medium": "https://example.test/m.jpg",
            "thumbnail": format!("https://example.test/t/{}-{}.jpg", page, index),
        }
    })
}

async fn users(
    State(behaviour): State<Arc<Behaviour>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1)
        .max(1);
    let count: usize = params
        .get("results")
        .and_then(|r| r.parse().ok())
        .unwrap_or(1);
    let seed = params.get("seed").cloned().unwrap_or_default();

    if behaviour.fail_from_page.is_some_and(|limit| page >= limit) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "unavailable").into_response();
    }

    let results: Vec<Value> = (0..count)
        .map(|i| sample_user_json(&seed, page, i))
        .collect();

    Json(json!({
        "results": results,
        "info": { "seed": seed, "results": count, "page": page, "version": "1.4" }
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_user_is_deterministic() {
        assert_eq!(sample_user_json("s", 2, 3), sample_user_json("s", 2, 3));
        assert_eq!(sample_user_json("s", 1, 0)["login"]["uuid"], "s-1-0");
        assert_eq!(sample_user_json("s", 1, 0)["location"]["country"], "Spain");
    }
}
