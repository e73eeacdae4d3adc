// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

use super::mocks::InMemoryUserRepo;
use user_directory::application::dto::PageLimits;
use user_directory::application::services::ApplicationServices;
use user_directory::domain::user::UserRepository;
use user_directory::presentation::http::{routes::build_router, state::HttpState};

pub fn make_router_with_repo(user_repo: Arc<dyn UserRepository>) -> Router {
    let services = Arc::new(ApplicationServices::new(user_repo, PageLimits::new(10, 100)));
    build_router(HttpState { services })
}

/// A router over a fresh in-memory repository, plus a handle to the
/// repository for asserting on stored state.
pub fn make_test_router() -> (Router, Arc<InMemoryUserRepo>) {
    let repo = Arc::new(InMemoryUserRepo::new());
    let router = make_router_with_repo(Arc::clone(&repo) as Arc<dyn UserRepository>);
    (router, repo)
}

pub fn sample_payload(first: &str, last: &str, email: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": email,
        "dob": "1990-01-01",
        "imageUrl": "http://x/y.jpg",
        "acceptedTerms": true,
    })
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(value.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(request).await.unwrap()
}

pub async fn get(router: &Router, uri: &str) -> Response {
    send(router, Method::GET, uri, None).await
}

pub async fn post_json(router: &Router, uri: &str, body: &Value) -> Response {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put_json(router: &Router, uri: &str, body: &Value) -> Response {
    send(router, Method::PUT, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> Response {
    send(router, Method::DELETE, uri, None).await
}

pub async fn response_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Create a user through the API and return its id.
pub async fn seed_user(router: &Router, payload: &Value) -> i64 {
    let resp = post_json(router, "/api/users", payload).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    response_json(resp).await["id"].as_i64().unwrap()
}

/// Assert an error response: expected status, and a body of the shape
/// `{"error": "<message>"}`.
pub async fn assert_error_response(resp: Response, status: StatusCode, message: &str) {
    assert_eq!(resp.status(), status);
    let json = response_json(resp).await;
    assert_eq!(
        json["error"].as_str(),
        Some(message),
        "unexpected error body: {json}"
    );
}
