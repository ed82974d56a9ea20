#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use petclinic::{build_router, FixedClock, InMemoryOwnerRepository, PetClinic};
use std::sync::Arc;
use tower::ServiceExt;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn app_with(repository: Arc<InMemoryOwnerRepository>) -> Router {
    let clinic = PetClinic::new(repository, Arc::new(FixedClock(today())), 5);
    build_router(Arc::new(clinic))
}

pub fn sample_app() -> (Router, Arc<InMemoryOwnerRepository>) {
    let repository = Arc::new(InMemoryOwnerRepository::with_sample_data());
    (app_with(repository.clone()), repository)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()["location"].to_str().unwrap()
}

/// Codes of the rendered errors for `field`.
pub fn error_codes(view: &serde_json::Value, field: &str) -> Vec<String> {
    view["model"]["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter(|error| error["field"] == field)
                .filter_map(|error| error["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
