#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

pub async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    Ok(routes::build_router(ServerState::from_db(db), CorsLayer::very_permissive()))
}

pub struct Reply {
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: Value,
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<Reply> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok(Reply { status, set_cookie, body })
}

pub async fn call(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> anyhow::Result<Reply> {
    let mut b = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        b = b.header("authorization", t);
    }
    let req = match body {
        Some(v) => b.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => b.body(Body::empty())?,
    };
    send(app, req).await
}

/// Registers `username` with a fixed password and returns a fresh token.
pub async fn login_as(app: &Router, username: &str) -> anyhow::Result<String> {
    let reg = call(
        app,
        "POST",
        "/api/users",
        None,
        Some(json!({"username": username, "password": "rahasia", "name": username})),
    )
    .await?;
    assert_eq!(reg.status, StatusCode::OK, "register {username}: {}", reg.body);
    let login = call(
        app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"username": username, "password": "rahasia"})),
    )
    .await?;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["data"]["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());
    Ok(token)
}
