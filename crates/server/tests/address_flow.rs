mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{build_app, call, login_as};

async fn new_contact(app: &axum::Router, token: &str) -> anyhow::Result<i64> {
    let r = call(app, "POST", "/api/contacts", Some(token), Some(json!({"first_name": "Ann"}))).await?;
    assert_eq!(r.status, StatusCode::OK);
    Ok(r.body["data"]["id"].as_i64().unwrap_or_default())
}

#[tokio::test]
async fn address_crud_under_owned_contact() -> anyhow::Result<()> {
    let app = build_app().await?;
    let alice = login_as(&app, "alice").await?;
    let cid = new_contact(&app, &alice).await?;
    let base = format!("/api/contacts/{cid}/addresses");

    let r = call(
        &app,
        "POST",
        &base,
        Some(&alice),
        Some(json!({"street": "Jl. Sudirman", "city": "Jakarta", "country": "Indonesia", "postal_code": "10220"})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::OK);
    let aid = r.body["data"]["id"].as_i64().unwrap_or_default();
    assert_eq!(r.body["data"]["province"], json!(null));

    let r = call(&app, "POST", &base, Some(&alice), Some(json!({"country": "Indonesia", "postal_code": "40111"}))).await?;
    assert_eq!(r.status, StatusCode::OK);

    let r = call(&app, "GET", &base, Some(&alice), None).await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(r.body["data"][0]["id"], json!(aid));

    let one = format!("{base}/{aid}");
    let r = call(&app, "PUT", &one, Some(&alice), Some(json!({"province": "DKI Jakarta"}))).await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["data"]["province"], "DKI Jakarta");
    assert_eq!(r.body["data"]["city"], "Jakarta");

    let r = call(&app, "DELETE", &one, Some(&alice), None).await?;
    assert_eq!(r.body, json!({"data": true}));
    let r = call(&app, "GET", &one, Some(&alice), None).await?;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.body, json!({"errors": "Address is not found"}));
    Ok(())
}

#[tokio::test]
async fn addresses_of_foreign_contact_are_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let alice = login_as(&app, "alice").await?;
    let bob = login_as(&app, "bob").await?;
    let cid = new_contact(&app, &alice).await?;
    let base = format!("/api/contacts/{cid}/addresses");

    let r = call(&app, "POST", &base, Some(&bob), Some(json!({"country": "ID", "postal_code": "1"}))).await?;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.body, json!({"errors": "Contact is not found"}));
    let r = call(&app, "GET", &base, Some(&bob), None).await?;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn address_validation_errors() -> anyhow::Result<()> {
    let app = build_app().await?;
    let alice = login_as(&app, "alice").await?;
    let cid = new_contact(&app, &alice).await?;
    let base = format!("/api/contacts/{cid}/addresses");

    let r = call(&app, "POST", &base, Some(&alice), Some(json!({"postal_code": "10220"}))).await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(r.body, json!({"errors": "country is required"}));

    let r = call(&app, "POST", &base, Some(&alice), Some(json!({"country": "ID", "postal_code": "12345678901"}))).await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn removing_contact_removes_addresses() -> anyhow::Result<()> {
    let app = build_app().await?;
    let alice = login_as(&app, "alice").await?;
    let cid = new_contact(&app, &alice).await?;
    let base = format!("/api/contacts/{cid}/addresses");
    let r = call(&app, "POST", &base, Some(&alice), Some(json!({"country": "ID", "postal_code": "10220"}))).await?;
    let aid = r.body["data"]["id"].as_i64().unwrap_or_default();

    let r = call(&app, "DELETE", &format!("/api/contacts/{cid}"), Some(&alice), None).await?;
    assert_eq!(r.status, StatusCode::OK);

    let r = call(&app, "GET", &format!("{base}/{aid}"), Some(&alice), None).await?;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.body, json!({"errors": "Contact is not found"}));
    Ok(())
}
