use axum::{extract::{Path, State}, Extension, Json};
use common::types::WebResponse;
use service::contact::domain::{ContactResponse, CreateContactRequest, UpdateContactRequest};
use service::user::domain::CurrentUser;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/api/contacts", tag = "contacts",
    request_body = crate::openapi::CreateContactDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ContactDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<CreateContactRequest>,
) -> Result<Json<WebResponse<ContactResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.contacts.create(&user, input).await?)))
}

#[utoipa::path(
    get, path = "/api/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ContactDoc),
        (status = 404, description = "Contact is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<i32>,
) -> Result<Json<WebResponse<ContactResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.contacts.get(&user, contact_id).await?)))
}

#[utoipa::path(
    put, path = "/api/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::UpdateContactDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Contact is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<i32>,
    Json(mut input): Json<UpdateContactRequest>,
) -> Result<Json<WebResponse<ContactResponse>>, JsonApiError> {
    // the path wins over any id in the body
    input.id = contact_id;
    Ok(Json(WebResponse::new(state.contacts.update(&user, input).await?)))
}

#[utoipa::path(
    delete, path = "/api/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Removed together with its addresses"),
        (status = 404, description = "Contact is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<i32>,
) -> Result<Json<WebResponse<bool>>, JsonApiError> {
    state.contacts.remove(&user, contact_id).await?;
    Ok(Json(WebResponse::new(true)))
}
