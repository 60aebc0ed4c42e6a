use axum::{extract::{Path, State}, Extension, Json};
use common::types::WebResponse;
use service::address::domain::{AddressResponse, CreateAddressRequest, UpdateAddressRequest};
use service::user::domain::CurrentUser;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/api/contacts/{contact_id}/addresses", tag = "addresses",
    params(("contact_id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::AddressInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AddressDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Contact is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<i32>,
    Json(input): Json<CreateAddressRequest>,
) -> Result<Json<WebResponse<AddressResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.addresses.create(&user, contact_id, input).await?)))
}

#[utoipa::path(
    get, path = "/api/contacts/{contact_id}/addresses", tag = "addresses",
    params(("contact_id" = i32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "All addresses of the contact", body = [crate::openapi::AddressDoc]),
        (status = 404, description = "Contact is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<i32>,
) -> Result<Json<WebResponse<Vec<AddressResponse>>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.addresses.list(&user, contact_id).await?)))
}

#[utoipa::path(
    get, path = "/api/contacts/{contact_id}/addresses/{address_id}", tag = "addresses",
    params(
        ("contact_id" = i32, Path, description = "Contact id"),
        ("address_id" = i32, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "Found", body = crate::openapi::AddressDoc),
        (status = 404, description = "Contact or address is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((contact_id, address_id)): Path<(i32, i32)>,
) -> Result<Json<WebResponse<AddressResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.addresses.get(&user, contact_id, address_id).await?)))
}

#[utoipa::path(
    put, path = "/api/contacts/{contact_id}/addresses/{address_id}", tag = "addresses",
    params(
        ("contact_id" = i32, Path, description = "Contact id"),
        ("address_id" = i32, Path, description = "Address id")
    ),
    request_body = crate::openapi::AddressInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AddressDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Contact or address is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((contact_id, address_id)): Path<(i32, i32)>,
    Json(input): Json<UpdateAddressRequest>,
) -> Result<Json<WebResponse<AddressResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.addresses.update(&user, contact_id, address_id, input).await?)))
}

#[utoipa::path(
    delete, path = "/api/contacts/{contact_id}/addresses/{address_id}", tag = "addresses",
    params(
        ("contact_id" = i32, Path, description = "Contact id"),
        ("address_id" = i32, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "Removed"),
        (status = 404, description = "Contact or address is not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((contact_id, address_id)): Path<(i32, i32)>,
) -> Result<Json<WebResponse<bool>>, JsonApiError> {
    state.addresses.remove(&user, contact_id, address_id).await?;
    Ok(Json(WebResponse::new(true)))
}
