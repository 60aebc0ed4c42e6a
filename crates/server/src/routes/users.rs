use axum::{extract::State, Extension, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use common::types::WebResponse;
use service::user::domain::{CurrentUser, LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserResponse};

use crate::errors::JsonApiError;
use crate::routes::auth::AUTH_COOKIE;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::RegisterUserDoc,
    responses(
        (status = 200, description = "Registered", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error or Username already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterUserRequest>,
) -> Result<Json<WebResponse<UserResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.users.register(input).await?)))
}

#[utoipa::path(
    post, path = "/api/users/login", tag = "users",
    request_body = crate::openapi::LoginUserDoc,
    responses(
        (status = 200, description = "Logged in; also sets the auth_token cookie", body = crate::openapi::UserDoc),
        (status = 401, description = "Username or password is wrong", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginUserRequest>,
) -> Result<(CookieJar, Json<WebResponse<UserResponse>>), JsonApiError> {
    let out = state.users.login(input).await?;
    let jar = match out.token.clone() {
        Some(token) => {
            let mut cookie = Cookie::new(AUTH_COOKIE, token);
            cookie.set_path("/");
            cookie.set_http_only(true);
            cookie.set_same_site(SameSite::Lax);
            jar.add(cookie)
        }
        None => jar,
    };
    Ok((jar, Json(WebResponse::new(out))))
}

#[utoipa::path(
    get, path = "/api/users/current", tag = "users",
    responses(
        (status = 200, description = "Current user", body = crate::openapi::UserDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn current(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<WebResponse<UserResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.users.current(&user).await?)))
}

#[utoipa::path(
    patch, path = "/api/users/current", tag = "users",
    request_body = crate::openapi::UpdateUserDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<UpdateUserRequest>,
) -> Result<Json<WebResponse<UserResponse>>, JsonApiError> {
    Ok(Json(WebResponse::new(state.users.update(&user, input).await?)))
}

#[utoipa::path(
    delete, path = "/api/users/current", tag = "users",
    responses(
        (status = 200, description = "Logged out; token invalidated"),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn logout(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<WebResponse<bool>>), JsonApiError> {
    state.users.logout(&user).await?;
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    Ok((jar, Json(WebResponse::new(true))))
}
