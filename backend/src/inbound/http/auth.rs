//! Authentication placeholders.
//!
//! Both endpoints accept any request and perform no credential checks; they
//! exist so clients can be wired against the final routes.

use actix_web::{post, web};

use crate::inbound::http::schemas::MessageResponse;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    responses((status = 200, description = "Placeholder response", body = MessageResponse)),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("Authentication to be implemented"))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("Logout successful"))
}
