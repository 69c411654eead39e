//! User API handlers.
//!
//! ```text
//! POST   /api/users      {"campus_id":"…","email":"ada@campus.edu","name":"Ada","role":"student"}
//! GET    /api/users
//! DELETE /api/users/{id}
//! ```

use actix_web::{delete, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserId, UserRole};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_enum, parse_id};

/// Registration body for `POST /api/users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserCreateRequest {
    #[schema(value_type = String, format = Uuid)]
    pub campus_id: String,
    #[schema(example = "ada@campus.edu")]
    pub email: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(value_type = UserRole)]
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id.into(),
            campus_id: value.campus_id.into(),
            email: value.email,
            name: value.name,
            role: value.role,
            created_at: value.created_at,
        }
    }
}

/// Register a user on a campus.
///
/// Email uniqueness is enforced by storage only, so a duplicate surfaces as
/// an internal error rather than a validation failure.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserCreateRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Duplicate email, unknown campus, or internal error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserCreateRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let UserCreateRequest {
        campus_id,
        email,
        name,
        role,
    } = payload.into_inner();
    let campus_id = parse_id(&campus_id, FieldName::new("campus_id"))?;
    let role = parse_enum(&role, FieldName::new("role"))?;
    let user = NewUser::try_new(campus_id, email, name, role)?;
    let created = state.users.create(user).await?;
    Ok(web::Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: UserId = parse_id(&path, FieldName::new("id"))?;
    state.users.delete(id).await?;
    Ok(web::Json(MessageResponse::new("User deleted")))
}
