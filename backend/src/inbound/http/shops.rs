//! Shop API handlers.
//!
//! ```text
//! POST   /api/shops            {"campus_id":"…","name":"QuickPrint","execution_mode":"manual","payment_mode":"counter"}
//! GET    /api/shops?campus_id=…
//! PATCH  /api/shops/{id}       {"is_active":false}
//! DELETE /api/shops/{id}
//! ```

use actix_web::{delete, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{
    ExecutionMode, NewShop, PaymentMode, Shop, ShopFilter, ShopId, ShopPatch,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_enum, parse_id, parse_optional_enum};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ShopCreateRequest {
    #[schema(value_type = String, format = Uuid)]
    pub campus_id: String,
    #[schema(example = "QuickPrint")]
    pub name: String,
    #[schema(value_type = ExecutionMode)]
    pub execution_mode: String,
    #[schema(value_type = PaymentMode)]
    pub payment_mode: String,
}

/// Partial update; absent or null fields are left unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ShopUpdateRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<ExecutionMode>)]
    pub execution_mode: Option<String>,
    #[schema(value_type = Option<PaymentMode>)]
    pub payment_mode: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ShopListQuery {
    /// Only return shops on this campus.
    pub campus_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShopResponse {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub name: String,
    pub execution_mode: ExecutionMode,
    pub payment_mode: PaymentMode,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Shop> for ShopResponse {
    fn from(value: Shop) -> Self {
        Self {
            id: value.id.into(),
            campus_id: value.campus_id.into(),
            name: value.name,
            execution_mode: value.execution_mode,
            payment_mode: value.payment_mode,
            is_active: value.is_active,
            created_at: value.created_at,
        }
    }
}

fn parse_create(payload: ShopCreateRequest) -> ApiResult<NewShop> {
    let campus_id = parse_id(&payload.campus_id, FieldName::new("campus_id"))?;
    let execution_mode = parse_enum(&payload.execution_mode, FieldName::new("execution_mode"))?;
    let payment_mode = parse_enum(&payload.payment_mode, FieldName::new("payment_mode"))?;
    Ok(NewShop::try_new(
        campus_id,
        payload.name,
        execution_mode,
        payment_mode,
    )?)
}

fn parse_update(payload: ShopUpdateRequest) -> ApiResult<ShopPatch> {
    let execution_mode = parse_optional_enum(
        payload.execution_mode.as_deref(),
        FieldName::new("execution_mode"),
    )?;
    let payment_mode = parse_optional_enum(
        payload.payment_mode.as_deref(),
        FieldName::new("payment_mode"),
    )?;
    Ok(ShopPatch::try_new(
        payload.name,
        execution_mode,
        payment_mode,
        payload.is_active,
    )?)
}

/// Open a shop on a campus. New shops start active.
#[utoipa::path(
    post,
    path = "/api/shops",
    request_body = ShopCreateRequest,
    responses(
        (status = 200, description = "Shop created", body = ShopResponse),
        (status = 400, description = "Invalid request or duplicate name", body = ErrorSchema),
        (status = 500, description = "Unknown campus or internal error", body = ErrorSchema)
    ),
    tags = ["shops"],
    operation_id = "createShop"
)]
#[post("/shops")]
pub async fn create_shop(
    state: web::Data<HttpState>,
    payload: web::Json<ShopCreateRequest>,
) -> ApiResult<web::Json<ShopResponse>> {
    let shop = parse_create(payload.into_inner())?;
    let created = state.shops.create(shop).await?;
    Ok(web::Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/api/shops",
    params(ShopListQuery),
    responses(
        (status = 200, description = "Shops", body = [ShopResponse]),
        (status = 400, description = "Malformed campus id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["shops"],
    operation_id = "listShops"
)]
#[get("/shops")]
pub async fn list_shops(
    state: web::Data<HttpState>,
    query: web::Query<ShopListQuery>,
) -> ApiResult<web::Json<Vec<ShopResponse>>> {
    let campus_id = query
        .campus_id
        .as_deref()
        .map(|raw| parse_id(raw, FieldName::new("campus_id")))
        .transpose()?;
    let shops = state.shops.list(ShopFilter { campus_id }).await?;
    Ok(web::Json(shops.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    patch,
    path = "/api/shops/{id}",
    params(("id" = String, Path, description = "Shop identifier")),
    request_body = ShopUpdateRequest,
    responses(
        (status = 200, description = "Updated shop", body = ShopResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Shop not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["shops"],
    operation_id = "updateShop"
)]
#[patch("/shops/{id}")]
pub async fn update_shop(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ShopUpdateRequest>,
) -> ApiResult<web::Json<ShopResponse>> {
    let id: ShopId = parse_id(&path, FieldName::new("id"))?;
    let patch = parse_update(payload.into_inner())?;
    let shop = state.shops.update(id, patch).await?;
    Ok(web::Json(shop.into()))
}

#[utoipa::path(
    delete,
    path = "/api/shops/{id}",
    params(("id" = String, Path, description = "Shop identifier")),
    responses(
        (status = 200, description = "Shop deleted", body = MessageResponse),
        (status = 404, description = "Shop not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["shops"],
    operation_id = "deleteShop"
)]
#[delete("/shops/{id}")]
pub async fn delete_shop(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: ShopId = parse_id(&path, FieldName::new("id"))?;
    state.shops.delete(id).await?;
    Ok(web::Json(MessageResponse::new("Shop deleted")))
}
