//! Shop price list handlers.
//!
//! ```text
//! POST   /api/pricing           {"shop_id":"…","size":"A4","color_mode":"bw","normal_rate":2.0,"bulk_rate":1.5,"bulk_threshold":50}
//! GET    /api/pricing/{shop_id}
//! DELETE /api/pricing/{id}
//! ```

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{ColorMode, NewShopPricing, PaperSize, PricingId, ShopId, ShopPricing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_enum, parse_id};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PricingCreateRequest {
    #[schema(value_type = String, format = Uuid)]
    pub shop_id: String,
    #[schema(value_type = PaperSize)]
    pub size: String,
    #[schema(value_type = ColorMode)]
    pub color_mode: String,
    #[schema(example = 2.0)]
    pub normal_rate: f64,
    #[schema(example = 1.5)]
    pub bulk_rate: f64,
    /// Page count from which `bulk_rate` applies.
    #[schema(example = 50)]
    pub bulk_threshold: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PricingResponse {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub size: PaperSize,
    pub color_mode: ColorMode,
    pub normal_rate: f64,
    pub bulk_rate: f64,
    pub bulk_threshold: i32,
}

impl From<ShopPricing> for PricingResponse {
    fn from(value: ShopPricing) -> Self {
        Self {
            id: value.id.into(),
            shop_id: value.shop_id.into(),
            size: value.size,
            color_mode: value.color_mode,
            normal_rate: value.normal_rate,
            bulk_rate: value.bulk_rate,
            bulk_threshold: value.bulk_threshold,
        }
    }
}

impl TryFrom<PricingCreateRequest> for NewShopPricing {
    type Error = crate::domain::Error;

    fn try_from(value: PricingCreateRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            shop_id: parse_id(&value.shop_id, FieldName::new("shop_id"))?,
            size: parse_enum(&value.size, FieldName::new("size"))?,
            color_mode: parse_enum(&value.color_mode, FieldName::new("color_mode"))?,
            normal_rate: value.normal_rate,
            bulk_rate: value.bulk_rate,
            bulk_threshold: value.bulk_threshold,
        })
    }
}

/// Add a price row to a shop. Rows for the same size and colour may repeat.
#[utoipa::path(
    post,
    path = "/api/pricing",
    request_body = PricingCreateRequest,
    responses(
        (status = 200, description = "Pricing row created", body = PricingResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Unknown shop or internal error", body = ErrorSchema)
    ),
    tags = ["pricing"],
    operation_id = "createPricing"
)]
#[post("/pricing")]
pub async fn create_pricing(
    state: web::Data<HttpState>,
    payload: web::Json<PricingCreateRequest>,
) -> ApiResult<web::Json<PricingResponse>> {
    let pricing = NewShopPricing::try_from(payload.into_inner())?;
    let created = state.pricing.create(pricing).await?;
    Ok(web::Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/api/pricing/{shop_id}",
    params(("shop_id" = String, Path, description = "Shop identifier")),
    responses(
        (status = 200, description = "Price rows for the shop", body = [PricingResponse]),
        (status = 400, description = "Malformed shop id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["pricing"],
    operation_id = "listShopPricing"
)]
#[get("/pricing/{shop_id}")]
pub async fn list_pricing(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<PricingResponse>>> {
    let shop_id: ShopId = parse_id(&path, FieldName::new("shop_id"))?;
    let rows = state.pricing.list(shop_id).await?;
    Ok(web::Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/pricing/{id}",
    params(("id" = String, Path, description = "Pricing row identifier")),
    responses(
        (status = 200, description = "Pricing deleted", body = MessageResponse),
        (status = 404, description = "Pricing not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["pricing"],
    operation_id = "deletePricing"
)]
#[delete("/pricing/{id}")]
pub async fn delete_pricing(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: PricingId = parse_id(&path, FieldName::new("id"))?;
    state.pricing.delete(id).await?;
    Ok(web::Json(MessageResponse::new("Pricing deleted")))
}
