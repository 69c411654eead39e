//! Read-only print job and payment handlers.
//!
//! ```text
//! GET /api/jobs
//! GET /api/payments
//! GET /api/payments/{id}
//! ```

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{ColorMode, PaperSize, Payment, PaymentId, PrintJob, PrintStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

/// Job summary. The file location and pricing snapshots stay internal.
#[derive(Debug, Serialize, ToSchema)]
pub struct JobResponse {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub shop_id: Uuid,
    pub user_id: Uuid,
    pub original_filename: String,
    pub pages: i32,
    pub copies: i32,
    pub size: PaperSize,
    pub color_mode: ColorMode,
    pub final_price: f64,
    pub status: PrintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PrintJob> for JobResponse {
    fn from(value: PrintJob) -> Self {
        Self {
            id: value.id.into(),
            campus_id: value.campus_id.into(),
            shop_id: value.shop_id.into(),
            user_id: value.user_id.into(),
            original_filename: value.original_filename,
            pages: value.pages,
            copies: value.copies,
            size: value.size,
            color_mode: value.color_mode,
            final_price: value.final_price,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub amount: f64,
    #[schema(example = "pending")]
    pub status: String,
    pub gateway_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        Self {
            id: value.id.into(),
            job_id: value.job_id.into(),
            amount: value.amount,
            status: value.status,
            gateway_reference: value.gateway_reference,
            created_at: value.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "Print jobs", body = [JobResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobs"
)]
#[get("/jobs")]
pub async fn list_jobs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<JobResponse>>> {
    let jobs = state.jobs.list_jobs().await?;
    Ok(web::Json(jobs.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "Payments", body = [PaymentResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "listPayments"
)]
#[get("/payments")]
pub async fn list_payments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PaymentResponse>>> {
    let payments = state.payments.list_payments().await?;
    Ok(web::Json(payments.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    params(("id" = String, Path, description = "Payment identifier")),
    responses(
        (status = 200, description = "Payment", body = PaymentResponse),
        (status = 400, description = "Malformed payment id", body = ErrorSchema),
        (status = 404, description = "Payment not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "getPayment"
)]
#[get("/payments/{id}")]
pub async fn get_payment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PaymentResponse>> {
    let id: PaymentId = parse_id(&path, FieldName::new("id"))?;
    let payment = state.payments.get_payment(id).await?;
    Ok(web::Json(payment.into()))
}
