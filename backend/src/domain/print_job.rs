//! Print jobs and payments.
//!
//! Both are read-only from the service's point of view: rows are written by
//! an intake process outside this backend.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{
    CampusId, ColorMode, ExecutionMode, JobId, PaperSize, PaymentId, PaymentMode, PrintStatus,
    ShopId, UserId,
};

/// A submitted print job.
///
/// `final_price` and `pricing_snapshot` are stored as given; no code derives
/// them from the shop's price list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintJob {
    pub id: JobId,
    pub campus_id: CampusId,
    pub shop_id: ShopId,
    pub user_id: UserId,
    pub file_url: String,
    pub original_filename: String,
    pub pages: i32,
    pub copies: i32,
    pub size: PaperSize,
    pub color_mode: ColorMode,
    pub final_price: f64,
    pub pricing_snapshot: Value,
    pub execution_mode_snapshot: ExecutionMode,
    pub payment_mode_snapshot: PaymentMode,
    pub status: PrintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment recorded against exactly one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: PaymentId,
    pub job_id: JobId,
    pub amount: f64,
    /// Free-form; `pending`, `success` and `failed` are conventional.
    pub status: String,
    pub gateway_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}
