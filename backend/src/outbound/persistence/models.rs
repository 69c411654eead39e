//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Enumerations travel as
//! their stored strings and are parsed back in the repositories.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{campuses, payments, print_jobs, shop_pricing, shops, users};

// ---------------------------------------------------------------------------
// Campuses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = campuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CampusRow {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campuses)]
pub(crate) struct NewCampusRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub location: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Only `Some` fields are written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = campuses)]
pub(crate) struct CampusChangeset<'a> {
    pub name: Option<&'a str>,
    pub location: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Shops
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = shops)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ShopRow {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub name: String,
    pub execution_mode: String,
    pub payment_mode: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = shops)]
pub(crate) struct NewShopRow<'a> {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub name: &'a str,
    pub execution_mode: &'a str,
    pub payment_mode: &'a str,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = shops)]
pub(crate) struct ShopChangeset<'a> {
    pub name: Option<&'a str>,
    pub execution_mode: Option<&'static str>,
    pub payment_mode: Option<&'static str>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Shop pricing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = shop_pricing)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ShopPricingRow {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub size: String,
    pub color_mode: String,
    pub normal_rate: f64,
    pub bulk_rate: f64,
    pub bulk_threshold: i32,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub email: &'a str,
    pub name: &'a str,
    pub role: &'a str,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Print jobs and payments (read side)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = print_jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PrintJobRow {
    pub id: Uuid,
    pub campus_id: Uuid,
    pub shop_id: Uuid,
    pub user_id: Uuid,
    pub file_url: String,
    pub original_filename: String,
    pub pages: i32,
    pub copies: i32,
    pub size: String,
    pub color_mode: String,
    pub final_price: f64,
    pub pricing_snapshot: serde_json::Value,
    pub execution_mode_snapshot: String,
    pub payment_mode_snapshot: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PaymentRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub amount: f64,
    pub status: String,
    pub gateway_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}
