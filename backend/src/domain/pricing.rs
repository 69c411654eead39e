//! Per-shop price list rows.
//!
//! Rows are plain data: nothing in the service computes a job price from
//! them. Several rows may exist for the same size and colour combination.

use serde::Serialize;

use super::{ColorMode, PaperSize, PricingId, ShopId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopPricing {
    pub id: PricingId,
    pub shop_id: ShopId,
    pub size: PaperSize,
    pub color_mode: ColorMode,
    pub normal_rate: f64,
    pub bulk_rate: f64,
    pub bulk_threshold: i32,
}

/// Input for a new price list row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShopPricing {
    pub shop_id: ShopId,
    pub size: PaperSize,
    pub color_mode: ColorMode,
    pub normal_rate: f64,
    pub bulk_rate: f64,
    pub bulk_threshold: i32,
}

impl NewShopPricing {
    #[must_use]
    pub fn into_pricing(self) -> ShopPricing {
        ShopPricing {
            id: PricingId::random(),
            shop_id: self.shop_id,
            size: self.size,
            color_mode: self.color_mode,
            normal_rate: self.normal_rate,
            bulk_rate: self.bulk_rate,
            bulk_threshold: self.bulk_threshold,
        }
    }
}
