#![allow(clippy::must_use_candidate)]

use crate::extractor::ListingRecord;
use serde::{Deserialize, Serialize};

/// Bounds applied to housing records after extraction.
///
/// Every bound is exclusive: a record exactly at a bound is dropped.
/// Bounds only engage when the record carries the corresponding field, so
/// an unpriced listing passes every price bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rooms: Option<u32>,
    pub max_rooms: Option<u32>,
}

impl SearchFilters {
    pub fn matches(&self, record: &ListingRecord) -> bool {
        if let (Some(price), Some(min)) = (record.price, self.min_price) {
            if price <= min {
                return false;
            }
        }
        if let (Some(price), Some(max)) = (record.price, self.max_price) {
            if price >= max {
                return false;
            }
        }
        if let (Some(rooms), Some(min)) = (record.bedrooms, self.min_rooms) {
            if rooms <= min {
                return false;
            }
        }
        if let (Some(rooms), Some(max)) = (record.bedrooms, self.max_rooms) {
            if rooms >= max {
                return false;
            }
        }
        true
    }
}
