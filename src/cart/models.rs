//! Shopping Cart Request and Response Models

use crate::catalog::WeaponRecord;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/cart`
#[derive(Debug, Deserialize)]
pub struct AddToCartInput {
    /// Catalog id of the weapon to add. Any integer is accepted so unknown
    /// ids are reported as not found rather than as a malformed body.
    pub id: i64,
}

/// Response for cart mutations that return the whole cart
#[derive(Debug, Serialize)]
pub struct CartUpdate {
    /// Status of the operation ("removed" or "cleared")
    pub status: &'static str,

    /// Cart contents after the operation
    pub items: Vec<WeaponRecord>,
}

impl CartUpdate {
    pub fn removed(items: Vec<WeaponRecord>) -> Self {
        Self {
            status: "removed",
            items,
        }
    }

    pub fn cleared() -> Self {
        Self {
            status: "cleared",
            items: Vec::new(),
        }
    }
}
