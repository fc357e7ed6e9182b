//! Stock arithmetic and allocation validation
//!
//! Pure functions only. The console recomputes availability from a freshly
//! fetched location list after every mutation instead of patching cached
//! state, so each helper takes the material total and the current location
//! list as plain values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MaterialLocation;
use crate::AdjustSource;

/// Validation failures raised before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StockError {
    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("no unallocated stock available")]
    NoStockAvailable,

    #[error("requested {requested} exceeds the {available} units left unallocated")]
    ExceedsAvailable { requested: i64, available: i64 },

    #[error("increase of {increase} exceeds the {available} units left unallocated")]
    ResizeExceedsAvailable { increase: i64, available: i64 },

    #[error("quantity is unchanged")]
    NoChange,

    #[error("insufficient stock at the selected location, {available} available")]
    InsufficientLocationStock { available: i64 },

    #[error("no location selected")]
    NoLocationSelected,

    #[error("no tray selected")]
    NoTraySelected,

    #[error("unallocated stock is empty, adjustment must draw from a location")]
    UnallocatedSourceEmpty,

    #[error("a source location is required when adjusting from a location")]
    LocationSourceMissing,
}

/// Sum of stock already assigned to trays
pub fn allocated_stock(locations: &[MaterialLocation]) -> i64 {
    locations.iter().map(|loc| loc.quantity).sum()
}

/// Unallocated stock: material total minus the sum across its locations
///
/// Can come back negative if the server-side numbers drifted; display code
/// clamps at zero, validation uses the raw value.
pub fn available_stock(material_quantity: i64, locations: &[MaterialLocation]) -> i64 {
    material_quantity - allocated_stock(locations)
}

/// Availability ceiling when resizing an existing allocation
///
/// The record's own current quantity is excluded from the allocated sum, so
/// the same allocation can grow up to `available + its current quantity`.
pub fn available_for_edit(
    material_quantity: i64,
    locations: &[MaterialLocation],
    editing_id: i64,
) -> i64 {
    let allocated_elsewhere: i64 = locations
        .iter()
        .filter(|loc| loc.id != editing_id)
        .map(|loc| loc.quantity)
        .sum();
    material_quantity - allocated_elsewhere
}

/// Validate creating a new allocation against the unallocated ceiling
pub fn validate_new_allocation(quantity: i64, available: i64) -> Result<(), StockError> {
    if quantity <= 0 {
        return Err(StockError::ZeroQuantity);
    }
    if available <= 0 {
        return Err(StockError::NoStockAvailable);
    }
    if quantity > available {
        return Err(StockError::ExceedsAvailable {
            requested: quantity,
            available,
        });
    }
    Ok(())
}

/// Validate resizing an existing allocation
///
/// Decreases are always allowed; increases are bounded by the unallocated
/// stock. Resizing to the current value is rejected as a no-op.
pub fn validate_allocation_resize(
    current: i64,
    new_quantity: i64,
    available: i64,
) -> Result<(), StockError> {
    if new_quantity < 0 {
        return Err(StockError::ZeroQuantity);
    }
    if new_quantity == current {
        return Err(StockError::NoChange);
    }
    let increase = new_quantity - current;
    if increase > 0 {
        if available <= 0 {
            return Err(StockError::NoStockAvailable);
        }
        if increase > available {
            return Err(StockError::ResizeExceedsAvailable {
                increase,
                available,
            });
        }
    }
    Ok(())
}

/// Validate withdrawing `requested` units from a single location
///
/// Strict: the location must hold at least the full requested quantity.
pub fn validate_withdrawal(location_quantity: i64, requested: i64) -> Result<(), StockError> {
    if requested <= 0 {
        return Err(StockError::ZeroQuantity);
    }
    if location_quantity < requested {
        return Err(StockError::InsufficientLocationStock {
            available: location_quantity,
        });
    }
    Ok(())
}

/// Validate a reconciliation ("cuadre") target
pub fn validate_adjust_target(
    current: i64,
    target: i64,
    unallocated: i64,
    source: AdjustSource,
) -> Result<(), StockError> {
    if target < 0 {
        return Err(StockError::ZeroQuantity);
    }
    if target == current {
        return Err(StockError::NoChange);
    }
    if source == AdjustSource::Unallocated && unallocated <= 0 {
        return Err(StockError::UnallocatedSourceEmpty);
    }
    Ok(())
}

/// Force the location source when there is no unallocated stock to draw from
pub fn resolve_adjust_source(unallocated: i64, requested: AdjustSource) -> AdjustSource {
    if unallocated <= 0 {
        AdjustSource::Location
    } else {
        requested
    }
}
