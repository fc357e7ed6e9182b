//! Location-level movement recording
//!
//! Mirrors the server's rules so the form can reject a movement before the
//! request goes out: an addition needs a target, a removal needs a source,
//! a transfer needs both and they must differ, and anything drawing from a
//! location cannot take more than the location holds.

use shared::{MaterialLocation, MaterialMovement, MovementOperation, NewMaterialMovement, StockError};

use crate::api::StorageApi;
use crate::error::{AppError, AppResult};

/// Validate a movement against the source location's current stock
///
/// `source` is the fetched record for `input.source_location`, when one is
/// named; the caller passes `None` for pure additions.
pub fn validate_movement(
    input: &NewMaterialMovement,
    source: Option<&MaterialLocation>,
) -> Result<(), StockError> {
    if input.quantity <= 0 {
        return Err(StockError::ZeroQuantity);
    }

    match input.operation {
        MovementOperation::Add => {
            if input.target_location.is_none() {
                return Err(StockError::NoLocationSelected);
            }
        }
        MovementOperation::Remove => {
            if input.source_location.is_none() {
                return Err(StockError::NoLocationSelected);
            }
        }
        MovementOperation::Transfer => {
            let (Some(from), Some(to)) = (input.source_location, input.target_location) else {
                return Err(StockError::NoLocationSelected);
            };
            if from == to {
                return Err(StockError::NoChange);
            }
        }
    }

    if matches!(
        input.operation,
        MovementOperation::Remove | MovementOperation::Transfer
    ) {
        let source = source.ok_or(StockError::NoLocationSelected)?;
        if source.quantity < input.quantity {
            return Err(StockError::InsufficientLocationStock {
                available: source.quantity,
            });
        }
    }

    Ok(())
}

/// Validate and record a movement
///
/// Re-fetches the material's locations to check the source's stock against
/// the current server state rather than whatever the screen last rendered.
pub async fn record_movement<A>(api: &A, input: &NewMaterialMovement) -> AppResult<MaterialMovement>
where
    A: StorageApi + ?Sized,
{
    let source = match input.source_location {
        Some(source_id) => {
            let locations = api.list_material_locations(input.material).await?;
            Some(
                locations
                    .into_iter()
                    .find(|loc| loc.id == source_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("location {}", source_id))
                    })?,
            )
        }
        None => None,
    };

    validate_movement(input, source.as_ref())?;

    let movement = api.create_movement(input).await?;
    tracing::info!(
        material = input.material,
        operation = input.operation.as_str(),
        quantity = input.quantity,
        "movement recorded"
    );
    Ok(movement)
}
