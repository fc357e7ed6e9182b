//! Total-stock mutations: add, subtract, reconcile
//!
//! Additions grow the unallocated pool directly. Subtractions must name the
//! tray the stock physically leaves, so the subtract flow stages the amount,
//! opens the location selector and only then issues the update plus a
//! movement record. Reconciliation ("cuadre") sets the total to an explicit
//! target through the dedicated endpoint.

use shared::{
    resolve_adjust_source, validate_adjust_target, AdjustSource, Material, MaterialUpdate,
    MovementOperation, NewMaterialMovement, StockError, StockOperation, StockReason,
};

use crate::api::{FileUpload, MaterialsApi, StockAdjustment, StorageApi};
use crate::error::{AppError, AppResult};
use crate::workflows::selector::LocationSelector;
use crate::workflows::StagedOperation;

/// Increase a material's total stock
///
/// Purchases may carry an invoice image; the payload switches to multipart
/// when one is attached.
pub async fn add_stock<A>(
    api: &A,
    material: &Material,
    amount: i64,
    reason: StockReason,
    invoice: Option<FileUpload>,
) -> AppResult<Material>
where
    A: MaterialsApi + ?Sized,
{
    if amount <= 0 {
        return Err(AppError::Stock(StockError::ZeroQuantity));
    }
    if !reason.is_addition_reason() {
        return Err(AppError::Validation(format!(
            "{} is not an addition reason",
            reason.as_str()
        )));
    }

    let update = MaterialUpdate {
        name: material.name.clone(),
        quantity: material.quantity + amount,
        price: material.price,
        operation: Some(StockOperation::Add),
        quantity_change: Some(amount),
        reason: Some(reason),
    };
    let updated = api.update_material(material.id, &update, invoice).await?;
    tracing::info!(
        material = material.id,
        amount,
        reason = reason.as_str(),
        "stock added"
    );
    Ok(updated)
}

/// The staged payload of a subtraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubtraction {
    pub amount: i64,
    pub reason: StockReason,
}

/// The subtract-stock flow
///
/// `new` validates the form, `open_selector` stages the amount and opens the
/// location picker, `confirm` applies the update and records the movement.
/// Dropping or cancelling before confirm leaves the material untouched.
#[derive(Debug)]
pub struct SubtractStock {
    material: Material,
    staged: StagedOperation<PendingSubtraction>,
    selector: Option<LocationSelector>,
}

impl SubtractStock {
    pub fn new(material: Material, amount: i64, reason: StockReason) -> Result<Self, AppError> {
        if amount <= 0 {
            return Err(AppError::Stock(StockError::ZeroQuantity));
        }
        if !reason.is_subtraction_reason() {
            return Err(AppError::Validation(format!(
                "{} is not a subtraction reason",
                reason.as_str()
            )));
        }
        if amount > material.quantity {
            return Err(AppError::Stock(StockError::ExceedsAvailable {
                requested: amount,
                available: material.quantity,
            }));
        }

        let mut staged = StagedOperation::Idle;
        staged.stage(PendingSubtraction { amount, reason });
        Ok(Self {
            material,
            staged,
            selector: None,
        })
    }

    /// Open the location selector for the staged amount
    pub async fn open_selector<A>(&mut self, api: &A) -> AppResult<()>
    where
        A: StorageApi + ?Sized,
    {
        let pending = self
            .staged
            .payload()
            .ok_or_else(|| AppError::Validation("no subtraction pending".into()))?;
        self.selector =
            Some(LocationSelector::open(api, self.material.id, pending.amount).await);
        Ok(())
    }

    pub fn selector(&self) -> Option<&LocationSelector> {
        self.selector.as_ref()
    }

    pub fn selector_mut(&mut self) -> Option<&mut LocationSelector> {
        self.selector.as_mut()
    }

    /// Confirm the selected source location and apply the subtraction
    ///
    /// Updates the material total, then records a REMOVE movement against
    /// the chosen location. Returns the updated material.
    pub async fn confirm<A>(&mut self, api: &A) -> AppResult<Material>
    where
        A: StorageApi + MaterialsApi + ?Sized,
    {
        let selector = self
            .selector
            .as_ref()
            .ok_or_else(|| AppError::Validation("location selector is not open".into()))?;
        let source = selector.confirm()?.clone();

        let pending = self
            .staged
            .start_apply()
            .ok_or_else(|| AppError::Validation("no subtraction pending".into()))?
            .clone();

        let update = MaterialUpdate {
            name: self.material.name.clone(),
            quantity: self.material.quantity - pending.amount,
            price: self.material.price,
            operation: Some(StockOperation::Remove),
            quantity_change: Some(pending.amount),
            reason: Some(pending.reason),
        };
        let updated = api.update_material(self.material.id, &update, None).await?;

        let movement = NewMaterialMovement {
            material: self.material.id,
            operation: MovementOperation::Remove,
            quantity: pending.amount,
            source_location: Some(source.id),
            target_location: None,
            notes: Some(format!("stock removed, reason {}", pending.reason.as_str())),
        };
        api.create_movement(&movement).await?;
        tracing::info!(
            material = self.material.id,
            amount = pending.amount,
            source = source.id,
            reason = pending.reason.as_str(),
            "stock subtracted"
        );

        self.staged.finish();
        self.selector = None;
        self.material = updated.clone();
        Ok(updated)
    }

    /// Abandon the flow without touching the material
    pub fn cancel(&mut self) {
        self.staged.cancel();
        self.selector = None;
    }

    pub fn is_pending(&self) -> bool {
        !self.staged.is_idle()
    }

    pub fn pending(&self) -> Option<&PendingSubtraction> {
        self.staged.payload()
    }
}

/// Reconcile a material's total stock to an explicit target
///
/// Fetches the current allocations to compute the unallocated pool, forces
/// the source to a location when that pool is empty, and requires a location
/// id whenever the source is a location.
pub async fn adjust_stock<A>(
    api: &A,
    material: &Material,
    target: i64,
    source: AdjustSource,
    location_id: Option<i64>,
    notes: Option<String>,
) -> AppResult<Material>
where
    A: StorageApi + MaterialsApi + ?Sized,
{
    let locations = api.list_material_locations(material.id).await?;
    let unallocated = shared::available_stock(material.quantity, &locations);

    let source = resolve_adjust_source(unallocated, source);
    validate_adjust_target(material.quantity, target, unallocated, source)?;
    if source == AdjustSource::Location && location_id.is_none() {
        return Err(AppError::Stock(StockError::LocationSourceMissing));
    }

    let adjustment = StockAdjustment {
        target_stock: target,
        source,
        location_id,
        notes,
    };
    let updated = api.adjust_stock(material.id, adjustment).await?;
    tracing::info!(
        material = material.id,
        from = material.quantity,
        to = target,
        source = source.as_str(),
        "stock reconciled"
    );
    Ok(updated)
}
