//! Material picker for the work-report form
//!
//! Each line records the material, the quantity consumed and the tray it was
//! drawn from. A line only lands in the list once a source location has been
//! confirmed through the selector; cancelling the selector discards the
//! staged line.

use shared::{Material, MaterialUsed, StockError};

use crate::api::{MaterialsApi, StorageApi};
use crate::error::{AppError, AppResult};
use crate::workflows::selector::LocationSelector;
use crate::workflows::StagedOperation;

/// A line captured in the form but not yet location-confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLine {
    pub material: i64,
    pub material_name: String,
    pub quantity: i64,
}

/// The materials section of the report form
#[derive(Debug, Default)]
pub struct ReportMaterialPicker {
    materials: Vec<Material>,
    staged: StagedOperation<PendingLine>,
    selector: Option<LocationSelector>,
    lines: Vec<MaterialUsed>,
}

impl ReportMaterialPicker {
    /// Load the material catalog for the picker
    ///
    /// A failed fetch leaves the picker empty rather than blocking the form.
    pub async fn load<A>(api: &A) -> Self
    where
        A: MaterialsApi + ?Sized,
    {
        let materials = match api.list_materials().await {
            Ok(materials) => materials,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load materials, picker will be empty");
                Vec::new()
            }
        };
        Self {
            materials,
            ..Self::default()
        }
    }

    /// Resume editing an existing report's material lines
    pub fn with_lines(mut self, lines: Vec<MaterialUsed>) -> Self {
        self.lines = lines;
        self
    }

    /// Stage a line for location confirmation
    pub fn stage(&mut self, material_id: i64, quantity: i64) -> Result<(), AppError> {
        let material = self
            .materials
            .iter()
            .find(|m| m.id == material_id)
            .ok_or_else(|| AppError::NotFound(format!("material {}", material_id)))?;
        if self.lines.iter().any(|line| line.material == material_id) {
            return Err(AppError::Validation(format!(
                "{} is already on the report",
                material.name
            )));
        }
        if quantity <= 0 {
            return Err(AppError::Stock(StockError::ZeroQuantity));
        }
        if quantity > material.quantity {
            return Err(AppError::Stock(StockError::ExceedsAvailable {
                requested: quantity,
                available: material.quantity,
            }));
        }
        if !self.staged.stage(PendingLine {
            material: material_id,
            material_name: material.name.clone(),
            quantity,
        }) {
            return Err(AppError::Validation(
                "another material line is awaiting a location".into(),
            ));
        }
        Ok(())
    }

    /// Open the location selector for the staged line
    pub async fn open_selector<A>(&mut self, api: &A) -> AppResult<()>
    where
        A: StorageApi + ?Sized,
    {
        let pending = self
            .staged
            .payload()
            .ok_or_else(|| AppError::Validation("no material line is staged".into()))?;
        self.selector =
            Some(LocationSelector::open(api, pending.material, pending.quantity).await);
        Ok(())
    }

    pub fn selector(&self) -> Option<&LocationSelector> {
        self.selector.as_ref()
    }

    pub fn selector_mut(&mut self) -> Option<&mut LocationSelector> {
        self.selector.as_mut()
    }

    /// Confirm the selector's choice and append the line
    pub fn confirm_location(&mut self) -> Result<MaterialUsed, AppError> {
        let selector = self
            .selector
            .as_ref()
            .ok_or_else(|| AppError::Validation("location selector is not open".into()))?;
        let location = selector.confirm()?.clone();

        self.staged
            .start_apply()
            .ok_or_else(|| AppError::Validation("no material line is staged".into()))?;
        let pending = self
            .staged
            .finish()
            .ok_or_else(|| AppError::Validation("no material line is staged".into()))?;

        let line = MaterialUsed {
            material: pending.material,
            material_name: Some(pending.material_name),
            quantity: pending.quantity,
            location_id: Some(location.id),
            location_name: Some(location.full_path()),
        };
        self.lines.push(line.clone());
        self.selector = None;
        Ok(line)
    }

    /// Drop the staged line, closing the selector
    pub fn cancel(&mut self) {
        self.staged.cancel();
        self.selector = None;
    }

    /// Remove a confirmed line from the report
    pub fn remove(&mut self, material_id: i64) {
        self.lines.retain(|line| line.material != material_id);
    }

    pub fn lines(&self) -> &[MaterialUsed] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<MaterialUsed> {
        self.lines
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn pending(&self) -> Option<&PendingLine> {
        self.staged.payload()
    }
}
