//! Allocation management dialog for one material
//!
//! Lists the material's tray allocations, creates new ones through the
//! cascading location picker, and resizes or deletes existing ones. After
//! every mutation the material and its locations are re-fetched and the
//! availability recomputed from scratch.

use shared::{
    available_for_edit, available_stock, validate_allocation_resize, validate_new_allocation,
    Material, MaterialLocation, MaterialLocationUpdate, NewMaterialLocation, StockError,
};

use crate::api::{MaterialsApi, StorageApi};
use crate::error::{AppError, AppResult};
use crate::workflows::LocationCascade;

/// An allocation being resized
#[derive(Debug, Clone)]
struct EditState {
    location_id: i64,
    current_quantity: i64,
    new_quantity: i64,
}

/// The assignment dialog state
#[derive(Debug, Clone)]
pub struct LocationAssignment {
    material: Material,
    locations: Vec<MaterialLocation>,
    cascade: LocationCascade,
    quantity: i64,
    minimum_quantity: i64,
    editing: Option<EditState>,
}

impl LocationAssignment {
    /// Open the dialog, fetching the material, its allocations and the
    /// warehouse list for the cascade
    pub async fn open<A>(api: &A, material_id: i64) -> AppResult<Self>
    where
        A: StorageApi + MaterialsApi + ?Sized,
    {
        let material = api.get_material(material_id).await?;
        let locations = api.list_material_locations(material_id).await?;
        let cascade = LocationCascade::load(api).await?;
        Ok(Self {
            material,
            locations,
            cascade,
            quantity: 0,
            minimum_quantity: 0,
            editing: None,
        })
    }

    /// Unallocated stock, the ceiling for a new allocation
    pub fn available(&self) -> i64 {
        available_stock(self.material.quantity, &self.locations)
    }

    /// Availability shown in the dialog header, clamped for display
    pub fn available_display(&self) -> i64 {
        self.available().max(0)
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_minimum_quantity(&mut self, minimum_quantity: i64) {
        self.minimum_quantity = minimum_quantity;
    }

    /// Create an allocation on the cascade's selected tray, then refresh
    pub async fn submit_new<A>(&mut self, api: &A) -> AppResult<()>
    where
        A: StorageApi + MaterialsApi + ?Sized,
    {
        let tray = self
            .cascade
            .selected_tray()
            .ok_or(AppError::Stock(StockError::NoTraySelected))?;
        validate_new_allocation(self.quantity, self.available())?;

        let input = NewMaterialLocation {
            material: self.material.id,
            tray,
            quantity: self.quantity,
            minimum_quantity: self.minimum_quantity,
        };
        api.create_material_location(&input).await?;
        tracing::info!(
            material = self.material.id,
            tray,
            quantity = self.quantity,
            "allocation created"
        );

        self.quantity = 0;
        self.minimum_quantity = 0;
        self.refresh(api).await
    }

    /// Start resizing an allocation
    ///
    /// Blocked when nothing is left unallocated: growth would be impossible
    /// and a pure decrease is done by withdrawing stock instead.
    pub fn begin_edit(&mut self, location_id: i64) -> Result<(), StockError> {
        let location = self
            .locations
            .iter()
            .find(|loc| loc.id == location_id)
            .ok_or(StockError::NoLocationSelected)?;
        if self.available() <= 0 {
            return Err(StockError::NoStockAvailable);
        }
        self.editing = Some(EditState {
            location_id,
            current_quantity: location.quantity,
            new_quantity: location.quantity,
        });
        Ok(())
    }

    pub fn set_edit_quantity(&mut self, quantity: i64) {
        if let Some(edit) = self.editing.as_mut() {
            edit.new_quantity = quantity;
        }
    }

    /// The ceiling for the allocation currently being edited
    ///
    /// Its own quantity does not count against it, so an allocation of 6 on
    /// a fully assigned material of 10 may still be set anywhere in 0..=6.
    pub fn edit_ceiling(&self) -> Option<i64> {
        self.editing.as_ref().map(|edit| {
            available_for_edit(self.material.quantity, &self.locations, edit.location_id)
        })
    }

    /// Apply the pending resize, then refresh
    pub async fn submit_edit<A>(&mut self, api: &A) -> AppResult<()>
    where
        A: StorageApi + MaterialsApi + ?Sized,
    {
        let edit = self
            .editing
            .as_ref()
            .ok_or_else(|| AppError::Validation("no allocation is being edited".into()))?;
        let location = self
            .locations
            .iter()
            .find(|loc| loc.id == edit.location_id)
            .ok_or(AppError::Stock(StockError::NoLocationSelected))?;

        validate_allocation_resize(edit.current_quantity, edit.new_quantity, self.available())?;

        let input = MaterialLocationUpdate::resize(location, edit.new_quantity);
        api.update_material_location(edit.location_id, &input).await?;
        tracing::info!(
            location = edit.location_id,
            from = edit.current_quantity,
            to = edit.new_quantity,
            "allocation resized"
        );

        self.editing = None;
        self.refresh(api).await
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete an allocation, returning its stock to the unallocated pool
    pub async fn delete<A>(&mut self, api: &A, location_id: i64) -> AppResult<()>
    where
        A: StorageApi + MaterialsApi + ?Sized,
    {
        if !self.locations.iter().any(|loc| loc.id == location_id) {
            return Err(AppError::Stock(StockError::NoLocationSelected));
        }
        api.delete_material_location(location_id).await?;
        tracing::info!(location = location_id, "allocation deleted");
        self.refresh(api).await
    }

    /// Re-fetch the material and its allocations
    async fn refresh<A>(&mut self, api: &A) -> AppResult<()>
    where
        A: StorageApi + MaterialsApi + ?Sized,
    {
        self.material = api.get_material(self.material.id).await?;
        self.locations = api.list_material_locations(self.material.id).await?;
        Ok(())
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn locations(&self) -> &[MaterialLocation] {
        &self.locations
    }

    pub fn cascade(&self) -> &LocationCascade {
        &self.cascade
    }

    pub fn cascade_mut(&mut self) -> &mut LocationCascade {
        &mut self.cascade
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
