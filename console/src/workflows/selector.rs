//! Location selector dialog (read path)
//!
//! Given a material and a requested quantity, fetches the material's
//! allocations, keeps those with stock, and lets the caller pick one. The
//! confirm step strictly enforces that the chosen location holds at least
//! the requested quantity; a failed confirm leaves the dialog open.

use shared::{validate_withdrawal, MaterialLocation, StockError};

use crate::api::StorageApi;

/// Outcome of opening the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    /// Locations loaded, selection possible
    Ready,
    /// The material has no location with stock; confirm stays disabled
    NoLocations,
    /// The fetch failed; the message is shown inline and the user must
    /// close and re-open the dialog to retry
    FetchFailed(String),
}

/// The location picker dialog
#[derive(Debug, Clone)]
pub struct LocationSelector {
    material_id: i64,
    requested_quantity: i64,
    locations: Vec<MaterialLocation>,
    selected: Option<i64>,
    state: SelectorState,
}

impl LocationSelector {
    /// Open the selector for a material, fetching and filtering locations
    ///
    /// Opening never returns an error: fetch failures are captured in the
    /// dialog state so the form underneath stays usable.
    pub async fn open<A: StorageApi + ?Sized>(
        api: &A,
        material_id: i64,
        requested_quantity: i64,
    ) -> Self {
        let (locations, state) = match api.list_material_locations(material_id).await {
            Ok(all) => {
                let with_stock: Vec<_> =
                    all.into_iter().filter(|loc| loc.quantity > 0).collect();
                if with_stock.is_empty() {
                    (Vec::new(), SelectorState::NoLocations)
                } else {
                    (with_stock, SelectorState::Ready)
                }
            }
            Err(err) => {
                tracing::error!(material_id, error = %err, "failed to load locations");
                (Vec::new(), SelectorState::FetchFailed(err.to_string()))
            }
        };

        Self {
            material_id,
            requested_quantity,
            locations,
            selected: None,
            state,
        }
    }

    /// Pick a location from the list
    pub fn select(&mut self, location_id: i64) -> Result<(), StockError> {
        if !self.locations.iter().any(|loc| loc.id == location_id) {
            return Err(StockError::NoLocationSelected);
        }
        self.selected = Some(location_id);
        Ok(())
    }

    /// Confirm the selection, enforcing `selected.quantity >= requested`
    ///
    /// On error the dialog state is untouched; the caller shows the message
    /// and keeps the selector open.
    pub fn confirm(&self) -> Result<&MaterialLocation, StockError> {
        let selected = self
            .selected
            .and_then(|id| self.locations.iter().find(|loc| loc.id == id))
            .ok_or(StockError::NoLocationSelected)?;
        validate_withdrawal(selected.quantity, self.requested_quantity)?;
        Ok(selected)
    }

    /// Whether the confirm button is enabled
    pub fn can_confirm(&self) -> bool {
        self.state == SelectorState::Ready
            && self
                .selected
                .and_then(|id| self.locations.iter().find(|loc| loc.id == id))
                .is_some_and(|loc| loc.quantity >= self.requested_quantity)
    }

    /// Re-fetch the location list, keeping the requested quantity
    pub async fn reopen<A: StorageApi + ?Sized>(&mut self, api: &A) {
        *self = Self::open(api, self.material_id, self.requested_quantity).await;
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn locations(&self) -> &[MaterialLocation] {
        &self.locations
    }

    pub fn selected(&self) -> Option<&MaterialLocation> {
        self.selected
            .and_then(|id| self.locations.iter().find(|loc| loc.id == id))
    }

    pub fn requested_quantity(&self) -> i64 {
        self.requested_quantity
    }

    pub fn material_id(&self) -> i64 {
        self.material_id
    }
}
