//! Cascading warehouse > department > shelf > tray selection
//!
//! Strictly top-down dependent reloading: selecting at level N clears every
//! deeper level and fetches the options for level N+1. Nothing propagates
//! back up.

use shared::{Department, Shelf, Tray, Warehouse};

use crate::api::StorageApi;
use crate::error::{AppError, AppResult};

/// State of the four dependent selects in the assignment dialog
#[derive(Debug, Clone, Default)]
pub struct LocationCascade {
    warehouses: Vec<Warehouse>,
    departments: Vec<Department>,
    shelves: Vec<Shelf>,
    trays: Vec<Tray>,
    selected_warehouse: Option<i64>,
    selected_department: Option<i64>,
    selected_shelf: Option<i64>,
    selected_tray: Option<i64>,
}

impl LocationCascade {
    /// Load the top level; everything below starts empty
    pub async fn load<A: StorageApi + ?Sized>(api: &A) -> AppResult<Self> {
        let warehouses = api.list_warehouses().await?;
        Ok(Self {
            warehouses,
            ..Self::default()
        })
    }

    /// Select a warehouse, clearing and reloading the levels below
    pub async fn select_warehouse<A: StorageApi + ?Sized>(
        &mut self,
        api: &A,
        warehouse: Option<i64>,
    ) -> AppResult<()> {
        self.selected_warehouse = None;
        self.selected_department = None;
        self.selected_shelf = None;
        self.selected_tray = None;
        self.departments.clear();
        self.shelves.clear();
        self.trays.clear();

        if let Some(id) = warehouse {
            if !self.warehouses.iter().any(|w| w.id == id) {
                return Err(AppError::Validation(format!(
                    "warehouse {} is not among the loaded options",
                    id
                )));
            }
            self.selected_warehouse = Some(id);
            self.departments = api.list_departments(id).await?;
        }
        Ok(())
    }

    /// Select a department, clearing and reloading shelves and trays
    pub async fn select_department<A: StorageApi + ?Sized>(
        &mut self,
        api: &A,
        department: Option<i64>,
    ) -> AppResult<()> {
        self.selected_department = None;
        self.selected_shelf = None;
        self.selected_tray = None;
        self.shelves.clear();
        self.trays.clear();

        if let Some(id) = department {
            if !self.departments.iter().any(|d| d.id == id) {
                return Err(AppError::Validation(format!(
                    "department {} is not among the loaded options",
                    id
                )));
            }
            self.selected_department = Some(id);
            self.shelves = api.list_shelves(id).await?;
        }
        Ok(())
    }

    /// Select a shelf, clearing and reloading trays
    pub async fn select_shelf<A: StorageApi + ?Sized>(
        &mut self,
        api: &A,
        shelf: Option<i64>,
    ) -> AppResult<()> {
        self.selected_shelf = None;
        self.selected_tray = None;
        self.trays.clear();

        if let Some(id) = shelf {
            if !self.shelves.iter().any(|s| s.id == id) {
                return Err(AppError::Validation(format!(
                    "shelf {} is not among the loaded options",
                    id
                )));
            }
            self.selected_shelf = Some(id);
            self.trays = api.list_trays(id).await?;
        }
        Ok(())
    }

    /// Select a tray (leaf level, no further fetch)
    pub fn select_tray(&mut self, tray: Option<i64>) -> AppResult<()> {
        match tray {
            None => {
                self.selected_tray = None;
                Ok(())
            }
            Some(id) => {
                if !self.trays.iter().any(|t| t.id == id) {
                    return Err(AppError::Validation(format!(
                        "tray {} is not among the loaded options",
                        id
                    )));
                }
                self.selected_tray = Some(id);
                Ok(())
            }
        }
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn trays(&self) -> &[Tray] {
        &self.trays
    }

    pub fn selected_warehouse(&self) -> Option<i64> {
        self.selected_warehouse
    }

    pub fn selected_department(&self) -> Option<i64> {
        self.selected_department
    }

    pub fn selected_shelf(&self) -> Option<i64> {
        self.selected_shelf
    }

    pub fn selected_tray(&self) -> Option<i64> {
        self.selected_tray
    }
}
