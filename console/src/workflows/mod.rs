//! Workflow controllers mirroring the console's screens and dialogs
//!
//! Every controller recomputes stock availability from a freshly fetched
//! location list after each mutation; nothing here caches derived state
//! across requests.

mod assignment;
mod cascade;
mod movement;
mod mutation;
mod report_materials;
mod selector;
mod staged;

pub use assignment::LocationAssignment;
pub use cascade::LocationCascade;
pub use movement::{record_movement, validate_movement};
pub use mutation::{add_stock, adjust_stock, PendingSubtraction, SubtractStock};
pub use report_materials::{PendingLine, ReportMaterialPicker};
pub use selector::{LocationSelector, SelectorState};
pub use staged::StagedOperation;
