//! Domain models for the field-service inventory console

mod control;
mod location;
mod material;
mod movement;
mod reference;
mod report;
mod storage;

pub use control::*;
pub use location::*;
pub use material::*;
pub use movement::*;
pub use reference::*;
pub use report::*;
pub use storage::*;
