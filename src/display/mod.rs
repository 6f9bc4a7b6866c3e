//! Presentation of lookup results.

pub mod region;
pub mod rendering;

pub use region::{OutputRegion, Ticket};
pub use rendering::Rendering;
