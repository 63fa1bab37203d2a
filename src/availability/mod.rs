pub mod selection;
pub mod store;

pub use selection::SelectionController;
pub use store::{AvailabilityStore, HalfDayAvailability, SlotKey, SlotScope, SlotState};
