pub mod month;
pub mod navigator;
pub mod slot;

pub use navigator::CalendarNavigator;
pub use slot::{Period, SlotDefinition, TimeOfDay, slots_for};
