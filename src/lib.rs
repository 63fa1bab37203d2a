pub mod app;
pub mod availability;
pub mod board;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, EditorRow, Mode};
pub use availability::{SlotScope, SlotState};
pub use board::{AvailabilityBoard, BoardEvent, BoardPhase};
pub use calendar::{Period, SlotDefinition};
