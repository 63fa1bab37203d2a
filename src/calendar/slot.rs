use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Morning, Period::Afternoon];

    pub fn label(self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Morning => write!(f, "morning"),
            Period::Afternoon => write!(f, "afternoon"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotDefinition {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl SlotDefinition {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

const MORNING_SLOTS: [SlotDefinition; 2] = [
    SlotDefinition::new(TimeOfDay::new(9, 0), TimeOfDay::new(10, 0)),
    SlotDefinition::new(TimeOfDay::new(10, 30), TimeOfDay::new(11, 30)),
];

const AFTERNOON_SLOTS: [SlotDefinition; 2] = [
    SlotDefinition::new(TimeOfDay::new(13, 0), TimeOfDay::new(14, 0)),
    SlotDefinition::new(TimeOfDay::new(14, 30), TimeOfDay::new(15, 30)),
];

/// The fixed slot table for a half-day. Indices are stable and double as
/// the slot's key in the availability store.
pub fn slots_for(period: Period) -> &'static [SlotDefinition] {
    match period {
        Period::Morning => &MORNING_SLOTS,
        Period::Afternoon => &AFTERNOON_SLOTS,
    }
}

pub fn slot(period: Period, index: usize) -> Option<&'static SlotDefinition> {
    slots_for(period).get(index)
}
