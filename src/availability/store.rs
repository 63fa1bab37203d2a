use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::slot::{Period, SlotDefinition, slots_for};

/// How slot flags are keyed.
///
/// `Shared` keeps one mapping for the whole session: a slot switched off
/// while editing one day reads as off for every other day too. `PerDate`
/// keys each flag by the day that was open when it was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotScope {
    #[default]
    Shared,
    PerDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub date: Option<NaiveDate>,
    pub period: Period,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unset,
    Available,
    Unavailable,
}

impl SlotState {
    pub fn is_available(self) -> bool {
        !matches!(self, SlotState::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfDayAvailability {
    pub morning: bool,
    pub afternoon: bool,
}

impl HalfDayAvailability {
    pub fn get(&self, period: Period) -> bool {
        match period {
            Period::Morning => self.morning,
            Period::Afternoon => self.afternoon,
        }
    }

    pub fn set(&mut self, period: Period, value: bool) {
        match period {
            Period::Morning => self.morning = value,
            Period::Afternoon => self.afternoon = value,
        }
    }
}

impl Default for HalfDayAvailability {
    fn default() -> Self {
        Self {
            morning: true,
            afternoon: true,
        }
    }
}

/// Half-day switches for the open day plus the slot flag mapping.
///
/// Flags are only ever overwritten, never removed. A slot with no entry
/// counts as available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityStore {
    scope: SlotScope,
    active_date: Option<NaiveDate>,
    half_day: HalfDayAvailability,
    slots: HashMap<SlotKey, bool>,
}

impl AvailabilityStore {
    pub fn new(scope: SlotScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    pub fn scope(&self) -> SlotScope {
        self.scope
    }

    /// Points slot lookups at `date` and switches both half-days back on.
    /// Slot flags are left alone.
    pub fn begin_editing(&mut self, date: NaiveDate) {
        self.active_date = Some(date);
        self.half_day = HalfDayAvailability::default();
    }

    pub fn half_day(&self) -> HalfDayAvailability {
        self.half_day
    }

    pub fn is_half_day_available(&self, period: Period) -> bool {
        self.half_day.get(period)
    }

    pub fn set_half_day_available(&mut self, period: Period, value: bool) {
        self.half_day.set(period, value);
    }

    pub fn toggle_half_day(&mut self, period: Period) -> bool {
        let value = !self.half_day.get(period);
        self.half_day.set(period, value);
        value
    }

    pub fn is_slot_available(&self, period: Period, index: usize) -> bool {
        self.slot_state(period, index).is_available()
    }

    pub fn slot_state(&self, period: Period, index: usize) -> SlotState {
        match self.slots.get(&self.key(period, index)) {
            None => SlotState::Unset,
            Some(true) => SlotState::Available,
            Some(false) => SlotState::Unavailable,
        }
    }

    pub fn set_slot_available(&mut self, period: Period, index: usize, value: bool) {
        let key = self.key(period, index);
        self.slots.insert(key, value);
    }

    pub fn toggle_slot(&mut self, period: Period, index: usize) -> bool {
        let value = !self.is_slot_available(period, index);
        self.set_slot_available(period, index, value);
        value
    }

    /// Catalog slots offered for editing. A switched-off half-day offers
    /// nothing; its stored slot flags stay untouched.
    pub fn visible_slots_for(&self, period: Period) -> &'static [SlotDefinition] {
        if self.half_day.get(period) {
            slots_for(period)
        } else {
            &[]
        }
    }

    /// Number of slot flags recorded against `date`. Always zero under
    /// `SlotScope::Shared`, where flags belong to no particular day.
    pub fn entries_for(&self, date: NaiveDate) -> usize {
        self.slots.keys().filter(|key| key.date == Some(date)).count()
    }

    fn key(&self, period: Period, index: usize) -> SlotKey {
        let date = match self.scope {
            SlotScope::Shared => None,
            SlotScope::PerDate => self.active_date,
        };
        SlotKey { date, period, index }
    }
}
