use chrono::NaiveDate;

use crate::availability::{AvailabilityStore, HalfDayAvailability, SelectionController, SlotScope, SlotState};
use crate::calendar::{CalendarNavigator, Period, SlotDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    PreviousMonth,
    NextMonth,
    GoToMonth(NaiveDate),
    SelectDate(NaiveDate),
    ClearSelection,
    SetHalfDay(Period, bool),
    SetSlot(Period, usize, bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Closed,
    Editing(NaiveDate),
}

/// The whole availability model for one session: the displayed month, the
/// day open for editing, and the half-day and slot switches.
///
/// Nothing here outlives the value. Dropping the board discards every
/// choice made on it.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityBoard {
    navigator: CalendarNavigator,
    selection: SelectionController,
    store: AvailabilityStore,
}

impl AvailabilityBoard {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_scope(today, SlotScope::default())
    }

    pub fn with_scope(today: NaiveDate, scope: SlotScope) -> Self {
        Self {
            navigator: CalendarNavigator::new(today),
            selection: SelectionController::new(),
            store: AvailabilityStore::new(scope),
        }
    }

    pub fn apply(&mut self, event: BoardEvent) {
        tracing::debug!("Applying {:?}", event);
        match event {
            BoardEvent::PreviousMonth => self.go_to_previous_month(),
            BoardEvent::NextMonth => self.go_to_next_month(),
            BoardEvent::GoToMonth(date) => self.go_to_month(date),
            BoardEvent::SelectDate(date) => self.select_date(date),
            BoardEvent::ClearSelection => self.clear_selection(),
            BoardEvent::SetHalfDay(period, value) => self.set_half_day_available(period, value),
            BoardEvent::SetSlot(period, index, value) => self.set_slot_available(period, index, value),
        }
    }

    pub fn reduce(mut self, event: BoardEvent) -> Self {
        self.apply(event);
        self
    }

    pub fn phase(&self) -> BoardPhase {
        match self.selection.selected() {
            Some(date) => BoardPhase::Editing(date),
            None => BoardPhase::Closed,
        }
    }

    pub fn current_month(&self) -> NaiveDate {
        self.navigator.current_month()
    }

    pub fn go_to_previous_month(&mut self) {
        self.navigator.go_to_previous_month();
    }

    pub fn go_to_next_month(&mut self) {
        self.navigator.go_to_next_month();
    }

    pub fn go_to_month(&mut self, date: NaiveDate) {
        self.navigator.go_to_month(date);
    }

    pub fn dates_in_month(&self) -> Vec<NaiveDate> {
        self.navigator.dates_in_month()
    }

    pub fn is_in_displayed_month(&self, date: NaiveDate) -> bool {
        self.navigator.contains(date)
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selection.select(date);
        self.store.begin_editing(date);
        tracing::info!("Editing availability for {}", date);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.selected()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.is_selected(date)
    }

    pub fn half_day(&self) -> HalfDayAvailability {
        self.store.half_day()
    }

    pub fn is_half_day_available(&self, period: Period) -> bool {
        self.store.is_half_day_available(period)
    }

    pub fn set_half_day_available(&mut self, period: Period, value: bool) {
        self.store.set_half_day_available(period, value);
    }

    pub fn toggle_half_day(&mut self, period: Period) {
        let value = self.store.toggle_half_day(period);
        tracing::debug!("{} switched {}", period, if value { "on" } else { "off" });
    }

    pub fn is_slot_available(&self, period: Period, index: usize) -> bool {
        self.store.is_slot_available(period, index)
    }

    pub fn slot_state(&self, period: Period, index: usize) -> SlotState {
        self.store.slot_state(period, index)
    }

    pub fn set_slot_available(&mut self, period: Period, index: usize, value: bool) {
        self.store.set_slot_available(period, index, value);
    }

    pub fn toggle_slot(&mut self, period: Period, index: usize) {
        let value = self.store.toggle_slot(period, index);
        tracing::debug!("{} slot {} switched {}", period, index, if value { "on" } else { "off" });
    }

    pub fn visible_slots_for(&self, period: Period) -> &'static [SlotDefinition] {
        self.store.visible_slots_for(period)
    }

    pub fn store(&self) -> &AvailabilityStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn new_board_is_closed_with_everything_available() {
        let board = AvailabilityBoard::new(date(2024, 3, 5));

        assert_eq!(board.phase(), BoardPhase::Closed);
        assert_eq!(board.current_month(), date(2024, 3, 5));
        assert_eq!(board.half_day(), HalfDayAvailability::default());
        for period in Period::ALL {
            assert_eq!(board.slot_state(period, 0), SlotState::Unset);
            assert_eq!(board.slot_state(period, 1), SlotState::Unset);
        }
    }

    #[test]
    fn selecting_opens_editor_for_that_date() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));
        board.select_date(date(2024, 3, 5));

        assert_eq!(board.phase(), BoardPhase::Editing(date(2024, 3, 5)));
        assert!(board.is_selected(date(2024, 3, 5)));
    }

    #[test]
    fn selecting_resets_half_days_after_previous_toggles() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));
        board.select_date(date(2024, 3, 5));
        board.set_half_day_available(Period::Morning, false);
        board.set_half_day_available(Period::Afternoon, false);

        board.select_date(date(2024, 3, 9));

        assert!(board.is_half_day_available(Period::Morning));
        assert!(board.is_half_day_available(Period::Afternoon));
    }

    #[test]
    fn reselecting_the_same_date_also_resets_half_days() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));
        board.select_date(date(2024, 3, 5));
        board.toggle_half_day(Period::Morning);
        board.select_date(date(2024, 3, 5));

        assert!(board.is_half_day_available(Period::Morning));
    }

    #[test]
    fn clear_selection_leaves_switches_stale() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));
        board.select_date(date(2024, 3, 5));
        board.set_half_day_available(Period::Morning, false);
        board.set_slot_available(Period::Afternoon, 0, false);

        board.clear_selection();

        assert_eq!(board.phase(), BoardPhase::Closed);
        assert!(!board.is_half_day_available(Period::Morning));
        assert!(!board.is_slot_available(Period::Afternoon, 0));
    }

    #[test]
    fn morning_off_hides_morning_slots_without_touching_flags() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));
        board.select_date(date(2024, 3, 5));
        board.set_slot_available(Period::Morning, 0, false);
        let before: Vec<bool> = (0..2).map(|i| board.is_slot_available(Period::Morning, i)).collect();

        board.set_half_day_available(Period::Morning, false);

        assert!(board.visible_slots_for(Period::Morning).is_empty());
        let after: Vec<bool> = (0..2).map(|i| board.is_slot_available(Period::Morning, i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn shared_slot_flags_carry_over_to_the_next_date() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));

        board.apply(BoardEvent::SelectDate(date(2024, 3, 5)));
        board.apply(BoardEvent::SetSlot(Period::Afternoon, 1, false));
        board.apply(BoardEvent::SetHalfDay(Period::Afternoon, false));
        assert!(board.visible_slots_for(Period::Afternoon).is_empty());
        board.apply(BoardEvent::ClearSelection);

        board.apply(BoardEvent::SelectDate(date(2024, 3, 6)));

        assert!(board.is_half_day_available(Period::Afternoon));
        assert_eq!(board.visible_slots_for(Period::Afternoon).len(), 2);
        assert!(board.is_slot_available(Period::Afternoon, 0));
        assert!(!board.is_slot_available(Period::Afternoon, 1));
    }

    #[test]
    fn per_date_scope_does_not_leak_between_dates() {
        let mut board = AvailabilityBoard::with_scope(date(2024, 3, 1), SlotScope::PerDate);

        board.select_date(date(2024, 3, 5));
        board.set_slot_available(Period::Afternoon, 1, false);
        board.clear_selection();
        board.select_date(date(2024, 3, 6));

        assert!(board.is_slot_available(Period::Afternoon, 1));
        assert_eq!(board.slot_state(Period::Afternoon, 1), SlotState::Unset);
    }

    #[test]
    fn reduce_chains_navigation_events() {
        let board = AvailabilityBoard::new(date(2024, 3, 5));
        let original = board.dates_in_month();

        let board = board
            .reduce(BoardEvent::NextMonth)
            .reduce(BoardEvent::PreviousMonth);

        assert_eq!(board.dates_in_month(), original);
    }

    #[test]
    fn go_to_month_keeps_selection() {
        let mut board = AvailabilityBoard::new(date(2024, 3, 1));
        board.select_date(date(2024, 3, 5));
        board.apply(BoardEvent::GoToMonth(date(2025, 7, 1)));

        assert_eq!(board.current_month(), date(2025, 7, 1));
        assert_eq!(board.selected_date(), Some(date(2024, 3, 5)));
        assert!(!board.is_in_displayed_month(date(2024, 3, 5)));
    }
}
