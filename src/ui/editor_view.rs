use crate::app::{AppState, EditorRow};
use crate::calendar::Period;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorLayout {
    pub title: String,
    pub sections: Vec<SectionView>,
    pub footer: Vec<FooterAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub period: Period,
    pub heading: &'static str,
    pub enabled: bool,
    pub focused: bool,
    pub slots: Vec<SlotRowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotRowView {
    pub index: usize,
    pub label: String,
    pub available: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterAction {
    pub label: &'static str,
    pub focused: bool,
}

/// The modal contents for the open day, or `None` while nothing is
/// selected. Slots of a switched-off half-day are left out entirely.
pub fn calculate_layout(state: &AppState) -> Option<EditorLayout> {
    let title = state.editor_title()?;
    let focused = state.focused_row();

    let sections = Period::ALL
        .into_iter()
        .map(|period| {
            let slots = state
                .board
                .visible_slots_for(period)
                .iter()
                .enumerate()
                .map(|(index, slot)| SlotRowView {
                    index,
                    label: slot.label(),
                    available: state.board.is_slot_available(period, index),
                    focused: focused == Some(EditorRow::Slot(period, index)),
                })
                .collect();

            SectionView {
                period,
                heading: period.label(),
                enabled: state.board.is_half_day_available(period),
                focused: focused == Some(EditorRow::HalfDay(period)),
                slots,
            }
        })
        .collect();

    Some(EditorLayout {
        title,
        sections,
        footer: vec![FooterAction {
            label: "Cancel",
            focused: focused == Some(EditorRow::Cancel),
        }],
    })
}
