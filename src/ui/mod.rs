pub mod editor_view;
pub mod month_view;
pub mod theme;
