pub mod availability;
pub mod help;
