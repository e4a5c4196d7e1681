pub mod extract;
pub mod panel;
pub mod working_set;
