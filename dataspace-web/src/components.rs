pub mod confirm_dialog;
pub mod create_dialog;
pub mod dashboard;
