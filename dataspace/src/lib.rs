pub mod args;
pub mod commands;
pub mod console;
pub mod settings;
