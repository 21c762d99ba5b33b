pub mod commands;
pub mod csv_loader;
pub mod output;
