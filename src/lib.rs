pub mod cli;
pub mod config;
pub mod details;
pub mod images;
pub mod logging;
pub mod model;
pub mod plain;
pub mod provider;
pub mod ui;
