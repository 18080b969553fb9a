pub mod commands;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod settings_store;
pub mod setup;
pub mod slicegen;
pub mod slices;
pub mod theme;
pub mod ui;
pub mod users;

pub use crate::config::Config;
pub use crate::db::Database;
pub use crate::error::{Result, StarterError};
