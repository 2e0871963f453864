pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod favorites;
pub mod logging;
pub mod storage;
pub mod ui;
