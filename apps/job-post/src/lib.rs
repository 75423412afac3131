pub mod board_client;
pub mod config;
pub mod console;
pub mod errors;
pub mod form;
pub mod models;
