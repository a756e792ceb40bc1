pub mod config;
pub mod db;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod templates;
pub mod utils;
