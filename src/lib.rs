pub mod app;
pub mod auth;
pub mod bookmarks;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod state;
pub mod telemetry;
pub mod users;

#[cfg(test)]
mod testing;
