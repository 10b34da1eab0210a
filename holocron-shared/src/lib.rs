//! # Holocron Shared
//!
//! Shared data-model layer for the Holocron catalog service.
//!
//! ## Modules
//!
//! - `db`: Connection pool and migration runner
//! - `models`: Catalog records (users, people, planets, favorites) and their
//!   database operations

pub mod db;
pub mod models;
