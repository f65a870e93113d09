//! Ledger, stock and trip listing HTTP API.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Ledger storage**: PostgreSQL with sqlx, or in memory when no
//!   database is configured
//! - **Stock storage**: process-lifetime in-memory store
//! - **Format**: JSON requests/responses
//!
//! Handlers delegate to services, services own validation, repositories
//! own storage.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
