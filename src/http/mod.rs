//! HTTP server module for the UmmahMap backend.
//!
//! Axum-based REST surface over the qibla service and the two upstream
//! clients. Handlers validate query parameters, delegate, and serialize a
//! JSON response; all error mapping lives in [`error`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
